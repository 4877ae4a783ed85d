use chrono::{NaiveTime, Timelike};
use rand::Rng;

use crate::config::SignalConfig;
use crate::domain::{
    errors::DomainResult,
    logging::LogComponent,
    market_data::Asset,
    signal::{MarketEvent, MarketHours, Signal, SignalEngine, SignalHistory, SignalRecord},
};
use crate::{log_debug, log_info};

/// Result of one timer tick
#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    MarketClosed,
    NoSignal,
    Emitted(Signal),
}

/// Periodic signal simulation: session check, dice roll, history update
pub struct SignalFeed {
    engine: SignalEngine,
    hours: MarketHours,
    history: SignalHistory,
    asset: Asset,
    investment: Option<f64>,
    default_investment: f64,
    current: Option<Signal>,
}

impl SignalFeed {
    pub fn new(config: &SignalConfig) -> DomainResult<Self> {
        config.validate()?;
        Ok(Self {
            engine: SignalEngine::from_config(config),
            hours: config.market_hours(),
            history: SignalHistory::new(config.history_capacity),
            asset: Asset::default(),
            investment: None,
            default_investment: config.default_investment,
            current: None,
        })
    }

    pub fn set_asset(&mut self, asset: Asset) {
        self.asset = asset;
    }

    /// Stake used for the profit estimate; `None` falls back to the default
    pub fn set_investment(&mut self, amount: Option<f64>) {
        self.investment = amount.filter(|a| a.is_finite() && *a > 0.0);
    }

    pub fn history(&self) -> &SignalHistory {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut SignalHistory {
        &mut self.history
    }

    /// Last emitted signal, kept until a newer one replaces it
    pub fn current(&self) -> Option<&Signal> {
        self.current.as_ref()
    }

    pub fn is_market_open(&self, now: NaiveTime) -> bool {
        self.hours.is_open(now.hour())
    }

    /// Session boundary announcement for the minute-level check
    pub fn market_event(&self, now: NaiveTime) -> Option<MarketEvent> {
        self.hours.transition(now.hour(), now.minute())
    }

    pub fn tick<R: Rng + ?Sized>(&mut self, now: NaiveTime, rng: &mut R) -> TickOutcome {
        if !self.is_market_open(now) {
            log_debug!(LogComponent::Application("SignalFeed"), "market closed at {}", now);
            return TickOutcome::MarketClosed;
        }

        let investment = self.investment.unwrap_or(self.default_investment);
        let Some(signal) = self.engine.evaluate(rng, &self.asset, investment) else {
            return TickOutcome::NoSignal;
        };

        log_info!(
            LogComponent::Application("SignalFeed"),
            "📈 New {} signal on {} ({}%, est. {:.2})",
            signal.direction,
            signal.asset,
            signal.confidence,
            signal.estimated_profit
        );
        self.history.push(SignalRecord::from_signal(&signal, now));
        self.current = Some(signal.clone());
        TickOutcome::Emitted(signal)
    }
}
