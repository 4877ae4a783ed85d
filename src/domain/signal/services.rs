use rand::Rng;

use super::{Signal, SignalDirection};
use crate::config::SignalConfig;
use crate::domain::market_data::Asset;

/// Simulated trading session, `[open_hour, close_hour)` local time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarketHours {
    pub open_hour: u32,
    pub close_hour: u32,
}

/// Session boundary crossed at an exact minute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarketEvent {
    Opened,
    Closed,
}

impl Default for MarketHours {
    fn default() -> Self {
        Self { open_hour: 9, close_hour: 18 }
    }
}

impl MarketHours {
    pub fn is_open(&self, hour: u32) -> bool {
        hour >= self.open_hour && hour < self.close_hour
    }

    /// `Opened` at `open_hour:00`, `Closed` at `close_hour:00`
    pub fn transition(&self, hour: u32, minute: u32) -> Option<MarketEvent> {
        match (hour, minute) {
            (h, 0) if h == self.open_hour => Some(MarketEvent::Opened),
            (h, 0) if h == self.close_hour => Some(MarketEvent::Closed),
            _ => None,
        }
    }
}

/// Random signal source. There is no analysis behind it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalEngine {
    emission_probability: f64,
    payout_ratio: f64,
}

impl Default for SignalEngine {
    fn default() -> Self {
        Self { emission_probability: 0.3, payout_ratio: 0.85 }
    }
}

impl SignalEngine {
    pub fn new(emission_probability: f64, payout_ratio: f64) -> Self {
        Self {
            emission_probability: emission_probability.clamp(0.0, 1.0),
            payout_ratio,
        }
    }

    pub fn from_config(config: &SignalConfig) -> Self {
        Self::new(config.emission_probability, config.payout_ratio)
    }

    /// Roll for a signal. Draw order: emission, direction, confidence.
    pub fn evaluate<R: Rng + ?Sized>(&self, rng: &mut R, asset: &Asset, investment: f64) -> Option<Signal> {
        if rng.r#gen::<f64>() <= 1.0 - self.emission_probability {
            return None;
        }

        let direction = if rng.r#gen::<f64>() > 0.5 {
            SignalDirection::Call
        } else {
            SignalDirection::Put
        };
        let confidence = (rng.r#gen::<f64>() * 30.0).floor() as u8 + 70;

        Some(Signal {
            direction,
            asset: asset.clone(),
            confidence,
            estimated_profit: self.estimated_profit(investment),
        })
    }

    pub fn estimated_profit(&self, investment: f64) -> f64 {
        investment * self.payout_ratio
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn session_bounds() {
        let hours = MarketHours::default();
        assert!(!hours.is_open(8));
        assert!(hours.is_open(9));
        assert!(hours.is_open(17));
        assert!(!hours.is_open(18));
    }

    #[test]
    fn transitions_only_on_the_hour() {
        let hours = MarketHours::default();
        assert_eq!(hours.transition(9, 0), Some(MarketEvent::Opened));
        assert_eq!(hours.transition(18, 0), Some(MarketEvent::Closed));
        assert_eq!(hours.transition(9, 1), None);
        assert_eq!(hours.transition(12, 0), None);
    }

    #[test]
    fn certain_engine_always_emits_in_range() {
        let engine = SignalEngine::new(1.0, 0.85);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let signal = engine.evaluate(&mut rng, &Asset::default(), 100.0).unwrap();
            assert!((70..=99).contains(&signal.confidence));
            assert!((signal.estimated_profit - 85.0).abs() < 1e-9);
        }
    }

    #[test]
    fn silent_engine_never_emits() {
        let engine = SignalEngine::new(0.0, 0.85);
        let mut rng = StdRng::seed_from_u64(3);
        assert!((0..100).all(|_| engine.evaluate(&mut rng, &Asset::default(), 100.0).is_none()));
    }
}
