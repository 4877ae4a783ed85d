//! Tunables for the chart pipeline and the simulated signal feed.

use serde::{Deserialize, Serialize};

use crate::domain::errors::{AppError, DomainResult};
use crate::domain::signal::MarketHours;

/// Chart pipeline settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub bar_count: usize,
    pub start_price: f64,
    /// Largest open-to-close move per bar
    pub max_step: f64,
    pub wick_jitter: f64,
    pub ma_window: usize,
    /// Top and bottom padding, logical pixels
    pub margin: f64,
    pub grid_lines: usize,
    pub device_pixel_ratio: f64,
    /// Derive the random walk from the asset name instead of the ambient rng
    pub seed_by_asset: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            bar_count: 50,
            start_price: 1.0850,
            max_step: 0.001,
            wick_jitter: 0.001,
            ma_window: 10,
            margin: 20.0,
            grid_lines: 5,
            device_pixel_ratio: 2.0,
            seed_by_asset: false,
        }
    }
}

impl ChartConfig {
    pub fn validate(&self) -> DomainResult<()> {
        if self.bar_count == 0 {
            return Err(AppError::Configuration("bar_count must be positive".into()));
        }
        if self.ma_window == 0 || self.ma_window > self.bar_count {
            return Err(AppError::Configuration(format!(
                "ma_window {} must be within 1..={}",
                self.ma_window, self.bar_count
            )));
        }
        if !(self.start_price.is_finite() && self.start_price > 0.0) {
            return Err(AppError::Configuration("start_price must be positive".into()));
        }
        if !(self.device_pixel_ratio.is_finite() && self.device_pixel_ratio > 0.0) {
            return Err(AppError::Configuration("device_pixel_ratio must be positive".into()));
        }
        for (name, value) in [
            ("margin", self.margin),
            ("max_step", self.max_step),
            ("wick_jitter", self.wick_jitter),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(AppError::Configuration(format!(
                    "{} {} must be a finite, non-negative number",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// Signal feed settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalConfig {
    pub tick_interval_ms: u32,
    pub market_check_interval_ms: u32,
    pub emission_probability: f64,
    pub payout_ratio: f64,
    pub default_investment: f64,
    pub history_capacity: usize,
    pub open_hour: u32,
    pub close_hour: u32,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 15_000,
            market_check_interval_ms: 60_000,
            emission_probability: 0.3,
            payout_ratio: 0.85,
            default_investment: 100.0,
            history_capacity: 20,
            open_hour: 9,
            close_hour: 18,
        }
    }
}

impl SignalConfig {
    pub fn market_hours(&self) -> MarketHours {
        MarketHours { open_hour: self.open_hour, close_hour: self.close_hour }
    }

    pub fn validate(&self) -> DomainResult<()> {
        if !(0.0..=1.0).contains(&self.emission_probability) {
            return Err(AppError::Configuration(format!(
                "emission_probability {} must be within 0..=1",
                self.emission_probability
            )));
        }
        if self.open_hour >= self.close_hour || self.close_hour > 24 {
            return Err(AppError::Configuration(format!(
                "market hours {}..{} are not a valid session",
                self.open_hour, self.close_hour
            )));
        }
        if self.tick_interval_ms == 0 || self.market_check_interval_ms == 0 {
            return Err(AppError::Configuration(
                "tick_interval_ms and market_check_interval_ms must be positive".into(),
            ));
        }
        if !(self.payout_ratio.is_finite() && self.payout_ratio >= 0.0) {
            return Err(AppError::Configuration(format!(
                "payout_ratio {} must be a finite, non-negative number",
                self.payout_ratio
            )));
        }
        if self.history_capacity == 0 {
            return Err(AppError::Configuration("history_capacity must be positive".into()));
        }
        if !(self.default_investment.is_finite() && self.default_investment > 0.0) {
            return Err(AppError::Configuration(format!(
                "default_investment {} must be positive",
                self.default_investment
            )));
        }
        Ok(())
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub chart: ChartConfig,
    pub signals: SignalConfig,
}

impl DashboardConfig {
    /// Parse and validate; missing fields fall back to defaults
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> DomainResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> DomainResult<()> {
        self.chart.validate()?;
        self.signals.validate()
    }
}
