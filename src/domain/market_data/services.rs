use rand::Rng;

use super::{Bar, Series};
use crate::config::ChartConfig;
use crate::domain::errors::{AppError, DomainResult};
use crate::domain::logging::LogComponent;
use crate::log_trace;

/// Domain service synthesizing random-walk candles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesGenerator {
    /// Largest absolute open-to-close move of a single bar
    max_step: f64,
    /// Upper bound of the extra distance added above and below the body
    wick_jitter: f64,
}

impl Default for SeriesGenerator {
    fn default() -> Self {
        Self { max_step: 0.001, wick_jitter: 0.001 }
    }
}

impl SeriesGenerator {
    pub fn new(max_step: f64, wick_jitter: f64) -> DomainResult<Self> {
        if !max_step.is_finite() || max_step < 0.0 {
            return Err(AppError::invalid_argument(format!("max_step {} must be >= 0", max_step)));
        }
        if !wick_jitter.is_finite() || wick_jitter < 0.0 {
            return Err(AppError::invalid_argument(format!(
                "wick_jitter {} must be >= 0",
                wick_jitter
            )));
        }
        Ok(Self { max_step, wick_jitter })
    }

    pub fn from_config(config: &ChartConfig) -> DomainResult<Self> {
        Self::new(config.max_step, config.wick_jitter)
    }

    /// Generate `count` chained bars starting at `start_price`.
    ///
    /// Each bar consumes four draws from `rng` in a fixed order (move, upper
    /// wick, lower wick, then the next bar), so a seeded generator always
    /// reproduces the same series.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        count: usize,
        start_price: f64,
        rng: &mut R,
    ) -> DomainResult<Series> {
        if count == 0 {
            return Err(AppError::invalid_argument("bar count must be positive"));
        }
        if !start_price.is_finite() || start_price <= 0.0 {
            return Err(AppError::invalid_argument(format!(
                "start price {} must be a positive number",
                start_price
            )));
        }

        let mut bars = Vec::with_capacity(count);
        let mut price = start_price;

        for _ in 0..count {
            let delta = (rng.r#gen::<f64>() - 0.5) * 2.0 * self.max_step;
            let open = price;
            let close = price + delta;
            let high = open.max(close) + rng.r#gen::<f64>() * self.wick_jitter;
            let low = open.min(close) - rng.r#gen::<f64>() * self.wick_jitter;

            bars.push(Bar { open, high, low, close });
            price = close;
        }

        log_trace!(
            LogComponent::Domain("SeriesGenerator"),
            "generated {} bars from {:.4} to {:.4}",
            count,
            start_price,
            price
        );

        Ok(Series::from_generated(bars))
    }
}
