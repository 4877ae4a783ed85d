pub use super::value_objects::{Asset, Price};
use crate::domain::errors::{AppError, DomainResult};
use serde::{Deserialize, Serialize};

/// Domain entity - one synthetic candle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl Bar {
    pub fn new(open: f64, high: f64, low: f64, close: f64) -> Self {
        Self { open, high, low, close }
    }

    /// Up bar; an unchanged close counts as down
    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }

    pub fn body_top(&self) -> f64 {
        self.open.max(self.close)
    }

    pub fn body_bottom(&self) -> f64 {
        self.open.min(self.close)
    }

    /// `low <= min(open, close) <= max(open, close) <= high`
    pub fn is_valid(&self) -> bool {
        self.low <= self.body_bottom() && self.body_top() <= self.high
    }
}

/// Domain entity - an ordered, gapless run of bars.
///
/// Built once per render by the generator and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    bars: Vec<Bar>,
}

impl Series {
    /// Wrap hand-built bars; every bar must satisfy the OHLC shape
    pub fn new(bars: Vec<Bar>) -> DomainResult<Self> {
        if bars.is_empty() {
            return Err(AppError::invalid_argument("series needs at least one bar"));
        }
        if let Some(index) = bars.iter().position(|bar| !bar.is_valid()) {
            return Err(AppError::invalid_argument(format!(
                "bar {} violates low <= open/close <= high",
                index
            )));
        }
        Ok(Self { bars })
    }

    pub(crate) fn from_generated(bars: Vec<Bar>) -> Self {
        Self { bars }
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn last(&self) -> Option<&Bar> {
        self.bars.last()
    }

    /// Closing price of the final bar
    pub fn latest_price(&self) -> Option<Price> {
        self.bars.last().map(|bar| Price::from(bar.close))
    }

    pub fn closes(&self) -> impl Iterator<Item = f64> + '_ {
        self.bars.iter().map(|bar| bar.close)
    }

    /// Lowest low and highest high across the series
    pub fn price_range(&self) -> Option<(f64, f64)> {
        if self.bars.is_empty() {
            return None;
        }

        let (min, max) = self.bars.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(min, max), bar| (min.min(bar.low), max.max(bar.high)),
        );
        Some((min, max))
    }
}
