use super::Series;
use crate::domain::errors::{AppError, DomainResult};
use std::collections::VecDeque;

/// Trailing simple moving average of closes.
///
/// Element `i` is the mean of bars `[i, i + window)`, so the result holds
/// `len - window + 1` points.
pub fn moving_average(series: &Series, window: usize) -> DomainResult<Vec<f64>> {
    if window == 0 || window > series.len() {
        return Err(AppError::invalid_argument(format!(
            "moving average window {} must be within 1..={}",
            window,
            series.len()
        )));
    }

    let mut engine = MovingAverageEngine::new(window);
    let mut out = Vec::with_capacity(series.len() - window + 1);
    for close in series.closes() {
        if let Some(value) = engine.push(close) {
            out.push(value);
        }
    }
    Ok(out)
}

/// Rolling-sum SMA over a fixed window
#[derive(Debug, Clone)]
pub struct MovingAverageEngine {
    window: usize,
    values: VecDeque<f64>,
    sum: f64,
}

impl MovingAverageEngine {
    pub fn new(window: usize) -> Self {
        Self { window, values: VecDeque::with_capacity(window), sum: 0.0 }
    }

    pub fn window(&self) -> usize {
        self.window
    }

    /// Feed one close; returns the average once the window is full
    #[inline]
    pub fn push(&mut self, close: f64) -> Option<f64> {
        self.sum += close;
        self.values.push_back(close);
        if self.values.len() > self.window
            && let Some(old) = self.values.pop_front()
        {
            self.sum -= old;
        }
        (self.values.len() == self.window).then(|| self.sum / self.window as f64)
    }
}
