use super::value_objects::ViewTransform;
use crate::domain::market_data::{Bar, Series};

/// Bodies thinner than this are stretched so dojis stay visible
pub const MIN_BODY_HEIGHT: f64 = 2.0;

/// Pixel geometry of one candle (precomputed)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandleGeometry {
    /// Center of the slot, where the wick is drawn
    pub x: f64,
    pub wick_top: f64,
    pub wick_bottom: f64,
    pub body_x: f64,
    pub body_y: f64,
    pub body_width: f64,
    pub body_height: f64,
    pub bullish: bool,
}

/// Layout of a whole series on a `width x height` logical surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub candle_width: f64,
    pub transform: ViewTransform,
}

impl ChartLayout {
    pub fn new(series: &Series, width: f64, height: f64, margin: f64) -> Self {
        let (min_price, max_price) = series.price_range().unwrap_or((0.0, 0.0));
        let slots = series.len().max(1) as f64;

        Self {
            width,
            height,
            candle_width: width / slots,
            transform: ViewTransform::new(min_price, max_price, height, margin),
        }
    }

    /// Horizontal center of slot `index`
    #[inline]
    pub fn candle_x(&self, index: usize) -> f64 {
        index as f64 * self.candle_width + self.candle_width / 2.0
    }

    pub fn price_to_y(&self, price: f64) -> f64 {
        self.transform.price_to_y(price)
    }

    pub fn candle(&self, index: usize, bar: &Bar) -> CandleGeometry {
        let x = self.candle_x(index);
        let body_top = self.price_to_y(bar.body_top());
        let body_bottom = self.price_to_y(bar.body_bottom());

        CandleGeometry {
            x,
            wick_top: self.price_to_y(bar.high),
            wick_bottom: self.price_to_y(bar.low),
            body_x: x - self.candle_width / 3.0,
            body_y: body_top,
            body_width: self.candle_width / 1.5,
            body_height: (body_bottom - body_top).max(MIN_BODY_HEIGHT),
            bullish: bar.is_bullish(),
        }
    }

    /// Polyline for a trailing average: point `i` sits under the last bar
    /// of its window, i.e. slot `i + window - 1`.
    pub fn moving_average_points(&self, ma: &[f64], bar_count: usize) -> Vec<(f64, f64)> {
        if ma.is_empty() || ma.len() > bar_count {
            return Vec::new();
        }
        let offset = bar_count - ma.len();
        ma.iter()
            .enumerate()
            .map(|(i, &value)| (self.candle_x(i + offset), self.price_to_y(value)))
            .collect()
    }

    /// y of each horizontal gridline, evenly dividing the height
    pub fn grid_lines(&self, count: usize) -> Vec<f64> {
        if count == 0 {
            return Vec::new();
        }
        (0..count).map(|i| self.height / count as f64 * i as f64).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_bar_series() -> Series {
        Series::new(vec![Bar::new(1.0, 1.5, 0.5, 1.2), Bar::new(1.2, 2.0, 1.0, 1.1)]).unwrap()
    }

    #[test]
    fn slots_split_width_evenly() {
        let layout = ChartLayout::new(&two_bar_series(), 100.0, 100.0, 10.0);
        assert_eq!(layout.candle_width, 50.0);
        assert_eq!(layout.candle_x(0), 25.0);
        assert_eq!(layout.candle_x(1), 75.0);
    }

    #[test]
    fn extremes_touch_margins() {
        let layout = ChartLayout::new(&two_bar_series(), 100.0, 100.0, 10.0);
        let first = layout.candle(1, &two_bar_series().bars()[1]);
        assert!((first.wick_top - 10.0).abs() < 1e-9);
        let second = layout.candle(0, &two_bar_series().bars()[0]);
        assert!((second.wick_bottom - 90.0).abs() < 1e-9);
    }

    #[test]
    fn doji_gets_minimum_body() {
        let series = Series::new(vec![Bar::new(1.0, 1.1, 0.9, 1.0)]).unwrap();
        let layout = ChartLayout::new(&series, 10.0, 100.0, 0.0);
        let candle = layout.candle(0, &series.bars()[0]);
        assert_eq!(candle.body_height, MIN_BODY_HEIGHT);
        assert!(!candle.bullish);
    }

    #[test]
    fn average_points_align_to_window_end() {
        let layout = ChartLayout::new(&two_bar_series(), 100.0, 100.0, 10.0);
        let points = layout.moving_average_points(&[1.15], 2);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].0, 75.0);
    }

    #[test]
    fn grid_starts_at_top() {
        let layout = ChartLayout::new(&two_bar_series(), 100.0, 500.0, 10.0);
        assert_eq!(layout.grid_lines(5), vec![0.0, 100.0, 200.0, 300.0, 400.0]);
    }
}
