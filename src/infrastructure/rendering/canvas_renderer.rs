use super::surface::{StrokeStyle, Surface, TextAlign, TextStyle, ensure_drawable};
use crate::config::ChartConfig;
use crate::domain::{
    chart::{ChartLayout, Palette, Theme},
    errors::{AppError, RenderingResult},
    logging::LogComponent,
    market_data::{Price, Series},
};
use crate::{log_debug, log_warn};

const LABEL_BOX_WIDTH: f64 = 75.0;
const LABEL_BOX_HEIGHT: f64 = 24.0;
/// Distance from the right edge to the label box's left side
const LABEL_BOX_INSET: f64 = 80.0;
const LABEL_TEXT_INSET: f64 = 5.0;
const PRICE_DASH: (f64, f64) = (5.0, 5.0);

/// Paints a series, its moving average and the current-price marker
#[derive(Debug, Clone, PartialEq)]
pub struct CandlestickRenderer {
    margin: f64,
    grid_lines: usize,
}

impl Default for CandlestickRenderer {
    fn default() -> Self {
        Self { margin: 20.0, grid_lines: 5 }
    }
}

impl CandlestickRenderer {
    pub fn new(margin: f64, grid_lines: usize) -> Self {
        Self { margin, grid_lines }
    }

    pub fn from_config(config: &ChartConfig) -> Self {
        Self::new(config.margin, config.grid_lines)
    }

    /// Repaint the whole surface.
    ///
    /// Inputs and the surface are checked before the first primitive, so a
    /// failed call leaves the surface as it was.
    pub fn render<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        series: &Series,
        ma: &[f64],
        theme: Theme,
    ) -> RenderingResult<()> {
        if let Err(error) = ensure_drawable(surface) {
            log_warn!(LogComponent::Infrastructure("CandlestickRenderer"), "⚠️ Skipping render: {}", error);
            return Err(error);
        }
        let Some(last) = series.last() else {
            return Err(AppError::invalid_argument("cannot render an empty series"));
        };
        if ma.len() > series.len() {
            return Err(AppError::invalid_argument(format!(
                "moving average has {} points for {} bars",
                ma.len(),
                series.len()
            )));
        }

        let (width, height) = surface.logical_size();
        let layout = ChartLayout::new(series, width, height, self.margin);
        let palette = theme.palette();

        surface.clear()?;
        surface.fill_rect(0.0, 0.0, width, height, palette.background)?;
        self.render_grid(surface, &layout, &palette)?;
        self.render_candles(surface, &layout, series, &palette)?;
        self.render_moving_average(surface, &layout, ma, series.len(), &palette)?;
        self.render_current_price(surface, &layout, Price::from(last.close), &palette)?;

        log_debug!(
            LogComponent::Infrastructure("CandlestickRenderer"),
            "rendered {} bars, {} MA points, theme {}",
            series.len(),
            ma.len(),
            theme
        );
        Ok(())
    }

    fn render_grid<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        layout: &ChartLayout,
        palette: &Palette,
    ) -> RenderingResult<()> {
        let style = StrokeStyle::solid(palette.grid, 1.0);
        for y in layout.grid_lines(self.grid_lines) {
            surface.stroke_line((0.0, y), (layout.width, y), &style)?;
        }
        Ok(())
    }

    fn render_candles<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        layout: &ChartLayout,
        series: &Series,
        palette: &Palette,
    ) -> RenderingResult<()> {
        for (i, bar) in series.bars().iter().enumerate() {
            let candle = layout.candle(i, bar);
            let color = if candle.bullish { palette.bullish } else { palette.bearish };

            // Wick first so the body covers it
            surface.stroke_line(
                (candle.x, candle.wick_top),
                (candle.x, candle.wick_bottom),
                &StrokeStyle::solid(color, 1.0),
            )?;
            surface.fill_rect(candle.body_x, candle.body_y, candle.body_width, candle.body_height, color)?;
        }
        Ok(())
    }

    fn render_moving_average<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        layout: &ChartLayout,
        ma: &[f64],
        bar_count: usize,
        palette: &Palette,
    ) -> RenderingResult<()> {
        let points = layout.moving_average_points(ma, bar_count);
        if points.is_empty() {
            return Ok(());
        }
        surface.stroke_path(&points, &StrokeStyle::solid(palette.moving_average, 2.0))
    }

    fn render_current_price<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        layout: &ChartLayout,
        price: Price,
        palette: &Palette,
    ) -> RenderingResult<()> {
        let y = layout.price_to_y(price.value());
        let (on, off) = PRICE_DASH;

        surface.stroke_line(
            (0.0, y),
            (layout.width, y),
            &StrokeStyle::dashed(palette.current_price, 2.0, on, off),
        )?;
        surface.fill_rect(
            layout.width - LABEL_BOX_INSET,
            y - LABEL_BOX_HEIGHT / 2.0,
            LABEL_BOX_WIDTH,
            LABEL_BOX_HEIGHT,
            palette.current_price,
        )?;
        surface.fill_text(
            &price.label(),
            layout.width - LABEL_TEXT_INSET,
            y + 4.0,
            &TextStyle {
                color: palette.label_text,
                font_px: 12.0,
                family: "sans-serif".to_string(),
                align: TextAlign::Right,
            },
        )
    }
}
