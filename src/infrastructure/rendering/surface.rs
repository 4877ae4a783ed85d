use serde::{Deserialize, Serialize};

use crate::domain::chart::Color;
use crate::domain::errors::{AppError, RenderingResult};

/// Horizontal anchor of a text run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Line style for one stroke call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f64,
    /// `[on, off]` lengths in logical pixels; `None` for solid
    pub dash: Option<[f64; 2]>,
}

impl StrokeStyle {
    pub fn solid(color: Color, width: f64) -> Self {
        Self { color, width, dash: None }
    }

    pub fn dashed(color: Color, width: f64, on: f64, off: f64) -> Self {
        Self { color, width, dash: Some([on, off]) }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub color: Color,
    pub font_px: f64,
    pub family: String,
    pub align: TextAlign,
}

/// Immediate-mode 2D drawing target.
///
/// Coordinates are logical pixels; the backend applies its own
/// device-pixel-ratio. Styles travel with every call, so there is no hidden
/// state that could leak from one render into the next.
pub trait Surface {
    /// Logical `(width, height)`
    fn logical_size(&self) -> (f64, f64);

    /// Backing pixels per logical pixel
    fn scale_factor(&self) -> f64;

    /// Drop everything painted so far
    fn clear(&mut self) -> RenderingResult<()>;

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color) -> RenderingResult<()>;

    fn stroke_path(&mut self, points: &[(f64, f64)], style: &StrokeStyle) -> RenderingResult<()>;

    fn fill_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle) -> RenderingResult<()>;

    /// Convenience for a single segment
    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), style: &StrokeStyle) -> RenderingResult<()> {
        self.stroke_path(&[from, to], style)
    }

    /// Whether the surface has a paintable, finite area
    fn has_area(&self) -> bool {
        let (width, height) = self.logical_size();
        let scale = self.scale_factor();
        width.is_finite() && height.is_finite() && scale.is_finite()
            && width > 0.0 && height > 0.0 && scale > 0.0
    }
}

/// `PreconditionFailed` unless the surface can be painted
pub fn ensure_drawable<S: Surface + ?Sized>(surface: &S) -> RenderingResult<()> {
    if surface.has_area() {
        return Ok(());
    }
    let (width, height) = surface.logical_size();
    Err(AppError::precondition_failed(format!(
        "surface {}x{} @ {} has no drawable area",
        width,
        height,
        surface.scale_factor()
    )))
}

/// Split a polyline into the "on" pieces of a dash pattern.
///
/// The pattern restarts at the first point of the path, like a canvas
/// `setLineDash` with zero offset.
pub fn dash_segments(points: &[(f64, f64)], on: f64, off: f64) -> Vec<Vec<(f64, f64)>> {
    if points.len() < 2 || on <= 0.0 {
        return vec![points.to_vec()];
    }
    let period = on + off.max(0.0);

    let mut segments = Vec::new();
    let mut current: Vec<(f64, f64)> = Vec::new();
    // Distance travelled along the pattern
    let mut phase = 0.0;

    for pair in points.windows(2) {
        let (start, end) = (pair[0], pair[1]);
        let length = ((end.0 - start.0).powi(2) + (end.1 - start.1).powi(2)).sqrt();
        if length == 0.0 {
            continue;
        }
        let at = |t: f64| (start.0 + (end.0 - start.0) * t / length, start.1 + (end.1 - start.1) * t / length);

        let mut travelled = 0.0;
        while travelled < length {
            let remaining = length - travelled;
            let in_period = phase % period;

            let step = if in_period < on {
                let dash_left = on - in_period;
                let step = dash_left.min(remaining);
                if current.is_empty() {
                    current.push(at(travelled));
                }
                current.push(at(travelled + step));
                if dash_left <= remaining {
                    segments.push(std::mem::take(&mut current));
                }
                step
            } else {
                (period - in_period).min(remaining)
            };

            travelled += step;
            phase += step;
        }
    }
    if current.len() >= 2 {
        segments.push(current);
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashes_cover_half_a_horizontal_line() {
        let segments = dash_segments(&[(0.0, 0.0), (20.0, 0.0)], 5.0, 5.0);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0], vec![(0.0, 0.0), (5.0, 0.0)]);
        assert_eq!(segments[1], vec![(10.0, 0.0), (15.0, 0.0)]);
    }

    #[test]
    fn partial_trailing_dash_is_kept() {
        let segments = dash_segments(&[(0.0, 0.0), (12.0, 0.0)], 5.0, 5.0);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[1], vec![(10.0, 0.0), (12.0, 0.0)]);
    }
}
