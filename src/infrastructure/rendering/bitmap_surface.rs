use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::Color as _;

use super::surface::{StrokeStyle, Surface, TextStyle, dash_segments};
use crate::domain::chart::Color;
use crate::domain::errors::{AppError, RenderingResult};
use crate::domain::logging::LogComponent;
use crate::log_trace;

/// In-memory RGB raster backed by plotters' bitmap backend.
///
/// Holds `(width * scale) x (height * scale)` pixels. No font backend is
/// compiled in, so `fill_text` leaves the pixels untouched.
pub struct BitmapSurface {
    width: f64,
    height: f64,
    scale: f64,
    pixel_width: u32,
    pixel_height: u32,
    buffer: Vec<u8>,
}

fn backend_error<E: std::fmt::Display>(error: E) -> AppError {
    AppError::Rendering(error.to_string())
}

impl BitmapSurface {
    pub fn new(width: u32, height: u32, scale: f64) -> Self {
        let scale = if scale.is_finite() && scale > 0.0 { scale } else { 1.0 };
        let pixel_width = (width as f64 * scale).round() as u32;
        let pixel_height = (height as f64 * scale).round() as u32;

        Self {
            width: width as f64,
            height: height as f64,
            scale,
            pixel_width,
            pixel_height,
            buffer: vec![0; pixel_width as usize * pixel_height as usize * 3],
        }
    }

    pub fn pixel_size(&self) -> (u32, u32) {
        (self.pixel_width, self.pixel_height)
    }

    /// Raw RGB bytes, row-major
    pub fn pixels(&self) -> &[u8] {
        &self.buffer
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.pixel_width || y >= self.pixel_height {
            return None;
        }
        let offset = (y as usize * self.pixel_width as usize + x as usize) * 3;
        Some(Color::rgb(self.buffer[offset], self.buffer[offset + 1], self.buffer[offset + 2]))
    }

    #[inline]
    fn to_px(&self, value: f64) -> i32 {
        (value * self.scale).round() as i32
    }

    fn area(&mut self) -> DrawingArea<BitMapBackend<'_>, Shift> {
        BitMapBackend::with_buffer(&mut self.buffer, (self.pixel_width, self.pixel_height))
            .into_drawing_area()
    }
}

fn rgb(color: Color) -> RGBColor {
    RGBColor(color.r, color.g, color.b)
}

impl Surface for BitmapSurface {
    fn logical_size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn scale_factor(&self) -> f64 {
        self.scale
    }

    fn clear(&mut self) -> RenderingResult<()> {
        self.buffer.fill(0);
        Ok(())
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color) -> RenderingResult<()> {
        if self.buffer.is_empty() {
            return Ok(());
        }
        let (x0, y0) = (self.to_px(x), self.to_px(y));
        let x1 = (self.to_px(x + width) - 1).max(x0);
        let y1 = (self.to_px(y + height) - 1).max(y0);

        let root = self.area();
        root.draw(&Rectangle::new([(x0, y0), (x1, y1)], rgb(color).filled()))
            .map_err(backend_error)?;
        root.present().map_err(backend_error)
    }

    fn stroke_path(&mut self, points: &[(f64, f64)], style: &StrokeStyle) -> RenderingResult<()> {
        if self.buffer.is_empty() || points.len() < 2 {
            return Ok(());
        }
        let pieces = match style.dash {
            Some([on, off]) => dash_segments(points, on, off),
            None => vec![points.to_vec()],
        };
        let stroke_width = ((style.width * self.scale).round() as u32).max(1);
        let paths: Vec<Vec<(i32, i32)>> = pieces
            .iter()
            .map(|piece| piece.iter().map(|&(x, y)| (self.to_px(x), self.to_px(y))).collect())
            .collect();

        let root = self.area();
        for path in paths {
            root.draw(&PathElement::new(path, rgb(style.color).stroke_width(stroke_width)))
                .map_err(backend_error)?;
        }
        root.present().map_err(backend_error)
    }

    fn fill_text(&mut self, text: &str, _x: f64, _y: f64, _style: &TextStyle) -> RenderingResult<()> {
        log_trace!(LogComponent::Infrastructure("BitmapSurface"), "skipping glyphs for '{}'", text);
        Ok(())
    }
}
