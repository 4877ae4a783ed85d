use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::surface::{StrokeStyle, Surface, TextAlign, TextStyle};
use crate::domain::chart::Color;
use crate::domain::errors::{AppError, RenderingResult};
use crate::domain::logging::LogComponent;
use crate::log_debug;

/// Canvas 2D surface in the browser
pub struct WebCanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    scale: f64,
}

fn js_error(error: JsValue) -> AppError {
    AppError::Rendering(error.as_string().unwrap_or_else(|| format!("{:?}", error)))
}

impl WebCanvasSurface {
    /// Find the canvas by id and grab its 2D context
    pub fn attach(canvas_id: &str, scale: f64) -> RenderingResult<Self> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| AppError::precondition_failed("document not available"))?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| AppError::precondition_failed(format!("canvas '{}' not found", canvas_id)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| AppError::precondition_failed(format!("'{}' is not a canvas", canvas_id)))?;
        Self::from_canvas(canvas, scale)
    }

    pub fn from_canvas(canvas: HtmlCanvasElement, scale: f64) -> RenderingResult<Self> {
        let context = canvas
            .get_context("2d")
            .map_err(js_error)?
            .ok_or_else(|| AppError::precondition_failed("2D context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| AppError::precondition_failed("failed to cast to 2D context"))?;

        let mut surface = Self { canvas, context, width: 0.0, height: 0.0, scale };
        surface.sync_size();
        Ok(surface)
    }

    /// Re-read the laid-out size and resize the backing store to match
    pub fn sync_size(&mut self) {
        self.width = self.canvas.offset_width() as f64;
        self.height = self.canvas.offset_height() as f64;
        self.canvas.set_width((self.width * self.scale).round() as u32);
        self.canvas.set_height((self.height * self.scale).round() as u32);

        log_debug!(
            LogComponent::Infrastructure("WebCanvas"),
            "canvas sized to {}x{} @ {}x",
            self.width,
            self.height,
            self.scale
        );
    }

    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
        self.sync_size();
    }
}

impl Surface for WebCanvasSurface {
    fn logical_size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn scale_factor(&self) -> f64 {
        self.scale
    }

    fn clear(&mut self) -> RenderingResult<()> {
        // Absolute transform, so repeated clears never compound the scale
        self.context
            .set_transform(self.scale, 0.0, 0.0, self.scale, 0.0, 0.0)
            .map_err(js_error)?;
        self.context.clear_rect(0.0, 0.0, self.width, self.height);
        self.context.set_line_dash(&js_sys::Array::new()).map_err(js_error)?;
        Ok(())
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color) -> RenderingResult<()> {
        self.context.set_fill_style_str(&color.to_css());
        self.context.fill_rect(x, y, width, height);
        Ok(())
    }

    fn stroke_path(&mut self, points: &[(f64, f64)], style: &StrokeStyle) -> RenderingResult<()> {
        let Some((&(x0, y0), rest)) = points.split_first() else {
            return Ok(());
        };

        let dash = js_sys::Array::new();
        if let Some([on, off]) = style.dash {
            dash.push(&JsValue::from_f64(on));
            dash.push(&JsValue::from_f64(off));
        }
        self.context.set_line_dash(&dash).map_err(js_error)?;
        self.context.set_stroke_style_str(&style.color.to_css());
        self.context.set_line_width(style.width);

        self.context.begin_path();
        self.context.move_to(x0, y0);
        for &(x, y) in rest {
            self.context.line_to(x, y);
        }
        self.context.stroke();
        Ok(())
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle) -> RenderingResult<()> {
        self.context.set_fill_style_str(&style.color.to_css());
        self.context.set_font(&format!("{}px {}", style.font_px, style.family));
        self.context.set_text_align(match style.align {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        });
        self.context.fill_text(text, x, y).map_err(js_error)
    }
}
