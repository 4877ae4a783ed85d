use serde::{Deserialize, Serialize};

use super::surface::{StrokeStyle, Surface, TextStyle};
use crate::domain::chart::Color;
use crate::domain::errors::RenderingResult;

/// One primitive as it reached the surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    FillRect { x: f64, y: f64, width: f64, height: f64, color: Color },
    StrokePath { points: Vec<(f64, f64)>, style: StrokeStyle },
    FillText { text: String, x: f64, y: f64, style: TextStyle },
}

/// Headless surface that keeps the draw calls instead of pixels.
///
/// Two renders of the same inputs produce equal command lists, which is what
/// any deterministic rasterizer turns into equal pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    scale: f64,
    commands: Vec<DrawCommand>,
    clears: usize,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_scale(width, height, 1.0)
    }

    pub fn with_scale(width: f64, height: f64, scale: f64) -> Self {
        Self { width, height, scale, commands: Vec::new(), clears: 0 }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// How many times the surface was wiped
    pub fn clear_count(&self) -> usize {
        self.clears
    }

    pub fn filled_rects_with(&self, color: Color) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillRect { color: fill, .. } if *fill == color))
            .count()
    }

    pub fn paths_with(&self, color: Color) -> Vec<&[(f64, f64)]> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::StrokePath { points, style } if style.color == color => Some(points.as_slice()),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.commands)
    }
}

impl Surface for RecordingSurface {
    fn logical_size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn scale_factor(&self) -> f64 {
        self.scale
    }

    fn clear(&mut self) -> RenderingResult<()> {
        self.commands.clear();
        self.clears += 1;
        Ok(())
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color) -> RenderingResult<()> {
        self.commands.push(DrawCommand::FillRect { x, y, width, height, color });
        Ok(())
    }

    fn stroke_path(&mut self, points: &[(f64, f64)], style: &StrokeStyle) -> RenderingResult<()> {
        self.commands.push(DrawCommand::StrokePath { points: points.to_vec(), style: style.clone() });
        Ok(())
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle) -> RenderingResult<()> {
        self.commands.push(DrawCommand::FillText { text: text.to_string(), x, y, style: style.clone() });
        Ok(())
    }
}
