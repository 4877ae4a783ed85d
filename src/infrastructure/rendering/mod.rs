pub mod bitmap_surface;
pub mod canvas_renderer;
pub mod recording_surface;
pub mod surface;
#[cfg(target_arch = "wasm32")]
pub mod web_canvas;

pub use bitmap_surface::BitmapSurface;
pub use canvas_renderer::CandlestickRenderer;
pub use recording_surface::{DrawCommand, RecordingSurface};
pub use surface::{StrokeStyle, Surface, TextAlign, TextStyle, ensure_drawable};
#[cfg(target_arch = "wasm32")]
pub use web_canvas::WebCanvasSurface;
