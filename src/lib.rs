//! Synthetic candlestick chart and simulated trading-signal feed.
//!
//! The chart pipeline is `generate → moving_average → render`, re-run in full
//! whenever the asset or theme changes. Rendering goes through the
//! [`Surface`](infrastructure::rendering::Surface) trait, so the same code
//! paints a browser canvas, an in-memory bitmap or a command recorder.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
#[cfg(target_arch = "wasm32")]
pub mod presentation;

use crate::domain::logging::{self, LogComponent};
use crate::infrastructure::services::{ConsoleLogger, SystemClock};

/// Install the console logger and wall clock.
/// Returns `false` when logging was already set up.
pub fn init_logging(logger: ConsoleLogger) -> bool {
    logging::install(Box::new(logger), Box::new(SystemClock))
}

fn default_logger() -> ConsoleLogger {
    if cfg!(debug_assertions) {
        ConsoleLogger::new_development()
    } else {
        ConsoleLogger::new_production()
    }
}

/// wasm entry point
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();
    if init_logging(default_logger()) {
        crate::log_info!(LogComponent::Presentation("Initialize"), "🚀 Signal chart initialized");
    }
}

/// Native counterpart of the wasm start hook
#[cfg(not(target_arch = "wasm32"))]
pub fn initialize() {
    if init_logging(default_logger()) {
        crate::log_debug!(LogComponent::Presentation("Initialize"), "Signal chart initialized");
    }
}
