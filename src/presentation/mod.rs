//! JavaScript bindings. Minimal logic: a bridge to the application layer.

pub mod wasm_api;

pub use wasm_api::{ChartWidget, SignalTicker};
