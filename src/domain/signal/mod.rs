//! Simulated signal aggregate: signals, their history and the session clock.

pub mod entities;
pub mod services;

pub use entities::*;
pub use services::*;
