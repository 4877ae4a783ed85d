//! Chart aggregate: themes, colors and the price-to-pixel geometry.

pub mod services;
pub mod value_objects;

pub use services::*;
pub use value_objects::*;
