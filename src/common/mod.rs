//! Common types, traits, and utilities shared by the packaging layer and the
//! deck renderer.

// Submodule declarations
pub mod color;
pub mod error;
pub mod unit;
pub mod xml;

// Re-exports for convenience
pub use color::RGBColor;
pub use error::{Error, Result};
