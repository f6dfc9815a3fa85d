//! Unified error types for deckhand.
//!
//! This module provides a unified error type that encompasses packaging,
//! PresentationML and deck-construction errors, presenting a consistent API to
//! callers.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, Result};
