//! Office Open XML (OOXML) support for presentations.
//!
//! The module is organized in two layers:
//!
//! 1. **OPC Layer** (`opc`): package handling (ZIP, parts, relationships)
//! 2. **PresentationML** (`pptx`): reading slide sizes, masters, layouts,
//!    placeholders, slides and themes, and writing new slides into a package
//!
//! # Example
//!
//! ```rust,no_run
//! use deckhand::ooxml::pptx::Package;
//!
//! let pkg = Package::open("brand-template.pptx")?;
//! let pres = pkg.presentation()?;
//! for layout in pres.slide_layouts()? {
//!     println!("{} ({} placeholders)", layout.name, layout.placeholders.len());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
pub mod error;
pub mod opc;
pub mod pptx;

// Re-export commonly used types from OPC layer
pub use opc::{OpcPackage, PackURI};

// Re-export error types
pub use error::{OoxmlError, Result};
