//! Parts for PowerPoint presentation documents.
//!
//! Thin wrappers that borrow an OPC part and read the PresentationML it
//! holds.
pub mod presentation;
pub mod slide;
pub mod theme;

pub use presentation::PresentationPart;
pub use slide::{SlideLayoutPart, SlideMasterPart, SlidePart};
pub use theme::{Theme, ThemeColor, ThemePart};
