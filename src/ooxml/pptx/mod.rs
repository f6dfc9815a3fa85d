//! PowerPoint (.pptx) presentation support.
//!
//! Reading covers what deck rendering and template inspection need: slide
//! size, masters, layouts and their placeholder slots, slides with their
//! backgrounds and shapes, and theme colours. Writing replaces a package's
//! slides with new ones built from text regions, filled rectangles and
//! placeholder instances.
//!
//! - [`Package`]: the .pptx / .potx file
//! - [`Presentation`]: read access to layouts, slides and themes
//! - [`MutablePresentation`]: slide writer over an existing package
//! - [`template::Scaffold`]: a generated blank package
//!
//! # Example
//!
//! ```rust,no_run
//! use deckhand::ooxml::pptx::Package;
//!
//! let package = Package::open("presentation.pptx")?;
//! let pres = package.presentation()?;
//!
//! for slide in pres.slides()? {
//!     println!("Slide {}: {}", slide.number, slide.text());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod fill;
pub mod format;
pub mod package;
pub mod parts;
pub mod presentation;
pub mod shapes;
pub mod slide;
pub mod template;
pub mod writer;

pub use fill::{ColorScheme, ColorValue, Fill};
pub use format::{Alignment, Anchor, BodyFormat, ParagraphFormat, TextFormat};
pub use package::Package;
pub use presentation::Presentation;
pub use shapes::{Placeholder, PlaceholderType, Shape, ShapeGeometry, ShapeType};
pub use slide::{LayoutPlaceholder, Slide, SlideLayout};
pub use writer::{MutablePresentation, MutableShape, MutableSlide, TextBody, TextParagraph};
