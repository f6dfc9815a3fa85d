//! Unified error type for deckhand.
//!
//! Packaging and PresentationML failures are folded into this enum by the
//! conversions in [`super::conversions`]; the remaining variants are raised by
//! the deck renderer while slides are being constructed.
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for deckhand operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid file format
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Part or relationship target not found
    #[error("Component not found: {0}")]
    ComponentNotFound(String),

    /// XML parsing or writing error
    #[error("XML error: {0}")]
    XmlError(String),

    /// Invalid content type
    #[error("Invalid content type: expected {expected}, got {got}")]
    InvalidContentType { expected: String, got: String },

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    ZipError(String),

    /// A style token the slide needs is absent from the palette
    #[error("palette has no colour for token '{0}'")]
    MissingColor(String),

    /// A palette entry could not be read as `#RRGGBB`
    #[error("palette token '{token}' has invalid colour '{value}'")]
    InvalidColor { token: String, value: String },

    /// Title (or closing text) is empty after trimming
    #[error("slide {slide}: {kind} slide needs a non-empty title")]
    EmptyTitle { slide: usize, kind: &'static str },

    /// A layout index in the template binding does not exist
    #[error("layout index {index} is out of range (template has {count} layouts)")]
    LayoutIndexOutOfRange { index: usize, count: usize },

    /// No layout in the template can host the slide kind
    #[error("no layout in the template can host a {kind} slide: {reason}")]
    LayoutNotFound { kind: &'static str, reason: String },

    /// The chosen layout lacks a slot the slide needs
    #[error("layout '{layout}' has no placeholder for role '{role}'")]
    PlaceholderNotFound { layout: String, role: &'static str },

    /// Text holds characters that cannot be stored in a slide
    #[error("slide {slide}: text contains a character that is not allowed in XML: {text:?}")]
    InvalidText { slide: usize, text: String },

    /// One or both columns of a two-column slide failed
    #[error("slide {slide}: {}", column_summary(.left, .right))]
    Columns {
        slide: usize,
        left: Option<Box<Error>>,
        right: Option<Box<Error>>,
    },

    /// The deck file could not be read as a deck
    #[error("deck file: {0}")]
    Config(String),

    /// The finished deck could not be written to its destination
    #[error("cannot save deck to {}: {source}", .path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

fn column_summary(left: &Option<Box<Error>>, right: &Option<Box<Error>>) -> String {
    let describe = |side: &str, err: &Option<Box<Error>>| match err {
        Some(e) => format!("{side} column failed ({e})"),
        None => format!("{side} column ok"),
    };
    format!("{}; {}", describe("left", left), describe("right", right))
}

/// Result type for deckhand operations.
pub type Result<T> = std::result::Result<T, Error>;
