//! Failures while reading or writing PresentationML on top of a package.
use crate::ooxml::opc::error::OpcError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, OoxmlError>;

#[derive(Error, Debug)]
pub enum OoxmlError {
    #[error(transparent)]
    Opc(#[from] OpcError),

    /// Part content that does not parse, or that cannot be written back
    #[error("malformed PresentationML: {0}")]
    Xml(String),

    #[error("missing part: {0}")]
    PartNotFound(String),

    /// The main part is not a presentation
    #[error("not a presentation: expected {expected}, got {got}")]
    InvalidContentType { expected: String, got: String },

    #[error("broken relationship: {0}")]
    InvalidRelationship(String),

    #[error("invalid presentation: {0}")]
    InvalidFormat(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<quick_xml::Error> for OoxmlError {
    fn from(err: quick_xml::Error) -> Self {
        OoxmlError::Xml(err.to_string())
    }
}

impl From<std::str::Utf8Error> for OoxmlError {
    fn from(err: std::str::Utf8Error) -> Self {
        OoxmlError::Xml(format!("part is not UTF-8: {}", err))
    }
}
