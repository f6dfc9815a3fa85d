//! Failures of the OPC container: zip access, part names, content types and
//! relationships.
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpcError {
    #[error("no package at {0}")]
    PackageNotFound(String),

    #[error("'{0}' is not a valid part name")]
    InvalidPackUri(String),

    #[error("package has no part {0}")]
    PartNotFound(String),

    #[error("no relationship {0}")]
    RelationshipNotFound(String),

    /// Neither an override nor a default extension covers the part
    #[error("[Content_Types].xml declares no type for {0}")]
    ContentTypeNotFound(String),

    #[error("malformed relationship: {0}")]
    InvalidRelationship(String),

    #[error("malformed package XML: {0}")]
    XmlError(String),

    #[error("zip container: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("package XML: {0}")]
    QuickXml(#[from] quick_xml::Error),

    #[error("part is not UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

pub type Result<T> = std::result::Result<T, OpcError>;
