//! Error conversion implementations.
//!
//! This module contains From trait implementations to convert from internal
//! error types to the unified Error type.

use super::types::Error;
use crate::ooxml::error::OoxmlError;
use crate::ooxml::opc::error::OpcError;

impl From<OpcError> for Error {
    fn from(err: OpcError) -> Self {
        Error::from_opc_error(err)
    }
}

impl From<OoxmlError> for Error {
    fn from(err: OoxmlError) -> Self {
        match err {
            OoxmlError::Io(e) => Error::Io(e),
            OoxmlError::Xml(s) => Error::XmlError(s),
            OoxmlError::PartNotFound(s) => Error::ComponentNotFound(s),
            OoxmlError::InvalidContentType { expected, got } => {
                Error::InvalidContentType { expected, got }
            },
            OoxmlError::InvalidRelationship(s) => Error::ComponentNotFound(s),
            OoxmlError::InvalidFormat(s) => Error::InvalidFormat(s),
            OoxmlError::Opc(e) => Error::from_opc_error(e),
        }
    }
}

impl Error {
    pub(crate) fn from_opc_error(err: OpcError) -> Self {
        match err {
            OpcError::Io(e) => Error::Io(e),
            OpcError::Zip(e) => Error::ZipError(e.to_string()),
            OpcError::XmlError(s) => Error::XmlError(s),
            OpcError::QuickXml(e) => Error::XmlError(e.to_string()),
            OpcError::PartNotFound(s) => Error::ComponentNotFound(s),
            OpcError::PackageNotFound(s) => Error::ComponentNotFound(s),
            _ => Error::Other(err.to_string()),
        }
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::XmlError(err.to_string())
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::ZipError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opc_part_not_found_maps_to_component() {
        let err: Error = OpcError::PartNotFound("/ppt/slides/slide9.xml".into()).into();
        assert!(matches!(err, Error::ComponentNotFound(ref s) if s.ends_with("slide9.xml")));
    }

    #[test]
    fn test_nested_opc_error_unwraps() {
        let err: Error = OoxmlError::Opc(OpcError::XmlError("bad".into())).into();
        assert!(matches!(err, Error::XmlError(ref s) if s == "bad"));
    }
}
