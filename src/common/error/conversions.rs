//! Error conversion implementations.
//!
//! This module contains From trait implementations to convert from internal
//! error types to the unified Error type.

use super::types::Error;
use crate::ooxml::opc::error::OpcError;

impl From<OpcError> for Error {
    fn from(err: OpcError) -> Self {
        match err {
            // I/O failures keep their identity so callers can match on them
            OpcError::IoError(e) => Error::Io(e),
            OpcError::ZipError(zip::result::ZipError::Io(e)) => Error::Io(e),
            OpcError::XmlError(s) => Error::Xml(s),
            other => Error::Package(other),
        }
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Xml(err.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::Xml(err.to_string())
    }
}

impl From<std::fmt::Error> for Error {
    fn from(err: std::fmt::Error) -> Self {
        Error::Xml(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Stage;

    #[test]
    fn test_opc_io_error_maps_to_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = OpcError::IoError(io).into();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.stage(), Stage::Serialization);
    }

    #[test]
    fn test_missing_part_maps_to_package() {
        let err: Error = OpcError::PartNotFound("/ppt/presentation.xml".to_string()).into();
        assert!(matches!(err, Error::Package(_)));
    }

    #[test]
    fn test_stage_display() {
        let err = Error::validation("title", "font size must be positive");
        assert_eq!(err.stage().to_string(), "template construction");
        assert_eq!(
            err.to_string(),
            "invalid title region: font size must be positive"
        );
        assert_eq!(Error::State("save").stage(), Stage::Construction);
    }
}
