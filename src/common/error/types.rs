use std::fmt;
use thiserror::Error;

/// Main error type for deck operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A text region violates a geometry or font invariant
    #[error("invalid {region} region: {reason}")]
    Validation { region: String, reason: String },

    /// Operation attempted on a finalized deck
    #[error("deck is finalized, cannot {0}")]
    State(&'static str),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Packaging failure that is not an I/O failure (zip encoding, malformed part)
    #[error("Package error: {0}")]
    Package(crate::ooxml::opc::error::OpcError),

    /// Layout configuration could not be parsed
    #[error("Invalid layout configuration: {0}")]
    Config(String),

    /// XML parsing error while reading a package back
    #[error("XML error: {0}")]
    Xml(String),
}

impl Error {
    pub(crate) fn validation(region: &str, reason: impl Into<String>) -> Self {
        Error::Validation {
            region: region.to_string(),
            reason: reason.into(),
        }
    }

    /// The build stage this error belongs to.
    pub fn stage(&self) -> Stage {
        match self {
            Error::Config(_) => Stage::Configuration,
            Error::Validation { .. } | Error::State(_) => Stage::Construction,
            Error::Io(_) | Error::Package(_) | Error::Xml(_) => Stage::Serialization,
        }
    }
}

/// Build stage an [`Error`] originated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Configuration,
    Construction,
    Serialization,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Configuration => "layout configuration",
            Stage::Construction => "template construction",
            Stage::Serialization => "serialization",
        })
    }
}

/// Result type for deck operations.
pub type Result<T> = std::result::Result<T, Error>;
