//! Common types and utilities shared across the crate.
//!
//! Errors, unit conversion, XML escaping and document metadata live here so
//! the deck model and the package writer agree on them.

// Submodule declarations
pub mod error;
pub mod metadata;
pub mod unit;
pub mod xml;

// Re-exports for convenience
pub use error::{Error, Result, Stage};
pub use metadata::Metadata;
