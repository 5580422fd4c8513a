//! Unified error types for deck building.
//!
//! Every failure is tagged with the build stage it came from so the binary can
//! report whether template construction or serialization failed.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, Result, Stage};
