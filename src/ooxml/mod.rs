//! Office Open XML (OOXML) output.
//!
//! The module is organized into two layers:
//!
//! 1. **OPC Layer** (`opc`): package handling (zip, parts, relationships, content types)
//! 2. **PresentationML** (`pptx`): deck-to-package writer and a reader for written packages
pub mod opc;
pub mod pptx;

// Re-export commonly used types from OPC layer
pub use opc::{OpcPackage, PackURI};
