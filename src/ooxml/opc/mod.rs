//! Open Packaging Conventions (OPC) implementation.
//!
//! The container layer of a `.pptx` file:
//!
//! - Part names (`PackURI`) and their zip member names
//! - Parts and relationships (`Part`, `Relationships`)
//! - Content type mapping and zip serialization (`pkgwriter`)
//! - Reading parts back out of a zip (`phys_pkg`)
pub mod constants;
pub mod error;
pub mod package;
pub mod packuri;
pub mod phys_pkg;
pub mod part;
pub mod pkgwriter;
pub mod rel;

// Re-export commonly used types
pub use package::OpcPackage;
pub use packuri::PackURI;
pub use part::Part;
pub use phys_pkg::PhysPkgReader;
pub use rel::{Relationship, Relationships};
