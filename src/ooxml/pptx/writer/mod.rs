//! PresentationML writer.
//!
//! - `pres`: package assembly and `presentation.xml`
//! - `slide`: slide parts
//! - `shape`: text boxes inside a slide
//! - `props`: core and extended document properties

pub mod pres;
mod props;
mod shape;
mod slide;

pub use pres::PresentationWriter;
