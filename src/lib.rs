//! Deckwright - builds a fixed-layout slide deck and writes it as `.pptx`
//!
//! A deck is built from two slide archetypes: a title slide (title, subtitle,
//! footer) and a bulleted content slide (heading, body). Region placement comes
//! from a [`Layout`](layout::Layout); the result is a PresentationML package
//! written atomically to disk.
//!
//! # Modules
//!
//! - [`layout`]: canvas and region presets, optionally loaded from YAML
//! - [`deck`]: slide model, templates and the append-only builder
//! - [`content`]: the project deck itself
//! - [`ooxml`]: the package writer and reader
//! - [`common`]: errors, units, XML helpers, metadata
//!
//! # Example
//!
//! ```no_run
//! use deckwright::{DeckBuilder, Layout, Metadata};
//!
//! # fn main() -> Result<(), deckwright::Error> {
//! let mut builder = DeckBuilder::new(Layout::wide())
//!     .with_metadata(Metadata::with_author("Platform team"));
//!
//! builder.title_slide("Search service", "Design review")?;
//! builder.bullets_slide("Goals", &["Faster queries", "Fewer timeouts"])?;
//! builder.save("review.pptx")?;
//! # Ok(())
//! # }
//! ```

pub mod common;
pub mod content;
pub mod deck;
pub mod layout;
pub mod ooxml;

pub use common::{Error, Metadata, Result, Stage};
pub use deck::{BuildState, Deck, DeckBuilder, Slide, SlideKind, TextRegion};
pub use layout::Layout;
pub use ooxml::pptx::{PresentationReader, PresentationWriter};
