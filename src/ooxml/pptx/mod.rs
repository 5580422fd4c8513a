//! PowerPoint (.pptx) packages.
//!
//! - `writer`: turns a [`Deck`](crate::deck::Deck) into a PresentationML package
//! - `reader`: reads the slide texts of a written package back
//! - `template`: the fixed master, layout, theme and property parts every deck carries
//!
//! # Example
//!
//! ```rust,no_run
//! use deckwright::deck::DeckBuilder;
//! use deckwright::layout::Layout;
//! use deckwright::ooxml::pptx::PresentationReader;
//!
//! let mut builder = DeckBuilder::new(Layout::wide());
//! builder.title_slide("Roadmap", "2025")?;
//! builder.save("roadmap.pptx")?;
//!
//! let reader = PresentationReader::open("roadmap.pptx")?;
//! assert_eq!(reader.slide_count(), 1);
//! # Ok::<(), deckwright::Error>(())
//! ```

pub mod reader;
pub mod template;
pub mod writer;

pub use reader::PresentationReader;
pub use writer::PresentationWriter;
