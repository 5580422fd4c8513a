//! In-memory deck model and the builders that populate it.
//!
//! # Architecture
//!
//! - `model`: `Deck`, `Slide`, `TextRegion` and their invariants
//! - `template`: the two slide archetypes (title, bulleted content)
//! - `builder`: `DeckBuilder`, the append-only state machine one build runs through
//!
//! # Example
//!
//! ```rust,no_run
//! use deckwright::deck::DeckBuilder;
//! use deckwright::layout::Layout;
//!
//! let mut builder = DeckBuilder::new(Layout::wide());
//! builder.title_slide("Quarterly review", "Numbers and next steps")?;
//! builder.bullets_slide("Highlights", &["Revenue up", "Churn down"])?;
//! builder.save("review.pptx")?;
//! # Ok::<(), deckwright::Error>(())
//! ```

pub mod builder;
pub mod model;
pub mod template;

pub use builder::{BuildState, DeckBuilder};
pub use model::{Deck, Frame, Slide, SlideKind, TextRegion, VerticalAlign};
pub use template::{BULLET_MARKER, FOOTER_LABEL, Templates};
