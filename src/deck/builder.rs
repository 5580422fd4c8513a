/// Append-only deck builder scoped to one build.
use crate::common::{Error, Metadata, Result};
use crate::deck::model::{Deck, Slide};
use crate::deck::template::Templates;
use crate::layout::Layout;
use crate::ooxml::pptx::PresentationWriter;
use std::path::Path;

/// Lifecycle of a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildState {
    /// No slides yet
    Empty,
    /// At least one slide appended
    Populating,
    /// Serialized; no further changes allowed
    Finalized,
}

/// Builds one deck: template calls append slides, [`save`](Self::save) writes
/// it once and finalizes the builder.
#[derive(Debug)]
pub struct DeckBuilder {
    deck: Deck,
    templates: Templates,
    state: BuildState,
}

impl DeckBuilder {
    /// Create an empty builder laid out with `layout`.
    pub fn new(layout: Layout) -> Self {
        Self {
            deck: Deck::new(layout.canvas),
            templates: Templates::new(layout),
            state: BuildState::Empty,
        }
    }

    /// Set document metadata.
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.deck.set_metadata(metadata);
        self
    }

    pub fn state(&self) -> BuildState {
        self.state
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn templates(&self) -> &Templates {
        &self.templates
    }

    /// Append a title slide.
    pub fn title_slide(&mut self, title: &str, subtitle: &str) -> Result<&Slide> {
        self.ensure_open("add a title slide")?;
        let slide = self.templates.title_slide(title, subtitle)?;
        Ok(self.append(slide))
    }

    /// Append a bulleted content slide.
    pub fn bullets_slide<S: AsRef<str>>(&mut self, heading: &str, items: &[S]) -> Result<&Slide> {
        self.ensure_open("add a bullets slide")?;
        let slide = self.templates.bullets_slide(heading, items)?;
        Ok(self.append(slide))
    }

    /// Serialize the deck to `path` and finalize the builder.
    ///
    /// On failure the builder stays open and nothing is left at `path`.
    pub fn save<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.ensure_open("save")?;
        PresentationWriter::new(&self.deck).save(path.as_ref())?;
        self.state = BuildState::Finalized;
        log::info!(
            "wrote {} slides to {}",
            self.deck.len(),
            path.as_ref().display()
        );
        Ok(())
    }

    /// Serialize the deck to package bytes and finalize the builder.
    pub fn to_bytes(&mut self) -> Result<Vec<u8>> {
        self.ensure_open("serialize")?;
        let bytes = PresentationWriter::new(&self.deck).to_bytes()?;
        self.state = BuildState::Finalized;
        Ok(bytes)
    }

    /// Take the deck out of the builder.
    pub fn into_deck(self) -> Deck {
        self.deck
    }

    fn ensure_open(&self, operation: &'static str) -> Result<()> {
        match self.state {
            BuildState::Finalized => Err(Error::State(operation)),
            BuildState::Empty | BuildState::Populating => Ok(()),
        }
    }

    fn append(&mut self, slide: Slide) -> &Slide {
        log::debug!(
            "slide {}: {:?} \"{}\"",
            self.deck.len() + 1,
            slide.kind(),
            slide.heading().content()
        );
        self.state = BuildState::Populating;
        self.deck.push(slide)
    }
}
