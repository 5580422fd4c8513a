/// Deck, slide and text region types.
use crate::common::xml::is_xml_char;
use crate::common::{Error, Metadata, Result};
use crate::layout::Canvas;
use serde::{Deserialize, Serialize};

/// Vertical anchoring of text inside its region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    Top,
    Middle,
    Bottom,
}

impl VerticalAlign {
    /// DrawingML `anchor` attribute value.
    pub fn anchor(self) -> &'static str {
        match self {
            Self::Top => "t",
            Self::Middle => "ctr",
            Self::Bottom => "b",
        }
    }
}

/// Position and size of a region in EMU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Frame {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

/// A positioned block of styled text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRegion {
    content: String,
    frame: Frame,
    font_size: u32,
    bold: bool,
    vertical_align: Option<VerticalAlign>,
}

impl TextRegion {
    /// Create a region, validating it against the canvas.
    ///
    /// `name` only labels validation errors. Sizes must be positive and the
    /// frame must lie entirely on the canvas; nothing is clamped. Content
    /// may not hold characters XML 1.0 cannot represent (most C0 controls).
    pub fn new(
        name: &str,
        content: impl Into<String>,
        frame: Frame,
        font_size: u32,
        bold: bool,
        vertical_align: Option<VerticalAlign>,
        canvas: &Canvas,
    ) -> Result<Self> {
        let content = content.into();
        if let Some(c) = content.chars().find(|&c| !is_xml_char(c)) {
            return Err(Error::validation(
                name,
                format!("character U+{:04X} cannot be written to a slide", c as u32),
            ));
        }
        if font_size == 0 {
            return Err(Error::validation(name, "font size must be positive"));
        }
        if frame.width <= 0 || frame.height <= 0 {
            return Err(Error::validation(
                name,
                format!(
                    "size must be positive, got {}x{} EMU",
                    frame.width, frame.height
                ),
            ));
        }
        if frame.x < 0 || frame.y < 0 {
            return Err(Error::validation(
                name,
                format!("position ({}, {}) EMU is off canvas", frame.x, frame.y),
            ));
        }

        let (cw, ch) = canvas
            .checked_size_emu()
            .ok_or_else(|| Error::validation(name, "canvas size must be finite and positive"))?;
        let right = frame.x.checked_add(frame.width);
        let bottom = frame.y.checked_add(frame.height);
        match (right, bottom) {
            (Some(right), Some(bottom)) if right <= cw && bottom <= ch => {},
            _ => {
                return Err(Error::validation(
                    name,
                    format!(
                        "frame at ({}, {}) sized {}x{} EMU extends beyond canvas {}x{} EMU",
                        frame.x, frame.y, frame.width, frame.height, cw, ch
                    ),
                ));
            },
        }

        Ok(Self {
            content,
            frame,
            font_size,
            bold,
            vertical_align,
        })
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn frame(&self) -> Frame {
        self.frame
    }

    /// Font size in points.
    pub fn font_size(&self) -> u32 {
        self.font_size
    }

    pub fn is_bold(&self) -> bool {
        self.bold
    }

    pub fn vertical_align(&self) -> Option<VerticalAlign> {
        self.vertical_align
    }

    /// Content split into paragraphs, one per line.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.content.split('\n')
    }
}

/// Which archetype produced a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlideKind {
    /// Title, subtitle and footer
    Title,
    /// Heading and one bulleted body
    Bullets,
}

impl SlideKind {
    /// Shape names for each region, in region order.
    pub fn region_names(self) -> &'static [&'static str] {
        match self {
            Self::Title => &["Title", "Subtitle", "Footer"],
            Self::Bullets => &["Heading", "Body"],
        }
    }
}

/// One page of the deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    kind: SlideKind,
    regions: Vec<TextRegion>,
}

impl Slide {
    /// Create a slide; the first region is its heading.
    ///
    /// `regions` must match `kind` one to one (see [`SlideKind::region_names`]).
    pub(crate) fn new(kind: SlideKind, regions: Vec<TextRegion>) -> Result<Self> {
        let expected = kind.region_names().len();
        if regions.len() != expected {
            return Err(Error::validation(
                "heading",
                format!(
                    "{:?} slide takes {} regions, got {}",
                    kind,
                    expected,
                    regions.len()
                ),
            ));
        }
        Ok(Self { kind, regions })
    }

    pub fn kind(&self) -> SlideKind {
        self.kind
    }

    pub fn regions(&self) -> &[TextRegion] {
        &self.regions
    }

    /// The heading region (always the first one).
    pub fn heading(&self) -> &TextRegion {
        &self.regions[0]
    }

    pub fn region_count(&self) -> usize {
        self.regions.len()
    }
}

/// An ordered, append-only collection of slides.
#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    slides: Vec<Slide>,
    canvas: Canvas,
    metadata: Metadata,
}

impl Deck {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            slides: Vec::new(),
            canvas,
            metadata: Metadata::default(),
        }
    }

    pub(crate) fn push(&mut self, slide: Slide) -> &Slide {
        self.slides.push(slide);
        &self.slides[self.slides.len() - 1]
    }

    pub(crate) fn set_metadata(&mut self, metadata: Metadata) {
        self.metadata = metadata;
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }
}
