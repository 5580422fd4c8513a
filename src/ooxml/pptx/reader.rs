//! Read-back of written presentation packages.
//!
//! Only what a generated deck contains is understood: the slide list, the
//! text of every shape, the slide size and the document author.

use crate::common::{Error, Result};
use crate::ooxml::opc::constants::relationship_type as rt;
use crate::ooxml::opc::error::OpcError;
use crate::ooxml::opc::{PackURI, PhysPkgReader, Relationships};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::path::Path;

const PRESENTATION: &str = "/ppt/presentation.xml";
const CORE_PROPS: &str = "/docProps/core.xml";

/// Text content of a presentation package.
#[derive(Debug, Clone)]
pub struct PresentationReader {
    slides: Vec<Vec<String>>,
    slide_size: Option<(i64, i64)>,
    author: Option<String>,
}

impl PresentationReader {
    /// Open a `.pptx` file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let pkg = PhysPkgReader::open(path)?;
        Self::load(pkg)
    }

    /// Read a package from its bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        let pkg = PhysPkgReader::from_bytes(bytes)?;
        Self::load(pkg)
    }

    fn load(mut pkg: PhysPkgReader) -> Result<Self> {
        let pres_uri = PackURI::new(PRESENTATION)?;
        let pres_xml = pkg.blob_for(&pres_uri)?;
        let (slide_rids, slide_size) = parse_presentation(&pres_xml)?;

        let rels = match pkg.rels_xml_for(&pres_uri)? {
            Some(xml) => Relationships::from_xml(pres_uri.base_uri(), &xml)?,
            None => Relationships::new(pres_uri.base_uri()),
        };

        let mut slides = Vec::with_capacity(slide_rids.len());
        for r_id in &slide_rids {
            let rel = rels.get(r_id).ok_or_else(|| {
                Error::Xml(format!("slide relationship '{}' is missing", r_id))
            })?;
            if rel.reltype() != rt::SLIDE {
                return Err(Error::Xml(format!(
                    "relationship '{}' does not point at a slide",
                    r_id
                )));
            }
            let partname = rels.target_partname(r_id)?;
            slides.push(parse_slide_texts(&pkg.blob_for(&partname)?)?);
        }

        let core_uri = PackURI::new(CORE_PROPS)?;
        let author = match pkg.blob_for(&core_uri) {
            Ok(xml) => parse_creator(&xml)?,
            Err(OpcError::PartNotFound(_)) => None,
            Err(e) => return Err(e.into()),
        };

        log::debug!("read {} slides", slides.len());
        Ok(Self {
            slides,
            slide_size,
            author,
        })
    }

    /// Number of slides in the slide list.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Shape texts of every slide, in presentation order.
    ///
    /// Paragraphs of one shape are joined with `'\n'`.
    pub fn slides(&self) -> &[Vec<String>] {
        &self.slides
    }

    /// Slide size in EMU as `(cx, cy)`.
    pub fn slide_size(&self) -> Option<(i64, i64)> {
        self.slide_size
    }

    /// Document author (`dc:creator`).
    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }
}

fn attr_value(e: &BytesStart<'_>, key: &[u8]) -> Result<Option<String>> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == key {
            let value = std::str::from_utf8(&attr.value).map_err(|e| Error::Xml(e.to_string()))?;
            return Ok(Some(value.to_string()));
        }
    }
    Ok(None)
}

fn parse_emu(value: Option<String>) -> Result<i64> {
    let value = value.ok_or_else(|| Error::Xml("sldSz is missing a dimension".to_string()))?;
    value
        .parse()
        .map_err(|_| Error::Xml(format!("invalid EMU value '{}'", value)))
}

/// Slide rIds in list order and the slide size.
fn parse_presentation(xml: &[u8]) -> Result<(Vec<String>, Option<(i64, i64)>)> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);
    let mut buf = Vec::new();
    let mut rids = Vec::new();
    let mut size = None;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) | Event::Empty(e) => match e.local_name().as_ref() {
                b"sldId" => {
                    let r_id = attr_value(&e, b"r:id")?
                        .ok_or_else(|| Error::Xml("sldId without r:id".to_string()))?;
                    rids.push(r_id);
                },
                b"sldSz" => {
                    let cx = parse_emu(attr_value(&e, b"cx")?)?;
                    let cy = parse_emu(attr_value(&e, b"cy")?)?;
                    size = Some((cx, cy));
                },
                _ => {},
            },
            Event::Eof => break,
            _ => {},
        }
        buf.clear();
    }

    Ok((rids, size))
}

/// Resolve a general entity reference by name (`amp`, `#233`, `#xE9`).
fn resolve_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => {
            let code = if let Some(hex) = name.strip_prefix("#x") {
                u32::from_str_radix(hex, 16).ok()?
            } else {
                name.strip_prefix('#')?.parse().ok()?
            };
            char::from_u32(code)
        },
    }
}

/// Text of each `p:sp` shape, one paragraph per line.
fn parse_slide_texts(xml: &[u8]) -> Result<Vec<String>> {
    let mut reader = Reader::from_reader(xml);
    let mut buf = Vec::new();
    let mut shapes = Vec::new();
    let mut paragraphs: Vec<String> = Vec::new();
    let mut in_shape = false;
    let mut in_text = false;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"sp" => {
                    in_shape = true;
                    paragraphs.clear();
                },
                b"p" if in_shape => paragraphs.push(String::new()),
                b"t" if in_shape => in_text = true,
                _ => {},
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"p" if in_shape => paragraphs.push(String::new()),
                b"br" if in_shape => {
                    if let Some(paragraph) = paragraphs.last_mut() {
                        paragraph.push('\n');
                    }
                },
                _ => {},
            },
            Event::Text(e) if in_text => {
                let text = std::str::from_utf8(&e).map_err(|e| Error::Xml(e.to_string()))?;
                if let Some(paragraph) = paragraphs.last_mut() {
                    paragraph.push_str(text);
                }
            },
            Event::CData(e) if in_text => {
                let text = std::str::from_utf8(&e).map_err(|e| Error::Xml(e.to_string()))?;
                if let Some(paragraph) = paragraphs.last_mut() {
                    paragraph.push_str(text);
                }
            },
            Event::GeneralRef(e) if in_text => {
                let name = std::str::from_utf8(&e).map_err(|e| Error::Xml(e.to_string()))?;
                let ch = resolve_entity(name)
                    .ok_or_else(|| Error::Xml(format!("unknown entity '&{};'", name)))?;
                if let Some(paragraph) = paragraphs.last_mut() {
                    paragraph.push(ch);
                }
            },
            Event::End(e) => match e.local_name().as_ref() {
                b"t" => in_text = false,
                b"sp" if in_shape => {
                    in_shape = false;
                    shapes.push(paragraphs.join("\n"));
                },
                _ => {},
            },
            Event::Eof => break,
            _ => {},
        }
        buf.clear();
    }

    Ok(shapes)
}

/// `dc:creator` from core properties.
fn parse_creator(xml: &[u8]) -> Result<Option<String>> {
    let mut reader = Reader::from_reader(xml);
    let mut buf = Vec::new();
    let mut in_creator = false;
    let mut creator: Option<String> = None;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) if e.local_name().as_ref() == b"creator" => {
                in_creator = true;
                creator = Some(String::new());
            },
            Event::Text(e) if in_creator => {
                let text = std::str::from_utf8(&e).map_err(|e| Error::Xml(e.to_string()))?;
                creator.get_or_insert_with(String::new).push_str(text);
            },
            Event::GeneralRef(e) if in_creator => {
                let name = std::str::from_utf8(&e).map_err(|e| Error::Xml(e.to_string()))?;
                if let Some(ch) = resolve_entity(name) {
                    creator.get_or_insert_with(String::new).push(ch);
                }
            },
            Event::End(e) if e.local_name().as_ref() == b"creator" => break,
            Event::Eof => break,
            _ => {},
        }
        buf.clear();
    }

    Ok(creator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Metadata;
    use crate::deck::DeckBuilder;
    use crate::layout::Layout;
    use proptest::prelude::*;

    #[test]
    fn test_reads_back_shape_texts() {
        let mut builder = DeckBuilder::new(Layout::wide())
            .with_metadata(Metadata::with_author("Tech Media RAG MVP"));
        builder.title_slide("Deck", "Sub").unwrap();
        builder
            .bullets_slide("Plan", &["bot", "rag & <index>"])
            .unwrap();
        let reader = PresentationReader::from_bytes(builder.to_bytes().unwrap()).unwrap();

        assert_eq!(reader.slide_count(), 2);
        assert_eq!(reader.slides()[0][0], "Deck");
        assert_eq!(reader.slides()[0][1], "Sub");
        assert_eq!(reader.slides()[1], vec![
            "Plan".to_string(),
            "• bot\n• rag & <index>".to_string()
        ]);
        assert_eq!(reader.slide_size(), Some((12_192_000, 6_858_000)));
        assert_eq!(reader.author(), Some("Tech Media RAG MVP"));
    }

    #[test]
    fn test_empty_body_reads_as_empty_string() {
        let mut builder = DeckBuilder::new(Layout::wide());
        builder.bullets_slide::<&str>("Nothing", &[]).unwrap();
        let reader = PresentationReader::from_bytes(builder.to_bytes().unwrap()).unwrap();
        assert_eq!(reader.slides()[0][1], "");
        assert_eq!(reader.author(), None);
    }

    #[test]
    fn test_resolve_entity() {
        assert_eq!(resolve_entity("amp"), Some('&'));
        assert_eq!(resolve_entity("#233"), Some('é'));
        assert_eq!(resolve_entity("#x2022"), Some('•'));
        assert_eq!(resolve_entity("nbsp"), None);
    }

    #[test]
    fn test_not_a_package() {
        let err = PresentationReader::from_bytes(b"plain text".to_vec()).unwrap_err();
        assert_eq!(err.stage(), crate::common::Stage::Serialization);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        #[test]
        fn prop_round_trip_slide_count(kinds in prop::collection::vec(any::<bool>(), 0..12)) {
            let mut builder = DeckBuilder::new(Layout::wide());
            for (index, is_title) in kinds.iter().enumerate() {
                if *is_title {
                    builder.title_slide(&format!("Slide {index}"), "").unwrap();
                } else {
                    builder.bullets_slide(&format!("Slide {index}"), &["item"]).unwrap();
                }
            }
            let reader = PresentationReader::from_bytes(builder.to_bytes().unwrap()).unwrap();

            prop_assert_eq!(reader.slide_count(), kinds.len());
            for (index, texts) in reader.slides().iter().enumerate() {
                prop_assert_eq!(&texts[0], &format!("Slide {index}"));
            }
        }
    }
}
