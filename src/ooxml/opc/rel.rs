/// Relationship-related objects for OPC packages.
///
/// Relationships connect a source (a part, or the package itself) to the
/// parts it uses. Only internal relationships occur in a generated deck.
use crate::common::xml::{escape_xml, unescape_xml};
use crate::ooxml::opc::constants::namespace;
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::PackURI;
use quick_xml::Reader;
use quick_xml::events::Event;

/// A single relationship from a source part to a target part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    /// Relationship ID (e.g., "rId1", "rId2")
    r_id: String,

    /// Relationship type URI
    reltype: String,

    /// Target reference, relative to the source's directory
    target_ref: String,
}

impl Relationship {
    pub fn new(r_id: String, reltype: String, target_ref: String) -> Self {
        Self {
            r_id,
            reltype,
            target_ref,
        }
    }

    #[inline]
    pub fn r_id(&self) -> &str {
        &self.r_id
    }

    #[inline]
    pub fn reltype(&self) -> &str {
        &self.reltype
    }

    #[inline]
    pub fn target_ref(&self) -> &str {
        &self.target_ref
    }
}

/// Relationships from a single source, in the order they were added.
#[derive(Debug, Clone, Default)]
pub struct Relationships {
    /// Directory of the source, used to resolve relative targets
    base_uri: String,

    rels: Vec<Relationship>,
}

impl Relationships {
    pub fn new(base_uri: impl Into<String>) -> Self {
        Self {
            base_uri: base_uri.into(),
            rels: Vec::new(),
        }
    }

    /// Add a relationship to `target` and return its new rId.
    pub fn add(&mut self, reltype: &str, target: &PackURI) -> String {
        let r_id = format!("rId{}", self.rels.len() + 1);
        let target_ref = target.relative_ref(&self.base_uri);
        self.rels.push(Relationship::new(
            r_id.clone(),
            reltype.to_string(),
            target_ref,
        ));
        r_id
    }

    /// Get a relationship by its ID.
    pub fn get(&self, r_id: &str) -> Option<&Relationship> {
        self.rels.iter().find(|rel| rel.r_id() == r_id)
    }

    /// Absolute part name of the relationship's target.
    pub fn target_partname(&self, r_id: &str) -> Result<PackURI> {
        let rel = self
            .get(r_id)
            .ok_or_else(|| OpcError::InvalidRelationship(format!("no relationship '{}'", r_id)))?;
        PackURI::from_rel_ref(&self.base_uri, rel.target_ref())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }

    /// Serialize relationships to `.rels` XML.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(256 + self.rels.len() * 160);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(&format!(
            r#"<Relationships xmlns="{}">"#,
            namespace::OPC_RELATIONSHIPS
        ));

        for rel in &self.rels {
            xml.push_str(&format!(
                r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
                escape_xml(rel.r_id()),
                escape_xml(rel.reltype()),
                escape_xml(rel.target_ref())
            ));
        }

        xml.push_str("</Relationships>");
        xml
    }

    /// Parse `.rels` XML belonging to a source in `base_uri`.
    pub fn from_xml(base_uri: impl Into<String>, xml: &[u8]) -> Result<Self> {
        let mut rels = Self::new(base_uri);
        let mut reader = Reader::from_reader(xml);
        reader.config_mut().trim_text(true);
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"Relationship" => {
                    let mut r_id = None;
                    let mut reltype = None;
                    let mut target = None;
                    for attr in e.attributes() {
                        let attr = attr?;
                        let value = std::str::from_utf8(&attr.value)
                            .map_err(|e| OpcError::XmlError(e.to_string()))?;
                        let value = unescape_xml(value);
                        match attr.key.as_ref() {
                            b"Id" => r_id = Some(value),
                            b"Type" => reltype = Some(value),
                            b"Target" => target = Some(value),
                            _ => {},
                        }
                    }
                    match (r_id, reltype, target) {
                        (Some(r_id), Some(reltype), Some(target)) => {
                            rels.rels.push(Relationship::new(r_id, reltype, target))
                        },
                        _ => {
                            return Err(OpcError::InvalidRelationship(
                                "relationship is missing Id, Type or Target".to_string(),
                            ));
                        },
                    }
                },
                Event::Eof => break,
                _ => {},
            }
            buf.clear();
        }

        Ok(rels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::relationship_type as rt;

    #[test]
    fn test_add_assigns_sequential_ids() {
        let mut rels = Relationships::new("/ppt");
        let master = PackURI::new("/ppt/slideMasters/slideMaster1.xml").unwrap();
        let slide = PackURI::new("/ppt/slides/slide1.xml").unwrap();

        assert_eq!(rels.add(rt::SLIDE_MASTER, &master), "rId1");
        assert_eq!(rels.add(rt::SLIDE, &slide), "rId2");
        assert_eq!(rels.get("rId2").unwrap().target_ref(), "slides/slide1.xml");
    }

    #[test]
    fn test_xml_round_trip() {
        let mut rels = Relationships::new("/ppt/slides");
        let layout = PackURI::new("/ppt/slideLayouts/slideLayout2.xml").unwrap();
        rels.add(rt::SLIDE_LAYOUT, &layout);

        let xml = rels.to_xml();
        assert!(xml.contains(r#"Target="../slideLayouts/slideLayout2.xml""#));

        let parsed = Relationships::from_xml("/ppt/slides", xml.as_bytes()).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed.target_partname("rId1").unwrap(), layout);
    }

    #[test]
    fn test_missing_relationship() {
        let rels = Relationships::new("/ppt");
        assert!(rels.target_partname("rId7").is_err());
    }
}
