/// In-memory OPC package assembled before it is zipped.
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::{PACKAGE_URI, PackURI};
use crate::ooxml::opc::part::Part;
use crate::ooxml::opc::rel::Relationships;

/// An OPC package: package-level relationships plus parts in insertion order.
///
/// Insertion order is kept so the zip member order is stable across builds.
#[derive(Debug, Clone)]
pub struct OpcPackage {
    /// Package-level relationships (`/_rels/.rels`)
    rels: Relationships,

    parts: Vec<Part>,
}

impl OpcPackage {
    pub fn new() -> Self {
        Self {
            rels: Relationships::new(PACKAGE_URI),
            parts: Vec::new(),
        }
    }

    /// Add a part. Part names must be unique.
    pub fn add_part(&mut self, partname: PackURI, content_type: &str, blob: Vec<u8>) -> Result<&mut Part> {
        if self.part(&partname).is_some() {
            return Err(OpcError::DuplicatePart(partname.to_string()));
        }
        self.parts.push(Part::new(partname, content_type, blob));
        let last = self.parts.len() - 1;
        Ok(&mut self.parts[last])
    }

    pub fn part(&self, partname: &PackURI) -> Option<&Part> {
        self.parts.iter().find(|part| part.partname() == partname)
    }

    #[inline]
    pub fn iter_parts(&self) -> impl Iterator<Item = &Part> {
        self.parts.iter()
    }

    #[inline]
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    #[inline]
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// Add a package-level relationship to `target` and return its rId.
    pub fn relate_to(&mut self, target: &PackURI, reltype: &str) -> String {
        self.rels.add(reltype, target)
    }
}

impl Default for OpcPackage {
    fn default() -> Self {
        Self::new()
    }
}
