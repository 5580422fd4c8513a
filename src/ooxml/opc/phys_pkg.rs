//! Physical package access: reading part blobs out of a zip archive.

use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::PackURI;
use std::io::{Cursor, Read};
use std::path::Path;
use zip::ZipArchive;
use zip::result::ZipError;

/// Reads parts of a zip-based OPC package held in memory.
pub struct PhysPkgReader {
    archive: ZipArchive<Cursor<Vec<u8>>>,
}

impl PhysPkgReader {
    /// Open an OPC package from a file path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::from_bytes(data)
    }

    /// Create a reader over owned package bytes.
    ///
    /// Fails if the bytes are not a zip archive.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let archive = ZipArchive::new(Cursor::new(data))?;
        Ok(Self { archive })
    }

    /// Contents of the part named `partname`.
    pub fn blob_for(&mut self, partname: &PackURI) -> Result<Vec<u8>> {
        self.read_member(partname.membername())?
            .ok_or_else(|| OpcError::PartNotFound(partname.to_string()))
    }

    /// `.rels` XML of `source`, or `None` if it has no relationships.
    pub fn rels_xml_for(&mut self, source: &PackURI) -> Result<Option<Vec<u8>>> {
        let rels_uri = source.rels_uri()?;
        self.read_member(rels_uri.membername())
    }

    /// Number of zip members in the package.
    pub fn member_count(&self) -> usize {
        self.archive.len()
    }

    fn read_member(&mut self, name: &str) -> Result<Option<Vec<u8>>> {
        let mut file = match self.archive.by_name(name) {
            Ok(file) => file,
            Err(ZipError::FileNotFound) => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let mut blob = Vec::with_capacity(file.size() as usize);
        file.read_to_end(&mut blob)?;
        Ok(Some(blob))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::OpcPackage;
    use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};
    use crate::ooxml::opc::pkgwriter::PackageWriter;

    fn sample_bytes() -> Vec<u8> {
        let mut pkg = OpcPackage::new();
        let pres = PackURI::new("/ppt/presentation.xml").unwrap();
        let slide = PackURI::new("/ppt/slides/slide1.xml").unwrap();
        pkg.relate_to(&pres, rt::OFFICE_DOCUMENT);
        pkg.add_part(pres, ct::PML_PRESENTATION_MAIN, b"<p:presentation/>".to_vec())
            .unwrap()
            .relate_to(&slide, rt::SLIDE);
        pkg.add_part(slide, ct::PML_SLIDE, b"<p:sld/>".to_vec())
            .unwrap();
        PackageWriter::to_bytes(&pkg).unwrap()
    }

    #[test]
    fn test_blob_and_rels() {
        let mut reader = PhysPkgReader::from_bytes(sample_bytes()).unwrap();
        let pres = PackURI::new("/ppt/presentation.xml").unwrap();
        let slide = PackURI::new("/ppt/slides/slide1.xml").unwrap();

        assert_eq!(reader.blob_for(&pres).unwrap(), b"<p:presentation/>");
        assert!(reader.rels_xml_for(&pres).unwrap().is_some());
        assert!(reader.rels_xml_for(&slide).unwrap().is_none());
        assert_eq!(reader.member_count(), 5);
    }

    #[test]
    fn test_missing_part() {
        let mut reader = PhysPkgReader::from_bytes(sample_bytes()).unwrap();
        let missing = PackURI::new("/ppt/slides/slide9.xml").unwrap();
        assert!(matches!(
            reader.blob_for(&missing),
            Err(OpcError::PartNotFound(_))
        ));
    }

    #[test]
    fn test_not_a_zip() {
        assert!(matches!(
            PhysPkgReader::from_bytes(b"not a package".to_vec()),
            Err(OpcError::ZipError(_))
        ));
    }
}
