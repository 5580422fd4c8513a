//! Package writer for OPC packages.
//!
//! Serializes an [`OpcPackage`] into a zip archive: `[Content_Types].xml`,
//! the package relationships, then every part followed by its `.rels` part.
//! Files on disk are committed atomically.

use crate::ooxml::opc::constants::{content_type as ct, namespace};
use crate::ooxml::opc::error::Result;
use crate::ooxml::opc::package::OpcPackage;
use crate::ooxml::opc::packuri::{CONTENT_TYPES_URI, PACKAGE_URI, PackURI};
use std::collections::BTreeMap;
use std::io::{Cursor, Write};
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Package writer that serializes an OPC package to a ZIP file.
///
/// # Example
///
/// ```no_run
/// use deckwright::ooxml::opc::{OpcPackage, PackURI};
/// use deckwright::ooxml::opc::pkgwriter::PackageWriter;
///
/// let mut pkg = OpcPackage::new();
/// pkg.add_part(PackURI::new("/hello.xml")?, "application/xml", b"<hello/>".to_vec())?;
/// PackageWriter::write("hello.zip", &pkg)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct PackageWriter;

impl PackageWriter {
    /// Write an OPC package to a file.
    ///
    /// The archive is written to a temporary file in the destination directory
    /// and renamed over `path` only once it is complete, so a failure never
    /// leaves a truncated package behind. The destination directory must exist.
    ///
    /// A replaced file keeps its permissions; a new file gets the same mode a
    /// plain `File::create` would (0666 minus the umask on Unix).
    pub fn write<P: AsRef<Path>>(path: P, package: &OpcPackage) -> Result<()> {
        let path = path.as_ref();
        let bytes = Self::to_bytes(package)?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let existing = std::fs::metadata(path).ok().map(|meta| meta.permissions());

        let mut builder = tempfile::Builder::new();
        builder.prefix(".deckwright-").suffix(".tmp");
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(std::fs::Permissions::from_mode(0o666));
        }

        let mut tmp = builder.tempfile_in(dir)?;
        tmp.write_all(&bytes)?;
        tmp.as_file().sync_all()?;
        if let Some(permissions) = existing {
            tmp.as_file().set_permissions(permissions)?;
        }
        tmp.persist(path).map_err(|e| e.error)?;

        log::debug!("committed {} bytes to {}", bytes.len(), path.display());
        Ok(())
    }

    /// Serialize an OPC package to zip bytes.
    pub fn to_bytes(package: &OpcPackage) -> Result<Vec<u8>> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options =
            SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        // [Content_Types].xml comes first by convention
        let cti = ContentTypesItem::from_package(package);
        let content_types_uri = PackURI::new(CONTENT_TYPES_URI)?;
        Self::write_member(&mut zip, options, &content_types_uri, cti.to_xml().as_bytes())?;

        let rels_uri = PackURI::new(PACKAGE_URI)?.rels_uri()?;
        Self::write_member(&mut zip, options, &rels_uri, package.rels().to_xml().as_bytes())?;

        for part in package.iter_parts() {
            Self::write_member(&mut zip, options, part.partname(), part.blob())?;

            if !part.rels().is_empty() {
                let rels_uri = part.partname().rels_uri()?;
                Self::write_member(&mut zip, options, &rels_uri, part.rels().to_xml().as_bytes())?;
            }
        }

        Ok(zip.finish()?.into_inner())
    }

    fn write_member(
        zip: &mut ZipWriter<Cursor<Vec<u8>>>,
        options: SimpleFileOptions,
        uri: &PackURI,
        blob: &[u8],
    ) -> Result<()> {
        log::trace!("zip member {} ({} bytes)", uri.membername(), blob.len());
        zip.start_file(uri.membername(), options)?;
        zip.write_all(blob)?;
        Ok(())
    }
}

/// Helper for building [Content_Types].xml content.
///
/// Manages Default and Override elements for content type mapping.
struct ContentTypesItem {
    /// Default content types by extension
    defaults: BTreeMap<String, String>,

    /// Override content types by partname
    overrides: BTreeMap<String, String>,
}

impl ContentTypesItem {
    fn new() -> Self {
        let mut defaults = BTreeMap::new();
        defaults.insert("rels".to_string(), ct::OPC_RELATIONSHIPS.to_string());
        defaults.insert("xml".to_string(), ct::XML.to_string());

        Self {
            defaults,
            overrides: BTreeMap::new(),
        }
    }

    fn from_package(package: &OpcPackage) -> Self {
        let mut cti = Self::new();
        for part in package.iter_parts() {
            cti.add_content_type(part.partname(), part.content_type());
        }
        cti
    }

    /// Use a Default entry for well-known extension/type pairs, an Override otherwise.
    fn add_content_type(&mut self, partname: &PackURI, content_type: &str) {
        let ext = partname.ext();
        if matches!((ext, content_type), ("rels", ct::OPC_RELATIONSHIPS) | ("xml", ct::XML)) {
            self.defaults
                .insert(ext.to_string(), content_type.to_string());
        } else {
            self.overrides
                .insert(partname.to_string(), content_type.to_string());
        }
    }

    fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(2048);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(&format!(r#"<Types xmlns="{}">"#, namespace::OPC_CONTENT_TYPES));

        for (ext, content_type) in &self.defaults {
            xml.push_str(&format!(
                r#"<Default Extension="{}" ContentType="{}"/>"#,
                ext, content_type
            ));
        }
        for (partname, content_type) in &self.overrides {
            xml.push_str(&format!(
                r#"<Override PartName="{}" ContentType="{}"/>"#,
                partname, content_type
            ));
        }

        xml.push_str("</Types>");
        xml
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn sample_package() -> OpcPackage {
        let mut pkg = OpcPackage::new();
        let pres = PackURI::new("/ppt/presentation.xml").unwrap();
        pkg.relate_to(
            &pres,
            crate::ooxml::opc::constants::relationship_type::OFFICE_DOCUMENT,
        );
        pkg.add_part(pres, ct::PML_PRESENTATION_MAIN, b"<p:presentation/>".to_vec())
            .unwrap();
        pkg
    }

    #[test]
    fn test_content_types_xml() {
        let cti = ContentTypesItem::from_package(&sample_package());
        let xml = cti.to_xml();

        assert!(xml.contains(r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#));
        assert!(xml.contains(r#"<Override PartName="/ppt/presentation.xml""#));
    }

    #[test]
    fn test_to_bytes_members() {
        let bytes = PackageWriter::to_bytes(&sample_package()).unwrap();
        assert_eq!(&bytes[0..4], &[0x50, 0x4B, 0x03, 0x04]);

        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 3);
        assert_eq!(archive.by_index(0).unwrap().name(), "[Content_Types].xml");

        let mut rels = String::new();
        archive
            .by_name("_rels/.rels")
            .unwrap()
            .read_to_string(&mut rels)
            .unwrap();
        assert!(rels.contains(r#"Target="ppt/presentation.xml""#));
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.pptx");
        std::fs::write(&path, b"stale").unwrap();

        PackageWriter::write(&path, &sample_package()).unwrap();

        let written = std::fs::read(&path).unwrap();
        assert_eq!(&written[0..2], b"PK");
        // Only the committed file remains in the directory
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_write_keeps_existing_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        for mode in [0o644, 0o640] {
            let path = dir.path().join(format!("deck-{:o}.pptx", mode));
            std::fs::write(&path, b"stale").unwrap();
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(mode)).unwrap();

            PackageWriter::write(&path, &sample_package()).unwrap();

            let after = std::fs::metadata(&path).unwrap().permissions().mode() & 0o777;
            assert_eq!(after, mode);
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_new_file_gets_default_create_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let reference = dir.path().join("reference");
        std::fs::write(&reference, b"").unwrap();
        let path = dir.path().join("deck.pptx");

        PackageWriter::write(&path, &sample_package()).unwrap();

        let mode = |p: &Path| std::fs::metadata(p).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode(&path), mode(&reference));
    }

    #[cfg(unix)]
    #[test]
    fn test_write_read_only_directory_fails_cleanly() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let locked = dir.path().join("locked");
        std::fs::create_dir(&locked).unwrap();
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o555)).unwrap();

        // Permission bits do not bind a privileged user
        if std::fs::write(locked.join("check"), b"").is_ok() {
            std::fs::remove_file(locked.join("check")).unwrap();
            return;
        }

        let path = locked.join("deck.pptx");
        let err = PackageWriter::write(&path, &sample_package()).unwrap_err();
        assert!(matches!(err, crate::ooxml::opc::error::OpcError::IoError(_)));
        assert!(!path.exists());
        assert_eq!(std::fs::read_dir(&locked).unwrap().count(), 0);

        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[test]
    fn test_write_missing_directory_fails_cleanly() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("deck.pptx");

        let err = PackageWriter::write(&path, &sample_package()).unwrap_err();
        assert!(matches!(err, crate::ooxml::opc::error::OpcError::IoError(_)));
        assert!(!path.exists());
    }
}
