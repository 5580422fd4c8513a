/// Document property parts: `docProps/core.xml` and `docProps/app.xml`.
use crate::common::Result;
use crate::common::xml::{escape_xml, strip_invalid_xml_chars};
use crate::deck::Deck;
use crate::layout::Canvas;
use chrono::{DateTime, Utc};
use std::fmt::Write as FmtWrite;

const W3CDTF: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Metadata is free text; characters XML cannot hold are dropped.
fn text(s: &str) -> String {
    escape_xml(&strip_invalid_xml_chars(s))
}

/// Generate core properties XML (Dublin Core).
pub(crate) fn core_xml(deck: &Deck) -> Result<String> {
    let metadata = deck.metadata();
    let mut xml = String::with_capacity(1024);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push('\n');
    xml.push_str(r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" "#);
    xml.push_str(r#"xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" "#);
    xml.push_str(r#"xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#);

    if let Some(title) = &metadata.title {
        write!(xml, "<dc:title>{}</dc:title>", text(title))?;
    }
    if let Some(subject) = &metadata.subject {
        write!(xml, "<dc:subject>{}</dc:subject>", text(subject))?;
    }
    if let Some(author) = &metadata.author {
        let author = text(author);
        write!(xml, "<dc:creator>{}</dc:creator>", author)?;
        write!(xml, "<cp:lastModifiedBy>{}</cp:lastModifiedBy>", author)?;
    }
    if let Some(revision) = metadata.revision {
        write!(xml, "<cp:revision>{}</cp:revision>", revision)?;
    }
    if let Some(created) = metadata.created {
        write_timestamp(&mut xml, "dcterms:created", created)?;
    }
    if let Some(modified) = metadata.modified_or_created() {
        write_timestamp(&mut xml, "dcterms:modified", modified)?;
    }

    xml.push_str("</cp:coreProperties>");
    Ok(xml)
}

fn write_timestamp(xml: &mut String, tag: &str, at: DateTime<Utc>) -> Result<()> {
    write!(
        xml,
        r#"<{tag} xsi:type="dcterms:W3CDTF">{}</{tag}>"#,
        at.format(W3CDTF)
    )?;
    Ok(())
}

/// Generate extended (application) properties XML.
pub(crate) fn app_xml(deck: &Deck) -> Result<String> {
    let metadata = deck.metadata();
    let format = if *deck.canvas() == Canvas::WIDE {
        "Widescreen"
    } else {
        "Custom"
    };

    let mut xml = String::with_capacity(512);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push('\n');
    xml.push_str(r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" "#);
    xml.push_str(r#"xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#);
    write!(
        xml,
        "<Application>{}</Application>",
        text(metadata.application_name())
    )?;
    write!(xml, "<PresentationFormat>{}</PresentationFormat>", format)?;
    write!(xml, "<Slides>{}</Slides>", deck.len())?;
    if let Some(company) = &metadata.company {
        write!(xml, "<Company>{}</Company>", text(company))?;
    }
    xml.push_str("</Properties>");
    Ok(xml)
}
