/// Presentation writer: turns a [`Deck`] into a PresentationML package.
use super::props::{app_xml, core_xml};
use super::slide::{layout_partname, slide_xml};
use crate::common::Result;
use crate::deck::{Deck, SlideKind};
use crate::ooxml::opc::constants::{content_type as ct, namespace, relationship_type as rt};
use crate::ooxml::opc::pkgwriter::PackageWriter;
use crate::ooxml::opc::{OpcPackage, PackURI};
use crate::ooxml::pptx::template;
use std::fmt::Write as FmtWrite;
use std::path::Path;

const PRESENTATION: &str = "/ppt/presentation.xml";
const CORE_PROPS: &str = "/docProps/core.xml";
const APP_PROPS: &str = "/docProps/app.xml";
const SLIDE_MASTER: &str = "/ppt/slideMasters/slideMaster1.xml";
const THEME: &str = "/ppt/theme/theme1.xml";
const PRES_PROPS: &str = "/ppt/presProps.xml";
const VIEW_PROPS: &str = "/ppt/viewProps.xml";
const TABLE_STYLES: &str = "/ppt/tableStyles.xml";

/// First id handed out in `p:sldIdLst`; lower values are reserved.
const FIRST_SLIDE_ID: u32 = 256;

/// Id of the single slide master in `p:sldMasterIdLst`.
const SLIDE_MASTER_ID: u32 = 2_147_483_648;

/// Writes a deck as a `.pptx` package.
///
/// The writer only reads the deck; it can be run any number of times and
/// always produces the same parts.
#[derive(Debug, Clone, Copy)]
pub struct PresentationWriter<'a> {
    deck: &'a Deck,
}

impl<'a> PresentationWriter<'a> {
    pub fn new(deck: &'a Deck) -> Self {
        Self { deck }
    }

    /// Write the package to `path`.
    ///
    /// The file is committed atomically; an existing file is replaced. The
    /// parent directory is not created.
    pub fn save(&self, path: &Path) -> Result<()> {
        let package = self.to_package()?;
        PackageWriter::write(path, &package)?;
        Ok(())
    }

    /// Serialize the package to bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let package = self.to_package()?;
        Ok(PackageWriter::to_bytes(&package)?)
    }

    /// Assemble every part of the package in memory.
    pub fn to_package(&self) -> Result<OpcPackage> {
        let deck = self.deck;
        let lang = deck.metadata().language_tag();
        let mut pkg = OpcPackage::new();

        let pres_uri = PackURI::new(PRESENTATION)?;
        let core_uri = PackURI::new(CORE_PROPS)?;
        let app_uri = PackURI::new(APP_PROPS)?;
        let master_uri = PackURI::new(SLIDE_MASTER)?;
        let theme_uri = PackURI::new(THEME)?;
        let pres_props_uri = PackURI::new(PRES_PROPS)?;
        let view_props_uri = PackURI::new(VIEW_PROPS)?;
        let table_styles_uri = PackURI::new(TABLE_STYLES)?;
        let title_layout_uri = PackURI::new(layout_partname(SlideKind::Title))?;
        let content_layout_uri = PackURI::new(layout_partname(SlideKind::Bullets))?;
        let slide_uris = (1..=deck.len())
            .map(|n| PackURI::new(format!("/ppt/slides/slide{}.xml", n)))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        pkg.relate_to(&pres_uri, rt::OFFICE_DOCUMENT);
        pkg.relate_to(&core_uri, rt::CORE_PROPERTIES);
        pkg.relate_to(&app_uri, rt::EXTENDED_PROPERTIES);

        // The presentation part references its own rIds, so relate first and
        // fill in the XML afterwards.
        let pres_part = pkg.add_part(pres_uri, ct::PML_PRESENTATION_MAIN, Vec::new())?;
        let master_rid = pres_part.relate_to(&master_uri, rt::SLIDE_MASTER);
        let slide_rids: Vec<String> = slide_uris
            .iter()
            .map(|uri| pres_part.relate_to(uri, rt::SLIDE))
            .collect();
        pres_part.relate_to(&pres_props_uri, rt::PRES_PROPS);
        pres_part.relate_to(&view_props_uri, rt::VIEW_PROPS);
        pres_part.relate_to(&theme_uri, rt::THEME);
        pres_part.relate_to(&table_styles_uri, rt::TABLE_STYLES);
        pres_part.set_blob(self.presentation_xml(&master_rid, &slide_rids)?.into_bytes());

        pkg.add_part(core_uri, ct::OPC_CORE_PROPERTIES, core_xml(deck)?.into_bytes())?;
        pkg.add_part(app_uri, ct::OFC_EXTENDED_PROPERTIES, app_xml(deck)?.into_bytes())?;

        // Master relationship order must match the rIds in its sldLayoutIdLst
        let master = pkg.add_part(
            master_uri.clone(),
            ct::PML_SLIDE_MASTER,
            template::slide_master_xml().as_bytes().to_vec(),
        )?;
        master.relate_to(&title_layout_uri, rt::SLIDE_LAYOUT);
        master.relate_to(&content_layout_uri, rt::SLIDE_LAYOUT);
        master.relate_to(&theme_uri, rt::THEME);

        for (uri, xml) in [
            (&title_layout_uri, template::title_layout_xml()),
            (&content_layout_uri, template::content_layout_xml()),
        ] {
            pkg.add_part(uri.clone(), ct::PML_SLIDE_LAYOUT, xml.as_bytes().to_vec())?
                .relate_to(&master_uri, rt::SLIDE_MASTER);
        }

        pkg.add_part(theme_uri, ct::OFC_THEME, template::theme_xml().as_bytes().to_vec())?;
        pkg.add_part(
            pres_props_uri,
            ct::PML_PRES_PROPS,
            template::pres_props_xml().as_bytes().to_vec(),
        )?;
        pkg.add_part(
            view_props_uri,
            ct::PML_VIEW_PROPS,
            template::view_props_xml().as_bytes().to_vec(),
        )?;
        pkg.add_part(
            table_styles_uri,
            ct::PML_TABLE_STYLES,
            template::table_styles_xml().as_bytes().to_vec(),
        )?;

        for (slide, uri) in deck.slides().iter().zip(slide_uris) {
            let layout_uri = PackURI::new(layout_partname(slide.kind()))?;
            pkg.add_part(uri, ct::PML_SLIDE, slide_xml(slide, lang)?.into_bytes())?
                .relate_to(&layout_uri, rt::SLIDE_LAYOUT);
        }

        log::debug!(
            "assembled package: {} parts, {} slides",
            pkg.part_count(),
            deck.len()
        );
        Ok(pkg)
    }

    /// Generate presentation.xml content.
    fn presentation_xml(&self, master_rid: &str, slide_rids: &[String]) -> Result<String> {
        let canvas = self.deck.canvas();
        let mut xml = String::with_capacity(1024 + slide_rids.len() * 48);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        write!(
            xml,
            r#"<p:presentation xmlns:a="{}" xmlns:p="{}" xmlns:r="{}" saveSubsetFonts="1">"#,
            namespace::DML_MAIN,
            namespace::PML_MAIN,
            namespace::OFC_RELATIONSHIPS
        )?;

        xml.push_str("<p:sldMasterIdLst>");
        write!(
            xml,
            r#"<p:sldMasterId id="{}" r:id="{}"/>"#,
            SLIDE_MASTER_ID, master_rid
        )?;
        xml.push_str("</p:sldMasterIdLst>");

        if !slide_rids.is_empty() {
            xml.push_str("<p:sldIdLst>");
            for (index, rid) in slide_rids.iter().enumerate() {
                write!(
                    xml,
                    r#"<p:sldId id="{}" r:id="{}"/>"#,
                    FIRST_SLIDE_ID + index as u32,
                    rid
                )?;
            }
            xml.push_str("</p:sldIdLst>");
        }

        write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}"/>"#,
            canvas.width_emu(),
            canvas.height_emu()
        )?;
        xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
        xml.push_str("</p:presentation>");

        Ok(xml)
    }
}
