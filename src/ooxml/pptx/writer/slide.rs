/// Slide part XML.
use super::shape::write_text_region;
use crate::common::Result;
use crate::deck::model::{Slide, SlideKind};
use crate::ooxml::opc::constants::namespace;
use std::fmt::Write as FmtWrite;

/// Part name of the slide layout a slide of `kind` is based on.
pub(crate) fn layout_partname(kind: SlideKind) -> &'static str {
    match kind {
        SlideKind::Title => "/ppt/slideLayouts/slideLayout1.xml",
        SlideKind::Bullets => "/ppt/slideLayouts/slideLayout2.xml",
    }
}

/// Generate the `p:sld` XML for one slide.
///
/// Regions are written in order as text boxes, shape ids starting at 2
/// (id 1 is the shape tree itself).
pub(crate) fn slide_xml(slide: &Slide, lang: &str) -> Result<String> {
    let mut xml = String::with_capacity(1024 + slide.region_count() * 768);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push('\n');
    write!(
        xml,
        r#"<p:sld xmlns:a="{}" xmlns:p="{}" xmlns:r="{}">"#,
        namespace::DML_MAIN,
        namespace::PML_MAIN,
        namespace::OFC_RELATIONSHIPS
    )?;

    xml.push_str("<p:cSld>");
    xml.push_str("<p:spTree>");

    // Group shape properties (required)
    xml.push_str("<p:nvGrpSpPr>");
    xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
    xml.push_str("<p:cNvGrpSpPr/>");
    xml.push_str("<p:nvPr/>");
    xml.push_str("</p:nvGrpSpPr>");
    xml.push_str("<p:grpSpPr>");
    xml.push_str("<a:xfrm>");
    xml.push_str(r#"<a:off x="0" y="0"/>"#);
    xml.push_str(r#"<a:ext cx="0" cy="0"/>"#);
    xml.push_str(r#"<a:chOff x="0" y="0"/>"#);
    xml.push_str(r#"<a:chExt cx="0" cy="0"/>"#);
    xml.push_str("</a:xfrm>");
    xml.push_str("</p:grpSpPr>");

    let names = slide.kind().region_names();
    for ((name, region), shape_id) in names.iter().zip(slide.regions()).zip(2..) {
        write_text_region(&mut xml, shape_id, name, region, lang)?;
    }

    xml.push_str("</p:spTree>");
    xml.push_str("</p:cSld>");
    xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
    xml.push_str("</p:sld>");

    Ok(xml)
}
