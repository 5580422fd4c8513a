/// Text box XML for a single text region.
use crate::common::Result;
use crate::common::unit::pt_to_font_size;
use crate::common::xml::{escape_xml, strip_invalid_xml_chars};
use crate::deck::model::TextRegion;
use std::fmt::Write as FmtWrite;

/// Append a `<p:sp>` text box for `region` to `xml`.
///
/// Each line of the region's content becomes its own paragraph. Empty lines
/// keep their run properties through `<a:endParaRPr>` so blank paragraphs
/// still take the region's font size.
pub(crate) fn write_text_region(
    xml: &mut String,
    shape_id: u32,
    name: &str,
    region: &TextRegion,
    lang: &str,
) -> Result<()> {
    let frame = region.frame();
    let lang = escape_xml(&strip_invalid_xml_chars(lang));

    xml.push_str("<p:sp>");
    xml.push_str("<p:nvSpPr>");
    write!(
        xml,
        r#"<p:cNvPr id="{}" name="{} {}"/>"#,
        shape_id,
        escape_xml(name),
        shape_id
    )?;
    xml.push_str(r#"<p:cNvSpPr txBox="1"/>"#);
    xml.push_str("<p:nvPr/>");
    xml.push_str("</p:nvSpPr>");

    xml.push_str("<p:spPr>");
    xml.push_str("<a:xfrm>");
    write!(xml, r#"<a:off x="{}" y="{}"/>"#, frame.x, frame.y)?;
    write!(xml, r#"<a:ext cx="{}" cy="{}"/>"#, frame.width, frame.height)?;
    xml.push_str("</a:xfrm>");
    xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
    xml.push_str("<a:noFill/>");
    xml.push_str("</p:spPr>");

    xml.push_str("<p:txBody>");
    xml.push_str(r#"<a:bodyPr wrap="square" rtlCol="0""#);
    if let Some(valign) = region.vertical_align() {
        write!(xml, r#" anchor="{}""#, valign.anchor())?;
    }
    xml.push_str("><a:noAutofit/></a:bodyPr>");
    xml.push_str("<a:lstStyle/>");

    let mut run_props = format!(
        r#"lang="{}" sz="{}""#,
        lang,
        pt_to_font_size(region.font_size())
    );
    if region.is_bold() {
        run_props.push_str(r#" b="1""#);
    }
    run_props.push_str(r#" dirty="0""#);

    for line in region.lines() {
        xml.push_str("<a:p>");
        if line.is_empty() {
            write!(xml, "<a:endParaRPr {}/>", run_props)?;
        } else {
            write!(
                xml,
                "<a:r><a:rPr {}/><a:t>{}</a:t></a:r>",
                run_props,
                escape_xml(line)
            )?;
        }
        xml.push_str("</a:p>");
    }

    xml.push_str("</p:txBody>");
    xml.push_str("</p:sp>");

    Ok(())
}
