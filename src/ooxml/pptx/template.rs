//! Static parts of a presentation package.
//!
//! A deck only ever uses one master, one theme and two layouts, so these parts
//! are embedded verbatim; slides, `presentation.xml` and document properties
//! are generated per deck.

/// Master slide with the color map and the two layout ids.
///
/// Its relationships must list the title layout as `rId1`, the content layout
/// as `rId2` and the theme as `rId3`.
pub fn slide_master_xml() -> &'static str {
    include_str!("resources/slideMasters/slideMaster1.xml")
}

/// Layout used by title slides.
pub fn title_layout_xml() -> &'static str {
    include_str!("resources/slideLayouts/slideLayout1.xml")
}

/// Layout used by bulleted content slides.
pub fn content_layout_xml() -> &'static str {
    include_str!("resources/slideLayouts/slideLayout2.xml")
}

pub fn theme_xml() -> &'static str {
    include_str!("resources/theme/theme1.xml")
}

pub fn pres_props_xml() -> &'static str {
    include_str!("resources/presProps.xml")
}

pub fn view_props_xml() -> &'static str {
    include_str!("resources/viewProps.xml")
}

pub fn table_styles_xml() -> &'static str {
    include_str!("resources/tableStyles.xml")
}
