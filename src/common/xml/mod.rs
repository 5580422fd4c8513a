//! XML text helpers shared by the package writer and reader.

mod escape;

pub use escape::{escape_xml, is_xml_char, strip_invalid_xml_chars, unescape_xml};
