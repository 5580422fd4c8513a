use aho_corasick::{AhoCorasick, MatchKind};
use once_cell::sync::Lazy;
use std::borrow::Cow;

// Static initialization: automaton is built only once, thread-safe
static XML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">", "\"", "'"])
        .expect("static escape patterns are valid")
});

// LeftmostLongest so "&amp;lt;" decodes to "&lt;" rather than "<"
static XML_UNESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .match_kind(MatchKind::LeftmostLongest)
        .build(["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"])
        .expect("static unescape patterns are valid")
});

/// Escape XML special characters.
///
/// # Examples
///
/// ```
/// use deckwright::common::xml::escape_xml;
/// assert_eq!(escape_xml("Q&A"), "Q&amp;A");
/// assert_eq!(escape_xml("'RAG'"), "&apos;RAG&apos;");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    XML_ESCAPER.replace_all(s, &["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"])
}

/// Unescape the five predefined XML entities.
///
/// Unknown or malformed entities are left unchanged.
///
/// # Examples
///
/// ```
/// use deckwright::common::xml::unescape_xml;
/// assert_eq!(unescape_xml("&lt;p&gt;"), "<p>");
/// assert_eq!(unescape_xml("&amp;lt;"), "&lt;");
/// assert_eq!(unescape_xml("&nbsp;"), "&nbsp;");
/// ```
#[inline]
pub fn unescape_xml(s: &str) -> String {
    XML_UNESCAPER.replace_all(s, &["&", "<", ">", "\"", "'"])
}

/// Whether `c` matches the XML 1.0 `Char` production.
///
/// ```
/// use deckwright::common::xml::is_xml_char;
/// assert!(is_xml_char('\n'));
/// assert!(!is_xml_char('\u{1}'));
/// ```
#[inline]
pub fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\u{9}' | '\u{A}' | '\u{D}' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}'
    )
}

/// Drop characters XML 1.0 cannot represent.
pub fn strip_invalid_xml_chars(s: &str) -> Cow<'_, str> {
    if s.chars().all(is_xml_char) {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(s.chars().filter(|&c| is_xml_char(c)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xml_char_ranges() {
        for c in ['\t', '\n', '\r', ' ', 'Ж', '•', '\u{E000}', '\u{1F600}'] {
            assert!(is_xml_char(c), "{:?}", c);
        }
        for c in ['\u{0}', '\u{8}', '\u{B}', '\u{C}', '\u{1F}', '\u{FFFE}', '\u{FFFF}'] {
            assert!(!is_xml_char(c), "{:?}", c);
        }
    }

    #[test]
    fn test_strip_invalid_xml_chars() {
        assert!(matches!(strip_invalid_xml_chars("plain"), Cow::Borrowed("plain")));
        assert_eq!(strip_invalid_xml_chars("a\u{1}b\u{0}"), "ab");
    }

    #[test]
    fn test_escape_cyrillic_untouched() {
        let text = "Этичность и безопасность";
        assert_eq!(escape_xml(text), text);
    }

    #[test]
    fn test_escape_unescape_inverse() {
        let text = r#"Запрет на 'галлюцинации' & "шум" <n>"#;
        assert_eq!(unescape_xml(&escape_xml(text)), text);
    }
}
