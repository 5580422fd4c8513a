/// The two slide archetypes: title slide and bulleted-content slide.
use crate::common::Result;
use crate::deck::model::{Slide, SlideKind, TextRegion};
use crate::layout::{Layout, RegionSpec};

/// Label rendered in the footer of every title slide.
pub const FOOTER_LABEL: &str = "Cloud.ru — AI-агент для поиска и анализа статей (MVP)";

/// Prefix put in front of every bullet item.
pub const BULLET_MARKER: &str = "• ";

/// Slide builders bound to a layout.
///
/// Each function returns a fresh [`Slide`]; appending it to a deck is the
/// caller's business (see [`DeckBuilder`](crate::deck::DeckBuilder)).
#[derive(Debug, Clone, Default)]
pub struct Templates {
    layout: Layout,
}

impl Templates {
    pub fn new(layout: Layout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Build a title slide: title, subtitle and the fixed footer label.
    ///
    /// Empty strings are legal and render as blank regions.
    pub fn title_slide(&self, title: &str, subtitle: &str) -> Result<Slide> {
        let regions = vec![
            self.region("title", &self.layout.title, title)?,
            self.region("subtitle", &self.layout.subtitle, subtitle)?,
            self.region("footer", &self.layout.footer, FOOTER_LABEL)?,
        ];
        Slide::new(SlideKind::Title, regions)
    }

    /// Build a content slide: a heading and one body region listing `items`.
    ///
    /// Items are prefixed with [`BULLET_MARKER`] and separated by line breaks,
    /// in order. No items gives an empty body.
    pub fn bullets_slide<S: AsRef<str>>(&self, heading: &str, items: &[S]) -> Result<Slide> {
        let regions = vec![
            self.region("heading", &self.layout.heading, heading)?,
            self.region("body", &self.layout.body, &bullet_text(items))?,
        ];
        Slide::new(SlideKind::Bullets, regions)
    }

    fn region(&self, name: &str, spec: &RegionSpec, content: &str) -> Result<TextRegion> {
        TextRegion::new(
            name,
            content,
            spec.frame(name)?,
            spec.font_size,
            spec.bold,
            spec.valign,
            &self.layout.canvas,
        )
    }
}

/// Join items into bulleted lines.
pub fn bullet_text<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|item| format!("{BULLET_MARKER}{}", item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Error;
    use crate::deck::model::VerticalAlign;
    use proptest::prelude::*;

    #[test]
    fn test_title_slide_regions() {
        let templates = Templates::default();
        let slide = templates.title_slide("Tech Media RAG MVP", "Subtitle").unwrap();

        assert_eq!(slide.kind(), SlideKind::Title);
        assert_eq!(slide.region_count(), 3);
        assert_eq!(slide.heading().content(), "Tech Media RAG MVP");
        assert!(slide.heading().is_bold());
        assert_eq!(slide.heading().font_size(), 40);
        assert_eq!(slide.regions()[1].font_size(), 20);
        assert_eq!(slide.regions()[2].content(), FOOTER_LABEL);
    }

    #[test]
    fn test_title_slide_accepts_empty_strings() {
        let slide = Templates::default().title_slide("", "").unwrap();
        assert_eq!(slide.regions()[0].content(), "");
        assert_eq!(slide.regions()[1].content(), "");
    }

    #[test]
    fn test_bullets_slide_body() {
        let slide = Templates::default()
            .bullets_slide("Architecture", &["bot", "rag", "indexer"])
            .unwrap();

        assert_eq!(slide.kind(), SlideKind::Bullets);
        assert_eq!(slide.region_count(), 2);
        let body = &slide.regions()[1];
        assert_eq!(body.content(), "• bot\n• rag\n• indexer");
        assert_eq!(body.vertical_align(), Some(VerticalAlign::Top));
        assert!(!body.is_bold());
    }

    #[test]
    fn test_bullets_slide_empty_items() {
        let slide = Templates::default().bullets_slide::<&str>("H", &[]).unwrap();
        assert_eq!(slide.regions()[1].content(), "");
    }

    #[test]
    fn test_out_of_bounds_layout_fails_at_construction() {
        let mut layout = Layout::wide();
        layout.body.h = 7.0;
        let err = Templates::new(layout).bullets_slide("H", &["a"]).unwrap_err();
        assert!(matches!(err, Error::Validation { ref region, .. } if region == "body"));
    }

    #[test]
    fn test_unusable_lengths_fail_at_construction() {
        for x in [1.0e14, f64::INFINITY, f64::NAN] {
            let mut layout = Layout::wide();
            layout.title.x = x;
            let err = Templates::new(layout).title_slide("T", "S").unwrap_err();
            assert!(matches!(err, Error::Validation { ref region, .. } if region == "title"));
        }
    }

    #[test]
    fn test_huge_yaml_offset_is_rejected_not_saturated() {
        let mut yaml = String::from("title: { x: 1.0e14, y: 1.2, w: 12.2, h: 0.8, font_size: 40, bold: true }\n");
        yaml.push_str("subtitle: { x: 0.6, y: 2.3, w: 12.2, h: 0.6, font_size: 20 }\n");
        yaml.push_str("footer: { x: 0.6, y: 6.6, w: 12.2, h: 0.4, font_size: 14 }\n");
        yaml.push_str("heading: { x: 0.6, y: 0.5, w: 12.2, h: 0.6, font_size: 28, bold: true }\n");
        yaml.push_str("body: { x: 0.9, y: 1.4, w: 12.0, h: 5.8, font_size: 18, valign: top }\n");
        let layout = Layout::from_yaml_str(&yaml).unwrap();

        let err = Templates::new(layout).title_slide("T", "S").unwrap_err();
        assert_eq!(err.stage(), crate::common::Stage::Construction);
    }

    #[test]
    fn test_offset_plus_width_overflow_is_rejected() {
        let mut layout = Layout::wide();
        // Each length converts, but their EMU sum does not fit in i64
        layout.body.x = 9.0e12;
        layout.body.w = 9.0e12;
        let err = Templates::new(layout).bullets_slide("H", &["a"]).unwrap_err();
        assert!(matches!(err, Error::Validation { ref region, .. } if region == "body"));
    }

    #[test]
    fn test_zero_font_layout_fails_at_construction() {
        let mut layout = Layout::wide();
        layout.footer.font_size = 0;
        let err = Templates::new(layout).title_slide("T", "S").unwrap_err();
        assert!(matches!(err, Error::Validation { ref region, .. } if region == "footer"));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_title_slide_has_three_regions(title in "\\PC{0,40}", subtitle in "\\PC{0,60}") {
            let slide = Templates::default().title_slide(&title, &subtitle).unwrap();
            prop_assert_eq!(slide.region_count(), 3);
            prop_assert_eq!(slide.regions()[0].content(), title.as_str());
            prop_assert_eq!(slide.regions()[1].content(), subtitle.as_str());
        }

        #[test]
        fn prop_bullets_keep_order_and_marker(
            heading in "\\PC{0,30}",
            items in prop::collection::vec("\\PC{0,30}", 0..8),
        ) {
            let slide = Templates::default().bullets_slide(&heading, &items).unwrap();
            prop_assert_eq!(slide.region_count(), 2);

            let body = slide.regions()[1].content();
            if items.is_empty() {
                prop_assert_eq!(body, "");
            } else {
                let lines: Vec<&str> = body.split('\n').collect();
                prop_assert_eq!(lines.len(), items.len());
                for (line, item) in lines.iter().zip(&items) {
                    prop_assert_eq!(*line, format!("{BULLET_MARKER}{item}"));
                }
            }
        }

        #[test]
        fn prop_bullets_slide_is_deterministic(
            heading in "\\PC{0,20}",
            items in prop::collection::vec("\\PC{0,20}", 0..5),
        ) {
            let templates = Templates::default();
            let first = templates.bullets_slide(&heading, &items).unwrap();
            let second = templates.bullets_slide(&heading, &items).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
