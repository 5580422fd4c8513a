//! Layout geometry for the two slide archetypes.
//!
//! All placement is configuration: template functions read region presets from
//! a [`Layout`] value and never carry coordinates of their own. Coordinates are
//! in inches, font sizes in points.

use crate::common::unit::{checked_inches_to_emu, inches_to_emu};
use crate::common::{Error, Result};
use crate::deck::model::{Frame, VerticalAlign};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Slide canvas size in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Canvas {
    /// Widescreen 16:9 canvas, 13 1/3 × 7.5 inches.
    pub const WIDE: Canvas = Canvas {
        width: 40.0 / 3.0,
        height: 7.5,
    };

    /// Canvas width in EMU.
    pub fn width_emu(&self) -> i64 {
        inches_to_emu(self.width)
    }

    /// Canvas height in EMU.
    pub fn height_emu(&self) -> i64 {
        inches_to_emu(self.height)
    }

    /// Width and height in EMU, or `None` unless both are finite and positive.
    pub fn checked_size_emu(&self) -> Option<(i64, i64)> {
        let width = checked_inches_to_emu(self.width)?;
        let height = checked_inches_to_emu(self.height)?;
        (width > 0 && height > 0).then_some((width, height))
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::WIDE
    }
}

/// Placement and styling preset for one text region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionSpec {
    /// Left offset in inches
    pub x: f64,
    /// Top offset in inches
    pub y: f64,
    /// Width in inches
    pub w: f64,
    /// Height in inches
    pub h: f64,
    /// Font size in points
    pub font_size: u32,
    #[serde(default)]
    pub bold: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valign: Option<VerticalAlign>,
}

impl RegionSpec {
    pub const fn new(x: f64, y: f64, w: f64, h: f64, font_size: u32) -> Self {
        Self {
            x,
            y,
            w,
            h,
            font_size,
            bold: false,
            valign: None,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn valign(mut self, valign: VerticalAlign) -> Self {
        self.valign = Some(valign);
        self
    }

    /// The preset's frame in EMU.
    ///
    /// NaN, infinite and out-of-range values fail with a validation error
    /// naming `region`; they are never clamped.
    pub fn frame(&self, region: &str) -> Result<Frame> {
        let emu = |field: &str, inches: f64| {
            checked_inches_to_emu(inches).ok_or_else(|| {
                Error::validation(region, format!("{} = {} is not a usable length", field, inches))
            })
        };
        Ok(Frame {
            x: emu("x", self.x)?,
            y: emu("y", self.y)?,
            width: emu("w", self.w)?,
            height: emu("h", self.h)?,
        })
    }
}

/// Named region presets used by the title and bulleted-content templates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    #[serde(default)]
    pub canvas: Canvas,
    /// Title slide: main title
    pub title: RegionSpec,
    /// Title slide: subtitle under the title
    pub subtitle: RegionSpec,
    /// Title slide: footer label
    pub footer: RegionSpec,
    /// Content slide: heading
    pub heading: RegionSpec,
    /// Content slide: bulleted body
    pub body: RegionSpec,
}

impl Layout {
    /// The fixed widescreen presets.
    pub fn wide() -> Self {
        Self {
            canvas: Canvas::WIDE,
            title: RegionSpec::new(0.6, 1.2, 12.2, 0.8, 40).bold(),
            subtitle: RegionSpec::new(0.6, 2.3, 12.2, 0.6, 20),
            footer: RegionSpec::new(0.6, 6.6, 12.2, 0.4, 14),
            heading: RegionSpec::new(0.6, 0.5, 12.2, 0.6, 28).bold(),
            body: RegionSpec::new(0.9, 1.4, 12.0, 5.8, 18).valign(VerticalAlign::Top),
        }
    }

    /// Parse a layout from YAML.
    ///
    /// ```
    /// use deckwright::layout::Layout;
    ///
    /// let yaml = r#"
    /// title:    { x: 0.5, y: 1.0, w: 9.0, h: 1.0, font_size: 36, bold: true }
    /// subtitle: { x: 0.5, y: 2.2, w: 9.0, h: 0.6, font_size: 18 }
    /// footer:   { x: 0.5, y: 6.8, w: 9.0, h: 0.4, font_size: 12 }
    /// heading:  { x: 0.5, y: 0.4, w: 9.0, h: 0.6, font_size: 24, bold: true }
    /// body:     { x: 0.5, y: 1.2, w: 9.0, h: 5.0, font_size: 16, valign: top }
    /// "#;
    /// let layout = Layout::from_yaml_str(yaml)?;
    /// assert_eq!(layout.title.font_size, 36);
    /// # Ok::<(), deckwright::Error>(())
    /// ```
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_saphyr::from_str(yaml).map_err(|e| Error::Config(e.to_string()))
    }

    /// Load a layout from a YAML file.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::wide()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_canvas_emu() {
        let canvas = Canvas::WIDE;
        assert_eq!(canvas.width_emu(), 12_192_000);
        assert_eq!(canvas.height_emu(), 6_858_000);
    }

    #[test]
    fn test_wide_presets_fit_canvas() {
        let layout = Layout::wide();
        let (cw, ch) = (layout.canvas.width_emu(), layout.canvas.height_emu());
        for spec in [
            &layout.title,
            &layout.subtitle,
            &layout.footer,
            &layout.heading,
            &layout.body,
        ] {
            let frame = spec.frame("preset").unwrap();
            assert!(frame.x + frame.width <= cw);
            assert!(frame.y + frame.height <= ch);
        }
    }

    #[test]
    fn test_body_is_top_aligned() {
        let layout = Layout::wide();
        assert_eq!(layout.body.valign, Some(VerticalAlign::Top));
        assert!(layout.title.bold);
        assert!(layout.heading.bold);
        assert!(!layout.subtitle.bold);
    }

    #[test]
    fn test_yaml_defaults_canvas() {
        let yaml = "
title:    { x: 0.6, y: 1.2, w: 12.2, h: 0.8, font_size: 40, bold: true }
subtitle: { x: 0.6, y: 2.3, w: 12.2, h: 0.6, font_size: 20 }
footer:   { x: 0.6, y: 6.6, w: 12.2, h: 0.4, font_size: 14 }
heading:  { x: 0.6, y: 0.5, w: 12.2, h: 0.6, font_size: 28, bold: true }
body:     { x: 0.9, y: 1.4, w: 12.0, h: 5.8, font_size: 18, valign: top }
";
        let layout = Layout::from_yaml_str(yaml).unwrap();
        assert_eq!(layout, Layout::wide());
    }

    #[test]
    fn test_frame_rejects_unusable_lengths() {
        for x in [1.0e14, f64::INFINITY, f64::NAN] {
            let spec = RegionSpec::new(x, 1.0, 1.0, 1.0, 12);
            let err = spec.frame("title").unwrap_err();
            assert!(matches!(err, Error::Validation { ref region, .. } if region == "title"));
        }
    }

    #[test]
    fn test_canvas_size_must_be_finite_and_positive() {
        assert_eq!(
            Canvas::WIDE.checked_size_emu(),
            Some((12_192_000, 6_858_000))
        );
        for (width, height) in [(f64::NAN, 7.5), (13.0, f64::INFINITY), (0.0, 7.5), (13.0, -1.0)] {
            assert_eq!(Canvas { width, height }.checked_size_emu(), None);
        }
    }

    #[test]
    fn test_yaml_missing_region_is_config_error() {
        let err = Layout::from_yaml_str("title: { x: 1.0 }").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_yaml_file_missing_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Layout::from_yaml_file(dir.path().join("layout.yaml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
