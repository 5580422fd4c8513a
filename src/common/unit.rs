//! Unit conversion utilities.
//!
//! Geometry is configured in inches and points; the package format stores
//! English Metric Units (EMU).

pub const EMUS_PER_INCH: i64 = 914_400;

/// Font sizes in DrawingML runs are expressed in hundredths of a point.
pub const FONT_SIZE_SCALE: u32 = 100;

#[inline]
pub fn inches_to_emu(inches: f64) -> i64 {
    (inches * EMUS_PER_INCH as f64).round() as i64
}

/// Like [`inches_to_emu`], but `None` for NaN, infinities and values whose
/// EMU count does not fit in an `i64`.
pub fn checked_inches_to_emu(inches: f64) -> Option<i64> {
    let emu = (inches * EMUS_PER_INCH as f64).round();
    // i64::MAX as f64 rounds up to 2^63, which is itself out of range
    if emu.is_finite() && emu >= i64::MIN as f64 && emu < i64::MAX as f64 {
        Some(emu as i64)
    } else {
        None
    }
}

#[inline]
pub fn pt_to_font_size(pt: u32) -> u32 {
    pt.saturating_mul(FONT_SIZE_SCALE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_canvas_width() {
        // 13 1/3 inches is exactly the widescreen width
        assert_eq!(inches_to_emu(40.0 / 3.0), 12_192_000);
        assert_eq!(inches_to_emu(7.5), 6_858_000);
    }

    #[test]
    fn test_checked_conversion() {
        assert_eq!(checked_inches_to_emu(0.6), Some(548_640));
        assert_eq!(checked_inches_to_emu(-1.0), Some(-914_400));
        assert_eq!(checked_inches_to_emu(f64::NAN), None);
        assert_eq!(checked_inches_to_emu(f64::INFINITY), None);
        assert_eq!(checked_inches_to_emu(f64::NEG_INFINITY), None);
        assert_eq!(checked_inches_to_emu(1.0e14), None);
    }

    #[test]
    fn test_font_size_scale() {
        assert_eq!(pt_to_font_size(40), 4000);
    }
}
