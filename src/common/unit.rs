//! Unit conversion utilities.
//!
//! DrawingML positions and sizes are English Metric Units (EMU); run font
//! sizes are hundredths of a point.

pub const EMUS_PER_INCH: i64 = 914_400;
pub const EMUS_PER_PT: i64 = 12_700;
pub const CENTIPOINTS_PER_PT: f64 = 100.0;

#[inline]
pub fn inches_to_emu(inches: f64) -> i64 {
    (inches * EMUS_PER_INCH as f64).round() as i64
}

#[inline]
pub fn emu_to_inches(emu: i64) -> f64 {
    emu as f64 / EMUS_PER_INCH as f64
}

#[inline]
pub fn pt_to_emu_f64(pt: f64) -> i64 {
    (pt * EMUS_PER_PT as f64).round() as i64
}

#[inline]
pub fn emu_to_pt_f64(emu: i64) -> f64 {
    emu as f64 / EMUS_PER_PT as f64
}

/// Point size to the `sz` attribute of `a:rPr` (hundredths of a point).
#[inline]
pub fn pt_to_centipoints(pt: f64) -> u32 {
    (pt * CENTIPOINTS_PER_PT).round().max(0.0) as u32
}

/// `sz` attribute of `a:rPr` back to points.
#[inline]
pub fn centipoints_to_pt(sz: u32) -> f64 {
    sz as f64 / CENTIPOINTS_PER_PT
}

/// Spacing value for `a:spcPts@val`, which is also hundredths of a point.
#[inline]
pub fn pt_to_spacing_points(pt: f64) -> u32 {
    pt_to_centipoints(pt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inches() {
        assert_eq!(inches_to_emu(10.0), 9_144_000);
        assert_eq!(inches_to_emu(7.5), 6_858_000);
        assert_eq!(inches_to_emu(0.375), 342_900);
        assert!((emu_to_inches(12_188_952) - 13.33).abs() < 0.001);
    }

    #[test]
    fn test_points() {
        assert_eq!(pt_to_emu_f64(1.0), 12_700);
        assert_eq!(emu_to_pt_f64(25_400), 2.0);
        assert_eq!(pt_to_centipoints(54.0), 5400);
        assert_eq!(pt_to_centipoints(13.5), 1350);
        assert_eq!(centipoints_to_pt(1800), 18.0);
        assert_eq!(pt_to_spacing_points(12.0), 1200);
    }
}
