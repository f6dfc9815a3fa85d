//! Canvas geometry. Every frame is derived from the canvas size; all values
//! are EMUs.

use crate::common::unit::inches_to_emu;
use serde::Serialize;

/// Outer margin around the content.
pub const MARGIN: i64 = 457_200;
/// Height of the header bar on content slides.
pub const HEADER_HEIGHT: i64 = 914_400;
/// Top of the body area.
pub const BODY_TOP: i64 = 1_371_600;
/// Space between the two columns.
pub const GUTTER: i64 = 457_200;
/// Left offset per nesting level.
pub const LEVEL_INDENT: i64 = 342_900;

/// An axis-aligned frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub cx: i64,
    pub cy: i64,
}

impl Rect {
    pub const fn new(x: i64, y: i64, cx: i64, cy: i64) -> Self {
        Self { x, y, cx, cy }
    }

    #[inline]
    pub fn right(&self) -> i64 {
        self.x + self.cx
    }

    #[inline]
    pub fn bottom(&self) -> i64 {
        self.y + self.cy
    }

    /// True if the horizontal extents share any interior point.
    pub fn overlaps_horizontally(&self, other: &Rect) -> bool {
        self.x < other.right() && other.x < self.right()
    }
}

/// Frames for every region the canvas renderer places.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasGeometry {
    pub width: i64,
    pub height: i64,
}

impl CanvasGeometry {
    pub fn new(width: i64, height: i64) -> Self {
        Self { width, height }
    }

    /// Title of a title slide: full width inside the margins, top at one
    /// third of the height.
    pub fn title(&self) -> Rect {
        Rect::new(
            MARGIN,
            self.height / 3,
            self.width - 2 * MARGIN,
            inches_to_emu(1.5),
        )
    }

    /// Subtitle, 1.7in below the title's top.
    pub fn subtitle(&self) -> Rect {
        let title = self.title();
        Rect::new(
            title.x,
            title.y + inches_to_emu(1.7),
            title.cx,
            inches_to_emu(1.0),
        )
    }

    pub fn header_bar(&self) -> Rect {
        Rect::new(0, 0, self.width, HEADER_HEIGHT)
    }

    /// Area under the header bar, down to the bottom margin.
    pub fn body(&self) -> Rect {
        Rect::new(
            MARGIN,
            BODY_TOP,
            self.width - 2 * MARGIN,
            self.height - BODY_TOP - MARGIN,
        )
    }

    /// The body area split into two equal columns around the gutter.
    pub fn columns(&self) -> (Rect, Rect) {
        let body = self.body();
        let width = (body.cx - GUTTER) / 2;
        (
            Rect::new(body.x, body.y, width, body.cy),
            Rect::new(body.x + width + GUTTER, body.y, width, body.cy),
        )
    }

    pub fn closing(&self) -> Rect {
        let inch = inches_to_emu(1.0);
        Rect::new(inch, self.height / 3, self.width - 2 * inch, 2 * inch)
    }

    /// Secondary line of a closing slide, 2in above the bottom edge.
    pub fn closing_secondary(&self) -> Rect {
        let inch = inches_to_emu(1.0);
        Rect::new(inch, self.height - 2 * inch, self.width - 2 * inch, inch)
    }

    /// Left margin of a paragraph at `level`.
    pub fn indent(level: u32) -> i64 {
        LEVEL_INDENT * level as i64
    }

    /// True when every frame has a positive extent and starts on the canvas.
    pub fn fits(&self) -> bool {
        let (left, right) = self.columns();
        [
            self.title(),
            self.subtitle(),
            self.header_bar(),
            self.body(),
            left,
            right,
            self.closing(),
            self.closing_secondary(),
        ]
        .iter()
        .all(|r| r.cx > 0 && r.cy > 0 && r.x >= 0 && r.y >= 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEN_BY_SEVEN_HALF: CanvasGeometry = CanvasGeometry {
        width: 9_144_000,
        height: 6_858_000,
    };

    #[test]
    fn test_default_canvas_frames() {
        let g = TEN_BY_SEVEN_HALF;
        assert_eq!(g.title(), Rect::new(457_200, 2_286_000, 8_229_600, 1_371_600));
        assert_eq!(g.subtitle().y, 2_286_000 + 1_554_480);
        assert_eq!(g.header_bar(), Rect::new(0, 0, 9_144_000, 914_400));
        assert_eq!(g.body(), Rect::new(457_200, 1_371_600, 8_229_600, 5_029_200));
        assert_eq!(g.closing(), Rect::new(914_400, 2_286_000, 7_315_200, 1_828_800));
        assert_eq!(g.closing_secondary().y, 5_029_200);
    }

    #[test]
    fn test_columns_do_not_overlap() {
        for (w, h) in [(9_144_000, 6_858_000), (12_192_000, 6_858_000), (3_000_001, 2_000_000)] {
            let (left, right) = CanvasGeometry::new(w, h).columns();
            assert!(!left.overlaps_horizontally(&right));
            assert_eq!(left.cx, right.cx);
            assert_eq!(right.x - left.right(), GUTTER);
            assert!(right.right() <= w - MARGIN);
        }
    }

    #[test]
    fn test_fits() {
        assert!(TEN_BY_SEVEN_HALF.fits());
        assert!(!CanvasGeometry::new(457_200, 457_200).fits());
        // closing frame keeps a 1in margin on both sides
        assert!(!CanvasGeometry::new(1_828_800, 6_858_000).fits());
        assert!(CanvasGeometry::new(1_828_801, 6_858_000).fits());
        assert!(!CanvasGeometry::new(9_144_000, 1_828_800).fits());
    }

    #[test]
    fn test_indent() {
        assert_eq!(CanvasGeometry::indent(0), 0);
        assert_eq!(CanvasGeometry::indent(1), 342_900);
    }
}
