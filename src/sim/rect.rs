//! Axis-aligned rectangles in viewport pixel space
//!
//! Everything the placement search needs: a rect is defined by its top-left
//! corner plus size, and overlap tests can expand either side by a clearance
//! margin.

use glam::Vec2;

/// An axis-aligned rectangle in viewport pixels (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Rect of the given size placed at `pos` (top-left corner)
    pub fn at(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Top-left corner
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Grow every side by `margin`
    pub fn expanded(&self, margin: f32) -> Self {
        Self::new(
            self.left - margin,
            self.top - margin,
            self.width + 2.0 * margin,
            self.height + 2.0 * margin,
        )
    }

    /// Margin-expanded AABB overlap test
    ///
    /// True iff this rect, grown by `margin` on every side, intersects
    /// `other` on both axes. Strict inequalities: rects that merely share an
    /// edge do not overlap. Zero margin is the plain AABB test.
    pub fn overlaps(&self, other: &Rect, margin: f32) -> bool {
        self.left - margin < other.right()
            && self.right() + margin > other.left
            && self.top - margin < other.bottom()
            && self.bottom() + margin > other.top
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_basic() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        let c = Rect::new(20.0, 20.0, 5.0, 5.0);

        assert!(a.overlaps(&b, 0.0));
        assert!(b.overlaps(&a, 0.0));
        assert!(!a.overlaps(&c, 0.0));
    }

    #[test]
    fn test_edge_touch_is_not_overlap() {
        // Rects sharing an edge: strict inequalities say no overlap
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&b, 0.0));
    }

    #[test]
    fn test_margin_bridges_gap() {
        // 5px apart: a 6px margin reaches across, a 5px margin does not
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(15.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&b, 6.0));
        assert!(!a.overlaps(&b, 5.0));
    }

    #[test]
    fn test_expanded() {
        let r = Rect::new(10.0, 10.0, 20.0, 20.0).expanded(4.0);
        assert_eq!(r.left, 6.0);
        assert_eq!(r.top, 6.0);
        assert_eq!(r.right(), 34.0);
        assert_eq!(r.bottom(), 34.0);
    }

    #[test]
    fn test_expanded_matches_margin_overlap() {
        // Expanding one rect is the same as testing with that margin
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(13.0, 0.0, 10.0, 10.0);
        assert_eq!(a.overlaps(&b, 4.0), a.expanded(4.0).overlaps(&b, 0.0));
    }
}
