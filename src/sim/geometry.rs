//! Axis-aligned rectangle geometry
//!
//! Everything in the arena (horse, food, poison, the arena itself) is an
//! integer-pixel rectangle anchored at its top-left corner. Screen
//! coordinates: x grows right, y grows down.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box in pixel space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: IVec2,
    /// Width (x) and height (y)
    pub size: IVec2,
}

impl Rect {
    pub const fn new(pos: IVec2, size: IVec2) -> Self {
        Self { pos, size }
    }

    /// Square box with the given side
    pub fn square(pos: IVec2, side: i32) -> Self {
        Self::new(pos, IVec2::splat(side))
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.pos.y
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.pos.y + self.size.y
    }

    /// Center point (rounded toward the top-left)
    pub fn center(&self) -> IVec2 {
        self.pos + self.size / 2
    }

    /// AABB overlap test. Boxes that only share an edge do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Same box grown by `margin` on its right and bottom edges
    pub fn grown(&self, margin: i32) -> Rect {
        Rect::new(self.pos, self.size + IVec2::splat(margin))
    }

    /// Overlap test after growing both boxes by `margin`
    pub fn overlaps_with_margin(&self, other: &Rect, margin: i32) -> bool {
        self.grown(margin).overlaps(&other.grown(margin))
    }

    /// True if `other` lies entirely inside this box
    pub fn contains(&self, other: &Rect) -> bool {
        other.left() >= self.left()
            && other.right() <= self.right()
            && other.top() >= self.top()
            && other.bottom() <= self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_basic() {
        let a = Rect::square(IVec2::new(0, 0), 20);
        let b = Rect::square(IVec2::new(10, 10), 20);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::square(IVec2::new(0, 0), 20);
        let right = Rect::square(IVec2::new(20, 0), 20);
        let below = Rect::square(IVec2::new(0, 20), 20);
        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&below));
    }

    #[test]
    fn test_overlap_with_margin() {
        // 30px apart on x: clear without margin, hit once both boxes grow by 40
        let a = Rect::square(IVec2::new(100, 100), 20);
        let b = Rect::square(IVec2::new(150, 100), 20);
        assert!(!a.overlaps(&b));
        assert!(a.overlaps_with_margin(&b, 40));
        assert!(!a.overlaps_with_margin(&b, 10));
    }

    #[test]
    fn test_contains() {
        let arena = Rect::square(IVec2::ZERO, 100);
        assert!(arena.contains(&Rect::new(IVec2::new(60, 80), IVec2::new(40, 20))));
        assert!(!arena.contains(&Rect::new(IVec2::new(61, 80), IVec2::new(40, 20))));
        assert!(!arena.contains(&Rect::new(IVec2::new(-1, 0), IVec2::new(40, 20))));
    }

    #[test]
    fn test_center() {
        let r = Rect::new(IVec2::new(10, 10), IVec2::new(40, 20));
        assert_eq!(r.center(), IVec2::new(30, 20));
    }
}
