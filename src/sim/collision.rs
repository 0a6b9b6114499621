//! Axis-aligned bounding-box overlap testing
//!
//! Every gameplay interaction (bullet hits, pickups, rammings) resolves
//! through the one predicate here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A top-left anchored rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// A zero-sized rect; entities lacking extent are treated as points
    pub fn point(pos: Vec2) -> Self {
        Self {
            pos,
            size: Vec2::ZERO,
        }
    }
}

/// Standard four-way separating-axis negation. Shared edges count as
/// overlap. Symmetric in its arguments.
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    !(a.pos.x + a.size.x < b.pos.x
        || a.pos.x > b.pos.x + b.size.x
        || a.pos.y + a.size.y < b.pos.y
        || a.pos.y > b.pos.y + b.size.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlap_hit() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(overlaps(&a, &b));
    }

    #[test]
    fn test_overlap_miss_horizontal() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 0.0, 10.0, 10.0);
        assert!(!overlaps(&a, &b));
    }

    #[test]
    fn test_overlap_miss_vertical() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(0.0, 30.0, 10.0, 10.0);
        assert!(!overlaps(&a, &b));
    }

    #[test]
    fn test_shared_edge_counts() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(overlaps(&a, &b));
    }

    #[test]
    fn test_point_inside_rect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let p = Rect::point(Vec2::new(4.0, 4.0));
        assert!(overlaps(&a, &p));
        assert!(overlaps(&p, &a));
    }

    #[test]
    fn test_self_overlap() {
        let a = Rect::new(3.0, 7.0, 12.0, 9.0);
        assert!(overlaps(&a, &a));
    }

    proptest! {
        #[test]
        fn prop_overlap_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            aw in 0.0f32..100.0, ah in 0.0f32..100.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            bw in 0.0f32..100.0, bh in 0.0f32..100.0,
        ) {
            let a = Rect::new(ax, ay, aw, ah);
            let b = Rect::new(bx, by, bw, bh);
            prop_assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
        }

        #[test]
        fn prop_nondegenerate_rect_overlaps_itself(
            x in -500.0f32..500.0, y in -500.0f32..500.0,
            w in 0.001f32..100.0, h in 0.001f32..100.0,
        ) {
            let a = Rect::new(x, y, w, h);
            prop_assert!(overlaps(&a, &a));
        }
    }
}
