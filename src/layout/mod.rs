pub mod floating;
pub mod snap;

pub use floating::{ResizeEdge, apply_resize_drag};
pub use snap::{DockZone, dock_rect, edge_snap_zone, snap_to_windows};

use serde::{Deserialize, Serialize};

use crate::input::Point;

/// Signed floating rectangle origin with unsigned size, in host pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FloatRect {
    pub x: i32,
    pub y: i32,
    pub width: u16,
    pub height: u16,
}

impl FloatRect {
    pub const fn new(x: i32, y: i32, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    pub fn contains(&self, point: Point) -> bool {
        rect_contains(*self, point.x, point.y)
    }

    /// Horizontal strip of `height` pixels along the top edge.
    pub fn top_strip(&self, height: i32) -> FloatRect {
        FloatRect {
            height: clamp_dim(height.min(self.height as i32)),
            ..*self
        }
    }
}

pub fn rect_contains(rect: FloatRect, x: i32, y: i32) -> bool {
    if rect.width == 0 || rect.height == 0 {
        return false;
    }
    x >= rect.x && x < rect.right() && y >= rect.y && y < rect.bottom()
}

pub fn rects_intersect(a: FloatRect, b: FloatRect) -> bool {
    a.x < b.right() && a.right() > b.x && a.y < b.bottom() && a.bottom() > b.y
}

/// Clamp a signed pixel length into the `u16` range used for sizes.
pub fn clamp_dim(value: i32) -> u16 {
    value.clamp(0, u16::MAX as i32) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_contains_edge_cases() {
        let empty = FloatRect::new(0, 0, 0, 5);
        assert!(!rect_contains(empty, 0, 0));
        let r = FloatRect::new(-4, 1, 3, 3);
        assert!(rect_contains(r, -4, 1));
        assert!(!rect_contains(r, -1, 1));
        assert!(!rect_contains(r, -4, 4));
    }

    #[test]
    fn rects_intersect_true_and_false() {
        let a = FloatRect::new(0, 0, 5, 5);
        let b = FloatRect::new(4, 4, 5, 5);
        assert!(rects_intersect(a, b));
        let c = FloatRect::new(10, 10, 1, 1);
        assert!(!rects_intersect(a, c));
    }

    #[test]
    fn top_strip_never_exceeds_rect() {
        let r = FloatRect::new(10, 20, 100, 30);
        assert_eq!(r.top_strip(36).height, 30);
        assert_eq!(r.top_strip(12), FloatRect::new(10, 20, 100, 12));
    }

    #[test]
    fn clamp_dim_saturates() {
        assert_eq!(clamp_dim(-3), 0);
        assert_eq!(clamp_dim(70_000), u16::MAX);
    }
}
