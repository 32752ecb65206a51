use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{FloatRect, clamp_dim};
use crate::host::Viewport;
use crate::input::Point;

/// Named viewport regions a frame can be docked to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DockZone {
    Left,
    Right,
    Top,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl DockZone {
    pub const ALL: [DockZone; 7] = [
        DockZone::Left,
        DockZone::Right,
        DockZone::Top,
        DockZone::TopLeft,
        DockZone::TopRight,
        DockZone::BottomLeft,
        DockZone::BottomRight,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DockZone::Left => "left",
            DockZone::Right => "right",
            DockZone::Top => "top",
            DockZone::TopLeft => "top-left",
            DockZone::TopRight => "top-right",
            DockZone::BottomLeft => "bottom-left",
            DockZone::BottomRight => "bottom-right",
        }
    }
}

impl fmt::Display for DockZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DockZone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DockZone::ALL
            .into_iter()
            .find(|zone| zone.as_str() == s)
            .ok_or_else(|| format!("unknown dock zone: {s}"))
    }
}

/// Zone armed by the pointer position; corners are checked before edges.
pub fn edge_snap_zone(pointer: Point, viewport: Viewport, threshold: i32) -> Option<DockZone> {
    let Point { x, y } = pointer;
    let near_left = x < threshold;
    let near_right = x > viewport.width - threshold;
    let near_top = y < threshold;
    let near_bottom = y > viewport.height - threshold;

    if near_left && near_top {
        Some(DockZone::TopLeft)
    } else if near_right && near_top {
        Some(DockZone::TopRight)
    } else if near_left && near_bottom {
        Some(DockZone::BottomLeft)
    } else if near_right && near_bottom {
        Some(DockZone::BottomRight)
    } else if near_left {
        Some(DockZone::Left)
    } else if near_right {
        Some(DockZone::Right)
    } else if near_top {
        Some(DockZone::Top)
    } else {
        None
    }
}

pub fn dock_rect(zone: DockZone, viewport: Viewport) -> FloatRect {
    let half_w = viewport.width / 2;
    let half_h = viewport.height / 2;
    let rest_w = viewport.width - half_w;
    let rest_h = viewport.height - half_h;
    let (x, y, width, height) = match zone {
        DockZone::Left => (0, 0, half_w, viewport.height),
        DockZone::Right => (half_w, 0, rest_w, viewport.height),
        DockZone::Top => (0, 0, viewport.width, viewport.height),
        DockZone::TopLeft => (0, 0, half_w, half_h),
        DockZone::TopRight => (half_w, 0, rest_w, half_h),
        DockZone::BottomLeft => (0, half_h, half_w, rest_h),
        DockZone::BottomRight => (half_w, half_h, rest_w, rest_h),
    };
    FloatRect::new(x, y, clamp_dim(width), clamp_dim(height))
}

/// Align `candidate` with the edges of `others`.
///
/// Each axis is independent and every comparison uses the unsnapped
/// candidate; the last alignment within `threshold` wins.
pub fn snap_to_windows(candidate: FloatRect, others: &[FloatRect], threshold: i32) -> (i32, i32) {
    let w = candidate.width as i32;
    let h = candidate.height as i32;
    let left = candidate.x;
    let right = candidate.right();
    let top = candidate.y;
    let bottom = candidate.bottom();
    let near = |a: i32, b: i32| (a - b).abs() < threshold;

    let mut x = candidate.x;
    let mut y = candidate.y;
    for other in others {
        if near(left, other.x) {
            x = other.x;
        }
        if near(right, other.right()) {
            x = other.right() - w;
        }
        if near(left, other.right()) {
            x = other.right();
        }
        if near(right, other.x) {
            x = other.x - w;
        }

        if near(top, other.y) {
            y = other.y;
        }
        if near(bottom, other.bottom()) {
            y = other.bottom() - h;
        }
        if near(top, other.bottom()) {
            y = other.bottom();
        }
        if near(bottom, other.y) {
            y = other.y - h;
        }
    }
    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEW: Viewport = Viewport {
        width: 1280,
        height: 736,
    };

    #[test]
    fn zones_from_pointer() {
        assert_eq!(edge_snap_zone(Point::new(5, 5), VIEW, 40), Some(DockZone::TopLeft));
        assert_eq!(
            edge_snap_zone(Point::new(1270, 10), VIEW, 40),
            Some(DockZone::TopRight)
        );
        assert_eq!(
            edge_snap_zone(Point::new(10, 730), VIEW, 40),
            Some(DockZone::BottomLeft)
        );
        assert_eq!(
            edge_snap_zone(Point::new(1270, 730), VIEW, 40),
            Some(DockZone::BottomRight)
        );
        assert_eq!(edge_snap_zone(Point::new(5, 300), VIEW, 40), Some(DockZone::Left));
        assert_eq!(
            edge_snap_zone(Point::new(1250, 300), VIEW, 40),
            Some(DockZone::Right)
        );
        assert_eq!(edge_snap_zone(Point::new(600, 2), VIEW, 40), Some(DockZone::Top));
        assert_eq!(edge_snap_zone(Point::new(600, 300), VIEW, 40), None);
        // Bottom edge alone is not a zone.
        assert_eq!(edge_snap_zone(Point::new(600, 730), VIEW, 40), None);
    }

    #[test]
    fn dock_rects_split_viewport() {
        assert_eq!(dock_rect(DockZone::Left, VIEW), FloatRect::new(0, 0, 640, 736));
        assert_eq!(dock_rect(DockZone::Right, VIEW), FloatRect::new(640, 0, 640, 736));
        assert_eq!(dock_rect(DockZone::Top, VIEW), FloatRect::new(0, 0, 1280, 736));
        assert_eq!(
            dock_rect(DockZone::BottomRight, VIEW),
            FloatRect::new(640, 368, 640, 368)
        );
    }

    #[test]
    fn zone_names_round_trip_through_str() {
        for zone in DockZone::ALL {
            assert_eq!(zone.as_str().parse::<DockZone>(), Ok(zone));
        }
        assert!("middle".parse::<DockZone>().is_err());
    }

    #[test]
    fn window_snap_aligns_each_axis() {
        let other = FloatRect::new(100, 100, 400, 300);
        // Left edge 10px right of the other's right edge.
        let candidate = FloatRect::new(510, 395, 200, 100);
        let (x, y) = snap_to_windows(candidate, &[other], 15);
        assert_eq!(x, 500);
        // Top near the other's bottom.
        assert_eq!(y, 400);
    }

    #[test]
    fn window_snap_ignores_far_edges() {
        let other = FloatRect::new(100, 100, 400, 300);
        let candidate = FloatRect::new(700, 600, 100, 50);
        assert_eq!(snap_to_windows(candidate, &[other], 15), (700, 600));
    }
}
