use super::{FloatRect, clamp_dim};
use crate::input::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeEdge {
    Left,
    Right,
    Top,
    Bottom,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ResizeEdge {
    pub const ALL: [ResizeEdge; 8] = [
        ResizeEdge::TopLeft,
        ResizeEdge::TopRight,
        ResizeEdge::BottomLeft,
        ResizeEdge::BottomRight,
        ResizeEdge::Top,
        ResizeEdge::Bottom,
        ResizeEdge::Left,
        ResizeEdge::Right,
    ];

    /// Parse a compass handle name (`n`, `se`, `w`, ...).
    pub fn from_handle(name: &str) -> Option<Self> {
        match name {
            "n" => Some(ResizeEdge::Top),
            "s" => Some(ResizeEdge::Bottom),
            "e" => Some(ResizeEdge::Right),
            "w" => Some(ResizeEdge::Left),
            "ne" => Some(ResizeEdge::TopRight),
            "nw" => Some(ResizeEdge::TopLeft),
            "se" => Some(ResizeEdge::BottomRight),
            "sw" => Some(ResizeEdge::BottomLeft),
            _ => None,
        }
    }

    pub fn moves_left(self) -> bool {
        matches!(
            self,
            ResizeEdge::Left | ResizeEdge::TopLeft | ResizeEdge::BottomLeft
        )
    }

    pub fn moves_right(self) -> bool {
        matches!(
            self,
            ResizeEdge::Right | ResizeEdge::TopRight | ResizeEdge::BottomRight
        )
    }

    pub fn moves_top(self) -> bool {
        matches!(
            self,
            ResizeEdge::Top | ResizeEdge::TopLeft | ResizeEdge::TopRight
        )
    }

    pub fn moves_bottom(self) -> bool {
        matches!(
            self,
            ResizeEdge::Bottom | ResizeEdge::BottomLeft | ResizeEdge::BottomRight
        )
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ResizeHandle {
    pub rect: FloatRect,
    pub edge: ResizeEdge,
}

/// In-flight resize gesture.
#[derive(Debug, Clone, Copy)]
pub struct ResizeDrag<R> {
    pub id: R,
    pub edge: ResizeEdge,
    pub start_rect: FloatRect,
    pub start_pointer: Point,
    pub min_width: u16,
    pub min_height: u16,
}

/// In-flight move gesture.
#[derive(Debug, Clone, Copy)]
pub struct HeaderDrag<R> {
    pub id: R,
    pub initial_x: i32,
    pub initial_y: i32,
    pub start_pointer: Point,
}

/// Eight handles straddling the frame border; corners come first so they win
/// hit tests against the edges they overlap.
pub fn resize_handles_for_rect(rect: FloatRect, size: i32) -> Vec<ResizeHandle> {
    let mut handles = Vec::with_capacity(8);
    if rect.width == 0 || rect.height == 0 || size <= 0 {
        return handles;
    }
    let half = size / 2;
    let left = rect.x - half;
    let right = rect.right() - half;
    let top = rect.y - half;
    let bottom = rect.bottom() - half;
    let corner = clamp_dim(size);
    let span_w = clamp_dim(rect.width as i32 - size);
    let span_h = clamp_dim(rect.height as i32 - size);
    for edge in ResizeEdge::ALL {
        let handle_rect = match edge {
            ResizeEdge::TopLeft => FloatRect::new(left, top, corner, corner),
            ResizeEdge::TopRight => FloatRect::new(right, top, corner, corner),
            ResizeEdge::BottomLeft => FloatRect::new(left, bottom, corner, corner),
            ResizeEdge::BottomRight => FloatRect::new(right, bottom, corner, corner),
            ResizeEdge::Top => FloatRect::new(rect.x + half, top, span_w, corner),
            ResizeEdge::Bottom => FloatRect::new(rect.x + half, bottom, span_w, corner),
            ResizeEdge::Left => FloatRect::new(left, rect.y + half, corner, span_h),
            ResizeEdge::Right => FloatRect::new(right, rect.y + half, corner, span_h),
        };
        if handle_rect.width > 0 && handle_rect.height > 0 {
            handles.push(ResizeHandle {
                rect: handle_rect,
                edge,
            });
        }
    }
    handles
}

/// Apply one pointer move of a resize gesture.
///
/// East/south edges grow from the start size and clamp at the minimum. A
/// west/north proposal below the minimum is rejected and `current` is kept on
/// that axis, so the opposite edge never drifts.
pub fn apply_resize_drag(
    start: FloatRect,
    current: FloatRect,
    edge: ResizeEdge,
    dx: i32,
    dy: i32,
    min_width: u16,
    min_height: u16,
) -> FloatRect {
    let mut next = current;
    let min_w = min_width as i32;
    let min_h = min_height as i32;

    if edge.moves_right() {
        next.width = clamp_dim((start.width as i32 + dx).max(min_w));
    } else if edge.moves_left() {
        let proposed = start.width as i32 - dx;
        if proposed >= min_w {
            next.width = clamp_dim(proposed);
            next.x = start.x + dx;
        }
    }

    if edge.moves_bottom() {
        next.height = clamp_dim((start.height as i32 + dy).max(min_h));
    } else if edge.moves_top() {
        let proposed = start.height as i32 - dy;
        if proposed >= min_h {
            next.height = clamp_dim(proposed);
            next.y = start.y + dy;
        }
    }

    next
}
