//! Pointer input in host pixel coordinates.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Down,
    Move,
    Up,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub x: i32,
    pub y: i32,
}

impl PointerEvent {
    pub const fn down(x: i32, y: i32) -> Self {
        Self {
            kind: PointerKind::Down,
            x,
            y,
        }
    }

    pub const fn moved(x: i32, y: i32) -> Self {
        Self {
            kind: PointerKind::Move,
            x,
            y,
        }
    }

    pub const fn up(x: i32, y: i32) -> Self {
        Self {
            kind: PointerKind::Up,
            x,
            y,
        }
    }

    pub const fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}
