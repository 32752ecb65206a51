//! Terminal mouse events to host-pixel pointer events.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::input::PointerEvent;
use crate::ui::CellScale;

/// Only the primary button drives gestures; wheel and other buttons are
/// ignored. Bare motion is forwarded so hover-free hosts still see moves.
pub fn pointer_from_mouse(event: &MouseEvent, scale: CellScale) -> Option<PointerEvent> {
    let point = scale.to_pixels(event.column, event.row);
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(PointerEvent::down(point.x, point.y)),
        MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
            Some(PointerEvent::moved(point.x, point.y))
        }
        MouseEventKind::Up(MouseButton::Left) => Some(PointerEvent::up(point.x, point.y)),
        _ => None,
    }
}
