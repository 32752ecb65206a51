use super::FrameId;
use super::window_manager::{Gesture, WindowManager};
use crate::input::Point;
use crate::layout::floating::ResizeDrag;
use crate::layout::{ResizeEdge, apply_resize_drag};

impl WindowManager {
    /// Start resizing from one of the eight handles. Maximized, tabbed and
    /// non-resizable windows refuse.
    pub fn begin_resize(&mut self, frame: FrameId, edge: ResizeEdge, point: Point) -> bool {
        if let FrameId::Window(id) = &frame {
            let Some(window) = self.windows.get(id) else {
                return false;
            };
            if window.maximized || window.minimized || window.tab_group.is_some() {
                return false;
            }
        }
        let Some(target) = self.frame(&frame) else {
            return false;
        };
        if !target.is_resizable() {
            return false;
        }
        let (min_width, min_height) = target.min_size();
        let start_rect = target.rect();
        self.focus_frame(&frame);
        tracing::trace!(frame = %frame, ?edge, "resize started");
        self.gesture = Some(Gesture::Resize(ResizeDrag {
            id: frame,
            edge,
            start_rect,
            start_pointer: point,
            min_width,
            min_height,
        }));
        true
    }

    pub(crate) fn resize_move(&mut self, drag: &ResizeDrag<FrameId>, point: Point) {
        let Some(target) = self.frame_mut(&drag.id) else {
            return;
        };
        let next = apply_resize_drag(
            drag.start_rect,
            target.rect(),
            drag.edge,
            point.x - drag.start_pointer.x,
            point.y - drag.start_pointer.y,
            drag.min_width,
            drag.min_height,
        );
        target.set_rect(next);
        self.notify_resize(&drag.id);
    }

    pub(crate) fn resize_end(&mut self, drag: ResizeDrag<FrameId>) {
        tracing::trace!(frame = %drag.id, "resize finished");
        self.persist_frame(&drag.id);
    }
}
