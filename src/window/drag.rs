use super::FrameId;
use super::tabs::DetachPlacement;
use super::window_manager::{Gesture, SnapPreview, WindowManager};
use crate::input::Point;
use crate::layout::floating::HeaderDrag;
use crate::layout::{FloatRect, dock_rect, edge_snap_zone, snap_to_windows};

impl WindowManager {
    /// Start moving a frame with the pointer at `point`.
    ///
    /// Tabbed windows are torn out first and docked frames get their free
    /// size back, re-anchored under the pointer if it no longer spans it.
    pub fn begin_drag(&mut self, frame: FrameId, point: Point) -> bool {
        if let FrameId::Window(id) = &frame {
            let Some(window) = self.windows.get(id) else {
                return false;
            };
            if window.maximized || window.minimized {
                return false;
            }
            if window.tab_group.is_some() {
                self.detach_with(id, DetachPlacement::UnderPointer(point));
            }
        }
        let Some(current) = self.frame(&frame) else {
            return false;
        };
        if current.docked().is_some() {
            self.undock_frame(&frame);
            if let Some(target) = self.frame_mut(&frame) {
                let mut rect = target.rect();
                if point.x < rect.x || point.x >= rect.right() {
                    rect.x = point.x - rect.width as i32 / 2;
                    target.set_rect(rect);
                }
            }
        }
        self.focus_frame(&frame);
        let Some(rect) = self.frame(&frame).map(|f| f.rect()) else {
            return false;
        };
        tracing::trace!(frame = %frame, x = point.x, y = point.y, "drag started");
        self.snap_preview = None;
        self.merge_target = None;
        self.gesture = Some(Gesture::Drag(HeaderDrag {
            id: frame,
            initial_x: rect.x,
            initial_y: rect.y,
            start_pointer: point,
        }));
        true
    }

    pub(crate) fn drag_move(&mut self, drag: &HeaderDrag<FrameId>, point: Point) {
        let Some(rect) = self.frame(&drag.id).map(|f| f.rect()) else {
            return;
        };
        // A press that moved is not half of a double click.
        self.last_header_click = None;
        let candidate = FloatRect {
            x: drag.initial_x + point.x - drag.start_pointer.x,
            y: drag.initial_y + point.y - drag.start_pointer.y,
            ..rect
        };

        self.merge_target = match drag.id {
            FrameId::Window(_) => self.merge_target_at(&drag.id, point),
            FrameId::Group(_) => None,
        };
        self.snap_preview = if self.merge_target.is_some() {
            None
        } else {
            let viewport = self.viewport();
            edge_snap_zone(point, viewport, self.config.edge_snap_threshold).map(|zone| {
                SnapPreview {
                    zone,
                    rect: dock_rect(zone, viewport),
                }
            })
        };

        let others = self.snap_candidates(&drag.id);
        let (x, y) = snap_to_windows(candidate, &others, self.config.window_snap_threshold);
        let next = FloatRect {
            x,
            y: y.max(0),
            ..candidate
        };
        if let Some(target) = self.frame_mut(&drag.id) {
            target.set_rect(next);
        }
        self.notify_move(&drag.id);
    }

    pub(crate) fn drag_end(&mut self, drag: HeaderDrag<FrameId>) {
        let merge_target = self.merge_target.take();
        let preview = self.snap_preview.take();
        if let (FrameId::Window(source), Some(target)) = (&drag.id, merge_target.as_ref()) {
            // Last free geometry, used if the window is torn out after a reload.
            self.persist_frame(&drag.id);
            if self.merge_into_frame(source, target) {
                return;
            }
        }
        if let Some(preview) = preview {
            // Dropping on a zone docks from where the drag started, so
            // undocking later returns the frame to that geometry.
            if let Some(target) = self.frame_mut(&drag.id) {
                let rect = FloatRect {
                    x: drag.initial_x,
                    y: drag.initial_y,
                    ..target.rect()
                };
                target.set_rect(rect);
            }
            self.dock_frame(&drag.id, preview.zone);
            return;
        }
        tracing::trace!(frame = %drag.id, "drag finished");
        self.persist_frame(&drag.id);
    }

    /// Topmost other frame whose title strip (plus slop) holds the pointer.
    fn merge_target_at(&self, dragged: &FrameId, point: Point) -> Option<FrameId> {
        self.stack.iter().rev().find_map(|frame| {
            if frame == dragged {
                return None;
            }
            let (rect, bar) = match frame {
                FrameId::Window(id) => {
                    let window = self.windows.get(id).filter(|w| w.is_free_visible())?;
                    (window.rect, self.config.titlebar_height)
                }
                FrameId::Group(id) => (self.groups.get(id)?.rect, self.config.group_bar_height),
            };
            let strip = FloatRect {
                height: (bar + self.config.merge_slop).clamp(0, u16::MAX as i32) as u16,
                ..rect
            };
            strip.contains(point).then(|| frame.clone())
        })
    }

    /// Free, visible, non-maximized windows other than the dragged frame.
    fn snap_candidates(&self, dragged: &FrameId) -> Vec<FloatRect> {
        self.windows
            .values()
            .filter(|w| w.is_free_visible() && !w.maximized)
            .filter(|w| dragged.as_window() != Some(w.id.as_str()))
            .map(|w| w.rect)
            .collect()
    }
}
