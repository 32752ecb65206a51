use super::window_manager::WindowManager;
use super::FrameId;

/// One button in the minimize dock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockEntry {
    pub window: String,
    pub label: String,
    pub icon: Option<String>,
}

/// Buttons for minimized windows, in minimize order.
#[derive(Debug, Clone, Default)]
pub struct MinimizeDock {
    entries: Vec<DockEntry>,
}

impl MinimizeDock {
    pub fn entries(&self) -> &[DockEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, window: &str) -> bool {
        self.entries.iter().any(|e| e.window == window)
    }

    pub(crate) fn push(&mut self, entry: DockEntry) {
        if !self.contains(&entry.window) {
            self.entries.push(entry);
        }
    }

    pub(crate) fn remove(&mut self, window: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.window != window);
        before != self.entries.len()
    }

    pub(crate) fn relabel(&mut self, window: &str, label: String) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.window == window) {
            entry.label = label;
        }
    }
}

impl WindowManager {
    /// Hide a free window behind a dock button. Mobile panels just close
    /// their sheet; tabbed windows are left alone.
    pub fn minimize(&mut self, id: &str) {
        if self.mobile.contains(id) {
            if self.mobile.open_id() == Some(id) {
                self.hide_mobile_sheet();
            }
            return;
        }
        let Some(window) = self.windows.get(id) else {
            return;
        };
        if window.tab_group.is_some() || window.minimized {
            return;
        }
        if window.maximized {
            self.restore_maximized(id);
        }
        let Some(window) = self.windows.get_mut(id) else {
            return;
        };
        window.minimized = true;
        window.visible = false;
        window.focused = false;
        let entry = DockEntry {
            window: id.to_string(),
            label: window.title.clone(),
            icon: window.icon.clone(),
        };
        let state = window.state();
        if let Some(cb) = window.callbacks.on_minimize.as_mut() {
            cb(&state);
        }
        self.minimize_dock.push(entry);
        self.forget_frame(&FrameId::window(id));
        tracing::debug!(window_id = %id, "minimized");
    }

    /// Fill the viewport, remembering the geometry to come back to.
    pub fn maximize(&mut self, id: &str) {
        if self.mobile.contains(id) {
            return;
        }
        let viewport = self.viewport();
        let Some(window) = self.windows.get_mut(id) else {
            return;
        };
        if window.tab_group.is_some() || window.maximized {
            return;
        }
        if window.minimized {
            window.minimized = false;
            window.visible = true;
            self.minimize_dock.remove(id);
        }
        let Some(window) = self.windows.get_mut(id) else {
            return;
        };
        window.pre_maximize = Some(window.rect);
        window.rect = viewport.rect();
        window.maximized = true;
        let state = window.state();
        if let Some(cb) = window.callbacks.on_maximize.as_mut() {
            cb(&state);
        }
        let frame = FrameId::window(id);
        self.forget_frame(&frame);
        self.focus_frame(&frame);
        tracing::debug!(window_id = %id, "maximized");
        self.persist_window(id);
    }

    /// Undo minimize and/or maximize. Mobile panels open.
    pub fn restore(&mut self, id: &str) {
        if self.mobile.contains(id) {
            self.open_mobile_panel(id);
            return;
        }
        let Some(window) = self.windows.get_mut(id) else {
            return;
        };
        if window.minimized {
            window.minimized = false;
            window.visible = true;
            self.minimize_dock.remove(id);
            self.focus_frame(&FrameId::window(id));
            tracing::debug!(window_id = %id, "restored from dock");
            return;
        }
        if window.maximized {
            self.restore_maximized(id);
            self.focus_frame(&FrameId::window(id));
            self.persist_window(id);
        }
    }

    fn restore_maximized(&mut self, id: &str) {
        let Some(window) = self.windows.get_mut(id) else {
            return;
        };
        window.maximized = false;
        if let Some(rect) = window.pre_maximize.take() {
            window.rect = rect;
        }
        tracing::debug!(window_id = %id, rect = ?window.rect, "restored from maximized");
    }

    /// Titlebar double-click and the maximize control.
    pub fn toggle_maximize(&mut self, id: &str) {
        let Some(window) = self.windows.get(id) else {
            return;
        };
        if !window.maximizable() {
            return;
        }
        if window.maximized {
            self.restore(id);
        } else {
            self.maximize(id);
        }
    }
}
