use super::tabs::GroupId;
use super::window_manager::WindowManager;
use super::{ContentNode, WindowState};
use crate::layout::DockZone;

/// Borrowed handle to one window (or mobile panel) of a manager.
///
/// Every operation forwards to the manager by id, so a handle whose window
/// has been closed simply does nothing.
#[derive(Debug)]
pub struct WindowHandle<'a> {
    wm: &'a mut WindowManager,
    id: String,
}

impl<'a> WindowHandle<'a> {
    pub(crate) fn new(wm: &'a mut WindowManager, id: String) -> Self {
        Self { wm, id }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn manager(&mut self) -> &mut WindowManager {
        self.wm
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.wm.set_title(&self.id, title);
        self
    }

    /// Replace the content children.
    pub fn set_content(&mut self, content: impl Into<ContentNode>) -> &mut Self {
        self.wm.set_content(&self.id, content);
        self
    }

    pub fn append_content(&mut self, content: impl Into<ContentNode>) -> &mut Self {
        self.wm.append_content(&self.id, content);
        self
    }

    /// Wherever the content currently lives, including a parked tab panel.
    pub fn content(&self) -> Option<&[ContentNode]> {
        self.wm.content(&self.id)
    }

    pub fn close(self) -> bool {
        self.wm.close(&self.id)
    }

    pub fn minimize(&mut self) {
        self.wm.minimize(&self.id);
    }

    pub fn maximize(&mut self) {
        self.wm.maximize(&self.id);
    }

    pub fn restore(&mut self) {
        self.wm.restore(&self.id);
    }

    pub fn focus(&mut self) {
        self.wm.focus(&self.id);
    }

    pub fn dock(&mut self, zone: DockZone) -> bool {
        self.wm.dock(&self.id, zone)
    }

    pub fn undock(&mut self) -> bool {
        self.wm.undock(&self.id)
    }

    pub fn resize(&mut self, width: u16, height: u16) -> bool {
        self.wm.resize_window(&self.id, width, height)
    }

    pub fn move_to(&mut self, x: i32, y: i32) -> bool {
        self.wm.move_window(&self.id, x, y)
    }

    pub fn show(&mut self) {
        self.wm.show(&self.id);
    }

    pub fn hide(&mut self) {
        self.wm.hide(&self.id);
    }

    pub fn is_visible(&self) -> bool {
        self.wm.is_visible(&self.id)
    }

    pub fn is_docked(&self) -> bool {
        self.state().is_some_and(|s| s.docked.is_some())
    }

    pub fn is_in_tab_group(&self) -> bool {
        self.tab_group().is_some()
    }

    pub fn tab_group(&self) -> Option<GroupId> {
        self.wm.window(&self.id).and_then(|w| w.tab_group())
    }

    pub fn detach_from_tabs(&mut self) -> bool {
        self.wm.detach(&self.id)
    }

    /// Merge this window into `target`'s group (forming one if needed).
    pub fn merge_with(&mut self, target: &str) -> bool {
        self.wm.merge(&self.id, target)
    }

    pub fn state(&self) -> Option<WindowState> {
        self.wm.state(&self.id)
    }
}
