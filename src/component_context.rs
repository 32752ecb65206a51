//! Shared component rendering context
//!
//! `ComponentContext` carries UI metadata that content components may need
//! while rendering inside a window body. It keeps the component trait stable
//! and avoids ad-hoc boolean parameters.

/// Context passed to `Component` trait methods describing UI state.
///
/// - `focused`: whether the hosting window or group is focused.
/// - `sheet`: whether the content is shown in a mobile bottom sheet.
#[derive(Debug, Clone, Copy)]
pub struct ComponentContext {
    focused: bool,
    sheet: bool,
}

impl ComponentContext {
    pub const fn new(focused: bool) -> Self {
        Self {
            focused,
            sheet: false,
        }
    }

    pub const fn focused(&self) -> bool {
        self.focused
    }

    pub const fn sheet(&self) -> bool {
        self.sheet
    }

    pub const fn with_focus(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub const fn with_sheet(mut self, sheet: bool) -> Self {
        self.sheet = sheet;
        self
    }
}

impl Default for ComponentContext {
    fn default() -> Self {
        Self::new(false)
    }
}
