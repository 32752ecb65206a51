use ratatui::layout::Rect;
use ratatui::style::Style;

use super::{Component, ComponentContext};
use crate::ui::{UiFrame, safe_set_string, truncate_to_width};

/// One-row bar with left- and right-aligned text. The demo uses it as the
/// host's bottom navigation bar.
pub struct StatusBar {
    left: String,
    right: String,
    style: Style,
}

impl StatusBar {
    pub fn new() -> Self {
        Self {
            left: String::new(),
            right: String::new(),
            style: Style::default(),
        }
    }

    pub fn set_left<T: Into<String>>(&mut self, value: T) {
        self.left = value.into();
    }

    pub fn set_right<T: Into<String>>(&mut self, value: T) {
        self.right = value.into();
    }

    pub fn set_style(&mut self, style: Style) {
        self.style = style;
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for StatusBar {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, _ctx: &ComponentContext) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let width = area.width as usize;
        let buffer = frame.buffer_mut();
        let bounds = area.intersection(buffer.area);
        if bounds.width == 0 || bounds.height == 0 {
            return;
        }
        for x in bounds.left()..bounds.right() {
            if let Some(cell) = buffer.cell_mut((x, bounds.y)) {
                cell.set_symbol(" ");
                cell.set_style(self.style);
            }
        }

        let left = truncate_to_width(&self.left, width);
        safe_set_string(buffer, bounds, area.x, area.y, &left, self.style);

        if !self.right.is_empty() {
            let right = truncate_to_width(&self.right, width);
            let right_width = right.chars().count();
            if right_width + left.chars().count() < width {
                let start_x = area.x.saturating_add((width - right_width) as u16);
                safe_set_string(buffer, bounds, start_x, area.y, &right, self.style);
            }
        }
    }
}
