use ratatui::layout::Rect;

use crate::ui::UiFrame;

pub mod status_bar;

pub use status_bar::StatusBar;

pub use crate::component_context::ComponentContext;

/// Content that draws itself inside a window body, tab panel or sheet.
pub trait Component {
    fn resize(&mut self, _area: Rect, _ctx: &ComponentContext) {}

    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ComponentContext);
}
