//! UiFrame and the scene renderer.
//!
//! `UiFrame` is a thin wrapper around a ratatui buffer that clips every draw
//! to the visible area, so content components can compute rectangles that
//! drift off-screen without guarding each write.
//!
//! `render_scene` paints the manager's retained scene bottom to top: free
//! windows and tab groups in stack order, the merge highlight, the snap
//! preview, the minimize dock and finally the mobile overlay and sheet.
//! Geometry is kept in host pixels; `CellScale` maps it onto terminal cells.

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Clear, Paragraph, Widget, Wrap};

use crate::component_context::ComponentContext;
use crate::input::Point;
use crate::layout::FloatRect;
use crate::theme;
use crate::window::decorator::{
    WindowDecorator, control_rects, dock_button_rect, dock_strip, group_close_rect, tab_rects,
};
use crate::window::{ContentNode, FrameId, WindowManager};

/// Wrapper around a ratatui buffer that clamps drawing to the visible area.
pub struct UiFrame<'a> {
    area: Rect,
    buffer: &'a mut Buffer,
}

impl<'a> UiFrame<'a> {
    pub fn new(frame: &'a mut Frame<'_>) -> Self {
        let area = frame.area();
        let buffer = frame.buffer_mut();
        Self { area, buffer }
    }

    /// Construct a `UiFrame` directly from an area and buffer (offscreen
    /// rendering and tests).
    pub fn from_parts(area: Rect, buffer: &'a mut Buffer) -> Self {
        Self { area, buffer }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn buffer_mut(&mut self) -> &mut Buffer {
        self.buffer
    }

    fn clip_rect(&self, rect: Rect) -> Option<Rect> {
        let clipped = rect.intersection(self.area);
        if clipped.width == 0 || clipped.height == 0 {
            None
        } else {
            Some(clipped)
        }
    }

    pub fn render_widget<W>(&mut self, widget: W, area: Rect)
    where
        W: Widget,
    {
        if let Some(clipped) = self.clip_rect(area) {
            widget.render(clipped, self.buffer);
        }
    }
}

pub(crate) fn safe_set_string(
    buffer: &mut Buffer,
    bounds: Rect,
    x: u16,
    y: u16,
    text: &str,
    style: Style,
) {
    if bounds.width == 0 || bounds.height == 0 {
        return;
    }
    let max_x = bounds.x.saturating_add(bounds.width);
    let max_y = bounds.y.saturating_add(bounds.height);
    if x < bounds.x || x >= max_x || y < bounds.y || y >= max_y {
        return;
    }
    let available = max_x.saturating_sub(x);
    if available == 0 {
        return;
    }
    let text = truncate_to_width(text, available as usize);
    buffer.set_string(x, y, text, style);
}

pub(crate) fn truncate_to_width(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    value.chars().take(width).collect()
}

/// Pixels per terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellScale {
    pub cell_width: u16,
    pub cell_height: u16,
}

impl Default for CellScale {
    fn default() -> Self {
        Self::new(8, 18)
    }
}

impl CellScale {
    pub fn new(cell_width: u16, cell_height: u16) -> Self {
        Self {
            cell_width: cell_width.max(1),
            cell_height: cell_height.max(1),
        }
    }

    /// Host size in pixels for a terminal area.
    pub fn host_size(&self, area: Rect) -> (i32, i32) {
        (
            area.width as i32 * self.cell_width as i32,
            area.height as i32 * self.cell_height as i32,
        )
    }

    /// Pixel at the center of a cell.
    pub fn to_pixels(&self, column: u16, row: u16) -> Point {
        let cw = self.cell_width as i32;
        let ch = self.cell_height as i32;
        Point::new(column as i32 * cw + cw / 2, row as i32 * ch + ch / 2)
    }

    /// Smallest cell rectangle covering a pixel rectangle; may be negative.
    pub fn to_cells(&self, rect: FloatRect) -> FloatRect {
        let cw = self.cell_width as i32;
        let ch = self.cell_height as i32;
        let x0 = rect.x.div_euclid(cw);
        let y0 = rect.y.div_euclid(ch);
        let x1 = -(-rect.right()).div_euclid(cw);
        let y1 = -(-rect.bottom()).div_euclid(ch);
        FloatRect::new(
            x0,
            y0,
            (x1 - x0).clamp(0, u16::MAX as i32) as u16,
            (y1 - y0).clamp(0, u16::MAX as i32) as u16,
        )
    }

    /// Cell rectangle clipped to `area`; `None` when nothing is visible.
    pub fn to_area(&self, rect: FloatRect, area: Rect) -> Option<Rect> {
        clip_signed(self.to_cells(rect), area)
    }
}

fn clip_signed(rect: FloatRect, area: Rect) -> Option<Rect> {
    let left = rect.x.max(area.x as i32);
    let top = rect.y.max(area.y as i32);
    let right = rect.right().min(area.right() as i32);
    let bottom = rect.bottom().min(area.bottom() as i32);
    if right <= left || bottom <= top {
        return None;
    }
    Some(Rect::new(
        left as u16,
        top as u16,
        (right - left) as u16,
        (bottom - top) as u16,
    ))
}

/// Cells inside the border, below the header row.
fn body_area(area: Rect) -> Rect {
    Rect::new(
        area.x.saturating_add(1),
        area.y.saturating_add(1),
        area.width.saturating_sub(2),
        area.height.saturating_sub(2),
    )
}

fn render_content(
    frame: &mut UiFrame<'_>,
    nodes: &mut [ContentNode],
    area: Rect,
    ctx: &ComponentContext,
) {
    let mut remaining = area;
    for node in nodes {
        if remaining.height == 0 || remaining.width == 0 {
            break;
        }
        match node {
            ContentNode::Text(text) => {
                let rows = (text.lines().count().max(1) as u16).min(remaining.height);
                let slot = Rect { height: rows, ..remaining };
                frame.render_widget(
                    Paragraph::new(text.as_str()).wrap(Wrap { trim: false }),
                    slot,
                );
                remaining.y = remaining.y.saturating_add(rows);
                remaining.height -= rows;
            }
            ContentNode::Component(component) => {
                component.resize(remaining, ctx);
                component.render(frame, remaining, ctx);
                break;
            }
        }
    }
}

fn outline(frame: &mut UiFrame<'_>, area: Rect, color: ratatui::style::Color) {
    let Some(area) = frame.clip_rect(area) else {
        return;
    };
    let buffer = frame.buffer_mut();
    let right = area.right().saturating_sub(1);
    let bottom = area.bottom().saturating_sub(1);
    for x in area.left()..area.right() {
        for y in [area.y, bottom] {
            if let Some(cell) = buffer.cell_mut((x, y)) {
                cell.set_fg(color);
            }
        }
    }
    for y in area.top()..area.bottom() {
        for x in [area.x, right] {
            if let Some(cell) = buffer.cell_mut((x, y)) {
                cell.set_fg(color);
            }
        }
    }
}

/// Paint the whole scene into `frame`.
pub fn render_scene(
    frame: &mut UiFrame<'_>,
    wm: &mut WindowManager,
    scale: CellScale,
    decorator: &dyn WindowDecorator,
) {
    let area = frame.area();
    let order = wm.stack.to_vec();
    for id in &order {
        match id {
            FrameId::Window(window_id) => render_window(frame, wm, window_id, scale, decorator),
            FrameId::Group(group_id) => render_group(frame, wm, *group_id, scale, decorator),
        }
        if wm.merge_target.as_ref() == Some(id)
            && let Some(rect) = wm.frame(id).map(|f| f.rect())
            && let Some(cells) = scale.to_area(rect, area)
        {
            outline(frame, cells, theme::merge_highlight());
        }
    }

    if let Some(preview) = wm.snap_preview
        && let Some(cells) = scale.to_area(preview.rect, area)
    {
        outline(frame, cells, theme::snap_preview());
    }

    let entries = wm.minimize_dock.entries();
    if !entries.is_empty() {
        let strip = dock_strip(wm.viewport(), wm.host().inner_height());
        for (index, entry) in entries.iter().enumerate() {
            if let Some(cells) = scale.to_area(dock_button_rect(strip, index), area) {
                let label = match &entry.icon {
                    Some(icon) => format!("{icon} {}", entry.label),
                    None => entry.label.clone(),
                };
                decorator.render_button(frame, Rect { height: 1, ..cells }, &label, false);
            }
        }
    }

    render_mobile(frame, wm, scale, decorator);
}

fn render_window(
    frame: &mut UiFrame<'_>,
    wm: &mut WindowManager,
    id: &str,
    scale: CellScale,
    decorator: &dyn WindowDecorator,
) {
    let area = frame.area();
    let Some(window) = wm.windows.get(id) else {
        return;
    };
    if !window.is_free_visible() {
        return;
    }
    let Some(cells) = scale.to_area(window.rect, area) else {
        return;
    };
    frame.render_widget(Clear, cells);
    let title = match window.icon() {
        Some(icon) => format!("{icon} {}", window.title()),
        None => window.title().to_string(),
    };
    decorator.render_frame(frame, cells, &title, window.is_focused());
    for (action, rect) in control_rects(window, &wm.config) {
        if let Some(button) = scale.to_area(rect, area) {
            decorator.render_button(frame, Rect { height: 1, ..button }, action.label(), false);
        }
    }
    let ctx = ComponentContext::new(window.is_focused());
    if let Some(window) = wm.windows.get_mut(id) {
        render_content(frame, &mut window.content.children, body_area(cells), &ctx);
    }
}

fn render_group(
    frame: &mut UiFrame<'_>,
    wm: &mut WindowManager,
    id: crate::window::GroupId,
    scale: CellScale,
    decorator: &dyn WindowDecorator,
) {
    let area = frame.area();
    let Some(group) = wm.groups.get(&id) else {
        return;
    };
    let Some(cells) = scale.to_area(group.rect, area) else {
        return;
    };
    frame.render_widget(Clear, cells);
    let title = group
        .active()
        .and_then(|active| wm.windows.get(active))
        .map(|w| w.title().to_string())
        .unwrap_or_default();
    decorator.render_frame(frame, cells, &title, group.is_focused());
    if let Some(close) = scale.to_area(group_close_rect(group, &wm.config), area) {
        decorator.render_button(frame, Rect { height: 1, ..close }, "x", false);
    }
    let mut tab_row = None;
    for (member, rect) in tab_rects(group, &wm.config) {
        let Some(tab) = scale.to_area(rect, area) else {
            continue;
        };
        let label = wm
            .windows
            .get(&member)
            .map(|w| format!("{} x", w.title()))
            .unwrap_or_default();
        let active = group.active() == Some(member.as_str());
        let row = Rect { height: 1, ..tab };
        decorator.render_button(frame, row, &label, active);
        tab_row = Some(row.y);
    }
    let mut body = body_area(cells);
    if let Some(row) = tab_row
        && row >= body.y
    {
        let skip = (row - body.y + 1).min(body.height);
        body.y += skip;
        body.height -= skip;
    }
    let ctx = ComponentContext::new(group.is_focused());
    if let Some(panel) = wm.groups.get_mut(&id).and_then(|g| {
        let active = g.active.clone()?;
        g.panel_mut(&active)
    }) {
        render_content(frame, &mut panel.content, body, &ctx);
    }
}

fn render_mobile(
    frame: &mut UiFrame<'_>,
    wm: &mut WindowManager,
    scale: CellScale,
    decorator: &dyn WindowDecorator,
) {
    let area = frame.area();
    let Some(sheet) = wm.mobile_sheet_rect() else {
        return;
    };
    let overlay = Style::default()
        .bg(theme::overlay_bg())
        .fg(theme::overlay_fg());
    frame.buffer_mut().set_style(area, overlay);
    let Some(cells) = scale.to_area(sheet, area) else {
        return;
    };
    frame.render_widget(Clear, cells);
    let Some(id) = wm.mobile.open_id().map(str::to_string) else {
        return;
    };
    let Some(panel) = wm.mobile.get_mut(&id) else {
        return;
    };
    decorator.render_frame(frame, cells, &panel.title, true);
    let ctx = ComponentContext::new(true).with_sheet(true);
    render_content(frame, &mut panel.content.children, body_area(cells), &ctx);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::StaticHost;
    use crate::persistence::MemoryStore;
    use crate::window::WindowOptions;
    use crate::window::decorator::OpenStepDecorator;

    fn row(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn cell_scale_covers_partial_cells() {
        let scale = CellScale::new(10, 20);
        assert_eq!(
            scale.to_cells(FloatRect::new(-5, 15, 20, 10)),
            FloatRect::new(-1, 0, 3, 2)
        );
        assert_eq!(scale.to_pixels(2, 1), Point::new(25, 30));
        assert_eq!(scale.to_area(FloatRect::new(-50, -50, 10, 10), Rect::new(0, 0, 5, 5)), None);
    }

    #[test]
    fn truncate_counts_chars() {
        assert_eq!(truncate_to_width("héllo", 3), "hél");
        assert_eq!(truncate_to_width("ab", 3), "ab");
    }

    #[test]
    fn scene_draws_titles_content_and_dock() {
        let area = Rect::new(0, 0, 40, 12);
        let scale = CellScale::new(20, 10);
        let (w, h) = scale.host_size(area);
        let host = StaticHost::new(w, h).with_property("--bottom-nav-height", "20px");
        let mut wm = WindowManager::with_defaults(host, MemoryStore::new());
        wm.create(
            WindowOptions::new("a")
                .title("Levels")
                .geometry(0, 0, 400, 60)
                .content("hello"),
        );
        wm.create(WindowOptions::new("b").title("Hidden").geometry(450, 0, 100, 60));
        wm.minimize("b");

        let mut buffer = Buffer::empty(area);
        let mut frame = UiFrame::from_parts(area, &mut buffer);
        render_scene(&mut frame, &mut wm, scale, &OpenStepDecorator);

        assert!(row(&buffer, 0).contains("Levels"));
        assert!(row(&buffer, 1).contains("hello"));
        // A 20px bottom bar is thinner than a dock button, so the strip
        // overlaps the bottom of the viewport.
        assert!(row(&buffer, 9).contains("Hidden"));
    }

    #[test]
    fn mobile_sheet_renders_over_overlay() {
        let area = Rect::new(0, 0, 30, 20);
        let scale = CellScale::new(10, 20);
        let (w, h) = scale.host_size(area);
        let mut wm = WindowManager::with_defaults(StaticHost::new(w, h), MemoryStore::new());
        wm.create(WindowOptions::new("p").title("Info").size(300, 100).content("stats"));
        let mut buffer = Buffer::empty(area);
        let mut frame = UiFrame::from_parts(area, &mut buffer);
        render_scene(&mut frame, &mut wm, scale, &OpenStepDecorator);
        // Sheet is half the host height: rows 10..20.
        assert!(row(&buffer, 10).contains("Info"));
        assert!(row(&buffer, 11).contains("stats"));
    }
}
