//! Window chrome: where the titlebar controls, tabs and handles sit (in host
//! pixels) and how they are painted onto the terminal.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use super::tabs::{GroupId, TabGroup};
use super::{FrameId, Window};
use crate::config::WmConfig;
use crate::constants::{DOCK_BUTTON_WIDTH, DOCK_MIN_HEIGHT};
use crate::host::Viewport;
use crate::input::Point;
use crate::layout::floating::resize_handles_for_rect;
use crate::layout::{FloatRect, ResizeEdge, clamp_dim};
use crate::theme;
use crate::ui::{UiFrame, safe_set_string};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    Close,
    Maximize,
    Minimize,
    Drag,
}

impl HeaderAction {
    pub fn label(self) -> &'static str {
        match self {
            HeaderAction::Close => "x",
            HeaderAction::Maximize => "+",
            HeaderAction::Minimize => "-",
            HeaderAction::Drag => "",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupHit {
    Close,
    Tab(String),
    TabClose(String),
    Bar,
}

/// What a pointer-down landed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HitTarget {
    Window(String, HeaderAction),
    Resize(FrameId, ResizeEdge),
    Group(GroupId, GroupHit),
    Body(FrameId),
    DockButton(String),
    MobileOverlay,
    MobileHeader(String),
    MobileBody(String),
}

/// Titlebar controls from right to left: close, maximize, minimize. Disabled
/// controls take no space.
pub fn control_rects(window: &Window, config: &WmConfig) -> Vec<(HeaderAction, FloatRect)> {
    let bar = window.rect.top_strip(config.titlebar_height);
    let mut right = bar.right();
    let mut controls = Vec::with_capacity(3);
    for (enabled, action) in [
        (window.closable(), HeaderAction::Close),
        (window.maximizable(), HeaderAction::Maximize),
        (window.minimizable(), HeaderAction::Minimize),
    ] {
        if !enabled {
            continue;
        }
        let left = (right - config.control_width).max(bar.x);
        controls.push((
            action,
            FloatRect::new(left, bar.y, clamp_dim(right - left), bar.height),
        ));
        right = left;
    }
    controls
}

pub fn hit_test_window(window: &Window, point: Point, config: &WmConfig) -> Option<HitTarget> {
    if window.resizable && !window.maximized {
        let handles = resize_handles_for_rect(window.rect, config.resize_handle_size);
        if let Some(handle) = handles.iter().find(|h| h.rect.contains(point)) {
            return Some(HitTarget::Resize(FrameId::window(&window.id), handle.edge));
        }
    }
    if !window.rect.contains(point) {
        return None;
    }
    if window.rect.top_strip(config.titlebar_height).contains(point) {
        let action = control_rects(window, config)
            .into_iter()
            .find(|(_, rect)| rect.contains(point))
            .map(|(action, _)| action)
            .unwrap_or(HeaderAction::Drag);
        return Some(HitTarget::Window(window.id.clone(), action));
    }
    Some(HitTarget::Body(FrameId::window(&window.id)))
}

/// The group's drag bar (top strip, close button at its right end).
pub fn group_drag_bar(group: &TabGroup, config: &WmConfig) -> FloatRect {
    group.rect.top_strip(config.group_drag_bar_height)
}

pub fn group_close_rect(group: &TabGroup, config: &WmConfig) -> FloatRect {
    let bar = group_drag_bar(group, config);
    let left = (bar.right() - config.control_width).max(bar.x);
    FloatRect::new(left, bar.y, clamp_dim(bar.right() - left), bar.height)
}

/// One rectangle per member, left to right under the drag bar.
pub fn tab_rects(group: &TabGroup, config: &WmConfig) -> Vec<(String, FloatRect)> {
    let rect = group.rect;
    let top = rect.y + config.group_drag_bar_height;
    let height = clamp_dim(config.group_bar_height - config.group_drag_bar_height);
    group
        .members
        .iter()
        .enumerate()
        .filter_map(|(index, member)| {
            let left = rect.x + config.tab_width * index as i32;
            let right = (left + config.tab_width).min(rect.right());
            (right > left).then(|| {
                (
                    member.clone(),
                    FloatRect::new(left, top, clamp_dim(right - left), height),
                )
            })
        })
        .collect()
}

pub fn tab_close_rect(tab: FloatRect, config: &WmConfig) -> FloatRect {
    let left = (tab.right() - config.tab_close_width).max(tab.x);
    FloatRect::new(left, tab.y, clamp_dim(tab.right() - left), tab.height)
}

pub fn hit_test_group(group: &TabGroup, point: Point, config: &WmConfig) -> Option<HitTarget> {
    let handles = resize_handles_for_rect(group.rect, config.resize_handle_size);
    if let Some(handle) = handles.iter().find(|h| h.rect.contains(point)) {
        return Some(HitTarget::Resize(FrameId::Group(group.id), handle.edge));
    }
    if !group.rect.contains(point) {
        return None;
    }
    if group_drag_bar(group, config).contains(point) {
        let hit = if group_close_rect(group, config).contains(point) {
            GroupHit::Close
        } else {
            GroupHit::Bar
        };
        return Some(HitTarget::Group(group.id, hit));
    }
    if group.rect.top_strip(config.group_bar_height).contains(point) {
        let hit = tab_rects(group, config)
            .into_iter()
            .find(|(_, rect)| rect.contains(point))
            .map(|(member, rect)| {
                if tab_close_rect(rect, config).contains(point) {
                    GroupHit::TabClose(member)
                } else {
                    GroupHit::Tab(member)
                }
            })
            .unwrap_or(GroupHit::Bar);
        return Some(HitTarget::Group(group.id, hit));
    }
    Some(HitTarget::Body(FrameId::Group(group.id)))
}

/// Strip below the usable viewport that hosts minimize-dock buttons. When
/// the bottom bar is thinner than a button, the strip overlaps the viewport.
pub fn dock_strip(viewport: Viewport, host_height: i32) -> FloatRect {
    let available = host_height - viewport.height;
    let (y, height) = if available >= DOCK_MIN_HEIGHT {
        (viewport.height, available)
    } else {
        ((host_height - DOCK_MIN_HEIGHT).max(0), DOCK_MIN_HEIGHT)
    };
    FloatRect::new(0, y, clamp_dim(viewport.width), clamp_dim(height))
}

pub fn dock_button_rect(strip: FloatRect, index: usize) -> FloatRect {
    FloatRect::new(
        strip.x + DOCK_BUTTON_WIDTH * index as i32,
        strip.y,
        clamp_dim(DOCK_BUTTON_WIDTH),
        strip.height,
    )
}

/// Paints frame chrome in terminal cells.
pub trait WindowDecorator: std::fmt::Debug {
    fn render_frame(&self, frame: &mut UiFrame<'_>, area: Rect, title: &str, focused: bool);

    fn render_button(&self, frame: &mut UiFrame<'_>, area: Rect, label: &str, active: bool);
}

#[derive(Debug, Default)]
pub struct OpenStepDecorator;

impl WindowDecorator for OpenStepDecorator {
    fn render_frame(&self, frame: &mut UiFrame<'_>, area: Rect, title: &str, focused: bool) {
        let bounds = frame.area();
        let area = area.intersection(bounds);
        if area.width < 2 || area.height < 2 {
            return;
        }
        let header_style = if focused {
            Style::default()
                .bg(theme::decorator_header_bg())
                .fg(theme::decorator_header_fg())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .bg(theme::decorator_inactive_bg())
                .fg(theme::decorator_header_fg())
        };
        let border_style = Style::default().fg(theme::decorator_border());

        let left = area.x;
        let top = area.y;
        let right = area.right().saturating_sub(1);
        let bottom = area.bottom().saturating_sub(1);
        let buffer = frame.buffer_mut();

        for x in left..=right {
            let (top_symbol, bottom_symbol) = if x == left {
                ("┌", "└")
            } else if x == right {
                ("┐", "┘")
            } else {
                ("─", "─")
            };
            if let Some(cell) = buffer.cell_mut((x, top)) {
                cell.set_symbol(top_symbol);
                cell.set_style(header_style);
            }
            if let Some(cell) = buffer.cell_mut((x, bottom)) {
                cell.set_symbol(bottom_symbol);
                cell.set_style(border_style);
            }
        }
        for y in top.saturating_add(1)..bottom {
            for x in [left, right] {
                if let Some(cell) = buffer.cell_mut((x, y)) {
                    cell.set_symbol("│");
                    cell.set_style(border_style);
                }
            }
        }

        // Title starts after the corner so it never covers controls on the right.
        let title = format!(" {title} ");
        safe_set_string(buffer, area, left.saturating_add(1), top, &title, header_style);
    }

    fn render_button(&self, frame: &mut UiFrame<'_>, area: Rect, label: &str, active: bool) {
        let bounds = frame.area();
        let area = area.intersection(bounds);
        if area.width == 0 || area.height == 0 {
            return;
        }
        let style = if active {
            Style::default()
                .bg(theme::panel_active_bg())
                .fg(theme::panel_active_fg())
        } else {
            Style::default().bg(theme::panel_bg()).fg(theme::panel_fg())
        };
        let buffer = frame.buffer_mut();
        for x in area.left()..area.right() {
            if let Some(cell) = buffer.cell_mut((x, area.y)) {
                cell.set_symbol(" ");
                cell.set_style(style);
            }
        }
        safe_set_string(buffer, area, area.x, area.y, label, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::StaticHost;
    use crate::persistence::MemoryStore;
    use crate::window::{WindowManager, WindowOptions};

    fn manager() -> WindowManager {
        let mut wm = WindowManager::with_defaults(StaticHost::new(1280, 800), MemoryStore::new());
        wm.create(WindowOptions::new("a").geometry(100, 100, 400, 300));
        wm
    }

    #[test]
    fn titlebar_controls_from_right() {
        let wm = manager();
        let window = wm.window("a").unwrap();
        let config = wm.config();
        let hit = |x, y| hit_test_window(window, Point::new(x, y), config);
        assert_eq!(
            hit(490, 110),
            Some(HitTarget::Window("a".into(), HeaderAction::Close))
        );
        assert_eq!(
            hit(460, 110),
            Some(HitTarget::Window("a".into(), HeaderAction::Maximize))
        );
        assert_eq!(
            hit(430, 110),
            Some(HitTarget::Window("a".into(), HeaderAction::Minimize))
        );
        assert_eq!(
            hit(200, 110),
            Some(HitTarget::Window("a".into(), HeaderAction::Drag))
        );
        assert_eq!(hit(200, 200), Some(HitTarget::Body(FrameId::window("a"))));
        assert_eq!(
            hit(499, 399),
            Some(HitTarget::Resize(FrameId::window("a"), ResizeEdge::BottomRight))
        );
        assert_eq!(hit(700, 700), None);
    }

    #[test]
    fn group_regions() {
        let mut wm = manager();
        wm.create(WindowOptions::new("b"));
        let id = wm.create_group("a", "b", None).unwrap();
        let group = wm.group(id).unwrap();
        let config = wm.config();
        let hit = |x, y| hit_test_group(group, Point::new(x, y), config);
        assert_eq!(hit(490, 110), Some(HitTarget::Group(id, GroupHit::Close)));
        assert_eq!(hit(200, 110), Some(HitTarget::Group(id, GroupHit::Bar)));
        assert_eq!(
            hit(150, 140),
            Some(HitTarget::Group(id, GroupHit::Tab("a".into())))
        );
        assert_eq!(
            hit(230, 140),
            Some(HitTarget::Group(id, GroupHit::TabClose("a".into())))
        );
        assert_eq!(
            hit(300, 140),
            Some(HitTarget::Group(id, GroupHit::Tab("b".into())))
        );
        assert_eq!(hit(450, 140), Some(HitTarget::Group(id, GroupHit::Bar)));
    }

    #[test]
    fn dock_strip_uses_bottom_bar_when_tall_enough() {
        let viewport = Viewport {
            width: 1280,
            height: 736,
        };
        assert_eq!(dock_strip(viewport, 800), FloatRect::new(0, 736, 1280, 64));
        let flush = Viewport {
            width: 1280,
            height: 800,
        };
        assert_eq!(dock_strip(flush, 800), FloatRect::new(0, 776, 1280, 24));
        assert_eq!(
            dock_button_rect(FloatRect::new(0, 736, 1280, 64), 2),
            FloatRect::new(320, 736, 160, 64)
        );
    }
}
