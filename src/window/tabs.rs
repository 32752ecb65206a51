//! Tab groups: several windows sharing one frame, one visible at a time.
//!
//! A grouped window is hidden and leaves the stack; its content children are
//! parked in the group's panel for that window and move back when the window
//! is freed again.

use std::fmt;

use super::window_manager::WindowManager;
use super::{ContentNode, FrameId, StackableFrame};
use crate::input::Point;
use crate::layout::{DockZone, FloatRect};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupId(u64);

impl GroupId {
    pub const fn new(seq: u64) -> Self {
        Self(seq)
    }

    pub fn seq(self) -> u64 {
        self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tab-group-{}", self.0)
    }
}

/// Parked content of one member.
#[derive(Debug)]
pub struct TabPanel {
    pub(crate) window: String,
    pub(crate) content: Vec<ContentNode>,
    pub(crate) visible: bool,
}

impl TabPanel {
    pub fn window(&self) -> &str {
        &self.window
    }

    pub fn content(&self) -> &[ContentNode] {
        &self.content
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

#[derive(Debug)]
pub struct TabGroup {
    pub(crate) id: GroupId,
    pub(crate) rect: FloatRect,
    pub(crate) min_width: u16,
    pub(crate) min_height: u16,
    pub(crate) docked: Option<DockZone>,
    pub(crate) pre_dock: Option<FloatRect>,
    pub(crate) members: Vec<String>,
    pub(crate) active: Option<String>,
    pub(crate) panels: Vec<TabPanel>,
    pub(crate) focused: bool,
}

impl TabGroup {
    pub(crate) fn new(id: GroupId, rect: FloatRect, min_width: u16, min_height: u16) -> Self {
        Self {
            id,
            rect,
            min_width,
            min_height,
            docked: None,
            pre_dock: None,
            members: Vec::new(),
            active: None,
            panels: Vec::new(),
            focused: false,
        }
    }

    pub fn id(&self) -> GroupId {
        self.id
    }

    pub fn rect(&self) -> FloatRect {
        self.rect
    }

    /// Member window ids in tab order.
    pub fn members(&self) -> &[String] {
        &self.members
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn contains(&self, window: &str) -> bool {
        self.members.iter().any(|m| m == window)
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn panels(&self) -> &[TabPanel] {
        &self.panels
    }

    pub fn panel(&self, window: &str) -> Option<&TabPanel> {
        self.panels.iter().find(|p| p.window == window)
    }

    pub(crate) fn panel_mut(&mut self, window: &str) -> Option<&mut TabPanel> {
        self.panels.iter_mut().find(|p| p.window == window)
    }

    fn set_active(&mut self, window: &str) {
        self.active = Some(window.to_string());
        for panel in &mut self.panels {
            panel.visible = panel.window == window;
        }
    }
}

impl StackableFrame for TabGroup {
    fn rect(&self) -> FloatRect {
        self.rect
    }

    fn set_rect(&mut self, rect: FloatRect) {
        self.rect = rect;
    }

    fn min_size(&self) -> (u16, u16) {
        (self.min_width, self.min_height)
    }

    fn docked(&self) -> Option<DockZone> {
        self.docked
    }

    fn pre_dock(&self) -> Option<FloatRect> {
        self.pre_dock
    }

    fn set_dock_state(&mut self, docked: Option<DockZone>, pre_dock: Option<FloatRect>) {
        self.docked = docked;
        self.pre_dock = pre_dock;
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn is_resizable(&self) -> bool {
        true
    }
}

/// Where a window lands when it leaves its group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DetachPlacement {
    /// Stays hidden; it is about to join another group.
    ForMerge,
    /// Just inside the former group's origin.
    Offset,
    /// Centered horizontally under the pointer with the titlebar beneath it.
    UnderPointer(Point),
}

impl WindowManager {
    /// Create a group from two windows using `first`'s geometry and dock
    /// state. The active tab is `active` when given, otherwise `first`.
    pub fn create_group(
        &mut self,
        first: &str,
        second: &str,
        active: Option<&str>,
    ) -> Option<GroupId> {
        if first == second || !self.windows.contains_key(first) || !self.windows.contains_key(second)
        {
            return None;
        }
        if self.windows.get(first).is_some_and(|w| w.tab_group.is_some()) {
            self.detach_with(first, DetachPlacement::ForMerge);
        }
        self.prepare_for_group(first);
        let window = self.windows.get(first)?;
        let (rect, docked, pre_dock) = (window.rect, window.docked, window.pre_dock);

        let id = GroupId::new(self.next_group_seq);
        self.next_group_seq += 1;
        let mut group = TabGroup::new(
            id,
            rect,
            self.config.group_min_width,
            self.config.group_min_height,
        );
        group.docked = docked;
        group.pre_dock = pre_dock;
        self.groups.insert(id, group);
        self.stack.push(FrameId::Group(id));

        self.add_to_group(first, id, false);
        self.add_to_group(second, id, false);
        if let Some(active) = active {
            self.activate_tab(id, active);
        }
        self.focus_frame(&FrameId::Group(id));
        tracing::debug!(group = %id, first, second, "created tab group");
        Some(id)
    }

    /// Add `window` as a new tab. A window already in another group leaves
    /// it first.
    pub fn add_to_group(&mut self, window: &str, group: GroupId, set_active: bool) -> bool {
        let Some(target) = self.groups.get(&group) else {
            return false;
        };
        if target.contains(window) {
            return false;
        }
        let Some(current) = self.windows.get(window) else {
            return false;
        };
        if current.tab_group.is_some() {
            self.detach_with(window, DetachPlacement::ForMerge);
        }
        self.prepare_for_group(window);

        let Some(current) = self.windows.get_mut(window) else {
            return false;
        };
        current.visible = false;
        current.focused = false;
        current.tab_group = Some(group);
        current.docked = None;
        current.pre_dock = None;
        let content = current.content.take_children();
        let frame = FrameId::window(window);
        self.stack.remove(&frame);
        self.forget_frame(&frame);

        let Some(target) = self.groups.get_mut(&group) else {
            return false;
        };
        target.members.push(window.to_string());
        target.panels.push(TabPanel {
            window: window.to_string(),
            content,
            visible: false,
        });
        let only_member = target.members.len() == 1;
        if set_active || only_member {
            target.set_active(window);
        }
        tracing::debug!(group = %group, window_id = %window, "added tab");
        true
    }

    /// A window joining a group is neither minimized nor maximized.
    fn prepare_for_group(&mut self, window: &str) {
        let Some(current) = self.windows.get_mut(window) else {
            return;
        };
        if current.minimized {
            current.minimized = false;
            self.minimize_dock.remove(window);
        }
        let Some(current) = self.windows.get_mut(window) else {
            return;
        };
        if current.maximized {
            current.maximized = false;
            if let Some(rect) = current.pre_maximize.take() {
                current.rect = rect;
            }
        }
    }

    /// Show `window`'s panel and hide the others.
    pub fn activate_tab(&mut self, group: GroupId, window: &str) -> bool {
        let Some(target) = self.groups.get_mut(&group) else {
            return false;
        };
        if !target.contains(window) {
            return false;
        }
        target.set_active(window);
        true
    }

    /// Merge `source` into `target`: join the target's group, or form a new
    /// group with the target's geometry. The source becomes the active tab.
    pub fn merge(&mut self, source: &str, target: &str) -> bool {
        if source == target {
            return false;
        }
        let (Some(src), Some(dst)) = (self.windows.get(source), self.windows.get(target)) else {
            return false;
        };
        if src.tab_group.is_some() && src.tab_group == dst.tab_group {
            return false;
        }
        if src.tab_group.is_some() {
            self.detach_with(source, DetachPlacement::ForMerge);
        }
        let target_group = self.windows.get(target).and_then(|w| w.tab_group);
        let merged = match target_group {
            Some(group) => {
                let added = self.add_to_group(source, group, true);
                if added {
                    self.focus_frame(&FrameId::Group(group));
                }
                added
            }
            None => self.create_group(target, source, Some(source)).is_some(),
        };
        if merged {
            tracing::debug!(source, target, "merged windows");
        }
        merged
    }

    /// Merge a window into whatever frame it was dropped on.
    pub(crate) fn merge_into_frame(&mut self, source: &str, target: &FrameId) -> bool {
        match target {
            FrameId::Window(id) => self.merge(source, id),
            FrameId::Group(group) => {
                let added = self.add_to_group(source, *group, true);
                if added {
                    self.focus_frame(target);
                }
                added
            }
        }
    }

    /// Close one tab; the window closes like any other (callbacks included).
    pub fn close_tab(&mut self, group: GroupId, window: &str) -> bool {
        if !self.groups.get(&group).is_some_and(|g| g.contains(window)) {
            return false;
        }
        self.close(window)
    }

    /// Close every member. Members whose `on_close` cancels stay; the group
    /// settles around them.
    pub fn close_group(&mut self, group: GroupId) -> bool {
        let Some(target) = self.groups.get(&group) else {
            return false;
        };
        let members = target.members.clone();
        tracing::debug!(group = %group, count = members.len(), "closing tab group");
        for member in &members {
            self.close(member);
        }
        true
    }

    /// Free a tabbed window next to its former group's origin.
    pub fn detach(&mut self, window: &str) -> bool {
        self.detach_with(window, DetachPlacement::Offset)
    }

    /// Take a window out of its group and place it; the group settles
    /// afterwards (dissolving when one member is left).
    pub(crate) fn detach_with(&mut self, window: &str, placement: DetachPlacement) -> bool {
        let Some(group) = self.windows.get(window).and_then(|w| w.tab_group) else {
            return false;
        };
        let Some(group_rect) = self.groups.get(&group).map(|g| g.rect) else {
            return false;
        };
        let Some((group, was_active)) = self.remove_from_group(window) else {
            return false;
        };
        let offset = self.config.detach_offset;
        let tear_offset = self.config.tear_titlebar_offset;
        if let Some(freed) = self.windows.get_mut(window) {
            match placement {
                DetachPlacement::ForMerge => {}
                DetachPlacement::Offset => {
                    freed.rect.x = group_rect.x + offset;
                    freed.rect.y = group_rect.y + offset;
                }
                DetachPlacement::UnderPointer(point) => {
                    freed.rect.x = point.x - freed.rect.width as i32 / 2;
                    freed.rect.y = point.y - tear_offset;
                }
            }
            if placement != DetachPlacement::ForMerge {
                freed.visible = true;
            }
        }
        if placement != DetachPlacement::ForMerge {
            self.stack.push(FrameId::window(window));
        }
        tracing::debug!(group = %group, window_id = %window, ?placement, "detached tab");
        self.settle_group(group, was_active);
        if placement != DetachPlacement::ForMerge {
            self.focus_frame(&FrameId::window(window));
            self.persist_window(window);
        }
        true
    }

    /// Unlink a window from its group and hand its parked content back.
    /// Returns the group and whether the window was the active tab.
    pub(crate) fn remove_from_group(&mut self, window: &str) -> Option<(GroupId, bool)> {
        let group = self.windows.get(window)?.tab_group?;
        let target = self.groups.get_mut(&group)?;
        let index = target.members.iter().position(|m| m == window)?;
        target.members.remove(index);
        let panel = target
            .panels
            .iter()
            .position(|p| p.window == window)
            .map(|i| target.panels.remove(i));
        let was_active = target.active.as_deref() == Some(window);
        if was_active {
            target.active = None;
        }
        if let Some(member) = self.windows.get_mut(window) {
            member.tab_group = None;
            if let Some(panel) = panel {
                member.content.children = panel.content;
            }
        }
        Some((group, was_active))
    }

    /// Restore group invariants after a member left: empty groups go away,
    /// single-member groups dissolve, and a lost active tab falls back to the
    /// first member.
    pub(crate) fn settle_group(&mut self, group: GroupId, was_active: bool) {
        let Some(target) = self.groups.get(&group) else {
            return;
        };
        match target.members.len() {
            0 => self.destroy_group(group),
            1 => {
                self.dissolve(group);
            }
            _ => {
                if was_active || target.active.is_none() {
                    let first = target.members[0].clone();
                    self.activate_tab(group, &first);
                }
            }
        }
    }

    /// Turn a one-member group back into a free window with the group's
    /// geometry and dock state. The survivor is focused on top.
    pub fn dissolve(&mut self, group: GroupId) -> bool {
        if self.groups.get(&group).is_none_or(|g| g.members.len() != 1) {
            return false;
        }
        let Some(target) = self.groups.remove(&group) else {
            return false;
        };
        let frame = FrameId::Group(group);
        self.stack.remove(&frame);
        self.forget_frame(&frame);

        let survivor = target.members[0].clone();
        let content: Vec<ContentNode> = target
            .panels
            .into_iter()
            .flat_map(|panel| panel.content)
            .collect();
        if let Some(window) = self.windows.get_mut(&survivor) {
            window.tab_group = None;
            window.content.children = content;
            window.rect = target.rect;
            window.docked = target.docked;
            window.pre_dock = target.pre_dock;
            window.visible = true;
        }
        self.stack.push(FrameId::window(&survivor));
        tracing::debug!(group = %group, window_id = %survivor, "dissolved tab group");
        self.focus_frame(&FrameId::window(&survivor));
        self.persist_window(&survivor);
        true
    }

    pub(crate) fn destroy_group(&mut self, group: GroupId) {
        if self.groups.remove(&group).is_none() {
            return;
        }
        let frame = FrameId::Group(group);
        self.stack.remove(&frame);
        self.forget_frame(&frame);
        tracing::debug!(group = %group, "destroyed tab group");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::StaticHost;
    use crate::persistence::MemoryStore;
    use crate::window::WindowOptions;

    fn manager_with(ids: &[&str]) -> WindowManager {
        let mut wm = WindowManager::with_defaults(StaticHost::new(1280, 800), MemoryStore::new());
        for (i, id) in ids.iter().enumerate() {
            let offset = 100 * i as i32;
            wm.create(
                WindowOptions::new(*id)
                    .geometry(100 + offset, 100 + offset, 400, 300)
                    .content(format!("body of {id}")),
            );
        }
        wm
    }

    #[test]
    fn create_group_parks_content_and_uses_first_geometry() {
        let mut wm = manager_with(&["a", "b"]);
        let group = wm.create_group("a", "b", None).unwrap();
        let g = wm.group(group).unwrap();
        assert_eq!(g.members(), ["a", "b"]);
        assert_eq!(g.active(), Some("a"));
        assert_eq!(g.rect, FloatRect::new(100, 100, 400, 300));
        assert_eq!(wm.content("b").unwrap()[0].as_text(), Some("body of b"));
        assert!(wm.window("b").unwrap().content().children.is_empty());
        assert!(!wm.stack().contains(&FrameId::window("a")));
        assert!(wm.stack().contains(&FrameId::Group(group)));
        assert!(!wm.is_visible("a"));
    }

    #[test]
    fn activate_tab_shows_exactly_one_panel() {
        let mut wm = manager_with(&["a", "b", "c"]);
        let group = wm.create_group("a", "b", None).unwrap();
        assert!(wm.add_to_group("c", group, false));
        assert!(wm.activate_tab(group, "b"));
        let visible: Vec<_> = wm
            .group(group)
            .unwrap()
            .panels()
            .iter()
            .filter(|p| p.is_visible())
            .map(|p| p.window().to_string())
            .collect();
        assert_eq!(visible, vec!["b".to_string()]);
        assert!(!wm.activate_tab(group, "zzz"));
    }

    #[test]
    fn detach_offsets_and_dissolves_pair() {
        let mut wm = manager_with(&["a", "b"]);
        let group = wm.create_group("a", "b", None).unwrap();
        assert!(wm.detach("b"));
        assert!(wm.group(group).is_none());
        let b = wm.state("b").unwrap();
        assert_eq!((b.rect.x, b.rect.y), (130, 130));
        let a = wm.state("a").unwrap();
        assert_eq!(a.rect, FloatRect::new(100, 100, 400, 300));
        assert!(a.visible && b.visible);
        assert_eq!(wm.content("a").unwrap()[0].as_text(), Some("body of a"));
        assert_eq!(wm.stack().topmost(), Some(&FrameId::window("b")));
    }

    #[test]
    fn merge_into_existing_group_makes_source_active() {
        let mut wm = manager_with(&["a", "b", "c"]);
        let group = wm.create_group("a", "b", None).unwrap();
        assert!(wm.merge("c", "a"));
        let g = wm.group(group).unwrap();
        assert_eq!(g.members(), ["a", "b", "c"]);
        assert_eq!(g.active(), Some("c"));
    }

    #[test]
    fn merge_moves_source_between_groups() {
        let mut wm = manager_with(&["a", "b", "c", "d"]);
        let first = wm.create_group("a", "b", None).unwrap();
        let second = wm.create_group("c", "d", None).unwrap();
        assert!(wm.merge("b", "c"));
        assert!(wm.group(first).is_none());
        assert!(wm.state("a").unwrap().tab_group.is_none());
        assert_eq!(wm.group(second).unwrap().members(), ["c", "d", "b"]);
        assert!(!wm.merge("b", "d"));
    }

    #[test]
    fn closing_active_tab_activates_first_remaining() {
        let mut wm = manager_with(&["a", "b", "c"]);
        let group = wm.create_group("a", "b", None).unwrap();
        wm.add_to_group("c", group, true);
        assert!(wm.close_tab(group, "c"));
        assert_eq!(wm.group(group).unwrap().active(), Some("a"));
        assert!(wm.close_tab(group, "a"));
        assert!(wm.group(group).is_none());
        assert!(wm.state("b").unwrap().visible);
    }

    #[test]
    fn dissolve_focuses_survivor_above_other_windows() {
        let mut wm = manager_with(&["a", "b", "c"]);
        let group = wm.create_group("a", "b", None).unwrap();
        wm.focus("c");
        assert!(wm.close_tab(group, "a"));
        assert_eq!(wm.stack().topmost(), Some(&FrameId::window("b")));
        assert!(wm.state("b").unwrap().focused);
        assert!(!wm.state("c").unwrap().focused);
        let focused = wm.get_all().iter().filter(|id| wm.state(id).unwrap().focused).count();
        assert_eq!(focused, 1);
    }

    #[test]
    fn close_group_closes_every_member() {
        let mut wm = manager_with(&["a", "b", "c"]);
        let group = wm.create_group("a", "b", None).unwrap();
        wm.add_to_group("c", group, false);
        assert!(wm.close_group(group));
        assert!(wm.group(group).is_none());
        assert!(wm.get_all().is_empty());
        assert!(wm.stack().is_empty());
    }

    #[test]
    fn dissolve_requires_single_member() {
        let mut wm = manager_with(&["a", "b"]);
        let group = wm.create_group("a", "b", None).unwrap();
        assert!(!wm.dissolve(group));
    }

    #[test]
    fn group_ids_render_with_prefix() {
        assert_eq!(GroupId::new(7).to_string(), "tab-group-7");
    }
}
