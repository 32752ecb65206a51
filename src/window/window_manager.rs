use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use super::decorator::{self, GroupHit, HeaderAction, HitTarget};
use super::minimize::MinimizeDock;
use super::mobile::MobileLayer;
use super::stack::StackOrder;
use super::tabs::{GroupId, TabGroup};
use super::{
    CloseDecision, ContentContainer, ContentNode, FrameId, StackableFrame, Window, WindowHandle,
    WindowOptions, WindowState,
};
use crate::config::WmConfig;
use crate::constants::{DEFAULT_HEIGHT, DEFAULT_MIN_HEIGHT, DEFAULT_MIN_WIDTH, DEFAULT_WIDTH};
use crate::host::{self, HostEnvironment, Viewport};
use crate::input::{Point, PointerEvent, PointerKind};
use crate::layout::floating::{HeaderDrag, ResizeDrag};
use crate::layout::{DockZone, FloatRect, dock_rect};
use crate::persistence::{KeyValueStore, PersistedGeometry, PersistenceStore};

/// Dock zone currently armed by a drag, with the rectangle it would fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapPreview {
    pub zone: DockZone,
    pub rect: FloatRect,
}

/// The single in-flight pointer gesture. Installed on pointer-down and taken
/// on pointer-up, so nothing outlives the gesture that created it.
#[derive(Debug, Clone)]
pub(crate) enum Gesture {
    Drag(HeaderDrag<FrameId>),
    Resize(ResizeDrag<FrameId>),
    TabPress {
        group: GroupId,
        window: String,
        origin: Point,
    },
    Swipe {
        panel: String,
        origin: Point,
    },
}

impl Gesture {
    fn targets(&self, frame: &FrameId) -> bool {
        match self {
            Gesture::Drag(drag) => drag.id == *frame,
            Gesture::Resize(drag) => drag.id == *frame,
            Gesture::TabPress { group, window, .. } => match frame {
                FrameId::Group(id) => id == group,
                FrameId::Window(id) => id == window,
            },
            Gesture::Swipe { panel, .. } => frame.as_window() == Some(panel.as_str()),
        }
    }
}

pub struct WindowManager {
    pub(crate) config: WmConfig,
    host: Box<dyn HostEnvironment>,
    pub(crate) persistence: PersistenceStore,
    pub(crate) windows: BTreeMap<String, Window>,
    pub(crate) groups: BTreeMap<GroupId, TabGroup>,
    pub(crate) stack: StackOrder,
    pub(crate) minimize_dock: MinimizeDock,
    pub(crate) mobile: MobileLayer,
    pub(crate) gesture: Option<Gesture>,
    pub(crate) snap_preview: Option<SnapPreview>,
    pub(crate) merge_target: Option<FrameId>,
    pub(crate) last_header_click: Option<(String, Instant)>,
    pub(crate) next_group_seq: u64,
    pub(crate) next_window_seq: usize,
}

impl std::fmt::Debug for WindowManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WindowManager")
            .field("windows", &self.windows.keys().collect::<Vec<_>>())
            .field("groups", &self.groups.keys().collect::<Vec<_>>())
            .field("stack", &self.stack)
            .field("gesture", &self.gesture)
            .finish_non_exhaustive()
    }
}

impl WindowManager {
    pub fn new(
        host: impl HostEnvironment + 'static,
        store: impl KeyValueStore + 'static,
        config: WmConfig,
    ) -> Self {
        let persistence = PersistenceStore::new(Box::new(store), config.storage_key.clone());
        Self {
            stack: StackOrder::new(config.stack_base),
            config,
            host: Box::new(host),
            persistence,
            windows: BTreeMap::new(),
            groups: BTreeMap::new(),
            minimize_dock: MinimizeDock::default(),
            mobile: MobileLayer::default(),
            gesture: None,
            snap_preview: None,
            merge_target: None,
            last_header_click: None,
            next_group_seq: 1,
            next_window_seq: 0,
        }
    }

    pub fn with_defaults(host: impl HostEnvironment + 'static, store: impl KeyValueStore + 'static) -> Self {
        Self::new(host, store, WmConfig::default())
    }

    pub fn config(&self) -> &WmConfig {
        &self.config
    }

    pub fn host(&self) -> &dyn HostEnvironment {
        self.host.as_ref()
    }

    /// Area free windows live in: full width, height above the bottom bar.
    pub fn viewport(&self) -> Viewport {
        host::viewport(self.host.as_ref(), &self.config)
    }

    pub fn bottom_offset(&self) -> i32 {
        host::bottom_offset(self.host.as_ref(), &self.config)
    }

    /// Evaluated against the host on every call; windows keep the mode they
    /// were created in.
    pub fn is_mobile(&self) -> bool {
        host::is_mobile(self.host.as_ref(), &self.config)
    }

    pub fn stack(&self) -> &StackOrder {
        &self.stack
    }

    pub fn snap_preview(&self) -> Option<SnapPreview> {
        self.snap_preview
    }

    pub fn merge_target(&self) -> Option<&FrameId> {
        self.merge_target.as_ref()
    }

    pub fn minimize_dock(&self) -> &MinimizeDock {
        &self.minimize_dock
    }

    pub fn mobile(&self) -> &MobileLayer {
        &self.mobile
    }

    pub fn window(&self, id: &str) -> Option<&Window> {
        self.windows.get(id)
    }

    pub fn windows(&self) -> impl Iterator<Item = &Window> {
        self.windows.values()
    }

    pub fn group(&self, id: GroupId) -> Option<&TabGroup> {
        self.groups.get(&id)
    }

    pub fn groups(&self) -> impl Iterator<Item = &TabGroup> {
        self.groups.values()
    }

    pub fn gesture_active(&self) -> bool {
        self.gesture.is_some()
    }

    fn generate_id(&mut self) -> String {
        loop {
            let candidate = format!("window-{}", self.next_window_seq);
            if !self.contains(&candidate) {
                return candidate;
            }
            self.next_window_seq = self.next_window_seq.saturating_add(1);
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.windows.contains_key(id) || self.mobile.contains(id)
    }

    fn cascade_offset(&self) -> i32 {
        let count = self.windows.len() % self.config.cascade_cycle.max(1);
        self.config.cascade_origin + self.config.cascade_step * count as i32
    }

    /// Create a window, or focus the existing one with the same id.
    pub fn create(&mut self, options: WindowOptions) -> WindowHandle<'_> {
        let id = match options.id.clone() {
            Some(id) => id,
            None => self.generate_id(),
        };
        if self.contains(&id) {
            tracing::debug!(window_id = %id, "window already exists; focusing");
            self.focus(&id);
            return WindowHandle::new(self, id);
        }
        if self.is_mobile() {
            self.create_mobile_panel(id.clone(), options);
            return WindowHandle::new(self, id);
        }

        let saved = if options.persistent {
            self.persistence.load(&id)
        } else {
            None
        };
        let cascade = self.cascade_offset();
        let saved_rect = saved.map(|record| record.rect());
        let rect = FloatRect::new(
            options.x.or(saved_rect.map(|r| r.x)).unwrap_or(cascade),
            options.y.or(saved_rect.map(|r| r.y)).unwrap_or(cascade),
            options
                .width
                .or(saved_rect.map(|r| r.width))
                .unwrap_or(DEFAULT_WIDTH),
            options
                .height
                .or(saved_rect.map(|r| r.height))
                .unwrap_or(DEFAULT_HEIGHT),
        );
        let order = self.next_window_seq;
        self.next_window_seq = order.saturating_add(1);
        let window = Window {
            id: id.clone(),
            title: options.title.unwrap_or_else(|| id.clone()),
            icon: options.icon,
            rect,
            min_width: options.min_width.unwrap_or(DEFAULT_MIN_WIDTH),
            min_height: options.min_height.unwrap_or(DEFAULT_MIN_HEIGHT),
            resizable: options.resizable,
            minimizable: options.minimizable,
            maximizable: options.maximizable,
            closable: options.closable,
            persistent: options.persistent,
            content: ContentContainer {
                class: options.content_class,
                children: options.content.into_iter().collect(),
            },
            callbacks: options.callbacks,
            minimized: false,
            maximized: false,
            docked: None,
            pre_dock: None,
            pre_maximize: None,
            tab_group: None,
            visible: true,
            focused: false,
            creation_order: order,
        };
        tracing::debug!(window_id = %id, ?rect, seq = order, "opened window");
        self.windows.insert(id.clone(), window);
        self.stack.push(FrameId::window(&id));

        if let Some(saved) = saved
            && let Some(zone) = saved.docked
        {
            if let Some(window) = self.windows.get_mut(&id) {
                window.pre_dock = saved.pre_dock;
            }
            self.dock(&id, zone);
        }
        if options.auto_focus {
            self.focus(&id);
        }
        if let Some(window) = self.windows.get_mut(&id) {
            let state = window.state();
            if let Some(cb) = window.callbacks.on_create.as_mut() {
                cb(&state);
            }
        }
        self.persist_window(&id);
        WindowHandle::new(self, id)
    }

    /// Close a window. Returns `false` for unknown ids and when `on_close`
    /// cancels; a cancelled close changes nothing.
    pub fn close(&mut self, id: &str) -> bool {
        if self.mobile.contains(id) {
            return self.close_mobile_panel(id);
        }
        let Some(window) = self.windows.get_mut(id) else {
            return false;
        };
        let state = window.state();
        if let Some(cb) = window.callbacks.on_close.as_mut()
            && cb(&state) == CloseDecision::Cancel
        {
            tracing::debug!(window_id = %id, "close cancelled by callback");
            return false;
        }
        tracing::debug!(window_id = %id, "closing window");

        let membership = self.remove_from_group(id);
        let frame = FrameId::window(id);
        self.stack.remove(&frame);
        self.minimize_dock.remove(id);
        self.windows.remove(id);
        self.persistence.remove(id);
        self.forget_frame(&frame);
        if self
            .last_header_click
            .as_ref()
            .is_some_and(|(prev, _)| prev == id)
        {
            self.last_header_click = None;
        }
        if let Some((group, was_active)) = membership {
            self.settle_group(group, was_active);
        }
        true
    }

    /// Drop transient references to a frame that is going away.
    pub(crate) fn forget_frame(&mut self, frame: &FrameId) {
        if self.merge_target.as_ref() == Some(frame) {
            self.merge_target = None;
        }
        if self.gesture.as_ref().is_some_and(|g| g.targets(frame)) {
            self.gesture = None;
            self.snap_preview = None;
            self.merge_target = None;
        }
    }

    /// Bring a window to the front. Tabbed windows focus their group and
    /// become its active tab; mobile panels open.
    pub fn focus(&mut self, id: &str) {
        if self.mobile.contains(id) {
            self.open_mobile_panel(id);
            return;
        }
        let Some(window) = self.windows.get(id) else {
            return;
        };
        if let Some(group) = window.tab_group {
            self.activate_tab(group, id);
            self.focus_frame(&FrameId::Group(group));
            return;
        }
        self.focus_frame(&FrameId::window(id));
    }

    pub(crate) fn focus_frame(&mut self, frame: &FrameId) {
        if !self.stack.bring_to_front(frame) {
            return;
        }
        for window in self.windows.values_mut() {
            window.focused = false;
        }
        for group in self.groups.values_mut() {
            group.focused = false;
        }
        if let Some(target) = self.frame_mut(frame) {
            target.set_focused(true);
        }
        tracing::trace!(frame = %frame, depth = ?self.stack.depth(frame), "focused");
    }

    pub(crate) fn frame(&self, frame: &FrameId) -> Option<&dyn StackableFrame> {
        match frame {
            FrameId::Window(id) => self.windows.get(id).map(|w| w as &dyn StackableFrame),
            FrameId::Group(id) => self.groups.get(id).map(|g| g as &dyn StackableFrame),
        }
    }

    pub(crate) fn frame_mut(&mut self, frame: &FrameId) -> Option<&mut dyn StackableFrame> {
        match frame {
            FrameId::Window(id) => self
                .windows
                .get_mut(id)
                .map(|w| w as &mut dyn StackableFrame),
            FrameId::Group(id) => self
                .groups
                .get_mut(id)
                .map(|g| g as &mut dyn StackableFrame),
        }
    }

    /// Frames that take part in the stack: free windows and groups.
    fn is_free_frame(&self, frame: &FrameId) -> bool {
        match frame {
            FrameId::Window(id) => self
                .windows
                .get(id)
                .is_some_and(|w| w.tab_group.is_none() && !w.minimized && !w.maximized),
            FrameId::Group(id) => self.groups.contains_key(id),
        }
    }

    pub fn dock(&mut self, id: &str, zone: DockZone) -> bool {
        self.dock_frame(&FrameId::window(id), zone)
    }

    pub fn undock(&mut self, id: &str) -> bool {
        self.undock_frame(&FrameId::window(id))
    }

    /// Snap a frame into a viewport zone, remembering its free geometry the
    /// first time it docks.
    pub fn dock_frame(&mut self, frame: &FrameId, zone: DockZone) -> bool {
        if !self.is_free_frame(frame) {
            return false;
        }
        let rect = dock_rect(zone, self.viewport());
        let Some(target) = self.frame_mut(frame) else {
            return false;
        };
        let pre_dock = target.pre_dock().unwrap_or(target.rect());
        target.set_dock_state(Some(zone), Some(pre_dock));
        target.set_rect(rect);
        tracing::debug!(frame = %frame, %zone, ?rect, "docked");
        self.persist_frame(frame);
        self.notify_resize(frame);
        true
    }

    /// Restore the pre-dock size. The origin is left alone so a frame being
    /// dragged stays under the pointer.
    pub fn undock_frame(&mut self, frame: &FrameId) -> bool {
        let Some(target) = self.frame_mut(frame) else {
            return false;
        };
        if target.docked().is_none() {
            return false;
        }
        let mut rect = target.rect();
        if let Some(pre_dock) = target.pre_dock() {
            rect.width = pre_dock.width;
            rect.height = pre_dock.height;
        }
        target.set_rect(rect);
        target.set_dock_state(None, None);
        tracing::debug!(frame = %frame, ?rect, "undocked");
        self.persist_frame(frame);
        self.notify_resize(frame);
        true
    }

    pub fn get(&mut self, id: &str) -> Option<WindowHandle<'_>> {
        if !self.contains(id) {
            return None;
        }
        Some(WindowHandle::new(self, id.to_string()))
    }

    /// Ids of every window, in creation order.
    pub fn get_all(&self) -> Vec<String> {
        let mut ordered: Vec<(usize, &str)> = self
            .windows
            .values()
            .map(|w| (w.creation_order, w.id.as_str()))
            .chain(
                self.mobile
                    .panels()
                    .map(|p| (p.creation_order(), p.id())),
            )
            .collect();
        ordered.sort_unstable();
        ordered.into_iter().map(|(_, id)| id.to_string()).collect()
    }

    pub fn state(&self, id: &str) -> Option<WindowState> {
        if let Some(panel) = self.mobile.get(id) {
            return Some(panel.state(self.mobile.open_id() == Some(id)));
        }
        self.windows.get(id).map(Window::state)
    }

    /// Render depth of a window's frame: its own for free windows, its
    /// group's for tabbed ones.
    pub fn depth(&self, id: &str) -> Option<u32> {
        let window = self.windows.get(id)?;
        match window.tab_group {
            Some(group) => self.stack.depth(&FrameId::Group(group)),
            None => self.stack.depth(&FrameId::window(id)),
        }
    }

    pub fn clear_all_persisted(&mut self) {
        tracing::debug!(key = %self.persistence.key(), "clearing persisted windows");
        self.persistence.clear();
    }

    pub fn set_title(&mut self, id: &str, title: impl Into<String>) {
        let title = title.into();
        if let Some(panel) = self.mobile.get_mut(id) {
            panel.title = title;
            return;
        }
        if let Some(window) = self.windows.get_mut(id) {
            window.title = title.clone();
            self.minimize_dock.relabel(id, title);
        }
    }

    /// Children of the container the window's content currently lives in:
    /// its own, or its parked tab panel while grouped.
    pub fn content(&self, id: &str) -> Option<&[ContentNode]> {
        if let Some(panel) = self.mobile.get(id) {
            return Some(&panel.content.children);
        }
        let window = self.windows.get(id)?;
        if let Some(group) = window.tab_group
            && let Some(panel) = self.groups.get(&group).and_then(|g| g.panel(id))
        {
            return Some(&panel.content);
        }
        Some(&window.content.children)
    }

    pub(crate) fn content_mut(&mut self, id: &str) -> Option<&mut Vec<ContentNode>> {
        if self.mobile.contains(id) {
            return self.mobile.get_mut(id).map(|p| &mut p.content.children);
        }
        let group = self.windows.get(id)?.tab_group;
        if let Some(group) = group {
            return self
                .groups
                .get_mut(&group)
                .and_then(|g| g.panel_mut(id))
                .map(|p| &mut p.content);
        }
        self.windows.get_mut(id).map(|w| &mut w.content.children)
    }

    pub fn set_content(&mut self, id: &str, content: impl Into<ContentNode>) -> bool {
        let Some(children) = self.content_mut(id) else {
            return false;
        };
        children.clear();
        children.push(content.into());
        true
    }

    pub fn append_content(&mut self, id: &str, content: impl Into<ContentNode>) -> bool {
        let Some(children) = self.content_mut(id) else {
            return false;
        };
        children.push(content.into());
        true
    }

    /// Set a window's size (clamped to its minimum) and persist it.
    pub fn resize_window(&mut self, id: &str, width: u16, height: u16) -> bool {
        let Some(window) = self.windows.get_mut(id) else {
            return false;
        };
        window.rect.width = width.max(window.min_width);
        window.rect.height = height.max(window.min_height);
        let frame = FrameId::window(id);
        self.notify_resize(&frame);
        self.persist_frame(&frame);
        true
    }

    pub fn move_window(&mut self, id: &str, x: i32, y: i32) -> bool {
        let Some(window) = self.windows.get_mut(id) else {
            return false;
        };
        window.rect.x = x;
        window.rect.y = y;
        let frame = FrameId::window(id);
        self.notify_move(&frame);
        self.persist_frame(&frame);
        true
    }

    pub fn show(&mut self, id: &str) {
        if self.mobile.contains(id) {
            self.open_mobile_panel(id);
            return;
        }
        let Some(window) = self.windows.get_mut(id) else {
            return;
        };
        if window.tab_group.is_some() {
            self.focus(id);
            return;
        }
        if window.minimized {
            self.restore(id);
            return;
        }
        window.visible = true;
    }

    pub fn hide(&mut self, id: &str) {
        if self.mobile.contains(id) {
            if self.mobile.open_id() == Some(id) {
                self.hide_mobile_sheet();
            }
            return;
        }
        if let Some(window) = self.windows.get_mut(id)
            && window.tab_group.is_none()
        {
            window.visible = false;
            window.focused = false;
        }
    }

    pub fn is_visible(&self, id: &str) -> bool {
        if self.mobile.contains(id) {
            return self.mobile.open_id() == Some(id);
        }
        self.windows.get(id).is_some_and(|w| w.visible)
    }

    pub(crate) fn persist_window(&mut self, id: &str) {
        self.persist_frame(&FrameId::window(id));
    }

    /// Tab groups are not persisted; their members keep their own records.
    pub(crate) fn persist_frame(&mut self, frame: &FrameId) {
        let FrameId::Window(id) = frame else {
            return;
        };
        let Some(window) = self.windows.get(id) else {
            return;
        };
        if !window.persistent {
            return;
        }
        let rect = window.persisted_rect();
        let record = PersistedGeometry {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            docked: window.docked,
            pre_dock: window.pre_dock,
        };
        self.persistence.save(id, record);
    }

    pub(crate) fn notify_move(&mut self, frame: &FrameId) {
        let FrameId::Window(id) = frame else {
            return;
        };
        let Some(window) = self.windows.get_mut(id) else {
            return;
        };
        let state = window.state();
        if let Some(cb) = window.callbacks.on_move.as_mut() {
            cb(&state, state.rect.x, state.rect.y);
        }
    }

    pub(crate) fn notify_resize(&mut self, frame: &FrameId) {
        let FrameId::Window(id) = frame else {
            return;
        };
        let Some(window) = self.windows.get_mut(id) else {
            return;
        };
        let state = window.state();
        if let Some(cb) = window.callbacks.on_resize.as_mut() {
            cb(&state, state.rect.width, state.rect.height);
        }
    }

    /// Topmost interactive target under `point`.
    pub fn hit_test(&self, point: Point) -> Option<HitTarget> {
        if self.mobile.is_open() {
            return self.mobile_hit_test(point);
        }
        if let Some(id) = self.dock_button_at(point) {
            return Some(HitTarget::DockButton(id));
        }
        for frame in self.stack.iter().rev() {
            let hit = match frame {
                FrameId::Window(id) => self
                    .windows
                    .get(id)
                    .filter(|w| w.is_free_visible())
                    .and_then(|w| decorator::hit_test_window(w, point, &self.config)),
                FrameId::Group(id) => self
                    .groups
                    .get(id)
                    .and_then(|g| decorator::hit_test_group(g, point, &self.config)),
            };
            if hit.is_some() {
                return hit;
            }
        }
        None
    }

    fn dock_button_at(&self, point: Point) -> Option<String> {
        let strip = decorator::dock_strip(self.viewport(), self.host.inner_height());
        self.minimize_dock
            .entries()
            .iter()
            .enumerate()
            .find(|(index, _)| decorator::dock_button_rect(strip, *index).contains(point))
            .map(|(_, entry)| entry.window.clone())
    }

    /// Route one pointer event. Returns `true` when the manager consumed it.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        let point = event.point();
        match event.kind {
            PointerKind::Down => {
                if self.gesture.is_some() {
                    // The release ending the previous gesture never arrived.
                    self.pointer_up(point);
                }
                self.pointer_down(point)
            }
            PointerKind::Move => self.pointer_move(point),
            PointerKind::Up => self.pointer_up(point),
        }
    }

    fn pointer_down(&mut self, point: Point) -> bool {
        let Some(hit) = self.hit_test(point) else {
            return false;
        };
        match hit {
            HitTarget::MobileOverlay => self.hide_mobile_sheet(),
            HitTarget::MobileHeader(id) => {
                self.begin_swipe(&id, point);
            }
            HitTarget::MobileBody(_) => {}
            HitTarget::DockButton(id) => self.restore(&id),
            HitTarget::Window(id, action) => {
                let frame = FrameId::window(&id);
                self.focus_frame(&frame);
                match action {
                    HeaderAction::Close => {
                        self.last_header_click = None;
                        self.close(&id);
                    }
                    HeaderAction::Minimize => {
                        self.last_header_click = None;
                        self.minimize(&id);
                    }
                    HeaderAction::Maximize => {
                        self.last_header_click = None;
                        self.toggle_maximize(&id);
                    }
                    HeaderAction::Drag => {
                        if self.is_double_click(&id) {
                            self.toggle_maximize(&id);
                        } else {
                            self.begin_drag(frame, point);
                        }
                    }
                }
            }
            HitTarget::Resize(frame, edge) => {
                self.focus_frame(&frame);
                self.begin_resize(frame, edge, point);
            }
            HitTarget::Group(group, hit) => {
                self.focus_frame(&FrameId::Group(group));
                match hit {
                    GroupHit::Close => {
                        self.close_group(group);
                    }
                    GroupHit::Tab(id) => {
                        self.begin_tab_press(group, &id, point);
                    }
                    GroupHit::TabClose(id) => {
                        self.close_tab(group, &id);
                    }
                    GroupHit::Bar => {
                        self.begin_drag(FrameId::Group(group), point);
                    }
                }
            }
            HitTarget::Body(frame) => self.focus_frame(&frame),
        }
        true
    }

    fn is_double_click(&mut self, id: &str) -> bool {
        let now = Instant::now();
        let window = Duration::from_millis(self.config.double_click_ms);
        if let Some((prev_id, prev)) = self.last_header_click.as_ref()
            && prev_id == id
            && now.duration_since(*prev) <= window
        {
            self.last_header_click = None;
            return true;
        }
        self.last_header_click = Some((id.to_string(), now));
        false
    }

    /// Continue the in-flight gesture, if any.
    pub fn pointer_move(&mut self, point: Point) -> bool {
        let Some(gesture) = self.gesture.clone() else {
            return false;
        };
        match gesture {
            Gesture::Drag(drag) => self.drag_move(&drag, point),
            Gesture::Resize(drag) => self.resize_move(&drag, point),
            Gesture::TabPress {
                group,
                window,
                origin,
            } => self.tab_press_move(group, &window, origin, point),
            Gesture::Swipe { panel, origin } => self.swipe_move(&panel, origin, point),
        }
        true
    }

    /// Commit and release the in-flight gesture, if any.
    pub fn pointer_up(&mut self, point: Point) -> bool {
        let Some(gesture) = self.gesture.take() else {
            return false;
        };
        match gesture {
            Gesture::Drag(drag) => self.drag_end(drag),
            Gesture::Resize(drag) => self.resize_end(drag),
            Gesture::TabPress { .. } => {}
            Gesture::Swipe { panel, origin } => self.swipe_end(&panel, origin, point),
        }
        true
    }
}
