//! Bottom-sheet presentation used on narrow viewports.
//!
//! Panels expose the same operations as windows but have no geometry of
//! their own: the open panel fills a bottom-anchored sheet and everything
//! above it is covered by an overlay.

use std::collections::BTreeMap;

use super::decorator::HitTarget;
use super::window_manager::{Gesture, WindowManager};
use super::{CloseDecision, ContentContainer, FrameId, WindowCallbacks, WindowOptions, WindowState};
use crate::constants::DEFAULT_HEIGHT;
use crate::input::Point;
use crate::layout::{FloatRect, clamp_dim};

#[derive(Debug)]
pub struct MobilePanel {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) icon: Option<String>,
    pub(crate) content: ContentContainer,
    pub(crate) configured_height: u16,
    pub(crate) callbacks: WindowCallbacks,
    pub(crate) creation_order: usize,
    /// Downward displacement while the header is being swiped.
    pub(crate) swipe_offset: i32,
}

impl MobilePanel {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn content(&self) -> &ContentContainer {
        &self.content
    }

    pub fn creation_order(&self) -> usize {
        self.creation_order
    }

    pub fn swipe_offset(&self) -> i32 {
        self.swipe_offset
    }

    /// `min(85%, max(50%, configured))` of the host height.
    pub fn sheet_height(&self, host_height: i32) -> i32 {
        let low = host_height / 2;
        let high = host_height * 85 / 100;
        (self.configured_height as i32).max(low).min(high)
    }

    pub fn sheet_rect(&self, host_width: i32, host_height: i32) -> FloatRect {
        let height = self.sheet_height(host_height);
        FloatRect::new(
            0,
            host_height - height + self.swipe_offset,
            clamp_dim(host_width),
            clamp_dim(height),
        )
    }

    pub(crate) fn state(&self, open: bool) -> WindowState {
        WindowState {
            id: self.id.clone(),
            title: self.title.clone(),
            rect: FloatRect::default(),
            min_width: 0,
            min_height: 0,
            minimized: false,
            maximized: false,
            docked: None,
            pre_dock: None,
            pre_maximize: None,
            tab_group: None,
            visible: open,
            focused: open,
            mobile: true,
        }
    }
}

/// Every mobile panel plus which one (if any) is showing.
#[derive(Debug, Default)]
pub struct MobileLayer {
    panels: BTreeMap<String, MobilePanel>,
    open: Option<String>,
}

impl MobileLayer {
    pub fn contains(&self, id: &str) -> bool {
        self.panels.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&MobilePanel> {
        self.panels.get(id)
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut MobilePanel> {
        self.panels.get_mut(id)
    }

    pub fn panels(&self) -> impl Iterator<Item = &MobilePanel> {
        self.panels.values()
    }

    pub fn open_id(&self) -> Option<&str> {
        self.open.as_deref()
    }

    pub fn open_panel(&self) -> Option<&MobilePanel> {
        self.open.as_deref().and_then(|id| self.panels.get(id))
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// The overlay is shown exactly while a sheet is open.
    pub fn overlay_visible(&self) -> bool {
        self.is_open()
    }
}

impl WindowManager {
    pub(crate) fn create_mobile_panel(&mut self, id: String, options: WindowOptions) {
        let order = self.next_window_seq;
        self.next_window_seq = order.saturating_add(1);
        let panel = MobilePanel {
            title: options.title.unwrap_or_else(|| id.clone()),
            icon: options.icon,
            content: ContentContainer {
                class: options.content_class,
                children: options.content.into_iter().collect(),
            },
            configured_height: options.height.unwrap_or(DEFAULT_HEIGHT),
            callbacks: options.callbacks,
            creation_order: order,
            swipe_offset: 0,
            id: id.clone(),
        };
        tracing::debug!(window_id = %id, "created mobile panel");
        self.mobile.panels.insert(id.clone(), panel);
        self.open_mobile_panel(&id);
        if let Some(panel) = self.mobile.panels.get_mut(&id) {
            let state = panel.state(true);
            if let Some(cb) = panel.callbacks.on_create.as_mut() {
                cb(&state);
            }
        }
    }

    /// Show a panel's sheet, closing whichever sheet was open.
    pub(crate) fn open_mobile_panel(&mut self, id: &str) {
        if !self.mobile.contains(id) {
            return;
        }
        if let Some(previous) = self.mobile.open.take()
            && previous != id
        {
            tracing::debug!(window_id = %previous, "closed mobile sheet");
        }
        if let Some(panel) = self.mobile.panels.get_mut(id) {
            panel.swipe_offset = 0;
        }
        self.mobile.open = Some(id.to_string());
        tracing::debug!(window_id = %id, "opened mobile sheet");
    }

    pub(crate) fn hide_mobile_sheet(&mut self) {
        if let Some(id) = self.mobile.open.take() {
            if let Some(panel) = self.mobile.panels.get_mut(&id) {
                panel.swipe_offset = 0;
            }
            let frame = FrameId::window(&id);
            self.forget_frame(&frame);
            tracing::debug!(window_id = %id, "closed mobile sheet");
        }
    }

    /// Remove a panel entirely; honours `on_close`.
    pub(crate) fn close_mobile_panel(&mut self, id: &str) -> bool {
        let open = self.mobile.open_id() == Some(id);
        let Some(panel) = self.mobile.panels.get_mut(id) else {
            return false;
        };
        let state = panel.state(open);
        if let Some(cb) = panel.callbacks.on_close.as_mut()
            && cb(&state) == CloseDecision::Cancel
        {
            tracing::debug!(window_id = %id, "close cancelled by callback");
            return false;
        }
        if open {
            self.hide_mobile_sheet();
        }
        self.mobile.panels.remove(id);
        tracing::debug!(window_id = %id, "removed mobile panel");
        true
    }

    pub fn mobile_sheet_rect(&self) -> Option<FloatRect> {
        let panel = self.mobile.open_panel()?;
        Some(panel.sheet_rect(self.host().inner_width(), self.host().inner_height()))
    }

    pub(crate) fn mobile_hit_test(&self, point: Point) -> Option<HitTarget> {
        let panel = self.mobile.open_panel()?;
        let sheet = self.mobile_sheet_rect()?;
        if !sheet.contains(point) {
            return Some(HitTarget::MobileOverlay);
        }
        let header = sheet.top_strip(self.config.mobile_header_height);
        if header.contains(point) {
            Some(HitTarget::MobileHeader(panel.id.clone()))
        } else {
            Some(HitTarget::MobileBody(panel.id.clone()))
        }
    }

    pub(crate) fn begin_swipe(&mut self, id: &str, point: Point) {
        if self.mobile.open_id() != Some(id) {
            return;
        }
        self.gesture = Some(Gesture::Swipe {
            panel: id.to_string(),
            origin: point,
        });
    }

    /// The sheet follows the pointer downward only.
    pub(crate) fn swipe_move(&mut self, id: &str, origin: Point, point: Point) {
        if let Some(panel) = self.mobile.panels.get_mut(id) {
            panel.swipe_offset = (point.y - origin.y).max(0);
        }
    }

    pub(crate) fn swipe_end(&mut self, id: &str, origin: Point, point: Point) {
        let distance = point.y - origin.y;
        if distance >= self.config.swipe_dismiss_distance && self.mobile.open_id() == Some(id) {
            tracing::debug!(window_id = %id, distance, "swipe dismissed sheet");
            self.hide_mobile_sheet();
        } else if let Some(panel) = self.mobile.panels.get_mut(id) {
            panel.swipe_offset = 0;
        }
    }
}
