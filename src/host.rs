//! The host surface windows are overlaid on.
//!
//! The manager never owns the host; it only asks it for the viewport size,
//! the bottom navigation offset and the user agent when it needs them.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::config::WmConfig;
use crate::constants::BOTTOM_NAV_PROPERTY;
use crate::layout::{FloatRect, clamp_dim};

pub trait HostEnvironment {
    fn inner_width(&self) -> i32;
    fn inner_height(&self) -> i32;
    /// Computed value of a custom style property such as `--bottom-nav-height`.
    fn style_property(&self, name: &str) -> Option<String>;
    fn user_agent(&self) -> String;
}

/// Usable area for free windows: the full width and the height above the
/// bottom navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    pub fn rect(&self) -> FloatRect {
        FloatRect::new(0, 0, clamp_dim(self.width), clamp_dim(self.height))
    }
}

/// Parse a pixel length such as `"64px"`, `" 48 "` or `"56.4px"`.
pub fn parse_px(value: &str) -> Option<i32> {
    let trimmed = value.trim();
    let number = trimmed.strip_suffix("px").unwrap_or(trimmed).trim();
    let parsed: f64 = number.parse().ok()?;
    parsed.is_finite().then(|| parsed.round() as i32)
}

pub fn bottom_offset(host: &dyn HostEnvironment, config: &WmConfig) -> i32 {
    host.style_property(BOTTOM_NAV_PROPERTY)
        .as_deref()
        .and_then(parse_px)
        .unwrap_or(config.default_bottom_offset)
}

pub fn viewport(host: &dyn HostEnvironment, config: &WmConfig) -> Viewport {
    let height = host.inner_height() - bottom_offset(host, config);
    Viewport {
        width: host.inner_width().max(0),
        height: height.max(0),
    }
}

const MOBILE_UA_MARKERS: [&str; 8] = [
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    let ua = user_agent.to_ascii_lowercase();
    MOBILE_UA_MARKERS.iter().any(|marker| ua.contains(marker))
}

/// Narrow viewports are always mobile; a mobile user agent widens the
/// threshold. Touch support alone never qualifies.
pub fn is_mobile(host: &dyn HostEnvironment, config: &WmConfig) -> bool {
    let width = host.inner_width();
    if width <= config.mobile_breakpoint {
        return true;
    }
    is_mobile_user_agent(&host.user_agent()) && width <= config.mobile_ua_breakpoint
}

#[derive(Debug, Clone)]
struct StaticHostState {
    width: i32,
    height: i32,
    properties: BTreeMap<String, String>,
    user_agent: String,
}

/// In-memory host whose metrics can be changed while a manager holds it.
/// Clones share state.
#[derive(Debug, Clone)]
pub struct StaticHost {
    state: Rc<RefCell<StaticHostState>>,
}

impl StaticHost {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            state: Rc::new(RefCell::new(StaticHostState {
                width,
                height,
                properties: BTreeMap::new(),
                user_agent: String::new(),
            })),
        }
    }

    pub fn with_user_agent(self, user_agent: impl Into<String>) -> Self {
        self.set_user_agent(user_agent);
        self
    }

    pub fn with_property(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_property(name, value);
        self
    }

    pub fn set_size(&self, width: i32, height: i32) {
        let mut state = self.state.borrow_mut();
        state.width = width;
        state.height = height;
    }

    pub fn set_property(&self, name: impl Into<String>, value: impl Into<String>) {
        self.state
            .borrow_mut()
            .properties
            .insert(name.into(), value.into());
    }

    pub fn set_user_agent(&self, user_agent: impl Into<String>) {
        self.state.borrow_mut().user_agent = user_agent.into();
    }
}

impl HostEnvironment for StaticHost {
    fn inner_width(&self) -> i32 {
        self.state.borrow().width
    }

    fn inner_height(&self) -> i32 {
        self.state.borrow().height
    }

    fn style_property(&self, name: &str) -> Option<String> {
        self.state.borrow().properties.get(name).cloned()
    }

    fn user_agent(&self) -> String {
        self.state.borrow().user_agent.clone()
    }
}
