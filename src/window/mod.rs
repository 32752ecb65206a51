pub mod decorator;
pub mod minimize;
pub mod mobile;
pub mod stack;
pub mod tabs;

mod drag;
mod handle;
mod resize;
mod tear;
mod window_manager;

use std::fmt;

use crate::components::Component;
use crate::layout::{DockZone, FloatRect};

pub use handle::WindowHandle;
pub use minimize::{DockEntry, MinimizeDock};
pub use mobile::{MobileLayer, MobilePanel};
pub use stack::StackOrder;
pub use tabs::{GroupId, TabGroup, TabPanel};
pub use window_manager::{SnapPreview, WindowManager};

/// Anything that occupies a slot in the stack order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FrameId {
    Window(String),
    Group(GroupId),
}

impl FrameId {
    pub fn window(id: impl Into<String>) -> Self {
        Self::Window(id.into())
    }

    pub fn as_window(&self) -> Option<&str> {
        match self {
            Self::Window(id) => Some(id),
            Self::Group(_) => None,
        }
    }

    pub fn as_group(&self) -> Option<GroupId> {
        match self {
            Self::Group(id) => Some(*id),
            Self::Window(_) => None,
        }
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Window(id) => f.write_str(id),
            Self::Group(id) => write!(f, "{id}"),
        }
    }
}

/// Capability shared by free windows and tab groups: both can be moved,
/// resized, docked and stacked, and every controller works through it.
pub trait StackableFrame {
    fn rect(&self) -> FloatRect;
    fn set_rect(&mut self, rect: FloatRect);
    fn min_size(&self) -> (u16, u16);
    fn docked(&self) -> Option<DockZone>;
    fn pre_dock(&self) -> Option<FloatRect>;
    fn set_dock_state(&mut self, docked: Option<DockZone>, pre_dock: Option<FloatRect>);
    fn set_focused(&mut self, focused: bool);
    fn is_resizable(&self) -> bool;
    fn is_maximized(&self) -> bool {
        false
    }
}

/// Returned by an `on_close` callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CloseDecision {
    #[default]
    Proceed,
    Cancel,
}

pub type WindowCallback = Box<dyn FnMut(&WindowState)>;
pub type CloseCallback = Box<dyn FnMut(&WindowState) -> CloseDecision>;
pub type ResizeCallback = Box<dyn FnMut(&WindowState, u16, u16)>;
pub type MoveCallback = Box<dyn FnMut(&WindowState, i32, i32)>;

#[derive(Default)]
pub struct WindowCallbacks {
    pub on_create: Option<WindowCallback>,
    pub on_close: Option<CloseCallback>,
    pub on_minimize: Option<WindowCallback>,
    pub on_maximize: Option<WindowCallback>,
    pub on_resize: Option<ResizeCallback>,
    pub on_move: Option<MoveCallback>,
}

impl fmt::Debug for WindowCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowCallbacks")
            .field("on_create", &self.on_create.is_some())
            .field("on_close", &self.on_close.is_some())
            .field("on_minimize", &self.on_minimize.is_some())
            .field("on_maximize", &self.on_maximize.is_some())
            .field("on_resize", &self.on_resize.is_some())
            .field("on_move", &self.on_move.is_some())
            .finish()
    }
}

/// A piece of panel content. Text is rendered as a paragraph; components
/// draw themselves.
pub enum ContentNode {
    Text(String),
    Component(Box<dyn Component>),
}

impl fmt::Debug for ContentNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Component(_) => f.write_str("Component(..)"),
        }
    }
}

impl ContentNode {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Component(_) => None,
        }
    }
}

impl From<&str> for ContentNode {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ContentNode {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Box<dyn Component>> for ContentNode {
    fn from(value: Box<dyn Component>) -> Self {
        Self::Component(value)
    }
}

/// The content container of a window. Its children move into a tab panel
/// while the window is grouped and come back when it is freed.
#[derive(Debug, Default)]
pub struct ContentContainer {
    pub class: Option<String>,
    pub children: Vec<ContentNode>,
}

impl ContentContainer {
    pub fn take_children(&mut self) -> Vec<ContentNode> {
        std::mem::take(&mut self.children)
    }
}

pub struct WindowOptions {
    pub id: Option<String>,
    pub title: Option<String>,
    pub icon: Option<String>,
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub width: Option<u16>,
    pub height: Option<u16>,
    pub min_width: Option<u16>,
    pub min_height: Option<u16>,
    pub resizable: bool,
    pub minimizable: bool,
    pub maximizable: bool,
    pub closable: bool,
    pub persistent: bool,
    pub auto_focus: bool,
    pub content: Option<ContentNode>,
    pub content_class: Option<String>,
    pub callbacks: WindowCallbacks,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            id: None,
            title: None,
            icon: None,
            x: None,
            y: None,
            width: None,
            height: None,
            min_width: None,
            min_height: None,
            resizable: true,
            minimizable: true,
            maximizable: true,
            closable: true,
            persistent: true,
            auto_focus: true,
            content: None,
            content_class: None,
            callbacks: WindowCallbacks::default(),
        }
    }
}

impl fmt::Debug for WindowOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowOptions")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("x", &self.x)
            .field("y", &self.y)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("persistent", &self.persistent)
            .finish_non_exhaustive()
    }
}

impl WindowOptions {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn position(mut self, x: i32, y: i32) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    pub fn size(mut self, width: u16, height: u16) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn geometry(self, x: i32, y: i32, width: u16, height: u16) -> Self {
        self.position(x, y).size(width, height)
    }

    pub fn min_size(mut self, width: u16, height: u16) -> Self {
        self.min_width = Some(width);
        self.min_height = Some(height);
        self
    }

    pub fn resizable(mut self, value: bool) -> Self {
        self.resizable = value;
        self
    }

    pub fn minimizable(mut self, value: bool) -> Self {
        self.minimizable = value;
        self
    }

    pub fn maximizable(mut self, value: bool) -> Self {
        self.maximizable = value;
        self
    }

    pub fn closable(mut self, value: bool) -> Self {
        self.closable = value;
        self
    }

    pub fn persistent(mut self, value: bool) -> Self {
        self.persistent = value;
        self
    }

    pub fn auto_focus(mut self, value: bool) -> Self {
        self.auto_focus = value;
        self
    }

    pub fn content(mut self, content: impl Into<ContentNode>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn content_class(mut self, class: impl Into<String>) -> Self {
        self.content_class = Some(class.into());
        self
    }

    pub fn on_create(mut self, f: impl FnMut(&WindowState) + 'static) -> Self {
        self.callbacks.on_create = Some(Box::new(f));
        self
    }

    pub fn on_close(mut self, f: impl FnMut(&WindowState) -> CloseDecision + 'static) -> Self {
        self.callbacks.on_close = Some(Box::new(f));
        self
    }

    pub fn on_minimize(mut self, f: impl FnMut(&WindowState) + 'static) -> Self {
        self.callbacks.on_minimize = Some(Box::new(f));
        self
    }

    pub fn on_maximize(mut self, f: impl FnMut(&WindowState) + 'static) -> Self {
        self.callbacks.on_maximize = Some(Box::new(f));
        self
    }

    pub fn on_resize(mut self, f: impl FnMut(&WindowState, u16, u16) + 'static) -> Self {
        self.callbacks.on_resize = Some(Box::new(f));
        self
    }

    pub fn on_move(mut self, f: impl FnMut(&WindowState, i32, i32) + 'static) -> Self {
        self.callbacks.on_move = Some(Box::new(f));
        self
    }
}

/// Read-only snapshot handed to callbacks and returned by `state()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowState {
    pub id: String,
    pub title: String,
    pub rect: FloatRect,
    pub min_width: u16,
    pub min_height: u16,
    pub minimized: bool,
    pub maximized: bool,
    pub docked: Option<DockZone>,
    pub pre_dock: Option<FloatRect>,
    pub pre_maximize: Option<FloatRect>,
    pub tab_group: Option<GroupId>,
    pub visible: bool,
    pub focused: bool,
    pub mobile: bool,
}

#[derive(Debug)]
pub struct Window {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) icon: Option<String>,
    pub(crate) rect: FloatRect,
    pub(crate) min_width: u16,
    pub(crate) min_height: u16,
    pub(crate) resizable: bool,
    pub(crate) minimizable: bool,
    pub(crate) maximizable: bool,
    pub(crate) closable: bool,
    pub(crate) persistent: bool,
    pub(crate) content: ContentContainer,
    pub(crate) callbacks: WindowCallbacks,
    pub(crate) minimized: bool,
    pub(crate) maximized: bool,
    pub(crate) docked: Option<DockZone>,
    pub(crate) pre_dock: Option<FloatRect>,
    pub(crate) pre_maximize: Option<FloatRect>,
    pub(crate) tab_group: Option<GroupId>,
    pub(crate) visible: bool,
    pub(crate) focused: bool,
    pub(crate) creation_order: usize,
}

impl Window {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn is_minimized(&self) -> bool {
        self.minimized
    }

    pub fn is_maximized(&self) -> bool {
        self.maximized
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn tab_group(&self) -> Option<GroupId> {
        self.tab_group
    }

    pub fn creation_order(&self) -> usize {
        self.creation_order
    }

    pub fn content(&self) -> &ContentContainer {
        &self.content
    }

    pub(crate) fn closable(&self) -> bool {
        self.closable
    }

    pub(crate) fn minimizable(&self) -> bool {
        self.minimizable
    }

    pub(crate) fn maximizable(&self) -> bool {
        self.maximizable
    }

    /// Free, shown and neither minimized nor tabbed.
    pub fn is_free_visible(&self) -> bool {
        self.tab_group.is_none() && self.visible && !self.minimized
    }

    /// Geometry to persist: a maximized window keeps its restorable size.
    pub(crate) fn persisted_rect(&self) -> FloatRect {
        if self.maximized {
            self.pre_maximize.unwrap_or(self.rect)
        } else {
            self.rect
        }
    }

    pub fn state(&self) -> WindowState {
        WindowState {
            id: self.id.clone(),
            title: self.title.clone(),
            rect: self.rect,
            min_width: self.min_width,
            min_height: self.min_height,
            minimized: self.minimized,
            maximized: self.maximized,
            docked: self.docked,
            pre_dock: self.pre_dock,
            pre_maximize: self.pre_maximize,
            tab_group: self.tab_group,
            visible: self.visible,
            focused: self.focused,
            mobile: false,
        }
    }
}

impl StackableFrame for Window {
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
        self.resizable
    }

    fn is_maximized(&self) -> bool {
        self.maximized
    }
}
