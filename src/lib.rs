//! Floating panels overlaid on a host surface.
//!
//! [`WindowManager`] owns every window, tab group and mobile sheet and is
//! driven by pointer events in host pixels. The terminal front end in
//! [`runner`] maps crossterm input onto it and paints the scene with ratatui.

pub mod component_context;
pub mod components;
pub mod config;
pub mod constants;
pub mod drivers;
pub mod error;
pub mod event_loop;
pub mod host;
pub mod input;
pub mod layout;
pub mod persistence;
pub mod runner;
pub mod theme;
pub mod tracing_sub;
pub mod ui;
pub mod window;

pub use config::WmConfig;
pub use error::{Result, WmError};
pub use host::{HostEnvironment, StaticHost, Viewport};
pub use input::{Point, PointerEvent, PointerKind};
pub use layout::{DockZone, FloatRect, ResizeEdge};
pub use persistence::{FileStore, KeyValueStore, MemoryStore};
pub use window::{
    CloseDecision, ContentNode, FrameId, GroupId, WindowHandle, WindowManager, WindowOptions,
    WindowState,
};
