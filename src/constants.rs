//! Shared crate-wide constants.
//!
//! All distances are in host pixels. Every value here is the default for the
//! matching field of [`crate::config::WmConfig`].

/// Render depth assigned to the bottom-most frame in the stack.
pub const STACK_BASE: u32 = 1000;

/// Distance from a viewport edge at which the pointer arms an edge-snap zone.
pub const EDGE_SNAP_THRESHOLD: i32 = 40;

/// Maximum distance between two window edges that still aligns them.
pub const WINDOW_SNAP_THRESHOLD: i32 = 15;

/// Height of a free window's titlebar strip.
pub const TITLEBAR_HEIGHT: i32 = 36;

/// Height of a tab group's drag bar plus tab strip.
pub const GROUP_BAR_HEIGHT: i32 = 60;

/// Extra vertical tolerance below a titlebar that still counts as a merge drop.
pub const MERGE_SLOP: i32 = 50;

/// Axis distance a held tab must travel before it tears out of its group.
pub const TEAR_THRESHOLD: i32 = 20;

/// Vertical distance from the top of a torn window to the pointer.
pub const TEAR_TITLEBAR_OFFSET: i32 = 20;

/// Offset inside the former group's bounds for a window detached without a drag.
pub const DETACH_OFFSET: i32 = 30;

/// Cascade origin and step for windows created without geometry.
pub const CASCADE_ORIGIN: i32 = 50;
pub const CASCADE_STEP: i32 = 30;
pub const CASCADE_CYCLE: usize = 10;

/// Fallback for the `--bottom-nav-height` host property.
pub const DEFAULT_BOTTOM_OFFSET: i32 = 64;

/// Name of the host property carrying the bottom navigation height.
pub const BOTTOM_NAV_PROPERTY: &str = "--bottom-nav-height";

/// Viewport widths at or below which mobile presentation is used.
pub const MOBILE_BREAKPOINT: i32 = 768;
pub const MOBILE_UA_BREAKPOINT: i32 = 1024;

/// Downward swipe distance on a mobile sheet header that dismisses it.
pub const SWIPE_DISMISS_DISTANCE: i32 = 100;

/// Height of the draggable header of a mobile sheet.
pub const MOBILE_HEADER_HEIGHT: i32 = 48;

/// Minimum size of a tab group.
pub const GROUP_MIN_WIDTH: u16 = 250;
pub const GROUP_MIN_HEIGHT: u16 = 150;

/// Default window geometry.
pub const DEFAULT_WIDTH: u16 = 400;
pub const DEFAULT_HEIGHT: u16 = 300;
pub const DEFAULT_MIN_WIDTH: u16 = 200;
pub const DEFAULT_MIN_HEIGHT: u16 = 150;

/// Thickness of the invisible resize handles around a frame.
pub const RESIZE_HANDLE_SIZE: i32 = 8;

/// Width of each titlebar control button (close, maximize, minimize).
pub const CONTROL_WIDTH: i32 = 32;

/// Width of a tab in a group's tab strip and of its close affordance.
pub const TAB_WIDTH: i32 = 140;
pub const TAB_CLOSE_WIDTH: i32 = 24;

/// Height of the drag bar above a group's tab strip.
pub const GROUP_DRAG_BAR_HEIGHT: i32 = 24;

/// Maximum interval between two titlebar presses that counts as a double click.
pub const DOUBLE_CLICK_MS: u64 = 500;

/// Default aggregate storage key.
pub const STORAGE_KEY: &str = "floating-windows-state";

/// Width of a minimize-dock button and the smallest height of the dock strip.
pub const DOCK_BUTTON_WIDTH: i32 = 160;
pub const DOCK_MIN_HEIGHT: i32 = 24;
