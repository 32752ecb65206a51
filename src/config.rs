//! Manager configuration.
//!
//! Every field has a default taken from [`crate::constants`]; a JSON document
//! only needs to name the values it overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{Result, WmError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WmConfig {
    /// Aggregate key under which window geometry is persisted.
    pub storage_key: String,
    pub stack_base: u32,
    pub edge_snap_threshold: i32,
    pub window_snap_threshold: i32,
    pub titlebar_height: i32,
    pub group_bar_height: i32,
    pub merge_slop: i32,
    pub tear_threshold: i32,
    pub tear_titlebar_offset: i32,
    pub detach_offset: i32,
    pub cascade_origin: i32,
    pub cascade_step: i32,
    pub cascade_cycle: usize,
    pub default_bottom_offset: i32,
    pub mobile_breakpoint: i32,
    pub mobile_ua_breakpoint: i32,
    pub mobile_header_height: i32,
    pub swipe_dismiss_distance: i32,
    pub group_min_width: u16,
    pub group_min_height: u16,
    pub resize_handle_size: i32,
    pub control_width: i32,
    pub tab_width: i32,
    pub tab_close_width: i32,
    pub group_drag_bar_height: i32,
    pub double_click_ms: u64,
}

impl Default for WmConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            stack_base: STACK_BASE,
            edge_snap_threshold: EDGE_SNAP_THRESHOLD,
            window_snap_threshold: WINDOW_SNAP_THRESHOLD,
            titlebar_height: TITLEBAR_HEIGHT,
            group_bar_height: GROUP_BAR_HEIGHT,
            merge_slop: MERGE_SLOP,
            tear_threshold: TEAR_THRESHOLD,
            tear_titlebar_offset: TEAR_TITLEBAR_OFFSET,
            detach_offset: DETACH_OFFSET,
            cascade_origin: CASCADE_ORIGIN,
            cascade_step: CASCADE_STEP,
            cascade_cycle: CASCADE_CYCLE,
            default_bottom_offset: DEFAULT_BOTTOM_OFFSET,
            mobile_breakpoint: MOBILE_BREAKPOINT,
            mobile_ua_breakpoint: MOBILE_UA_BREAKPOINT,
            mobile_header_height: MOBILE_HEADER_HEIGHT,
            swipe_dismiss_distance: SWIPE_DISMISS_DISTANCE,
            group_min_width: GROUP_MIN_WIDTH,
            group_min_height: GROUP_MIN_HEIGHT,
            resize_handle_size: RESIZE_HANDLE_SIZE,
            control_width: CONTROL_WIDTH,
            tab_width: TAB_WIDTH,
            tab_close_width: TAB_CLOSE_WIDTH,
            group_drag_bar_height: GROUP_DRAG_BAR_HEIGHT,
            double_click_ms: DOUBLE_CLICK_MS,
        }
    }
}

impl WmConfig {
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: WmConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        if self.storage_key.is_empty() {
            return Err(WmError::Config("storage_key must not be empty".into()));
        }
        if self.cascade_cycle == 0 {
            return Err(WmError::Config("cascade_cycle must be at least 1".into()));
        }
        if self.group_bar_height <= self.group_drag_bar_height {
            return Err(WmError::Config(
                "group_bar_height must exceed group_drag_bar_height".into(),
            ));
        }
        Ok(())
    }
}
