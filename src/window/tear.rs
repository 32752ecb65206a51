use super::FrameId;
use super::tabs::GroupId;
use super::window_manager::{Gesture, WindowManager};
use crate::input::Point;

impl WindowManager {
    /// Press on a tab: activate it and start watching for a tear.
    pub fn begin_tab_press(&mut self, group: GroupId, window: &str, point: Point) -> bool {
        if !self.activate_tab(group, window) {
            return false;
        }
        self.focus_frame(&FrameId::Group(group));
        self.gesture = Some(Gesture::TabPress {
            group,
            window: window.to_string(),
            origin: point,
        });
        true
    }

    /// Past the threshold on either axis the tab leaves its group and the
    /// same press continues as a drag of the freed window.
    pub(crate) fn tab_press_move(
        &mut self,
        group: GroupId,
        window: &str,
        origin: Point,
        point: Point,
    ) {
        let threshold = self.config.tear_threshold;
        if (point.x - origin.x).abs() <= threshold && (point.y - origin.y).abs() <= threshold {
            return;
        }
        let members = self.groups.get(&group).map_or(0, |g| g.members.len());
        if members < 2 {
            return;
        }
        tracing::debug!(group = %group, window_id = %window, "tab torn out");
        self.gesture = None;
        self.begin_drag(FrameId::window(window), point);
    }
}
