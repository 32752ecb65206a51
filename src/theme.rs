use ratatui::style::Color;

// Centralized scene colors. Keep these as small helpers so the renderer and
// decorators never hard-code a palette.

pub const ACCENT_RGB: (u8, u8, u8) = (200, 100, 0);
pub const ACCENT_ALT_RGB: (u8, u8, u8) = (255, 165, 0);

pub fn accent() -> Color {
    Color::Rgb(ACCENT_RGB.0, ACCENT_RGB.1, ACCENT_RGB.2)
}

pub fn accent_alt() -> Color {
    Color::Rgb(ACCENT_ALT_RGB.0, ACCENT_ALT_RGB.1, ACCENT_ALT_RGB.2)
}

// Buttons, tabs and dock entries
pub fn panel_bg() -> Color {
    Color::DarkGray
}
pub fn panel_fg() -> Color {
    Color::Black
}
pub fn panel_active_bg() -> Color {
    Color::Gray
}
pub fn panel_active_fg() -> Color {
    Color::Black
}

// Decorator
pub fn decorator_header_bg() -> Color {
    Color::Blue
}
pub fn decorator_inactive_bg() -> Color {
    Color::DarkGray
}
pub fn decorator_header_fg() -> Color {
    Color::White
}
pub fn decorator_border() -> Color {
    Color::DarkGray
}

// Drag feedback: snap-zone preview and merge-target outline
pub fn snap_preview() -> Color {
    accent_alt()
}
pub fn merge_highlight() -> Color {
    accent()
}

// Mobile overlay behind an open sheet
pub fn overlay_bg() -> Color {
    Color::Black
}
pub fn overlay_fg() -> Color {
    Color::DarkGray
}

// Bottom navigation / status bar
pub fn status_bg() -> Color {
    Color::Gray
}
pub fn status_fg() -> Color {
    Color::Black
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    #[test]
    fn drag_feedback_colors_are_distinct() {
        assert_ne!(snap_preview(), merge_highlight());
        assert!(matches!(accent(), Color::Rgb(200, 100, 0)));
    }
}
