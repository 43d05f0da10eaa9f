//! Panel chrome: background, border and title strip

use macroquad::prelude::*;
use super::{theme, Rect};

/// Height of a panel's title strip
pub const PANEL_TITLE_HEIGHT: f32 = 20.0;

/// Draw a panel background with optional title
pub fn draw_panel(rect: Rect, title: Option<&str>, bg_color: Color) {
    // Background
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, bg_color);

    // Border
    draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 1.0, theme::PANEL_BORDER);

    // Title bar if provided
    if let Some(title) = title {
        draw_rectangle(rect.x, rect.y, rect.w, PANEL_TITLE_HEIGHT, theme::PANEL_TITLE_BG);
        draw_text(title, rect.x + 5.0, rect.y + 14.0, theme::FONT_SIZE_HEADER, WHITE);
    }
}

/// Get the content area of a panel (after title bar)
pub fn panel_content_rect(rect: Rect, has_title: bool) -> Rect {
    if has_title {
        rect.remaining_after_top(PANEL_TITLE_HEIGHT).pad(4.0)
    } else {
        rect.pad(4.0)
    }
}
