//! Editor layout - fixed panel arrangement
//!
//! ```text
//! +-----------------------------------------+
//! | toolbar                                 |
//! +---------+---------------------+---------+
//! | palette |      viewport       | inspect |
//! |         |                     |         |
//! +---------+---------------------+---------+
//! | status bar                              |
//! +-----------------------------------------+
//! ```

use macroquad::prelude::*;
use crate::config::EditorConfig;
use crate::ui::{draw_text_left, theme, Rect};

pub const TOOLBAR_HEIGHT: f32 = 32.0;
pub const STATUS_HEIGHT: f32 = 22.0;

/// Minimum width the level viewport keeps when side columns shrink
const MIN_VIEWPORT_WIDTH: f32 = 120.0;

/// Screen rects for every editor region
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditorLayout {
    pub toolbar: Rect,
    pub palette: Rect,
    pub viewport: Rect,
    pub inspector: Rect,
    pub status: Rect,
}

impl EditorLayout {
    pub fn compute(screen: Rect, config: &EditorConfig) -> Self {
        let toolbar = screen.slice_top(TOOLBAR_HEIGHT);
        let below = screen.remaining_after_top(TOOLBAR_HEIGHT);
        let status = below.slice_bottom(STATUS_HEIGHT);
        let main = below.remaining_after_bottom(STATUS_HEIGHT);

        // Squeeze the side columns on narrow windows
        let side_total = config.palette_width + config.inspector_width;
        let available = (main.w - MIN_VIEWPORT_WIDTH).max(0.0);
        let scale = if side_total > available && side_total > 0.0 { available / side_total } else { 1.0 };
        let palette_w = (config.palette_width * scale).floor();
        let inspector_w = (config.inspector_width * scale).floor();

        let palette = main.slice_left(palette_w);
        let rest = main.remaining_after_left(palette_w);
        let inspector = rest.slice_right(inspector_w);
        let viewport = rest.remaining_after_right(inspector_w);

        Self { toolbar, palette, viewport, inspector, status }
    }
}

/// Draw the status bar: a message on the left, a hint on the right
pub fn draw_status_bar(rect: Rect, message: Option<&str>, hint: &str) {
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, theme::HEADER_COLOR);
    draw_line(rect.x, rect.y + 0.5, rect.right(), rect.y + 0.5, 1.0, theme::PANEL_BORDER);

    let text_rect = rect.pad(4.0);
    if let Some(message) = message {
        draw_text_left(message, text_rect, theme::FONT_SIZE_SMALL, theme::TEXT_COLOR);
    }

    let dims = measure_text(hint, None, theme::FONT_SIZE_SMALL as u16, 1.0);
    let hint_rect = Rect::new(text_rect.right() - dims.width, text_rect.y, dims.width, text_rect.h);
    draw_text_left(hint, hint_rect, theme::FONT_SIZE_SMALL, theme::TEXT_DIM);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regions_tile_the_screen() {
        let layout = EditorLayout::compute(Rect::screen(1280.0, 720.0), &EditorConfig::default());

        assert_eq!(layout.toolbar, Rect::new(0.0, 0.0, 1280.0, TOOLBAR_HEIGHT));
        assert_eq!(layout.status.bottom(), 720.0);
        assert_eq!(layout.palette.w, 160.0);
        assert_eq!(layout.inspector.w, 220.0);
        assert_eq!(layout.inspector.right(), 1280.0);
        assert_eq!(layout.viewport.x, layout.palette.right());
        assert_eq!(layout.viewport.right(), layout.inspector.x);
        assert_eq!(layout.viewport.y, TOOLBAR_HEIGHT);
        assert_eq!(layout.viewport.bottom(), layout.status.y);
    }

    #[test]
    fn test_narrow_window_keeps_a_viewport() {
        let layout = EditorLayout::compute(Rect::screen(400.0, 300.0), &EditorConfig::default());
        assert!(layout.viewport.w >= MIN_VIEWPORT_WIDTH);
        assert!(layout.inspector.right() <= 400.0);
    }
}
