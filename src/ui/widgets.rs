//! Basic UI widgets
//!
//! Drawing only. Hit-testing goes through `UiContext` in the input pass so
//! that draw order and input order can differ.

use macroquad::prelude::*;
use super::{theme, Rect};

/// Visual flavour of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonStyle {
    #[default]
    Normal,
    Primary,
    Danger,
}

/// Interaction state used when drawing a button
#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonVisual {
    pub hovered: bool,
    pub pressed: bool,
    pub active: bool,
    pub disabled: bool,
}

/// Draw a labeled button (flat background, rounded corners)
pub fn draw_button(rect: Rect, label: &str, style: ButtonStyle, visual: ButtonVisual) {
    let corner_radius = 4.0;

    let base = match style {
        ButtonStyle::Normal => theme::BUTTON_BG,
        ButtonStyle::Primary => theme::BUTTON_PRIMARY,
        ButtonStyle::Danger => theme::BUTTON_DANGER,
    };

    let bg = if visual.disabled {
        Color::new(base.r, base.g, base.b, 0.4)
    } else if visual.active {
        theme::ACCENT_COLOR
    } else if visual.pressed {
        theme::BUTTON_PRESSED
    } else if visual.hovered {
        lighten(base, 0.06)
    } else {
        base
    };
    draw_rounded_rect(rect.x, rect.y, rect.w, rect.h, corner_radius, bg);

    let text_color = if visual.disabled {
        theme::TEXT_DIM
    } else if visual.active {
        WHITE
    } else {
        theme::TEXT_COLOR
    };
    draw_text_centered(label, rect, theme::FONT_SIZE_CONTENT, text_color);
}

/// Draw text centered inside a rect, snapped to whole pixels
pub fn draw_text_centered(text: &str, rect: Rect, font_size: f32, color: Color) {
    let dims = measure_text(text, None, font_size as u16, 1.0);
    let x = (rect.center_x() - dims.width * 0.5).round();
    let y = (rect.center_y() + dims.offset_y * 0.5).round();
    draw_text(text, x, y, font_size, color);
}

/// Draw text left-aligned and vertically centered in a rect
pub fn draw_text_left(text: &str, rect: Rect, font_size: f32, color: Color) {
    let dims = measure_text(text, None, font_size as u16, 1.0);
    let y = (rect.center_y() + dims.offset_y * 0.5).round();
    draw_text(text, rect.x.round(), y, font_size, color);
}

/// Draw a rounded rectangle (simple approximation using overlapping rects)
pub fn draw_rounded_rect(x: f32, y: f32, w: f32, h: f32, r: f32, color: Color) {
    // Main body
    draw_rectangle(x + r, y, w - r * 2.0, h, color);
    draw_rectangle(x, y + r, w, h - r * 2.0, color);
    // Corners (circles)
    draw_circle(x + r, y + r, r, color);
    draw_circle(x + w - r, y + r, r, color);
    draw_circle(x + r, y + h - r, r, color);
    draw_circle(x + w - r, y + h - r, r, color);
}

fn lighten(c: Color, amount: f32) -> Color {
    Color::new(
        (c.r + amount).min(1.0),
        (c.g + amount).min(1.0),
        (c.b + amount).min(1.0),
        c.a,
    )
}
