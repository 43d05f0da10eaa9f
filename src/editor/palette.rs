//! Selection palette - list of placeable entity kinds

use macroquad::prelude::*;
use crate::ui::{draw_panel, draw_text_left, panel_content_rect, theme, Rect, UiContext};
use crate::world::{EntityKind, PlatformConfig};

const ROW_HEIGHT: f32 = 28.0;
const ROW_SPACING: f32 = 2.0;
const SWATCH_SIZE: f32 = 14.0;

/// Swatch color used for an entity kind in the palette and the viewport
pub fn kind_color(kind: EntityKind) -> Color {
    match kind {
        EntityKind::Player => Color::from_rgba(80, 160, 255, 255),
        EntityKind::Platform => Color::from_rgba(140, 110, 80, 255),
        EntityKind::Enemy => Color::from_rgba(220, 70, 70, 255),
        EntityKind::Coin => Color::from_rgba(250, 210, 60, 255),
        EntityKind::Spike => Color::from_rgba(180, 180, 190, 255),
        EntityKind::Goal => Color::from_rgba(90, 210, 110, 255),
    }
}

/// One row in the palette
#[derive(Debug, Clone)]
pub struct PaletteEntry {
    pub kind: EntityKind,
    pub label: &'static str,
    /// Configuration handed along with the selection
    pub config: Option<PlatformConfig>,
}

/// What the user picked
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteSelection {
    pub kind: EntityKind,
    pub config: Option<PlatformConfig>,
}

pub struct SelectionPalette {
    entries: Vec<PaletteEntry>,
    enabled: bool,
    selected: Option<EntityKind>,
    hovered: Option<usize>,
}

impl SelectionPalette {
    pub fn new() -> Self {
        let entries = EntityKind::ALL
            .iter()
            .map(|&kind| PaletteEntry {
                kind,
                label: kind.label(),
                config: (kind == EntityKind::Platform).then(PlatformConfig::default),
            })
            .collect();
        Self {
            entries,
            enabled: true,
            selected: None,
            hovered: None,
        }
    }

    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable interaction. Disabling drops the hover highlight.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            log::debug!("Palette: {}", if enabled { "enabled" } else { "disabled" });
        }
        self.enabled = enabled;
        if !enabled {
            self.hovered = None;
        }
    }

    pub fn selected(&self) -> Option<EntityKind> {
        self.selected
    }

    pub fn clear_selected(&mut self) {
        self.selected = None;
    }

    /// Row rects inside the palette's panel
    pub fn layout(&self, rect: Rect) -> Vec<Rect> {
        let content = panel_content_rect(rect, true);
        (0..self.entries.len())
            .map(|i| {
                let y = content.y + i as f32 * (ROW_HEIGHT + ROW_SPACING);
                Rect::new(content.x, y, content.w, ROW_HEIGHT)
            })
            .collect()
    }

    /// Hit-test rows; returns the entry clicked this frame
    pub fn handle_input(&mut self, ctx: &mut UiContext, rect: Rect) -> Option<PaletteSelection> {
        self.hovered = None;
        let mut picked = None;

        if self.enabled {
            for (i, row) in self.layout(rect).into_iter().enumerate() {
                if ctx.hovering(&row) {
                    self.hovered = Some(i);
                }
                if ctx.take_click(&row) {
                    let entry = &self.entries[i];
                    self.selected = Some(entry.kind);
                    picked = Some(PaletteSelection { kind: entry.kind, config: entry.config });
                }
            }
        }

        // Clicks on a disabled palette or between rows stop here
        ctx.block(&rect);
        picked
    }

    pub fn draw(&self, rect: Rect) {
        draw_panel(rect, Some("Entities"), theme::PANEL_BG);

        for (i, (entry, row)) in self.entries.iter().zip(self.layout(rect)).enumerate() {
            let is_selected = self.selected == Some(entry.kind);
            if is_selected {
                draw_rectangle(row.x, row.y, row.w, row.h, theme::BUTTON_PRESSED);
            } else if self.hovered == Some(i) {
                draw_rectangle(row.x, row.y, row.w, row.h, theme::BUTTON_HOVER);
            }

            let mut swatch = kind_color(entry.kind);
            let mut text_color = theme::TEXT_COLOR;
            if !self.enabled {
                swatch.a = 0.35;
                text_color = theme::TEXT_DIM;
            }
            let sy = row.center_y() - SWATCH_SIZE * 0.5;
            draw_rectangle(row.x + 6.0, sy, SWATCH_SIZE, SWATCH_SIZE, swatch);

            let label_rect = Rect::new(row.x + 12.0 + SWATCH_SIZE, row.y, row.w - 12.0 - SWATCH_SIZE, row.h);
            draw_text_left(entry.label, label_rect, theme::FONT_SIZE_CONTENT, text_color);
        }
    }
}

impl Default for SelectionPalette {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MouseState;

    fn palette_rect() -> Rect {
        Rect::new(0.0, 32.0, 160.0, 400.0)
    }

    fn click_row(palette: &mut SelectionPalette, index: usize) -> (Option<PaletteSelection>, UiContext) {
        let row = palette.layout(palette_rect())[index];
        let mut ctx = UiContext::new();
        ctx.begin_frame(MouseState::pressed_at(row.center_x(), row.center_y()));
        let picked = palette.handle_input(&mut ctx, palette_rect());
        (picked, ctx)
    }

    fn index_of(palette: &SelectionPalette, kind: EntityKind) -> usize {
        palette.entries().iter().position(|e| e.kind == kind).unwrap()
    }

    #[test]
    fn test_platform_entry_carries_default_config() {
        let mut palette = SelectionPalette::new();
        let idx = index_of(&palette, EntityKind::Platform);
        let (picked, _) = click_row(&mut palette, idx);
        assert_eq!(
            picked,
            Some(PaletteSelection { kind: EntityKind::Platform, config: Some(PlatformConfig::default()) })
        );
        assert_eq!(palette.selected(), Some(EntityKind::Platform));
    }

    #[test]
    fn test_other_entries_have_no_config() {
        let mut palette = SelectionPalette::new();
        let idx = index_of(&palette, EntityKind::Coin);
        let (picked, _) = click_row(&mut palette, idx);
        assert_eq!(picked, Some(PaletteSelection { kind: EntityKind::Coin, config: None }));
    }

    #[test]
    fn test_disabled_palette_swallows_clicks() {
        let mut palette = SelectionPalette::new();
        palette.set_enabled(false);

        let (picked, ctx) = click_row(&mut palette, 0);
        assert_eq!(picked, None);
        assert!(ctx.pointer_consumed());
        assert_eq!(palette.selected(), None);

        palette.set_enabled(true);
        let (picked, _) = click_row(&mut palette, 0);
        assert!(picked.is_some());
    }
}
