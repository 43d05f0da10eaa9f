//! Platform configuration panel
//!
//! A small floating form: orientation toggle, segment-count stepper, a
//! preview of the resulting footprint and a "Place Platform" button. It only
//! holds the configuration being edited; the platform tool decides what to
//! do with it.
//!
//! Any press inside the panel is consumed, so clicking a control can never
//! also hit the level underneath.

use macroquad::prelude::*;
use crate::ui::{
    draw_button, draw_panel, draw_text_centered, theme, ButtonStyle, ButtonVisual, Rect, UiContext,
    PANEL_TITLE_HEIGHT,
};
use crate::world::{EntityKind, PlatformConfig, MAX_SEGMENTS};
use super::palette::kind_color;

pub const PANEL_WIDTH: f32 = 280.0;
pub const PANEL_HEIGHT: f32 = 230.0;

const ROW_HEIGHT: f32 = 28.0;
const PADDING: f32 = 10.0;
const PREVIEW_HEIGHT: f32 = 70.0;

/// Result of a frame's interaction with the panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelResponse {
    None,
    /// A control changed the configuration
    Changed(PlatformConfig),
    /// "Place Platform" was clicked
    Place,
}

/// Interactive controls on the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelControl {
    Orientation,
    Decrease,
    Increase,
    Place,
}

/// Screen rects for every part of the panel
#[derive(Debug, Clone, Copy)]
pub struct PanelLayout {
    pub frame: Rect,
    pub orientation: Rect,
    pub decrease: Rect,
    pub count: Rect,
    pub increase: Rect,
    pub preview: Rect,
    pub place: Rect,
}

impl PanelLayout {
    pub fn control(&self, control: PanelControl) -> Rect {
        match control {
            PanelControl::Orientation => self.orientation,
            PanelControl::Decrease => self.decrease,
            PanelControl::Increase => self.increase,
            PanelControl::Place => self.place,
        }
    }
}

pub struct PlatformPanel {
    config: PlatformConfig,
    visible: bool,
    /// Top-left corner of the frame
    origin: (f32, f32),
    orientation_label: String,
    hovered: Option<PanelControl>,
}

impl PlatformPanel {
    pub fn new() -> Self {
        let config = PlatformConfig::default();
        Self {
            config,
            visible: false,
            origin: (0.0, 0.0),
            orientation_label: orientation_label(&config),
            hovered: None,
        }
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    /// Hide the panel. Safe to call when already hidden.
    pub fn hide(&mut self) {
        self.visible = false;
        self.hovered = None;
    }

    pub fn toggle(&mut self) {
        if self.visible {
            self.hide();
        } else {
            self.show();
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Center the frame inside `area`
    pub fn center_in(&mut self, area: Rect) {
        let frame = area.centered(PANEL_WIDTH, PANEL_HEIGHT);
        self.origin = (frame.x, frame.y);
    }

    /// Replace the configuration from outside and refresh the labels
    pub fn update_config(&mut self, config: PlatformConfig) {
        self.config = config.with_segments(config.segment_count as i64);
        self.orientation_label = orientation_label(&self.config);
    }

    /// Snapshot of the configuration being edited
    pub fn get_config(&self) -> PlatformConfig {
        self.config
    }

    pub fn orientation_label(&self) -> &str {
        &self.orientation_label
    }

    /// Flip horizontal/vertical
    pub fn toggle_orientation(&mut self) -> PlatformConfig {
        self.config.is_vertical = !self.config.is_vertical;
        self.orientation_label = orientation_label(&self.config);
        self.config
    }

    /// Step the segment count by `delta`, clamped to the allowed range
    pub fn step_segments(&mut self, delta: i64) -> PlatformConfig {
        self.config = self.config.stepped(delta);
        self.config
    }

    pub fn layout(&self) -> PanelLayout {
        let frame = Rect::new(self.origin.0, self.origin.1, PANEL_WIDTH, PANEL_HEIGHT);
        let inner = Rect::new(
            frame.x + PADDING,
            frame.y + PANEL_TITLE_HEIGHT + PADDING,
            frame.w - PADDING * 2.0,
            frame.h - PANEL_TITLE_HEIGHT - PADDING * 2.0,
        );

        let orientation = inner.slice_top(ROW_HEIGHT);

        let stepper_row = orientation.offset(0.0, ROW_HEIGHT + 6.0);
        let decrease = stepper_row.slice_left(ROW_HEIGHT);
        let increase = stepper_row.slice_right(ROW_HEIGHT);
        let count = Rect::new(decrease.right() + 4.0, stepper_row.y, increase.x - decrease.right() - 8.0, ROW_HEIGHT);

        let preview = Rect::new(inner.x, stepper_row.bottom() + 6.0, inner.w, PREVIEW_HEIGHT);
        let place = inner.slice_bottom(ROW_HEIGHT);

        PanelLayout { frame, orientation, decrease, count, increase, preview, place }
    }

    /// Process a frame of input. Hidden panels ignore input entirely.
    pub fn handle_input(&mut self, ctx: &mut UiContext) -> PanelResponse {
        self.hovered = None;
        if !self.visible {
            return PanelResponse::None;
        }

        let layout = self.layout();
        let controls = [
            PanelControl::Orientation,
            PanelControl::Decrease,
            PanelControl::Increase,
            PanelControl::Place,
        ];

        let mut response = PanelResponse::None;
        for control in controls {
            let rect = layout.control(control);
            if ctx.hovering(&rect) {
                self.hovered = Some(control);
            }
            if ctx.take_click(&rect) {
                response = match control {
                    PanelControl::Orientation => PanelResponse::Changed(self.toggle_orientation()),
                    PanelControl::Decrease => PanelResponse::Changed(self.step_segments(-1)),
                    PanelControl::Increase => PanelResponse::Changed(self.step_segments(1)),
                    PanelControl::Place => PanelResponse::Place,
                };
            }
        }

        // Presses on the panel body never fall through
        ctx.block(&layout.frame);
        response
    }

    /// Draw the panel; `preview` is the platform footprint to sketch
    pub fn draw(&self, preview: Option<(f32, f32)>) {
        if !self.visible {
            return;
        }
        let layout = self.layout();
        draw_panel(layout.frame, Some("Platform"), theme::PANEL_BG);

        let visual = |c: PanelControl| ButtonVisual { hovered: self.hovered == Some(c), ..Default::default() };

        draw_button(layout.orientation, &self.orientation_label, ButtonStyle::Normal, visual(PanelControl::Orientation));
        draw_button(layout.decrease, "-", ButtonStyle::Normal, ButtonVisual {
            disabled: self.config.segment_count <= 1,
            ..visual(PanelControl::Decrease)
        });
        draw_button(layout.increase, "+", ButtonStyle::Normal, ButtonVisual {
            disabled: self.config.segment_count >= MAX_SEGMENTS,
            ..visual(PanelControl::Increase)
        });
        draw_text_centered(
            &format!("Segments: {}", self.config.segment_count),
            layout.count,
            theme::FONT_SIZE_CONTENT,
            WHITE,
        );

        draw_rectangle(layout.preview.x, layout.preview.y, layout.preview.w, layout.preview.h, theme::VIEWPORT_BG);
        if let Some((w, h)) = preview {
            draw_footprint(layout.preview, w, h, self.config.segment_count);
        }

        draw_button(layout.place, "Place Platform", ButtonStyle::Primary, visual(PanelControl::Place));
    }
}

impl Default for PlatformPanel {
    fn default() -> Self {
        Self::new()
    }
}

fn orientation_label(config: &PlatformConfig) -> String {
    if config.is_vertical {
        "Orientation: Vertical".to_string()
    } else {
        "Orientation: Horizontal".to_string()
    }
}

/// Scale a w x h footprint into `area` and draw it segment by segment
fn draw_footprint(area: Rect, w: f32, h: f32, segments: u32) {
    let scale = ((area.w - 8.0) / w).min((area.h - 8.0) / h).min(1.0);
    let (sw, sh) = (w * scale, h * scale);
    let x = area.center_x() - sw * 0.5;
    let y = area.center_y() - sh * 0.5;
    let color = kind_color(EntityKind::Platform);
    draw_rectangle(x, y, sw, sh, color);

    let segments = segments.max(1);
    let vertical = h > w;
    for i in 1..segments {
        let t = i as f32 / segments as f32;
        if vertical {
            draw_line(x, y + sh * t, x + sw, y + sh * t, 1.0, theme::BG_COLOR);
        } else {
            draw_line(x + sw * t, y, x + sw * t, y + sh, 1.0, theme::BG_COLOR);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MouseState;

    fn visible_panel() -> PlatformPanel {
        let mut panel = PlatformPanel::new();
        panel.center_in(Rect::screen(800.0, 600.0));
        panel.show();
        panel
    }

    fn press(panel: &mut PlatformPanel, control: PanelControl) -> (PanelResponse, UiContext) {
        let rect = panel.layout().control(control);
        let mut ctx = UiContext::new();
        ctx.begin_frame(MouseState::pressed_at(rect.center_x(), rect.center_y()));
        let response = panel.handle_input(&mut ctx);
        (response, ctx)
    }

    #[test]
    fn test_stepper_stays_in_range() {
        let mut panel = visible_panel();
        for _ in 0..25 {
            if let (PanelResponse::Changed(config), _) = press(&mut panel, PanelControl::Increase) {
                assert!(config.segment_count <= 10);
            }
        }
        assert_eq!(panel.get_config().segment_count, 10);

        for _ in 0..25 {
            press(&mut panel, PanelControl::Decrease);
            assert!(panel.get_config().segment_count >= 1);
        }
        assert_eq!(panel.get_config().segment_count, 1);
    }

    #[test]
    fn test_update_config_clamps_external_values() {
        let mut panel = PlatformPanel::new();
        panel.update_config(PlatformConfig { segment_count: 99, ..Default::default() });
        assert_eq!(panel.get_config().segment_count, 10);
        panel.update_config(PlatformConfig { segment_count: 0, is_vertical: true, ..Default::default() });
        assert_eq!(panel.get_config().segment_count, 1);
        assert_eq!(panel.orientation_label(), "Orientation: Vertical");
    }

    #[test]
    fn test_orientation_toggle_updates_label() {
        let mut panel = visible_panel();
        assert_eq!(panel.orientation_label(), "Orientation: Horizontal");

        let (response, _) = press(&mut panel, PanelControl::Orientation);
        assert!(matches!(response, PanelResponse::Changed(c) if c.is_vertical));
        assert_eq!(panel.orientation_label(), "Orientation: Vertical");
    }

    #[test]
    fn test_every_press_inside_is_consumed() {
        let mut panel = visible_panel();
        let (_, ctx) = press(&mut panel, PanelControl::Place);
        assert!(ctx.pointer_consumed());

        // Blank area of the frame (just under the title)
        let frame = panel.layout().frame;
        let mut ctx = UiContext::new();
        ctx.begin_frame(MouseState::pressed_at(frame.x + 3.0, frame.y + 3.0));
        assert_eq!(panel.handle_input(&mut ctx), PanelResponse::None);
        assert!(ctx.pointer_consumed());
    }

    #[test]
    fn test_hidden_panel_ignores_input() {
        let mut panel = visible_panel();
        panel.hide();
        panel.hide();
        let (response, ctx) = press(&mut panel, PanelControl::Place);
        assert_eq!(response, PanelResponse::None);
        assert!(!ctx.pointer_consumed());
    }

    #[test]
    fn test_centered_and_toggle() {
        let mut panel = PlatformPanel::new();
        panel.center_in(Rect::new(100.0, 50.0, 600.0, 500.0));
        let frame = panel.layout().frame;
        assert_eq!(frame.center_x(), 400.0);
        assert_eq!(frame.center_y(), 300.0);

        panel.toggle();
        assert!(panel.is_visible());
        panel.toggle();
        assert!(!panel.is_visible());
    }

    #[test]
    fn test_get_config_is_a_snapshot() {
        let mut panel = visible_panel();
        let before = panel.get_config();
        panel.step_segments(2);
        assert_eq!(before.segment_count, 3);
        assert_eq!(panel.get_config().segment_count, 5);
    }
}
