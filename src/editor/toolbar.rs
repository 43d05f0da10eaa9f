//! Toolbar - fixed row of action buttons
//!
//! Buttons are declared up front as `ToolbarButton`s. A click is only
//! recorded during the input pass; the owner drains it in the apply pass,
//! after every widget has seen the frame's input.

use macroquad::prelude::*;
use crate::ui::{draw_button, theme, ButtonStyle, ButtonVisual, Rect, UiContext};
use super::EventQueue;

const BUTTON_WIDTH: f32 = 72.0;
const BUTTON_SPACING: f32 = 4.0;
const BUTTON_MARGIN: f32 = 3.0;

/// What a toolbar button asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    Platform,
    Save,
    Load,
    Clear,
}

/// Declarative button definition
#[derive(Debug, Clone)]
pub struct ToolbarButton {
    pub id: &'static str,
    pub label: &'static str,
    pub action: ToolbarAction,
    pub style: ButtonStyle,
}

/// The editor's standard button row
pub fn default_buttons() -> Vec<ToolbarButton> {
    vec![
        ToolbarButton { id: "platform", label: "Platform", action: ToolbarAction::Platform, style: ButtonStyle::Normal },
        ToolbarButton { id: "save", label: "Save", action: ToolbarAction::Save, style: ButtonStyle::Primary },
        ToolbarButton { id: "load", label: "Load", action: ToolbarAction::Load, style: ButtonStyle::Normal },
        ToolbarButton { id: "clear", label: "Clear", action: ToolbarAction::Clear, style: ButtonStyle::Danger },
    ]
}

pub struct Toolbar {
    buttons: Vec<ToolbarButton>,
    /// Highlighted button. Stays until replaced or explicitly cleared.
    active: Option<&'static str>,
    hovered: Option<&'static str>,
    pressed: Option<&'static str>,
    clicks: EventQueue<ToolbarAction>,
}

impl Toolbar {
    pub fn new(buttons: Vec<ToolbarButton>) -> Self {
        Self {
            buttons,
            active: None,
            hovered: None,
            pressed: None,
            clicks: EventQueue::new(),
        }
    }

    /// Button rects laid out left to right inside `rect`
    pub fn layout(&self, rect: Rect) -> Vec<Rect> {
        let h = (rect.h - BUTTON_MARGIN * 2.0).max(0.0);
        let mut x = rect.x + BUTTON_SPACING;
        self.buttons
            .iter()
            .map(|_| {
                let r = Rect::new(x.round(), (rect.y + BUTTON_MARGIN).round(), BUTTON_WIDTH, h);
                x += BUTTON_WIDTH + BUTTON_SPACING;
                r
            })
            .collect()
    }

    /// Record hover state and queue at most one click
    pub fn handle_input(&mut self, ctx: &mut UiContext, rect: Rect) {
        self.hovered = None;
        self.pressed = None;

        for (button, button_rect) in self.buttons.iter().zip(self.layout(rect)) {
            if ctx.hovering(&button_rect) {
                self.hovered = Some(button.id);
                if ctx.mouse.left_down {
                    self.pressed = Some(button.id);
                }
            }
            if ctx.take_click(&button_rect) {
                log::debug!("Toolbar: '{}' clicked", button.id);
                self.clicks.send(button.action);
            }
        }

        // Empty toolbar space still belongs to the toolbar
        ctx.block(&rect);
    }

    /// Clicks recorded since the last drain, in order
    pub fn drain_clicks(&mut self) -> Vec<ToolbarAction> {
        self.clicks.take()
    }

    /// Highlight a button by id (replaces any previous highlight)
    pub fn set_active(&mut self, id: &'static str) {
        if self.buttons.iter().any(|b| b.id == id) {
            self.active = Some(id);
        } else {
            log::warn!("Toolbar: no button '{}' to highlight", id);
        }
    }

    pub fn clear_active(&mut self) {
        self.active = None;
    }

    pub fn active(&self) -> Option<&'static str> {
        self.active
    }

    pub fn draw(&self, rect: Rect) {
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, theme::HEADER_COLOR);
        draw_line(rect.x, rect.bottom() - 0.5, rect.right(), rect.bottom() - 0.5, 1.0, theme::PANEL_BORDER);

        for (button, button_rect) in self.buttons.iter().zip(self.layout(rect)) {
            let visual = ButtonVisual {
                hovered: self.hovered == Some(button.id),
                pressed: self.pressed == Some(button.id),
                active: self.active == Some(button.id),
                disabled: false,
            };
            draw_button(button_rect, button.label, button.style, visual);
        }
    }
}

impl Default for Toolbar {
    fn default() -> Self {
        Self::new(default_buttons())
    }
}
