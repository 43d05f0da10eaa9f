//! Input state for UI interaction
//!
//! Widgets are processed top-down (panels above the scene first). The first
//! widget to take a press consumes the pointer so nothing beneath it reacts
//! in the same frame.

use macroquad::prelude::*;
use super::Rect;

/// Mouse button state
#[derive(Debug, Clone, Copy, Default)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    pub left_down: bool,
    pub left_pressed: bool, // Just pressed this frame
}

impl MouseState {
    /// Poll macroquad for this frame's mouse state
    pub fn poll() -> Self {
        let (x, y) = mouse_position();
        Self {
            x,
            y,
            left_down: is_mouse_button_down(MouseButton::Left),
            left_pressed: is_mouse_button_pressed(MouseButton::Left),
        }
    }

    /// A mouse that was pressed at (x, y) this frame
    pub fn pressed_at(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            left_down: true,
            left_pressed: true,
            ..Default::default()
        }
    }

    /// A mouse hovering at (x, y) with no buttons down
    pub fn hovering(x: f32, y: f32) -> Self {
        Self { x, y, ..Default::default() }
    }

    /// Check if mouse is inside a rect
    pub fn inside(&self, rect: &Rect) -> bool {
        rect.contains(self.x, self.y)
    }

    /// Check if mouse just clicked inside a rect
    pub fn clicked(&self, rect: &Rect) -> bool {
        self.left_pressed && rect.contains(self.x, self.y)
    }
}

/// UI context passed through the frame
pub struct UiContext {
    pub mouse: MouseState,
    /// Set once some widget has claimed this frame's press
    pointer_consumed: bool,
}

impl UiContext {
    pub fn new() -> Self {
        Self {
            mouse: MouseState::default(),
            pointer_consumed: false,
        }
    }

    /// Reset at start of frame (call before UI code)
    pub fn begin_frame(&mut self, mouse: MouseState) {
        self.mouse = mouse;
        self.pointer_consumed = false;
    }

    /// Whether the pointer is over `rect` and not already claimed
    pub fn hovering(&self, rect: &Rect) -> bool {
        !self.pointer_consumed && self.mouse.inside(rect)
    }

    /// Claim this frame's press if it landed inside `rect`.
    ///
    /// Returns true at most once per frame across all callers.
    pub fn take_click(&mut self, rect: &Rect) -> bool {
        if self.pointer_consumed || !self.mouse.clicked(rect) {
            return false;
        }
        self.pointer_consumed = true;
        true
    }

    /// Swallow any press inside `rect` without acting on it
    pub fn block(&mut self, rect: &Rect) {
        if self.mouse.left_pressed && self.mouse.inside(rect) {
            self.pointer_consumed = true;
        }
    }

    /// Mark the pointer as handled
    pub fn consume_pointer(&mut self) {
        self.pointer_consumed = true;
    }

    pub fn pointer_consumed(&self) -> bool {
        self.pointer_consumed
    }
}

impl Default for UiContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_click_only_once() {
        let mut ctx = UiContext::new();
        ctx.begin_frame(MouseState::pressed_at(15.0, 15.0));

        let button = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(ctx.take_click(&button));
        // Second widget at the same spot doesn't see the press
        assert!(!ctx.take_click(&button));
        assert!(ctx.pointer_consumed());
    }

    #[test]
    fn test_block_swallows_press() {
        let mut ctx = UiContext::new();
        ctx.begin_frame(MouseState::pressed_at(50.0, 50.0));

        ctx.block(&Rect::new(0.0, 0.0, 100.0, 100.0));
        assert!(!ctx.take_click(&Rect::new(40.0, 40.0, 20.0, 20.0)));
    }

    #[test]
    fn test_block_ignores_hover() {
        let mut ctx = UiContext::new();
        ctx.begin_frame(MouseState::hovering(50.0, 50.0));
        ctx.block(&Rect::new(0.0, 0.0, 100.0, 100.0));
        assert!(!ctx.pointer_consumed());
    }

    #[test]
    fn test_begin_frame_resets_consumption() {
        let mut ctx = UiContext::new();
        ctx.begin_frame(MouseState::pressed_at(5.0, 5.0));
        ctx.consume_pointer();
        ctx.begin_frame(MouseState::pressed_at(5.0, 5.0));
        assert!(!ctx.pointer_consumed());
    }
}
