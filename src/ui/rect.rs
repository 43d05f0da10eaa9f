//! Rectangle type for UI layout

/// A rectangle defined by position and size
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Create from screen dimensions
    pub fn screen(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.w * 0.5
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.h * 0.5
    }

    /// Check if point is inside
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Shrink by padding on all sides
    pub fn pad(&self, padding: f32) -> Self {
        Self::new(
            self.x + padding,
            self.y + padding,
            (self.w - padding * 2.0).max(0.0),
            (self.h - padding * 2.0).max(0.0),
        )
    }

    /// A `w` x `h` rect centered on this one, rounded to whole pixels
    pub fn centered(&self, w: f32, h: f32) -> Self {
        Self::new(
            (self.center_x() - w * 0.5).round(),
            (self.center_y() - h * 0.5).round(),
            w,
            h,
        )
    }

    /// Same size, moved by (dx, dy)
    pub fn offset(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.w, self.h)
    }

    /// Fixed-width slice from the left edge
    pub fn slice_left(&self, width: f32) -> Self {
        Self::new(self.x, self.y, width.min(self.w), self.h)
    }

    /// Remaining area after slicing left
    pub fn remaining_after_left(&self, width: f32) -> Self {
        let w = width.min(self.w);
        Self::new(self.x + w, self.y, self.w - w, self.h)
    }

    /// Fixed-width slice from the right edge
    pub fn slice_right(&self, width: f32) -> Self {
        let w = width.min(self.w);
        Self::new(self.right() - w, self.y, w, self.h)
    }

    /// Remaining area after slicing right
    pub fn remaining_after_right(&self, width: f32) -> Self {
        let w = width.min(self.w);
        Self::new(self.x, self.y, self.w - w, self.h)
    }

    /// Get a horizontal slice (for toolbars, status bars)
    pub fn slice_top(&self, height: f32) -> Self {
        Self::new(self.x, self.y, self.w, height.min(self.h))
    }

    /// Get remaining area after slicing top
    pub fn remaining_after_top(&self, height: f32) -> Self {
        let h = height.min(self.h);
        Self::new(self.x, self.y + h, self.w, self.h - h)
    }

    /// Get a horizontal slice from bottom
    pub fn slice_bottom(&self, height: f32) -> Self {
        let h = height.min(self.h);
        Self::new(self.x, self.bottom() - h, self.w, h)
    }

    /// Get remaining area after slicing bottom
    pub fn remaining_after_bottom(&self, height: f32) -> Self {
        let h = height.min(self.h);
        Self::new(self.x, self.y, self.w, self.h - h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert!(r.contains(50.0, 40.0));
        assert!(!r.contains(5.0, 40.0));
        assert!(!r.contains(50.0, 100.0));
        // Right/bottom edges are exclusive
        assert!(!r.contains(110.0, 40.0));
    }

    #[test]
    fn test_centered() {
        let screen = Rect::screen(800.0, 600.0);
        let c = screen.centered(200.0, 100.0);
        assert_eq!(c, Rect::new(300.0, 250.0, 200.0, 100.0));
        assert!((c.center_x() - screen.center_x()).abs() < 0.001);
    }

    #[test]
    fn test_side_slices() {
        let r = Rect::new(0.0, 0.0, 400.0, 300.0);
        let left = r.slice_left(100.0);
        let rest = r.remaining_after_left(100.0);
        assert_eq!(left.w, 100.0);
        assert_eq!(rest.x, 100.0);
        assert_eq!(rest.w, 300.0);

        let right = rest.slice_right(50.0);
        assert_eq!(right.x, 350.0);
        assert_eq!(rest.remaining_after_right(50.0).w, 250.0);
    }

    #[test]
    fn test_slices_clamp_to_size() {
        let r = Rect::new(0.0, 0.0, 40.0, 30.0);
        assert_eq!(r.slice_top(100.0).h, 30.0);
        assert_eq!(r.remaining_after_top(100.0).h, 0.0);
        assert_eq!(r.slice_left(100.0).w, 40.0);
    }
}
