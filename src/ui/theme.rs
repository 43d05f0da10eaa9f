//! UI Theme - Shared colors and styling constants
//!
//! Centralized color definitions for consistent look across all editor panels.

use macroquad::prelude::Color;

// =============================================================================
// Base UI Colors
// =============================================================================

/// Dark background color
pub const BG_COLOR: Color = Color::new(0.11, 0.11, 0.13, 1.0);

/// Header/toolbar background
pub const HEADER_COLOR: Color = Color::new(0.15, 0.15, 0.18, 1.0);

/// Side panel background
pub const PANEL_BG: Color = Color::new(0.137, 0.137, 0.157, 1.0); // ~35, 35, 40

/// Panel title strip
pub const PANEL_TITLE_BG: Color = Color::new(0.196, 0.196, 0.235, 1.0); // ~50, 50, 60

/// Panel border
pub const PANEL_BORDER: Color = Color::new(0.314, 0.314, 0.314, 1.0); // ~80, 80, 80

/// Primary text color
pub const TEXT_COLOR: Color = Color::new(0.8, 0.8, 0.85, 1.0);

/// Dimmed/secondary text
pub const TEXT_DIM: Color = Color::new(0.4, 0.4, 0.45, 1.0);

/// Accent color (cyan)
pub const ACCENT_COLOR: Color = Color::new(0.0, 0.75, 0.9, 1.0);

// =============================================================================
// Buttons
// =============================================================================

pub const BUTTON_BG: Color = Color::new(0.196, 0.196, 0.216, 1.0);
pub const BUTTON_HOVER: Color = Color::new(0.235, 0.235, 0.275, 1.0);
pub const BUTTON_PRESSED: Color = Color::new(0.275, 0.275, 0.314, 1.0);
pub const BUTTON_PRIMARY: Color = Color::new(0.18, 0.45, 0.3, 1.0);
pub const BUTTON_DANGER: Color = Color::new(0.55, 0.2, 0.2, 1.0);

// =============================================================================
// Viewport
// =============================================================================

/// Level viewport background
pub const VIEWPORT_BG: Color = Color::new(0.098, 0.098, 0.118, 1.0); // ~25, 25, 30

/// Grid lines
pub const GRID_COLOR: Color = Color::new(0.18, 0.18, 0.21, 1.0);

/// Selection outline
pub const SELECTION_COLOR: Color = Color::new(1.0, 0.85, 0.2, 1.0);

/// Dimming overlay behind modal panels
pub const OVERLAY_COLOR: Color = Color::new(0.0, 0.0, 0.0, 0.55);

// =============================================================================
// Font Sizes
// =============================================================================

/// Header/title text size
pub const FONT_SIZE_HEADER: f32 = 16.0;

/// Standard content text size
pub const FONT_SIZE_CONTENT: f32 = 14.0;

/// Small/detail text size
pub const FONT_SIZE_SMALL: f32 = 12.0;
