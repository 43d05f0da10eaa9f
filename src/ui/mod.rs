//! Immediate-mode UI library for the level editor
//!
//! Design principles:
//! - Immediate mode (widgets are redrawn each frame from their state)
//! - Input is handled top-down before anything is drawn bottom-up
//! - Simple rectangle-based layout
//! - Macroquad integration for rendering

mod rect;
mod panel;
mod widgets;
mod input;
pub mod theme;
mod actions;
mod layer;
pub mod tool;

pub use rect::*;
pub use panel::*;
pub use widgets::*;
pub use input::*;
pub use actions::*;
pub use layer::*;
pub use tool::{Tool, ToolContext};
