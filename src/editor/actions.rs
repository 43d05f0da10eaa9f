//! Level editor action definitions
//!
//! Defines the keyboard-driven actions of the editor with their shortcuts
//! and enable conditions. The UI manager maps triggered ids to behavior.

use macroquad::prelude::*;
use crate::ui::{Action, ActionContext, ActionRegistry, Shortcut};

pub const FILE_SAVE: &str = "file.save";
pub const FILE_OPEN: &str = "file.open";
pub const LEVEL_CLEAR: &str = "level.clear";
pub const EDIT_DELETE: &str = "edit.delete";
pub const TOOL_PLATFORM: &str = "tool.platform";
pub const TOOL_PLACE: &str = "tool.place";
pub const TOOL_CANCEL: &str = "tool.cancel";

/// Create the complete action registry for the level editor
pub fn create_editor_actions() -> ActionRegistry {
    let mut registry = ActionRegistry::new();

    // ========================================================================
    // File Actions
    // ========================================================================
    registry.register(
        Action::new(FILE_SAVE)
            .label("Save")
            .shortcut(Shortcut::ctrl(KeyCode::S))
            .status_tip("Save the current level"),
    );

    registry.register(
        Action::new(FILE_OPEN)
            .label("Load")
            .shortcut(Shortcut::ctrl(KeyCode::O))
            .status_tip("Open a level file"),
    );

    registry.register(
        Action::new(LEVEL_CLEAR)
            .label("Clear")
            .shortcut(Shortcut::ctrl_shift(KeyCode::C))
            .status_tip("Remove every entity from the level"),
    );

    // ========================================================================
    // Edit Actions
    // ========================================================================
    registry.register(
        Action::new(EDIT_DELETE)
            .label("Delete")
            .shortcut(Shortcut::key(KeyCode::Delete))
            .status_tip("Delete the selected entity")
            .enabled_when(|ctx| ctx.has_selection),
    );

    // ========================================================================
    // Tool Actions
    // ========================================================================
    registry.register(
        Action::new(TOOL_PLATFORM)
            .label("Platform")
            .shortcut(Shortcut::key(KeyCode::P))
            .status_tip("Configure and place a platform")
            .enabled_when(|ctx| !ctx.placement_mode && !ctx.tool_active),
    );

    registry.register(
        Action::new(TOOL_PLACE)
            .label("Place Platform")
            .shortcut(Shortcut::key(KeyCode::Enter))
            .status_tip("Place the configured platform")
            .enabled_when(|ctx| ctx.tool_active),
    );

    registry.register(
        Action::new(TOOL_CANCEL)
            .label("Cancel")
            .shortcut(Shortcut::key(KeyCode::Escape))
            .status_tip("Close the active tool or stop placing")
            .enabled_when(|ctx| ctx.tool_active || ctx.placement_mode),
    );

    registry
}

/// Build an ActionContext from the current editor state
pub fn build_context(has_selection: bool, placement_mode: bool, tool_active: bool) -> ActionContext {
    ActionContext { has_selection, placement_mode, tool_active }
}
