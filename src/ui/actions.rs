//! Centralized Action Registry
//!
//! Keyboard shortcuts and their enable conditions live in one place:
//!
//! ```ignore
//! let mut registry = ActionRegistry::new();
//!
//! registry.register(Action::new("edit.delete")
//!     .label("Delete")
//!     .shortcut(Shortcut::key(KeyCode::Delete))
//!     .enabled_when(|ctx| ctx.has_selection));
//!
//! for id in registry.process_triggers(&ctx) {
//!     ui.handle_action(id, ...);
//! }
//! ```

use macroquad::prelude::*;
use std::collections::HashMap;

/// A keyboard shortcut (key + modifiers)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shortcut {
    pub key: KeyCode,
    pub ctrl: bool, // Cmd on Mac
    pub shift: bool,
}

impl Shortcut {
    /// Create a shortcut with just a key (no modifiers)
    pub fn key(key: KeyCode) -> Self {
        Self { key, ctrl: false, shift: false }
    }

    /// Create a shortcut with Ctrl/Cmd + key
    pub fn ctrl(key: KeyCode) -> Self {
        Self { key, ctrl: true, shift: false }
    }

    /// Create a shortcut with Ctrl/Cmd + Shift + key
    pub fn ctrl_shift(key: KeyCode) -> Self {
        Self { key, ctrl: true, shift: true }
    }

    /// Check if this shortcut was pressed this frame
    pub fn is_pressed(&self) -> bool {
        if !is_key_pressed(self.key) {
            return false;
        }

        let ctrl_down = is_key_down(KeyCode::LeftControl)
            || is_key_down(KeyCode::RightControl)
            || is_key_down(KeyCode::LeftSuper)
            || is_key_down(KeyCode::RightSuper);
        let shift_down = is_key_down(KeyCode::LeftShift) || is_key_down(KeyCode::RightShift);

        self.ctrl == ctrl_down && self.shift == shift_down
    }

    /// Format shortcut for display (e.g., "Ctrl+S", "⌘S")
    pub fn display(&self) -> String {
        let mut parts = Vec::new();

        #[cfg(target_os = "macos")]
        {
            if self.ctrl {
                parts.push("⌘");
            }
            if self.shift {
                parts.push("⇧");
            }
        }

        #[cfg(not(target_os = "macos"))]
        {
            if self.ctrl {
                parts.push("Ctrl+");
            }
            if self.shift {
                parts.push("Shift+");
            }
        }

        parts.push(key_name(self.key));
        parts.join("")
    }
}

/// Human-readable name for the keys the editor binds
fn key_name(key: KeyCode) -> &'static str {
    match key {
        KeyCode::C => "C",
        KeyCode::O => "O",
        KeyCode::P => "P",
        KeyCode::S => "S",
        KeyCode::Escape => "Esc",
        KeyCode::Enter => "Enter",
        KeyCode::Delete => "Del",
        KeyCode::Backspace => "Backspace",
        _ => "?",
    }
}

/// Context for checking action enable/disable conditions
#[derive(Debug, Clone, Default)]
pub struct ActionContext {
    /// An entity is selected
    pub has_selection: bool,
    /// Scene is waiting for a placement click
    pub placement_mode: bool,
    /// Some tool is active (e.g. platform configuration open)
    pub tool_active: bool,
}

/// Type alias for enable condition functions
type EnableFn = fn(&ActionContext) -> bool;

/// Always enabled
fn always_enabled(_: &ActionContext) -> bool {
    true
}

/// A registered action
#[derive(Clone)]
pub struct Action {
    /// Unique identifier (e.g., "file.save", "edit.delete")
    pub id: &'static str,
    pub label: &'static str,
    pub shortcut: Option<Shortcut>,
    /// Status bar tip / tooltip
    pub status_tip: &'static str,
    enabled_fn: EnableFn,
}

impl Action {
    /// Create a new action with the given ID
    pub fn new(id: &'static str) -> Self {
        Self {
            id,
            label: "",
            shortcut: None,
            status_tip: "",
            enabled_fn: always_enabled,
        }
    }

    pub fn label(mut self, label: &'static str) -> Self {
        self.label = label;
        self
    }

    pub fn shortcut(mut self, shortcut: Shortcut) -> Self {
        self.shortcut = Some(shortcut);
        self
    }

    pub fn status_tip(mut self, tip: &'static str) -> Self {
        self.status_tip = tip;
        self
    }

    /// Set the enable condition
    pub fn enabled_when(mut self, f: EnableFn) -> Self {
        self.enabled_fn = f;
        self
    }

    pub fn is_enabled(&self, ctx: &ActionContext) -> bool {
        (self.enabled_fn)(ctx)
    }

    /// Check if this action's shortcut is pressed and action is enabled
    pub fn is_triggered(&self, ctx: &ActionContext) -> bool {
        if !self.is_enabled(ctx) {
            return false;
        }
        self.shortcut.as_ref().map_or(false, |s| s.is_pressed())
    }

    /// Get tooltip with shortcut hint
    pub fn tooltip(&self) -> String {
        let text = if self.status_tip.is_empty() { self.label } else { self.status_tip };
        match self.shortcut {
            Some(ref shortcut) => format!("{} ({})", text, shortcut.display()),
            None => text.to_string(),
        }
    }
}

/// Central registry for all actions
pub struct ActionRegistry {
    actions: HashMap<&'static str, Action>,
    /// Registration order, so triggers are reported deterministically
    order: Vec<&'static str>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self {
            actions: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Register an action (replaces one with the same id)
    pub fn register(&mut self, action: Action) {
        if !self.actions.contains_key(action.id) {
            self.order.push(action.id);
        }
        self.actions.insert(action.id, action);
    }

    pub fn get(&self, id: &str) -> Option<&Action> {
        self.actions.get(id)
    }

    pub fn is_enabled(&self, id: &str, ctx: &ActionContext) -> bool {
        self.actions.get(id).map_or(false, |a| a.is_enabled(ctx))
    }

    pub fn tooltip(&self, id: &str) -> String {
        self.actions.get(id).map_or_else(String::new, |a| a.tooltip())
    }

    /// Process all triggered actions this frame, returning their IDs
    pub fn process_triggers(&self, ctx: &ActionContext) -> Vec<&'static str> {
        self.order
            .iter()
            .filter_map(|id| self.actions.get(id))
            .filter(|a| a.is_triggered(ctx))
            .map(|a| a.id)
            .collect()
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
