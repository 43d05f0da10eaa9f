//! Tool trait for editor tools
//!
//! Tools have:
//! - Activation lifecycle (activate/deactivate with success/failure)
//! - Active state tracking
//! - Identity (id, label) for UI and logging

use super::{LayerHost, Rect};

/// What a tool gets to work with when it activates
pub struct ToolContext<'a> {
    /// Frame time in seconds
    pub now: f64,
    /// Area the tool may cover (the level viewport)
    pub viewport: Rect,
    /// Floating draw order the tool may raise itself into
    pub layers: &'a mut dyn LayerHost,
}

/// Base trait for all tools
///
/// # Lifecycle
///
/// ```text
/// [Inactive] --activate()--> [Active] --deactivate()--> [Inactive]
///                ^                          |
///                |     (can fail)           |
///                +--------------------------+
/// ```
pub trait Tool {
    /// Unique identifier for this tool (e.g., "platform")
    fn id(&self) -> &'static str;

    /// Human-readable label
    fn label(&self) -> &'static str;

    /// Whether this tool is currently active
    fn active(&self) -> bool;

    /// Attempt to activate the tool.
    ///
    /// Return `true` if activation succeeded, `false` if it was refused.
    /// Override `do_activate()` to add custom activation logic.
    fn activate(&mut self, cx: &mut ToolContext<'_>) -> bool {
        if self.active() {
            return false; // Already active
        }
        self.do_activate(cx)
    }

    /// Attempt to deactivate the tool.
    ///
    /// Override `do_deactivate()` to add custom deactivation logic.
    fn deactivate(&mut self, layers: &mut dyn LayerHost) -> bool {
        if !self.active() {
            return false; // Already inactive
        }
        self.do_deactivate(layers)
    }

    /// Internal activation logic - override this in implementations.
    fn do_activate(&mut self, _cx: &mut ToolContext<'_>) -> bool {
        true
    }

    /// Internal deactivation logic - override this in implementations.
    fn do_deactivate(&mut self, _layers: &mut dyn LayerHost) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{DrawOrder, LayerId};

    struct TestTool {
        active: bool,
        activate_count: u32,
        deactivate_count: u32,
    }

    impl Tool for TestTool {
        fn id(&self) -> &'static str { "test" }
        fn label(&self) -> &'static str { "Test" }
        fn active(&self) -> bool { self.active }

        fn do_activate(&mut self, cx: &mut ToolContext<'_>) -> bool {
            cx.layers.raise(LayerId("test"));
            self.active = true;
            self.activate_count += 1;
            true
        }

        fn do_deactivate(&mut self, layers: &mut dyn LayerHost) -> bool {
            layers.remove(LayerId("test"));
            self.active = false;
            self.deactivate_count += 1;
            true
        }
    }

    #[test]
    fn test_activation_lifecycle() {
        let mut layers = DrawOrder::new();
        let mut tool = TestTool { active: false, activate_count: 0, deactivate_count: 0 };

        {
            let mut cx = ToolContext { now: 0.0, viewport: Rect::screen(100.0, 100.0), layers: &mut layers };
            assert!(tool.activate(&mut cx));
            // Can't activate twice
            assert!(!tool.activate(&mut cx));
        }
        assert_eq!(tool.activate_count, 1);
        assert!(layers.contains(LayerId("test")));

        assert!(tool.deactivate(&mut layers));
        assert!(!tool.deactivate(&mut layers));
        assert_eq!(tool.deactivate_count, 1);
        assert!(layers.is_empty());
    }
}
