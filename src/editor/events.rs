//! Editor events
//!
//! Widgets never call into the scene directly. They queue events during the
//! input pass and the app dispatches them in the apply pass, so nothing
//! mutates while a frame's input is still being routed.

use std::path::PathBuf;
use crate::world::{EntityId, EntityKind, PlatformConfig, Property, PropertyValue};

/// A queue for events of a single type.
/// Events are collected during the frame and drained at specific points.
#[derive(Debug)]
pub struct EventQueue<T> {
    events: Vec<T>,
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Send an event (add to queue)
    pub fn send(&mut self, event: T) {
        self.events.push(event);
    }

    /// Take all queued events, oldest first
    pub fn take(&mut self) -> Vec<T> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Clear all events without processing
    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Requests sent from the UI toward the placement scene
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    /// Enter placement mode for `kind`
    EntityTypeSelectRequest {
        kind: EntityKind,
        config: Option<PlatformConfig>,
    },
    PropertyChangeRequest {
        entity: EntityId,
        property: Property,
        value: PropertyValue,
    },
    RemoveEntityRequest(EntityId),
    SaveRequest,
    LoadRequest(PathBuf),
    ClearRequest,
    /// A palette entry was picked (routed by the UI manager)
    UiEntitySelect {
        kind: EntityKind,
        config: Option<PlatformConfig>,
    },
    /// Drop any pending placement and its preview
    CancelPlacementRequest,
}

/// Notices sent from the scene back to the UI
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneNotice {
    SelectionChanged(Option<EntityId>),
    /// The scene is going away; listeners should release what they hold
    Shutdown,
}
