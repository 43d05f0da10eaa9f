//! UI manager - composition root for the editor widgets
//!
//! Owns the palette, inspector, toolbar and platform tool, plus the floating
//! draw order they share. It turns what the widgets report into
//! `EditorEvent`s for the scene and reacts to what the scene reports back.
//!
//! Every frame runs in two phases:
//! 1. `handle_input` - widgets hit-test top-down and record what happened
//! 2. `apply` - recorded intents are routed, filling the outbox
//!
//! The app then delivers the outbox to the scene and feeds scene notices
//! and registry changes back through `notify` / `observe`.

use macroquad::prelude::*;
use crate::ui::{ActionContext, DrawOrder, Rect, Tool, ToolContext, UiContext};
use crate::world::{EntityId, EntityKind, Level};
use super::actions::{self, build_context};
use super::file_dialog::FilePicker;
use super::inspector::{InspectorRequest, PropertyInspector};
use super::layout::EditorLayout;
use super::palette::{PaletteSelection, SelectionPalette};
use super::platform_panel::PanelResponse;
use super::platform_tool::{PlatformTool, PlatformToolEvent, LAYER_OVERLAY, LAYER_PANEL};
use super::toolbar::{Toolbar, ToolbarAction};
use super::{EditorEvent, EventQueue, Observer, Registry, SceneNotice};

pub struct UiManager {
    palette: SelectionPalette,
    inspector: PropertyInspector,
    toolbar: Toolbar,
    platform_tool: PlatformTool,
    /// Floating layers (overlay, panel) in draw order
    layers: DrawOrder,
    selected: Option<EntityId>,
    placement_observer: Observer,
    placement_mode: bool,
    /// Palette picks recorded during input
    intents: EventQueue<PaletteSelection>,
    /// Panel interaction recorded during input
    tool_input: EventQueue<PanelResponse>,
    /// Triggered action ids recorded during input
    actions: EventQueue<&'static str>,
    /// Requests for the scene
    outbox: EventQueue<EditorEvent>,
    shut_down: bool,
}

impl UiManager {
    pub fn new(grid_size: f32, rearm_delay: f64) -> Self {
        Self {
            palette: SelectionPalette::new(),
            inspector: PropertyInspector::new(grid_size),
            toolbar: Toolbar::default(),
            platform_tool: PlatformTool::new(rearm_delay),
            layers: DrawOrder::new(),
            selected: None,
            placement_observer: Observer::new(),
            placement_mode: false,
            intents: EventQueue::new(),
            tool_input: EventQueue::new(),
            actions: EventQueue::new(),
            outbox: EventQueue::new(),
            shut_down: false,
        }
    }

    pub fn palette(&self) -> &SelectionPalette {
        &self.palette
    }

    pub fn inspector(&self) -> &PropertyInspector {
        &self.inspector
    }

    pub fn toolbar(&self) -> &Toolbar {
        &self.toolbar
    }

    pub fn platform_tool(&self) -> &PlatformTool {
        &self.platform_tool
    }

    pub fn platform_tool_active(&self) -> bool {
        self.platform_tool.active()
    }

    pub fn layers(&self) -> &DrawOrder {
        &self.layers
    }

    pub fn selected(&self) -> Option<EntityId> {
        self.selected
    }

    pub fn placement_mode(&self) -> bool {
        self.placement_mode
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    /// Enable conditions for keyboard actions
    pub fn action_context(&self) -> ActionContext {
        build_context(self.selected.is_some(), self.placement_mode, self.platform_tool.active())
    }

    /// Record a triggered keyboard action for the apply phase
    pub fn queue_action(&mut self, id: &'static str) {
        if !self.shut_down {
            self.actions.send(id);
        }
    }

    // ========================================================================
    // Phase 1: input
    // ========================================================================

    /// Hit-test every widget, topmost first. `level` supplies the data for
    /// the inspector's displayed entity.
    pub fn handle_input(&mut self, ctx: &mut UiContext, layout: &EditorLayout, level: &Level) {
        if self.shut_down {
            return;
        }

        // Floating layers sit above everything
        let response = self.platform_tool.handle_input(ctx);
        if response != PanelResponse::None {
            self.tool_input.send(response);
        }

        self.toolbar.handle_input(ctx, layout.toolbar);

        let entity = self.selected.and_then(|id| level.get(id));
        self.inspector.handle_input(ctx, layout.inspector, entity);

        if let Some(pick) = self.palette.handle_input(ctx, layout.palette) {
            self.intents.send(pick);
        }
    }

    // ========================================================================
    // Phase 2: apply
    // ========================================================================

    /// Route everything recorded during input
    pub fn apply(&mut self, now: f64, viewport: Rect, picker: &mut dyn FilePicker) {
        if self.shut_down {
            return;
        }
        self.platform_tool.update(now, viewport);

        for response in self.tool_input.take() {
            match response {
                PanelResponse::Changed(config) => self.platform_tool.apply_change(config),
                PanelResponse::Place => {
                    self.platform_tool.place(&mut self.layers);
                }
                PanelResponse::None => {}
            }
        }

        for action in self.actions.take() {
            self.run_action(action, now, viewport, picker);
        }

        for click in self.toolbar.drain_clicks() {
            match click {
                ToolbarAction::Platform => {
                    self.activate_platform_tool(now, viewport, true);
                }
                ToolbarAction::Save => self.outbox.send(EditorEvent::SaveRequest),
                ToolbarAction::Load => self.request_load(picker),
                ToolbarAction::Clear => self.outbox.send(EditorEvent::ClearRequest),
            }
        }

        for pick in self.intents.take() {
            self.on_palette_pick(pick, now, viewport);
        }

        for request in self.inspector.drain_requests() {
            match request {
                InspectorRequest::Change { entity, property, value } => {
                    self.outbox.send(EditorEvent::PropertyChangeRequest { entity, property, value });
                }
                InspectorRequest::Delete(entity) => self.remove_entity(entity),
            }
        }

        self.route_tool_events();
    }

    fn run_action(&mut self, id: &'static str, now: f64, viewport: Rect, picker: &mut dyn FilePicker) {
        match id {
            actions::TOOL_CANCEL => self.cancel(),
            actions::EDIT_DELETE => match self.selected {
                Some(entity) => self.remove_entity(entity),
                None => log::debug!("Delete with nothing selected"),
            },
            actions::FILE_SAVE => self.outbox.send(EditorEvent::SaveRequest),
            actions::FILE_OPEN => self.request_load(picker),
            actions::LEVEL_CLEAR => self.outbox.send(EditorEvent::ClearRequest),
            actions::TOOL_PLATFORM => {
                self.activate_platform_tool(now, viewport, true);
            }
            actions::TOOL_PLACE => {
                self.platform_tool.place(&mut self.layers);
            }
            other => log::warn!("Unhandled action '{}'", other),
        }
    }

    fn on_palette_pick(&mut self, pick: PaletteSelection, now: f64, viewport: Rect) {
        let PaletteSelection { kind, config } = pick;
        self.outbox.send(EditorEvent::UiEntitySelect { kind, config });
        if kind == EntityKind::Platform {
            self.activate_platform_tool(now, viewport, false);
            return;
        }
        // One tool at a time: another kind replaces an open platform setup
        if self.platform_tool.deactivate(&mut self.layers) {
            self.toolbar.clear_active();
        }
        self.outbox.send(EditorEvent::EntityTypeSelectRequest { kind, config });
    }

    fn route_tool_events(&mut self) {
        for event in self.platform_tool.drain_events() {
            match event {
                PlatformToolEvent::ConfigChanged(config) => {
                    log::debug!("Platform config: {:?}", config);
                }
                PlatformToolEvent::PlacementConfigured(config) => {
                    self.outbox.send(EditorEvent::EntityTypeSelectRequest {
                        kind: EntityKind::Platform,
                        config: Some(config),
                    });
                }
            }
        }
    }

    fn request_load(&mut self, picker: &mut dyn FilePicker) {
        if let Some(path) = picker.pick_level(None) {
            self.outbox.send(EditorEvent::LoadRequest(path));
        }
    }

    fn remove_entity(&mut self, entity: EntityId) {
        self.outbox.send(EditorEvent::RemoveEntityRequest(entity));
        if self.selected == Some(entity) {
            self.selected = None;
            self.inspector.display(None);
        }
    }

    /// Start the platform tool. `from_toolbar` highlights the toolbar button.
    pub fn activate_platform_tool(&mut self, now: f64, viewport: Rect, from_toolbar: bool) -> bool {
        let mut cx = ToolContext { now, viewport, layers: &mut self.layers };
        if !self.platform_tool.activate(&mut cx) {
            return false;
        }
        // Selection and an active tool are mutually exclusive
        self.selected = None;
        self.inspector.display(None);
        if from_toolbar {
            let id = self.platform_tool.id();
            self.toolbar.set_active(id);
        }
        log::debug!("{} tool opened", self.platform_tool.label());
        true
    }

    /// Escape: close the tool and stop any placement in progress
    pub fn cancel(&mut self) {
        if self.platform_tool.deactivate(&mut self.layers) {
            self.toolbar.clear_active();
        }
        if self.placement_mode {
            self.outbox.send(EditorEvent::CancelPlacementRequest);
        }
    }

    /// Show `entity` in the inspector. Always closes the platform tool.
    pub fn select_entity(&mut self, entity: Option<EntityId>) {
        self.selected = entity;
        self.inspector.display(entity);
        if self.platform_tool.deactivate(&mut self.layers) {
            self.toolbar.clear_active();
        }
    }

    // ========================================================================
    // Scene feedback
    // ========================================================================

    /// React to registry changes since the last call
    pub fn observe(&mut self, registry: &Registry) {
        if let Some(active) = self.placement_observer.changed(registry.placement_mode_watch()) {
            self.set_placement_mode(active);
        }
    }

    fn set_placement_mode(&mut self, active: bool) {
        self.placement_mode = active;
        if active {
            self.palette.set_enabled(false);
        } else {
            self.palette.set_enabled(true);
            self.palette.clear_selected();
            self.toolbar.clear_active();
            if !self.shut_down {
                self.outbox.send(EditorEvent::CancelPlacementRequest);
            }
        }
    }

    pub fn notify(&mut self, notice: SceneNotice) {
        match notice {
            SceneNotice::SelectionChanged(entity) => self.select_entity(entity),
            SceneNotice::Shutdown => self.shutdown(),
        }
    }

    /// Release the tool and drop anything queued. Safe to call repeatedly.
    pub fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        self.platform_tool.deactivate(&mut self.layers);
        self.layers.clear();
        self.selected = None;
        self.inspector.display(None);
        self.toolbar.clear_active();
        self.intents.clear();
        self.tool_input.clear();
        self.actions.clear();
        self.outbox.clear();
        self.shut_down = true;
        log::info!("UI manager shut down");
    }

    /// Requests for the scene, oldest first
    pub fn drain_outbox(&mut self) -> Vec<EditorEvent> {
        self.outbox.take()
    }

    // ========================================================================
    // Drawing
    // ========================================================================

    pub fn draw(&self, layout: &EditorLayout, level: &Level) {
        self.toolbar.draw(layout.toolbar);
        self.palette.draw(layout.palette);
        let entity = self.selected.and_then(|id| level.get(id));
        self.inspector.draw(layout.inspector, entity);

        for layer in self.layers.iter() {
            if layer == LAYER_OVERLAY {
                self.platform_tool.draw_overlay();
            } else if layer == LAYER_PANEL {
                self.platform_tool.draw_panel();
            }
        }

        if self.placement_mode {
            let hint = "Click to place, Esc to cancel";
            let dims = measure_text(hint, None, crate::ui::theme::FONT_SIZE_SMALL as u16, 1.0);
            let v = layout.viewport;
            draw_text(
                hint,
                v.x + (v.w - dims.width) * 0.5,
                v.y + 18.0,
                crate::ui::theme::FONT_SIZE_SMALL,
                crate::ui::theme::SELECTION_COLOR,
            );
        }
    }
}
