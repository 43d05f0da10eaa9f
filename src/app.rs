//! Application state and the per-frame update
//!
//! One editor, one scene. `frame()` runs the two phases: widgets record
//! input top-down, then queued requests are dispatched between the UI
//! manager and the scene until nothing new comes out.

use crate::config::EditorConfig;
use crate::editor::{
    create_editor_actions, draw_status_bar, EditorLayout, FilePicker, PlacementScene, Registry, UiManager,
};
use crate::ui::{ActionRegistry, MouseState, Rect, UiContext};

/// Upper bound on UI/scene round trips per frame
const MAX_DISPATCH_ROUNDS: usize = 8;

pub struct App {
    pub config: EditorConfig,
    pub registry: Registry,
    pub scene: PlacementScene,
    pub ui: UiManager,
    actions: ActionRegistry,
    picker: Box<dyn FilePicker>,
    ui_ctx: UiContext,
}

impl App {
    pub fn new(config: EditorConfig, picker: Box<dyn FilePicker>) -> Self {
        let scene = PlacementScene::open_or_new(config.last_level_path.as_deref(), config.grid_size);
        let ui = UiManager::new(config.grid_size, config.activation_rearm_secs);
        Self {
            config,
            registry: Registry::new(),
            scene,
            ui,
            actions: create_editor_actions(),
            picker,
            ui_ctx: UiContext::new(),
        }
    }

    /// Run one frame of input and dispatch without drawing
    pub fn update(&mut self, now: f64, screen: Rect, mouse: MouseState, triggered: &[&'static str]) -> EditorLayout {
        let layout = EditorLayout::compute(screen, &self.config);
        self.ui_ctx.begin_frame(mouse);
        self.scene.begin_frame(now);

        // Phase 1: input, topmost first
        for &id in triggered {
            self.ui.queue_action(id);
        }
        self.ui.handle_input(&mut self.ui_ctx, &layout, self.scene.level());
        self.scene.handle_pointer(&mut self.ui_ctx, layout.viewport, &mut self.registry);

        // Phase 2: apply
        self.ui.apply(now, layout.viewport, self.picker.as_mut());
        self.dispatch();
        layout
    }

    /// Shuttle events and notices until both sides are quiet
    pub fn dispatch(&mut self) {
        for _ in 0..MAX_DISPATCH_ROUNDS {
            for notice in self.scene.drain_notices() {
                self.ui.notify(notice);
            }
            self.ui.observe(&self.registry);

            let events = self.ui.drain_outbox();
            if events.is_empty() {
                return;
            }
            for event in events {
                self.scene.apply(event, &mut self.registry, self.picker.as_mut());
            }
        }
        log::warn!("Dispatch did not settle after {} rounds", MAX_DISPATCH_ROUNDS);
    }

    /// Poll input, update and draw one frame
    pub fn frame(&mut self, now: f64, screen: Rect) {
        let triggered = self.actions.process_triggers(&self.ui.action_context());
        let layout = self.update(now, screen, MouseState::poll(), &triggered);
        self.draw(&layout);
    }

    pub fn draw(&self, layout: &EditorLayout) {
        self.scene.draw(layout.viewport);
        self.ui.draw(layout, self.scene.level());

        let hint = if self.ui.platform_tool_active() {
            self.actions.tooltip(crate::editor::actions::TOOL_PLACE)
        } else {
            self.actions.tooltip(crate::editor::actions::TOOL_PLATFORM)
        };
        let title = match (self.scene.path(), self.scene.is_dirty()) {
            (Some(path), true) => format!("{} *", path.display()),
            (Some(path), false) => path.display().to_string(),
            (None, _) => format!("{} (unsaved)", self.scene.level().name),
        };
        draw_status_bar(layout.status, Some(self.scene.status().unwrap_or(&title)), &hint);
    }

    /// Tear down the scene and UI. Safe to call more than once.
    pub fn shutdown(&mut self) {
        self.scene.shutdown(&mut self.registry);
        self.dispatch();
        self.ui.shutdown();

        self.config.last_level_path = self.scene.path().map(|p| p.to_path_buf());
        if let Err(e) = self.config.save() {
            log::warn!("Could not save editor settings: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};
    use crate::editor::actions;
    use crate::editor::platform_panel::PanelControl;
    use crate::editor::platform_tool::ToolState;
    use crate::world::EntityKind;

    struct FixedPicker(Option<PathBuf>);

    impl FilePicker for FixedPicker {
        fn pick_level(&mut self, _start_dir: Option<&Path>) -> Option<PathBuf> {
            self.0.clone()
        }

        fn pick_save_path(&mut self, _start_dir: Option<&Path>, _file_name: &str) -> Option<PathBuf> {
            self.0.clone()
        }
    }

    fn screen() -> Rect {
        Rect::screen(1280.0, 720.0)
    }

    fn app() -> App {
        App::new(EditorConfig::default(), Box::new(FixedPicker(None)))
    }

    fn click(app: &mut App, now: f64, x: f32, y: f32) -> EditorLayout {
        app.update(now, screen(), MouseState::pressed_at(x, y), &[])
    }

    fn click_panel(app: &mut App, now: f64, control: PanelControl) {
        let rect = app.ui.platform_tool().panel().layout().control(control);
        click(app, now, rect.center_x(), rect.center_y());
    }

    fn click_palette(app: &mut App, now: f64, kind: EntityKind) {
        let layout = EditorLayout::compute(screen(), &app.config);
        let index = app.ui.palette().entries().iter().position(|e| e.kind == kind).unwrap();
        let row = app.ui.palette().layout(layout.palette)[index];
        click(app, now, row.center_x(), row.center_y());
    }

    #[test]
    fn test_platform_end_to_end() {
        let mut app = app();
        click_palette(&mut app, 0.0, EntityKind::Platform);
        assert_eq!(app.ui.platform_tool().state(), ToolState::Configuring);

        click_panel(&mut app, 0.2, PanelControl::Orientation);
        click_panel(&mut app, 0.3, PanelControl::Increase);
        click_panel(&mut app, 0.4, PanelControl::Increase);
        click_panel(&mut app, 0.5, PanelControl::Place);

        assert!(app.registry.placement_mode());
        assert!(!app.ui.palette().is_enabled());
        assert!(app.scene.level().is_empty());

        let viewport = EditorLayout::compute(screen(), &app.config).viewport;
        click(&mut app, 0.6, viewport.x + 40.0, viewport.y + 40.0);

        assert!(!app.registry.placement_mode());
        assert!(app.ui.palette().is_enabled());
        assert_eq!(app.scene.level().len(), 1);
        let entity = &app.scene.level().entities[0];
        assert_eq!((entity.width, entity.height), (32.0, 160.0));
        assert_eq!(app.ui.selected(), Some(entity.id));
    }

    #[test]
    fn test_panel_click_never_places() {
        let mut app = app();
        // Enter placement for a coin, then open the platform tool on top
        click_palette(&mut app, 0.0, EntityKind::Coin);
        assert!(app.registry.placement_mode());
        app.ui.activate_platform_tool(0.1, EditorLayout::compute(screen(), &app.config).viewport, true);

        click_panel(&mut app, 0.3, PanelControl::Increase);
        assert!(app.scene.level().is_empty());
        assert!(app.registry.placement_mode());
    }

    #[test]
    fn test_escape_cancels_placement() {
        let mut app = app();
        click_palette(&mut app, 0.0, EntityKind::Goal);
        assert!(app.registry.placement_mode());

        app.update(0.1, screen(), MouseState::default(), &[actions::TOOL_CANCEL]);
        assert!(!app.registry.placement_mode());
        assert!(app.scene.pending().is_none());
        assert!(app.ui.palette().is_enabled());
    }

    #[test]
    fn test_delete_key_removes_selected_entity() {
        let mut app = app();
        click_palette(&mut app, 0.0, EntityKind::Enemy);
        let viewport = EditorLayout::compute(screen(), &app.config).viewport;
        click(&mut app, 0.1, viewport.x + 10.0, viewport.y + 10.0);
        assert_eq!(app.scene.level().len(), 1);
        assert!(app.ui.selected().is_some());

        app.update(0.2, screen(), MouseState::default(), &[actions::EDIT_DELETE]);
        assert!(app.scene.level().is_empty());
        assert_eq!(app.ui.selected(), None);
        assert_eq!(app.scene.selected(), None);
    }

    #[test]
    fn test_scene_shutdown_reaches_ui() {
        let mut app = app();
        app.ui.activate_platform_tool(0.0, EditorLayout::compute(screen(), &app.config).viewport, true);

        app.scene.shutdown(&mut app.registry);
        app.dispatch();
        assert!(app.ui.is_shut_down());
        assert!(!app.ui.platform_tool_active());

        app.scene.shutdown(&mut app.registry);
        app.dispatch();
    }
}
