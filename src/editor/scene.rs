//! Placement scene
//!
//! Owns the level being edited. The UI never touches the level directly:
//! it sends `EditorEvent`s, and the scene answers with `SceneNotice`s and by
//! writing the placement-mode flag in the `Registry` (it is the only writer).

use std::path::{Path, PathBuf};
use macroquad::prelude::*;
use crate::ui::{theme, Rect, UiContext};
use crate::world::{load_level, save_level, EntityId, EntityKind, Level, PlatformConfig};
use super::file_dialog::{suggested_file_name, FilePicker};
use super::palette::kind_color;
use super::{EditorEvent, EventQueue, Registry, SceneNotice};

/// How long status messages stay on screen
const STATUS_SECS: f64 = 3.0;
const ERROR_STATUS_SECS: f64 = 5.0;

/// Entity waiting for a placement click
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingPlacement {
    pub kind: EntityKind,
    pub config: Option<PlatformConfig>,
}

impl PendingPlacement {
    /// Footprint the entity will have once placed
    pub fn size(&self) -> (f32, f32) {
        match (self.kind, self.config) {
            (EntityKind::Platform, config) => config.unwrap_or_default().dimensions(),
            (kind, _) => kind.base_size(),
        }
    }
}

pub struct PlacementScene {
    level: Level,
    /// Where the level was loaded from / last saved to
    path: Option<PathBuf>,
    dirty: bool,
    pending: Option<PendingPlacement>,
    selected: Option<EntityId>,
    grid_size: f32,
    /// Snapped world position under the pointer, if over the viewport
    cursor: Option<(f32, f32)>,
    notices: EventQueue<SceneNotice>,
    status_message: Option<(String, f64)>,
    now: f64,
    shut_down: bool,
}

impl PlacementScene {
    pub fn new(level: Level, grid_size: f32) -> Self {
        Self {
            level,
            path: None,
            dirty: false,
            pending: None,
            selected: None,
            grid_size: if grid_size > 0.0 { grid_size } else { 32.0 },
            cursor: None,
            notices: EventQueue::new(),
            status_message: None,
            now: 0.0,
            shut_down: false,
        }
    }

    /// Open `path`, falling back to an empty level when it can't be read
    pub fn open_or_new(path: Option<&Path>, grid_size: f32) -> Self {
        let Some(path) = path else {
            return Self::new(Level::default(), grid_size);
        };
        match load_level(path) {
            Ok(level) => {
                log::info!("Loaded level '{}' from {}", level.name, path.display());
                let mut scene = Self::new(level, grid_size);
                scene.path = Some(path.to_path_buf());
                scene
            }
            Err(e) => {
                log::warn!("Could not open {}: {}", path.display(), e);
                Self::new(Level::default(), grid_size)
            }
        }
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn pending(&self) -> Option<PendingPlacement> {
        self.pending
    }

    pub fn selected(&self) -> Option<EntityId> {
        self.selected
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    /// Advance the scene clock (used for status expiry)
    pub fn begin_frame(&mut self, now: f64) {
        self.now = now;
    }

    pub fn set_status(&mut self, message: &str, duration_secs: f64) {
        self.status_message = Some((message.to_string(), self.now + duration_secs));
    }

    /// Current status message if not expired
    pub fn status(&self) -> Option<&str> {
        match &self.status_message {
            Some((msg, expiry)) if self.now < *expiry => Some(msg),
            _ => None,
        }
    }

    pub fn drain_notices(&mut self) -> Vec<SceneNotice> {
        self.notices.take()
    }

    fn select(&mut self, entity: Option<EntityId>) {
        if self.selected != entity {
            self.selected = entity;
            self.notices.send(SceneNotice::SelectionChanged(entity));
        }
    }

    fn cancel_placement(&mut self, registry: &mut Registry) {
        if self.pending.take().is_some() {
            log::debug!("Scene: placement cancelled");
        }
        registry.set_placement_mode(false);
    }

    /// Apply one request from the UI
    pub fn apply(&mut self, event: EditorEvent, registry: &mut Registry, picker: &mut dyn FilePicker) {
        if self.shut_down {
            log::debug!("Scene: ignoring {:?} after shutdown", event);
            return;
        }

        match event {
            EditorEvent::EntityTypeSelectRequest { kind, config } => {
                let config = match kind {
                    EntityKind::Platform => Some(config.unwrap_or_default()),
                    _ => None,
                };
                log::info!("Scene: placing {}", kind.label());
                self.pending = Some(PendingPlacement { kind, config });
                self.select(None);
                registry.set_placement_mode(true);
            }
            EditorEvent::PropertyChangeRequest { entity, property, value } => {
                let Some(target) = self.level.get_mut(entity) else {
                    log::warn!("Scene: property change for unknown entity {}", entity);
                    return;
                };
                if target.set_property(property, value) {
                    self.dirty = true;
                } else {
                    log::warn!("Scene: {:?} = {:?} doesn't apply to entity {}", property, value, entity);
                }
            }
            EditorEvent::RemoveEntityRequest(entity) => {
                if self.level.remove(entity).is_some() {
                    log::info!("Scene: removed entity {}", entity);
                    self.dirty = true;
                    if self.selected == Some(entity) {
                        self.select(None);
                    }
                } else {
                    log::debug!("Scene: entity {} already gone", entity);
                }
            }
            EditorEvent::SaveRequest => self.save(picker),
            EditorEvent::LoadRequest(path) => self.load(&path, registry),
            EditorEvent::ClearRequest => {
                self.cancel_placement(registry);
                self.select(None);
                self.level.clear();
                self.dirty = true;
                log::info!("Scene: level cleared");
                self.set_status("Level cleared", STATUS_SECS);
            }
            EditorEvent::CancelPlacementRequest => self.cancel_placement(registry),
            EditorEvent::UiEntitySelect { kind, .. } => {
                let hint = match kind {
                    EntityKind::Platform => "Platform: set orientation and segments, then Place".to_string(),
                    other => format!("{}: click in the level to place", other.label()),
                };
                self.set_status(&hint, STATUS_SECS);
            }
        }
    }

    fn save(&mut self, picker: &mut dyn FilePicker) {
        let path = match &self.path {
            Some(path) => path.clone(),
            None => {
                let file_name = suggested_file_name(&self.level.name);
                match picker.pick_save_path(None, &file_name) {
                    Some(path) => path,
                    None => return,
                }
            }
        };

        match save_level(&self.level, &path) {
            Ok(()) => {
                log::info!("Saved level to {}", path.display());
                self.set_status(&format!("Saved {}", path.display()), STATUS_SECS);
                self.path = Some(path);
                self.dirty = false;
            }
            Err(e) => {
                log::error!("Save to {} failed: {}", path.display(), e);
                self.set_status(&format!("Save failed: {}", e), ERROR_STATUS_SECS);
            }
        }
    }

    fn load(&mut self, path: &Path, registry: &mut Registry) {
        match load_level(path) {
            Ok(level) => {
                log::info!("Loaded level '{}' ({} entities)", level.name, level.len());
                self.cancel_placement(registry);
                self.select(None);
                self.level = level;
                self.path = Some(path.to_path_buf());
                self.dirty = false;
                self.set_status(&format!("Loaded {}", path.display()), STATUS_SECS);
            }
            Err(e) => {
                log::error!("Load from {} failed: {}", path.display(), e);
                self.set_status(&format!("Load failed: {}", e), ERROR_STATUS_SECS);
            }
        }
    }

    fn snap(&self, v: f32) -> f32 {
        (v / self.grid_size).floor() * self.grid_size
    }

    /// World position for a screen point inside `viewport`
    fn to_world(&self, viewport: Rect, x: f32, y: f32) -> (f32, f32) {
        (x - viewport.x, y - viewport.y)
    }

    /// Pointer handling, run after every UI layer had its chance
    pub fn handle_pointer(&mut self, ctx: &mut UiContext, viewport: Rect, registry: &mut Registry) {
        if self.shut_down {
            return;
        }

        let (mx, my) = (ctx.mouse.x, ctx.mouse.y);
        self.cursor = viewport.contains(mx, my).then(|| {
            let (wx, wy) = self.to_world(viewport, mx, my);
            (self.snap(wx), self.snap(wy))
        });

        if !ctx.take_click(&viewport) {
            return;
        }
        let (wx, wy) = self.to_world(viewport, mx, my);

        match self.pending.take() {
            Some(pending) => {
                let (x, y) = (self.snap(wx), self.snap(wy));
                registry.set_placement_mode(false);
                match self.level.spawn(pending.kind, x, y, pending.config) {
                    Ok(id) => {
                        log::info!("Scene: placed {} {} at ({}, {})", pending.kind.label(), id, x, y);
                        self.dirty = true;
                        self.select(Some(id));
                    }
                    Err(e) => {
                        log::error!("Scene: could not place {}: {}", pending.kind.label(), e);
                        self.set_status(&format!("Place failed: {}", e), ERROR_STATUS_SECS);
                    }
                }
            }
            None => {
                // Always reported, so the UI can re-sync after clearing its copy
                let hit = self.level.entity_at(wx, wy);
                self.selected = hit;
                self.notices.send(SceneNotice::SelectionChanged(hit));
            }
        }
    }

    /// Release everything. Safe to call more than once.
    pub fn shutdown(&mut self, registry: &mut Registry) {
        if self.shut_down {
            return;
        }
        self.cancel_placement(registry);
        self.selected = None;
        self.cursor = None;
        self.notices.clear();
        self.notices.send(SceneNotice::Shutdown);
        self.shut_down = true;
        log::info!("Scene: shut down");
    }

    pub fn draw(&self, viewport: Rect) {
        draw_rectangle(viewport.x, viewport.y, viewport.w, viewport.h, theme::VIEWPORT_BG);

        let mut gx = viewport.x;
        while gx < viewport.right() {
            draw_line(gx, viewport.y, gx, viewport.bottom(), 1.0, theme::GRID_COLOR);
            gx += self.grid_size;
        }
        let mut gy = viewport.y;
        while gy < viewport.bottom() {
            draw_line(viewport.x, gy, viewport.right(), gy, 1.0, theme::GRID_COLOR);
            gy += self.grid_size;
        }

        for entity in &self.level.entities {
            let (x, y) = (viewport.x + entity.x, viewport.y + entity.y);
            draw_rectangle(x, y, entity.width, entity.height, kind_color(entity.kind));
            if let Some(config) = entity.platform {
                for i in 1..config.segment_count {
                    let offset = i as f32 * config.segment_width;
                    if config.is_vertical {
                        draw_line(x, y + offset, x + entity.width, y + offset, 1.0, theme::BG_COLOR);
                    } else {
                        draw_line(x + offset, y, x + offset, y + entity.height, 1.0, theme::BG_COLOR);
                    }
                }
            }
            if self.selected == Some(entity.id) {
                draw_rectangle_lines(x - 1.0, y - 1.0, entity.width + 2.0, entity.height + 2.0, 2.0, theme::SELECTION_COLOR);
            }
        }

        if let (Some(pending), Some((cx, cy))) = (self.pending, self.cursor) {
            let (w, h) = pending.size();
            let mut ghost = kind_color(pending.kind);
            ghost.a = 0.5;
            draw_rectangle(viewport.x + cx, viewport.y + cy, w, h, ghost);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MouseState;
    use crate::world::{Property, PropertyValue};

    struct FixedPicker(Option<PathBuf>);

    impl FilePicker for FixedPicker {
        fn pick_level(&mut self, _start_dir: Option<&Path>) -> Option<PathBuf> {
            self.0.clone()
        }

        fn pick_save_path(&mut self, _start_dir: Option<&Path>, _file_name: &str) -> Option<PathBuf> {
            self.0.clone()
        }
    }

    fn viewport() -> Rect {
        Rect::new(100.0, 40.0, 640.0, 480.0)
    }

    fn click(scene: &mut PlacementScene, registry: &mut Registry, x: f32, y: f32) -> UiContext {
        let mut ctx = UiContext::new();
        ctx.begin_frame(MouseState::pressed_at(x, y));
        scene.handle_pointer(&mut ctx, viewport(), registry);
        ctx
    }

    #[test]
    fn test_select_request_enters_placement_mode() {
        let mut scene = PlacementScene::new(Level::default(), 32.0);
        let mut registry = Registry::new();
        let mut picker = FixedPicker(None);

        scene.apply(
            EditorEvent::EntityTypeSelectRequest { kind: EntityKind::Coin, config: None },
            &mut registry,
            &mut picker,
        );
        assert!(registry.placement_mode());
        assert_eq!(scene.pending().map(|p| p.kind), Some(EntityKind::Coin));
    }

    #[test]
    fn test_click_places_one_snapped_entity_and_exits() {
        let mut scene = PlacementScene::new(Level::default(), 32.0);
        let mut registry = Registry::new();
        let config = PlatformConfig::default().with_vertical(true).with_segments(5);
        scene.apply(
            EditorEvent::EntityTypeSelectRequest { kind: EntityKind::Platform, config: Some(config) },
            &mut registry,
            &mut FixedPicker(None),
        );

        click(&mut scene, &mut registry, 100.0 + 70.0, 40.0 + 45.0);

        assert!(!registry.placement_mode());
        assert_eq!(scene.level().len(), 1);
        let entity = &scene.level().entities[0];
        assert_eq!((entity.x, entity.y), (64.0, 32.0));
        assert_eq!((entity.width, entity.height), (32.0, 160.0));
        let id = entity.id;
        assert_eq!(scene.selected(), Some(id));
        assert_eq!(scene.drain_notices(), vec![SceneNotice::SelectionChanged(Some(id))]);

        // Next click selects instead of placing
        click(&mut scene, &mut registry, 600.0, 400.0);
        assert_eq!(scene.level().len(), 1);
        assert_eq!(scene.selected(), None);
    }

    #[test]
    fn test_consumed_pointer_does_not_reach_scene() {
        let mut scene = PlacementScene::new(Level::default(), 32.0);
        let mut registry = Registry::new();
        scene.apply(
            EditorEvent::EntityTypeSelectRequest { kind: EntityKind::Enemy, config: None },
            &mut registry,
            &mut FixedPicker(None),
        );

        let mut ctx = UiContext::new();
        ctx.begin_frame(MouseState::pressed_at(200.0, 200.0));
        ctx.consume_pointer();
        scene.handle_pointer(&mut ctx, viewport(), &mut registry);

        assert!(scene.level().is_empty());
        assert!(registry.placement_mode());
    }

    #[test]
    fn test_property_change_and_removal() {
        let mut level = Level::default();
        let id = level.spawn(EntityKind::Platform, 0.0, 0.0, None).unwrap();
        let mut scene = PlacementScene::new(level, 32.0);
        let mut registry = Registry::new();
        let mut picker = FixedPicker(None);

        scene.apply(
            EditorEvent::PropertyChangeRequest { entity: id, property: Property::Segments, value: PropertyValue::Count(7) },
            &mut registry,
            &mut picker,
        );
        assert_eq!(scene.level().get(id).map(|e| e.width), Some(224.0));
        assert!(scene.is_dirty());

        // Unknown ids are ignored
        scene.apply(
            EditorEvent::PropertyChangeRequest { entity: EntityId(99), property: Property::X, value: PropertyValue::Number(1.0) },
            &mut registry,
            &mut picker,
        );

        click(&mut scene, &mut registry, 110.0, 50.0);
        assert_eq!(scene.selected(), Some(id));
        scene.drain_notices();

        scene.apply(EditorEvent::RemoveEntityRequest(id), &mut registry, &mut picker);
        scene.apply(EditorEvent::RemoveEntityRequest(id), &mut registry, &mut picker);
        assert!(scene.level().is_empty());
        assert_eq!(scene.drain_notices(), vec![SceneNotice::SelectionChanged(None)]);
    }

    #[test]
    fn test_save_prompts_then_reuses_path_and_load_restores() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("level.json");

        let mut level = Level::new("Saved");
        level.spawn(EntityKind::Goal, 64.0, 0.0, None).unwrap();
        let mut scene = PlacementScene::new(level, 32.0);
        let mut registry = Registry::new();

        scene.apply(EditorEvent::SaveRequest, &mut registry, &mut FixedPicker(Some(path.clone())));
        assert_eq!(scene.path(), Some(path.as_path()));
        assert!(path.exists());

        scene.apply(EditorEvent::ClearRequest, &mut registry, &mut FixedPicker(None));
        assert!(scene.level().is_empty());

        // Path is known now, no prompt needed
        scene.apply(EditorEvent::LoadRequest(path.clone()), &mut registry, &mut FixedPicker(None));
        assert_eq!(scene.level().name, "Saved");
        assert_eq!(scene.level().len(), 1);
        assert!(!scene.is_dirty());
    }

    #[test]
    fn test_failed_load_keeps_current_level() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let mut level = Level::default();
        level.spawn(EntityKind::Player, 0.0, 0.0, None).unwrap();
        let mut scene = PlacementScene::new(level, 32.0);
        let mut registry = Registry::new();

        scene.apply(EditorEvent::LoadRequest(path), &mut registry, &mut FixedPicker(None));
        assert_eq!(scene.level().len(), 1);
        assert!(scene.status().is_some_and(|s| s.starts_with("Load failed")));
    }

    #[test]
    fn test_cancel_and_clear_leave_placement_mode() {
        let mut scene = PlacementScene::new(Level::default(), 32.0);
        let mut registry = Registry::new();
        let mut picker = FixedPicker(None);

        scene.apply(
            EditorEvent::EntityTypeSelectRequest { kind: EntityKind::Spike, config: None },
            &mut registry,
            &mut picker,
        );
        scene.apply(EditorEvent::CancelPlacementRequest, &mut registry, &mut picker);
        assert!(!registry.placement_mode());
        assert!(scene.pending().is_none());

        scene.apply(
            EditorEvent::EntityTypeSelectRequest { kind: EntityKind::Spike, config: None },
            &mut registry,
            &mut picker,
        );
        scene.apply(EditorEvent::ClearRequest, &mut registry, &mut picker);
        assert!(!registry.placement_mode());
    }

    #[test]
    fn test_shutdown_is_idempotent() {
        let mut scene = PlacementScene::new(Level::default(), 32.0);
        let mut registry = Registry::new();
        scene.apply(
            EditorEvent::EntityTypeSelectRequest { kind: EntityKind::Coin, config: None },
            &mut registry,
            &mut FixedPicker(None),
        );

        scene.shutdown(&mut registry);
        scene.shutdown(&mut registry);
        assert!(scene.is_shut_down());
        assert!(!registry.placement_mode());
        assert_eq!(scene.drain_notices(), vec![SceneNotice::Shutdown]);

        scene.apply(EditorEvent::ClearRequest, &mut registry, &mut FixedPicker(None));
        assert!(scene.drain_notices().is_empty());
    }

    #[test]
    fn test_open_or_new_falls_back_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let scene = PlacementScene::open_or_new(Some(&dir.path().join("missing.json")), 32.0);
        assert!(scene.level().is_empty());
        assert!(scene.path().is_none());
    }

    const LAST_ID_COIN: &str = r#"{"version":1,"name":"Full","entities":[
        {"id":4294967294,"kind":"Coin","x":0.0,"y":0.0,"width":16.0,"height":16.0}]}"#;

    #[test]
    fn test_open_or_new_rejects_out_of_range_ids() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("max.json");
        std::fs::write(&path, LAST_ID_COIN.replace("4294967294", "4294967295")).unwrap();

        let scene = PlacementScene::open_or_new(Some(&path), 32.0);
        assert!(scene.level().is_empty());
        assert!(scene.path().is_none());
    }

    #[test]
    fn test_place_with_no_ids_left_keeps_running() {
        let level = Level::from_json(LAST_ID_COIN).unwrap();
        let mut scene = PlacementScene::new(level, 32.0);
        let mut registry = Registry::new();
        scene.apply(
            EditorEvent::EntityTypeSelectRequest { kind: EntityKind::Goal, config: None },
            &mut registry,
            &mut FixedPicker(None),
        );

        click(&mut scene, &mut registry, 200.0, 200.0);
        assert_eq!(scene.level().len(), 1);
        assert!(!registry.placement_mode());
        assert!(scene.pending().is_none());
        assert!(scene.status().is_some_and(|s| s.starts_with("Place failed")));

        // Selection still works afterwards
        click(&mut scene, &mut registry, 105.0, 45.0);
        assert_eq!(scene.selected(), Some(EntityId(u32::MAX - 1)));
    }

    #[test]
    fn test_palette_pick_shows_hint() {
        let mut scene = PlacementScene::new(Level::default(), 32.0);
        let mut registry = Registry::new();
        scene.apply(
            EditorEvent::UiEntitySelect { kind: EntityKind::Spike, config: None },
            &mut registry,
            &mut FixedPicker(None),
        );
        assert_eq!(scene.status(), Some("Spike: click in the level to place"));
        assert!(!registry.placement_mode());
        assert!(scene.level().is_empty());
    }
}
