//! Level loading and saving
//!
//! Levels are stored as pretty-printed JSON so they can be diffed and hand
//! edited. Loaded files are validated before they replace the open level.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use super::{Entity, EntityId, EntityKind, PlatformConfig};

/// Current level file version
pub const LEVEL_VERSION: u32 = 1;

/// Validation limits to prevent resource exhaustion from malicious files
pub mod limits {
    /// Maximum number of entities in a level
    pub const MAX_ENTITIES: usize = 10_000;
    /// Maximum string length for the level name
    pub const MAX_NAME_LEN: usize = 256;
    /// Maximum coordinate value (prevents overflow issues)
    pub const MAX_COORD: f32 = 1_000_000.0;
}

/// Error type for level loading and saving
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("no entity ids left in this level")]
    IdsExhausted,
}

/// A level: a named list of placed entities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub version: u32,
    pub name: String,
    pub entities: Vec<Entity>,
    /// Next id to hand out (recomputed on load)
    #[serde(skip)]
    next_id: u32,
}

impl Default for Level {
    fn default() -> Self {
        Self::new("Untitled")
    }
}

impl Level {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            version: LEVEL_VERSION,
            name: name.into(),
            entities: Vec::new(),
            next_id: 1,
        }
    }

    /// Add a new entity and return its id. Fails once the id space is used up.
    pub fn spawn(
        &mut self,
        kind: EntityKind,
        x: f32,
        y: f32,
        platform: Option<PlatformConfig>,
    ) -> Result<EntityId, LevelError> {
        if self.next_id == u32::MAX {
            return Err(LevelError::IdsExhausted);
        }
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.entities.push(Entity::new(id, kind, x, y, platform));
        Ok(id)
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    /// Remove an entity, returning it if it existed
    pub fn remove(&mut self, id: EntityId) -> Option<Entity> {
        let idx = self.entities.iter().position(|e| e.id == id)?;
        Some(self.entities.remove(idx))
    }

    /// Remove every entity (ids keep counting up)
    pub fn clear(&mut self) {
        self.entities.clear();
    }

    /// Top-most entity under a world-space point (last drawn wins)
    pub fn entity_at(&self, x: f32, y: f32) -> Option<EntityId> {
        self.entities.iter().rev().find(|e| e.contains(x, y)).map(|e| e.id)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, LevelError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse and validate a level from JSON
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        let mut level: Level = serde_json::from_str(json)?;
        validate_level(&level)?;
        let highest = level.entities.iter().map(|e| e.id.0).max().unwrap_or(0);
        level.next_id = highest.checked_add(1).ok_or(LevelError::IdsExhausted)?;
        Ok(level)
    }
}

/// Check if a float is valid (not NaN or Inf, within bounds)
fn is_valid_coord(f: f32) -> bool {
    f.is_finite() && f.abs() <= limits::MAX_COORD
}

fn validate_entity(entity: &Entity) -> Result<(), String> {
    let context = format!("entity {}", entity.id);
    if !is_valid_coord(entity.x) || !is_valid_coord(entity.y) {
        return Err(format!("{}: invalid position ({}, {})", context, entity.x, entity.y));
    }
    if !is_valid_coord(entity.width) || !is_valid_coord(entity.height) || entity.width <= 0.0 || entity.height <= 0.0 {
        return Err(format!("{}: invalid size {}x{}", context, entity.width, entity.height));
    }
    match (entity.kind, &entity.platform) {
        (EntityKind::Platform, Some(config)) if !config.is_valid() => {
            Err(format!("{}: invalid platform config {:?}", context, config))
        }
        (EntityKind::Platform, None) => Err(format!("{}: platform without config", context)),
        (kind, Some(_)) if kind != EntityKind::Platform => {
            Err(format!("{}: {} can't carry a platform config", context, kind.label()))
        }
        _ => Ok(()),
    }
}

/// Validate a level's contents
pub fn validate_level(level: &Level) -> Result<(), LevelError> {
    if level.version == 0 || level.version > LEVEL_VERSION {
        return Err(LevelError::Validation(format!("unsupported version {}", level.version)));
    }
    if level.name.len() > limits::MAX_NAME_LEN {
        return Err(LevelError::Validation(format!(
            "level name too long ({} > {})",
            level.name.len(),
            limits::MAX_NAME_LEN
        )));
    }
    if level.entities.len() > limits::MAX_ENTITIES {
        return Err(LevelError::Validation(format!(
            "too many entities ({} > {})",
            level.entities.len(),
            limits::MAX_ENTITIES
        )));
    }

    let mut seen = HashSet::new();
    for entity in &level.entities {
        if entity.id.0 == u32::MAX {
            return Err(LevelError::Validation(format!("entity id {} out of range", entity.id)));
        }
        if !seen.insert(entity.id) {
            return Err(LevelError::Validation(format!("duplicate id {}", entity.id)));
        }
        validate_entity(entity).map_err(LevelError::Validation)?;
    }
    Ok(())
}

/// Load a level from a JSON file
pub fn load_level<P: AsRef<Path>>(path: P) -> Result<Level, LevelError> {
    let contents = fs::read_to_string(path)?;
    Level::from_json(&contents)
}

/// Save a level to a JSON file
pub fn save_level<P: AsRef<Path>>(level: &Level, path: P) -> Result<(), LevelError> {
    let json = level.to_json()?;
    fs::write(path, json)?;
    Ok(())
}
