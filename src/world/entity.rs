//! Level entities and platform configuration

use serde::{Deserialize, Serialize};

/// Width of a single platform segment in world units
pub const SEGMENT_WIDTH: f32 = 32.0;
/// Fewest segments a platform may have
pub const MIN_SEGMENTS: u32 = 1;
/// Most segments a platform may have
pub const MAX_SEGMENTS: u32 = 10;
/// Segment count a fresh platform configuration starts with
pub const DEFAULT_SEGMENTS: u32 = 3;

/// Stable handle to a placed entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub u32);

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Kinds of entity that can be placed in a level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Platform,
    Enemy,
    Coin,
    Spike,
    Goal,
}

impl EntityKind {
    pub const ALL: [EntityKind; 6] = [
        EntityKind::Player,
        EntityKind::Platform,
        EntityKind::Enemy,
        EntityKind::Coin,
        EntityKind::Spike,
        EntityKind::Goal,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Player => "Player",
            EntityKind::Platform => "Platform",
            EntityKind::Enemy => "Enemy",
            EntityKind::Coin => "Coin",
            EntityKind::Spike => "Spike",
            EntityKind::Goal => "Goal",
        }
    }

    /// Footprint of a non-platform entity in world units
    pub fn base_size(&self) -> (f32, f32) {
        match self {
            EntityKind::Player => (32.0, 48.0),
            EntityKind::Platform => (SEGMENT_WIDTH, SEGMENT_WIDTH),
            EntityKind::Enemy => (32.0, 32.0),
            EntityKind::Coin => (16.0, 16.0),
            EntityKind::Spike => (32.0, 16.0),
            EntityKind::Goal => (32.0, 64.0),
        }
    }
}

/// How a platform is laid out before placement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlatformConfig {
    pub is_vertical: bool,
    pub segment_count: u32,
    pub segment_width: f32,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            is_vertical: false,
            segment_count: DEFAULT_SEGMENTS,
            segment_width: SEGMENT_WIDTH,
        }
    }
}

impl PlatformConfig {
    /// Clamp any requested count into the allowed segment range
    pub fn clamp_segments(count: i64) -> u32 {
        count.clamp(MIN_SEGMENTS as i64, MAX_SEGMENTS as i64) as u32
    }

    /// Copy with a (clamped) segment count
    pub fn with_segments(mut self, count: i64) -> Self {
        self.segment_count = Self::clamp_segments(count);
        self
    }

    /// Copy with the given orientation
    pub fn with_vertical(mut self, is_vertical: bool) -> Self {
        self.is_vertical = is_vertical;
        self
    }

    /// Step the segment count by `delta`, staying in range
    pub fn stepped(self, delta: i64) -> Self {
        let count = self.segment_count as i64;
        self.with_segments(count.saturating_add(delta))
    }

    /// Footprint (width, height) of the configured platform.
    /// Segments extend along x when horizontal and along y when vertical.
    pub fn dimensions(&self) -> (f32, f32) {
        let length = self.segment_count as f32 * self.segment_width;
        if self.is_vertical {
            (self.segment_width, length)
        } else {
            (length, self.segment_width)
        }
    }

    pub fn is_valid(&self) -> bool {
        (MIN_SEGMENTS..=MAX_SEGMENTS).contains(&self.segment_count)
            && self.segment_width.is_finite()
            && self.segment_width > 0.0
    }
}

/// Editable entity properties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    X,
    Y,
    Segments,
    Vertical,
}

impl Property {
    pub fn label(&self) -> &'static str {
        match self {
            Property::X => "X",
            Property::Y => "Y",
            Property::Segments => "Segments",
            Property::Vertical => "Vertical",
        }
    }
}

/// New value for a property
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyValue {
    Number(f32),
    Count(u32),
    Flag(bool),
}

/// An entity placed in the level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub kind: EntityKind,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<PlatformConfig>,
}

impl Entity {
    /// Create an entity, deriving its size from kind and platform config.
    /// Platforms without a config get the default one.
    pub fn new(id: EntityId, kind: EntityKind, x: f32, y: f32, platform: Option<PlatformConfig>) -> Self {
        let platform = match kind {
            EntityKind::Platform => Some(platform.unwrap_or_default()),
            _ => None,
        };
        let mut entity = Self {
            id,
            kind,
            x,
            y,
            width: 0.0,
            height: 0.0,
            platform,
        };
        entity.refresh_size();
        entity
    }

    pub fn is_platform(&self) -> bool {
        self.kind == EntityKind::Platform
    }

    /// Recompute width/height from kind and platform config
    pub fn refresh_size(&mut self) {
        let (w, h) = match self.platform {
            Some(config) => config.dimensions(),
            None => self.kind.base_size(),
        };
        self.width = w;
        self.height = h;
    }

    /// Check if a world-space point hits this entity
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    /// Properties shown in the inspector for this entity
    pub fn properties(&self) -> &'static [Property] {
        if self.is_platform() {
            &[Property::X, Property::Y, Property::Segments, Property::Vertical]
        } else {
            &[Property::X, Property::Y]
        }
    }

    /// Current value of a property, if this entity has it
    pub fn property(&self, property: Property) -> Option<PropertyValue> {
        match property {
            Property::X => Some(PropertyValue::Number(self.x)),
            Property::Y => Some(PropertyValue::Number(self.y)),
            Property::Segments => self.platform.map(|p| PropertyValue::Count(p.segment_count)),
            Property::Vertical => self.platform.map(|p| PropertyValue::Flag(p.is_vertical)),
        }
    }

    /// Apply a property change. Returns false when the property or value
    /// doesn't fit this entity; counts are clamped rather than rejected.
    pub fn set_property(&mut self, property: Property, value: PropertyValue) -> bool {
        match (property, value) {
            (Property::X, PropertyValue::Number(v)) if v.is_finite() => {
                self.x = v;
                true
            }
            (Property::Y, PropertyValue::Number(v)) if v.is_finite() => {
                self.y = v;
                true
            }
            (Property::Segments, PropertyValue::Count(n)) => match self.platform.as_mut() {
                Some(config) => {
                    config.segment_count = PlatformConfig::clamp_segments(n as i64);
                    self.refresh_size();
                    true
                }
                None => false,
            },
            (Property::Vertical, PropertyValue::Flag(v)) => match self.platform.as_mut() {
                Some(config) => {
                    config.is_vertical = v;
                    self.refresh_size();
                    true
                }
                None => false,
            },
            _ => false,
        }
    }
}
