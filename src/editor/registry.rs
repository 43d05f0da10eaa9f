//! Shared editor flags
//!
//! The registry is owned by the app and passed by reference. Only the
//! placement scene takes `&mut Registry`; everything else reads it and
//! reacts to changes through an `Observer`, which remembers the last
//! version it saw.

/// A value that bumps its version whenever it actually changes
#[derive(Debug, Clone, Copy)]
pub struct Watched<T> {
    value: T,
    version: u64,
}

impl<T: Copy + PartialEq> Watched<T> {
    pub fn new(value: T) -> Self {
        Self { value, version: 0 }
    }

    pub fn get(&self) -> T {
        self.value
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Set the value. Returns true if it changed.
    pub fn set(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        self.version += 1;
        true
    }
}

/// Tracks which version of a `Watched` value a listener has seen
#[derive(Debug, Clone, Copy, Default)]
pub struct Observer {
    seen: u64,
}

impl Observer {
    pub fn new() -> Self {
        Self { seen: 0 }
    }

    /// Current value if it changed since the last call
    pub fn changed<T: Copy + PartialEq>(&mut self, watched: &Watched<T>) -> Option<T> {
        if watched.version() == self.seen {
            return None;
        }
        self.seen = watched.version();
        Some(watched.get())
    }
}

/// Cross-component flags
#[derive(Debug, Clone)]
pub struct Registry {
    placement_mode: Watched<bool>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            placement_mode: Watched::new(false),
        }
    }

    /// Whether the scene is waiting for a placement click
    pub fn placement_mode(&self) -> bool {
        self.placement_mode.get()
    }

    pub fn placement_mode_watch(&self) -> &Watched<bool> {
        &self.placement_mode
    }

    pub fn set_placement_mode(&mut self, active: bool) -> bool {
        let changed = self.placement_mode.set(active);
        if changed {
            log::debug!("Registry: placement mode -> {}", active);
        }
        changed
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
