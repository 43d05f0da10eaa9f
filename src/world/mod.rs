//! Level data: entities, platform configuration, JSON level files

mod entity;
mod level;

pub use entity::*;
pub use level::*;
