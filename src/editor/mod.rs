//! Level Editor
//!
//! Layout:
//! - Toolbar (Platform / Save / Load / Clear)
//! - Entity palette on the left
//! - Level viewport in the center (the placement scene)
//! - Property inspector on the right
//!
//! Widgets talk to the scene only through `EditorEvent`s routed by the
//! `UiManager`; the scene talks back through `SceneNotice`s and the
//! placement-mode flag in the `Registry`.

mod events;
mod registry;
mod layout;
mod scene;
mod ui_manager;
pub mod toolbar;
pub mod palette;
pub mod inspector;
pub mod platform_panel;
pub mod platform_tool;
pub mod actions;
pub mod file_dialog;

pub use events::{EditorEvent, EventQueue, SceneNotice};
pub use registry::{Observer, Registry};
pub use layout::{draw_status_bar, EditorLayout};
pub use scene::PlacementScene;
pub use ui_manager::UiManager;
pub use actions::create_editor_actions;
pub use file_dialog::{FilePicker, SystemPicker};
