//! Level file picker
//!
//! Native builds use the system dialog via `rfd`, filtered to `.json`.
//! The browser build has no file system; picking logs and returns nothing.

use std::path::{Path, PathBuf};

/// Source of level file paths chosen by the user
pub trait FilePicker {
    /// Choose an existing level to open
    fn pick_level(&mut self, start_dir: Option<&Path>) -> Option<PathBuf>;

    /// Choose where to save a level, suggesting `file_name`
    fn pick_save_path(&mut self, start_dir: Option<&Path>, file_name: &str) -> Option<PathBuf>;
}

/// Picker backed by the platform's file dialog
#[derive(Debug, Default)]
pub struct SystemPicker;

#[cfg(not(target_arch = "wasm32"))]
impl FilePicker for SystemPicker {
    fn pick_level(&mut self, start_dir: Option<&Path>) -> Option<PathBuf> {
        let mut dialog = rfd::FileDialog::new().add_filter("Level", &["json"]);
        if let Some(dir) = start_dir {
            dialog = dialog.set_directory(dir);
        }
        let picked = dialog.pick_file();
        if picked.is_none() {
            log::debug!("Open dialog cancelled");
        }
        picked
    }

    fn pick_save_path(&mut self, start_dir: Option<&Path>, file_name: &str) -> Option<PathBuf> {
        let mut dialog = rfd::FileDialog::new()
            .add_filter("Level", &["json"])
            .set_file_name(file_name);
        if let Some(dir) = start_dir {
            dialog = dialog.set_directory(dir);
        }
        dialog.save_file().map(|path| with_json_extension(&path))
    }
}

#[cfg(target_arch = "wasm32")]
impl FilePicker for SystemPicker {
    fn pick_level(&mut self, _start_dir: Option<&Path>) -> Option<PathBuf> {
        log::warn!("Opening level files is not available in the browser");
        None
    }

    fn pick_save_path(&mut self, _start_dir: Option<&Path>, _file_name: &str) -> Option<PathBuf> {
        log::warn!("Saving level files is not available in the browser");
        None
    }
}

/// Make sure a save path ends in `.json`
pub fn with_json_extension(path: &Path) -> PathBuf {
    match path.extension() {
        Some(ext) if ext.eq_ignore_ascii_case("json") => path.to_path_buf(),
        _ => path.with_extension("json"),
    }
}

/// File name for saving a level called `name`
pub fn suggested_file_name(name: &str) -> String {
    let stem: String = name
        .trim()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c.to_ascii_lowercase() } else { '_' })
        .collect();
    if stem.is_empty() {
        "level.json".to_string()
    } else {
        format!("{}.json", stem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_extension_enforced() {
        assert_eq!(with_json_extension(Path::new("a/level")), PathBuf::from("a/level.json"));
        assert_eq!(with_json_extension(Path::new("a/level.JSON")), PathBuf::from("a/level.JSON"));
        assert_eq!(with_json_extension(Path::new("a/level.ron")), PathBuf::from("a/level.json"));
    }

    #[test]
    fn test_suggested_file_name() {
        assert_eq!(suggested_file_name("Cave 2"), "cave_2.json");
        assert_eq!(suggested_file_name("   "), "level.json");
    }
}
