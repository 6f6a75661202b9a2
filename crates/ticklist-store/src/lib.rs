//! JSON file storage for ticklist.
//!
//! One file per slot under a single data directory: `tasks.json` holds
//! the serialized task collection, `theme.json` the display preference.
//! Loading fails soft: a missing slot is an empty slot, and a corrupt
//! slot is logged and treated as empty rather than crashing a session.

/// Error types.
pub mod error;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tempfile::NamedTempFile;
use ticklist_core::{Task, Theme};
use tracing::{debug, warn};

pub use crate::error::StoreError;

const TASKS_FILE: &str = "tasks.json";
const THEME_FILE: &str = "theme.json";

/// File-backed key-value store rooted at a data directory.
pub struct JsonStore {
    root: PathBuf,
}

impl JsonStore {
    /// Create a store rooted at `root`. The directory is created lazily
    /// on the first write, so opening never touches the filesystem.
    pub fn open(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory holding the storage files.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load the stored task collection.
    ///
    /// # Errors
    /// Returns an error only for I/O failures other than a missing file.
    pub fn load_tasks(&self) -> Result<Vec<Task>, StoreError> {
        self.load_slot(TASKS_FILE, Vec::new)
    }

    /// Overwrite the stored task collection.
    ///
    /// # Errors
    /// Returns an error if serialization or the file write fails.
    pub fn save_tasks(&self, tasks: &[Task]) -> Result<(), StoreError> {
        self.save_slot(TASKS_FILE, &tasks)
    }

    /// Load the stored theme preference; absence means light.
    ///
    /// # Errors
    /// Returns an error only for I/O failures other than a missing file.
    pub fn load_theme(&self) -> Result<Theme, StoreError> {
        self.load_slot(THEME_FILE, Theme::default)
    }

    /// Overwrite the stored theme preference.
    ///
    /// # Errors
    /// Returns an error if serialization or the file write fails.
    pub fn save_theme(&self, theme: Theme) -> Result<(), StoreError> {
        self.save_slot(THEME_FILE, &theme)
    }

    fn load_slot<T, D>(&self, file: &str, default: D) -> Result<T, StoreError>
    where
        T: DeserializeOwned,
        D: FnOnce() -> T,
    {
        let path = self.root.join(file);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "slot not stored yet, using default");
                return Ok(default());
            }
            Err(err) => return Err(StoreError::io(path, err)),
        };

        match serde_json::from_str(&contents) {
            Ok(value) => Ok(value),
            Err(err) => {
                warn!(path = %path.display(), %err, "stored value is corrupt, falling back to default");
                Ok(default())
            }
        }
    }

    fn save_slot<T: Serialize>(&self, file: &str, value: &T) -> Result<(), StoreError> {
        fs::create_dir_all(&self.root).map_err(|err| StoreError::io(&self.root, err))?;

        let json = serde_json::to_string_pretty(value)?;
        let path = self.root.join(file);

        // Write-then-rename so an interrupted save never leaves a torn file.
        let tmp = NamedTempFile::new_in(&self.root).map_err(|err| StoreError::io(&self.root, err))?;
        fs::write(tmp.path(), json).map_err(|err| StoreError::io(tmp.path(), err))?;
        tmp.persist(&path)
            .map_err(|err| StoreError::io(&path, err.error))?;

        debug!(path = %path.display(), "slot saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use ticklist_core::TaskId;

    fn temp_store() -> (TempDir, JsonStore) {
        let dir = TempDir::new().unwrap_or_else(|err| panic!("temp dir must be created: {err}"));
        let store = JsonStore::open(dir.path());
        (dir, store)
    }

    fn expect_ok<T>(result: Result<T, StoreError>, ctx: &str) -> T {
        result.unwrap_or_else(|err| panic!("{ctx}: {err}"))
    }

    #[test]
    fn missing_slots_load_as_defaults() {
        let (_dir, store) = temp_store();
        assert!(expect_ok(store.load_tasks(), "load tasks").is_empty());
        assert_eq!(expect_ok(store.load_theme(), "load theme"), Theme::Light);
    }

    #[test]
    fn tasks_round_trip_preserving_order_and_fields() {
        let (_dir, store) = temp_store();
        let tasks = vec![
            Task {
                id: TaskId(3),
                text: "third created first".into(),
                completed: true,
            },
            Task::new(TaskId(1), "then this"),
            Task::new(TaskId(2), "and this"),
        ];

        expect_ok(store.save_tasks(&tasks), "save tasks");
        let loaded = expect_ok(store.load_tasks(), "load tasks");
        assert_eq!(loaded, tasks);
    }

    #[test]
    fn save_overwrites_the_previous_collection() {
        let (_dir, store) = temp_store();
        expect_ok(store.save_tasks(&[Task::new(TaskId(1), "a")]), "first save");
        expect_ok(store.save_tasks(&[Task::new(TaskId(2), "b")]), "second save");

        let loaded = expect_ok(store.load_tasks(), "load tasks");
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].text, "b");
    }

    #[test]
    fn corrupt_tasks_slot_falls_back_to_empty() {
        let (dir, store) = temp_store();
        fs::write(dir.path().join(TASKS_FILE), "{not json")
            .unwrap_or_else(|err| panic!("fixture write must succeed: {err}"));

        assert!(expect_ok(store.load_tasks(), "load tasks").is_empty());
    }

    #[test]
    fn corrupt_theme_slot_falls_back_to_light() {
        let (dir, store) = temp_store();
        fs::write(dir.path().join(THEME_FILE), "\"sepia\"")
            .unwrap_or_else(|err| panic!("fixture write must succeed: {err}"));

        assert_eq!(expect_ok(store.load_theme(), "load theme"), Theme::Light);
    }

    #[test]
    fn theme_round_trips() {
        let (_dir, store) = temp_store();
        expect_ok(store.save_theme(Theme::Dark), "save theme");
        assert_eq!(expect_ok(store.load_theme(), "load theme"), Theme::Dark);
    }

    #[test]
    fn tasks_are_stored_as_a_plain_json_array() {
        let (dir, store) = temp_store();
        let mut task = Task::new(TaskId(7), "wire format");
        task.completed = true;
        expect_ok(store.save_tasks(&[task]), "save tasks");

        let raw = fs::read_to_string(dir.path().join(TASKS_FILE))
            .unwrap_or_else(|err| panic!("stored file must be readable: {err}"));
        let json: serde_json::Value = serde_json::from_str(&raw)
            .unwrap_or_else(|err| panic!("stored file must be JSON: {err}"));
        assert_eq!(json[0]["id"], 7);
        assert_eq!(json[0]["text"], "wire format");
        assert_eq!(json[0]["completed"], true);
    }
}
