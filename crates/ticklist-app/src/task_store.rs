use anyhow::Result;
use ticklist_core::{Task, Theme};
use ticklist_store::JsonStore;

/// Storage abstraction so collection logic can be unit-tested without a
/// filesystem. All persistence flows through this single seam.
pub trait TaskStore {
    /// Load the stored task collection; empty when nothing is stored.
    fn load_tasks(&self) -> Result<Vec<Task>>;
    /// Overwrite the stored task collection.
    fn save_tasks(&self, tasks: &[Task]) -> Result<()>;
    /// Load the stored theme preference; light when nothing is stored.
    fn load_theme(&self) -> Result<Theme>;
    /// Overwrite the stored theme preference.
    fn save_theme(&self, theme: Theme) -> Result<()>;
}

impl TaskStore for JsonStore {
    fn load_tasks(&self) -> Result<Vec<Task>> {
        Ok(JsonStore::load_tasks(self)?)
    }

    fn save_tasks(&self, tasks: &[Task]) -> Result<()> {
        Ok(JsonStore::save_tasks(self, tasks)?)
    }

    fn load_theme(&self) -> Result<Theme> {
        Ok(JsonStore::load_theme(self)?)
    }

    fn save_theme(&self, theme: Theme) -> Result<()> {
        Ok(JsonStore::save_theme(self, theme)?)
    }
}
