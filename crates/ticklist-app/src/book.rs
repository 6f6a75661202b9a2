use anyhow::{Context, Result};
use ticklist_core::{Task, TaskId, Theme};
use tracing::info;

use crate::task_store::TaskStore;

/// Partial update merged into an existing task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    /// New display text, already trimmed and non-empty by the caller.
    pub text: Option<String>,
    /// New completion flag.
    pub completed: Option<bool>,
}

impl TaskPatch {
    /// Patch that replaces the text.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            completed: None,
        }
    }

    /// Patch that sets the completion flag.
    #[must_use]
    pub const fn completed(completed: bool) -> Self {
        Self {
            text: None,
            completed: Some(completed),
        }
    }
}

/// Authoritative in-memory task collection plus the theme preference.
///
/// Every mutation updates the collection first and then persists the
/// whole collection through the store, so the stored state always
/// matches memory once a mutating call returns.
pub struct TaskBook<S: TaskStore> {
    store: S,
    tasks: Vec<Task>,
    theme: Theme,
}

impl<S: TaskStore> TaskBook<S> {
    /// Load the stored collection and theme into memory.
    ///
    /// # Errors
    /// Returns an error if the store cannot be read.
    pub fn load(store: S) -> Result<Self> {
        let tasks = store.load_tasks().context("failed to load stored tasks")?;
        let theme = store
            .load_theme()
            .context("failed to load theme preference")?;
        Ok(Self { store, tasks, theme })
    }

    /// Tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Current theme preference.
    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme
    }

    /// The underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Look up a task by id.
    #[must_use]
    pub fn find(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Append a new pending task with the trimmed text.
    ///
    /// Blank input is a silent no-op returning `None`; nothing is
    /// persisted in that case.
    ///
    /// # Errors
    /// Returns an error if persisting the collection fails.
    pub fn add_task(&mut self, text: &str) -> Result<Option<TaskId>> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        let id = TaskId::next_after(self.tasks.iter().map(|task| task.id).max());
        self.tasks.push(Task::new(id, trimmed));
        self.save()?;
        info!(%id, "task added");
        Ok(Some(id))
    }

    /// Merge the patch into the task with the given id.
    ///
    /// Returns `false` without persisting when the id is not present.
    /// Text emptiness is not validated here; the edit flow turns an
    /// empty commit into a removal before it reaches this point.
    ///
    /// # Errors
    /// Returns an error if persisting the collection fails.
    pub fn update_task(&mut self, id: TaskId, patch: TaskPatch) -> Result<bool> {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return Ok(false);
        };

        if let Some(text) = patch.text {
            task.text = text;
        }
        if let Some(completed) = patch.completed {
            task.completed = completed;
        }
        self.save()?;
        Ok(true)
    }

    /// Flip the completion flag of the task with the given id, returning
    /// the new state, or `None` when the id is not present.
    ///
    /// # Errors
    /// Returns an error if persisting the collection fails.
    pub fn toggle_task(&mut self, id: TaskId) -> Result<Option<bool>> {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return Ok(None);
        };

        task.completed = !task.completed;
        let state = task.completed;
        self.save()?;
        Ok(Some(state))
    }

    /// Remove the task with the given id. Idempotent: a second call for
    /// the same id is a no-op that still rewrites the store.
    ///
    /// # Errors
    /// Returns an error if persisting the collection fails.
    pub fn remove_task(&mut self, id: TaskId) -> Result<bool> {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        let removed = self.tasks.len() < before;
        self.save()?;
        if removed {
            info!(%id, "task removed");
        }
        Ok(removed)
    }

    /// Remove every completed task, returning how many were dropped.
    ///
    /// # Errors
    /// Returns an error if persisting the collection fails.
    pub fn clear_completed(&mut self) -> Result<usize> {
        let before = self.tasks.len();
        self.tasks.retain(|task| !task.completed);
        let cleared = before - self.tasks.len();
        self.save()?;
        if cleared > 0 {
            info!(cleared, "completed tasks cleared");
        }
        Ok(cleared)
    }

    /// Flip the theme preference and persist the new state.
    ///
    /// # Errors
    /// Returns an error if persisting the preference fails.
    pub fn toggle_theme(&mut self) -> Result<Theme> {
        self.theme = self.theme.toggled();
        self.store
            .save_theme(self.theme)
            .context("failed to persist theme preference")?;
        Ok(self.theme)
    }

    fn save(&self) -> Result<()> {
        self.store
            .save_tasks(&self.tasks)
            .context("failed to persist task collection")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MemoryStore {
        tasks: RefCell<Vec<Task>>,
        theme: RefCell<Theme>,
        saves: RefCell<usize>,
    }

    impl TaskStore for MemoryStore {
        fn load_tasks(&self) -> Result<Vec<Task>> {
            Ok(self.tasks.borrow().clone())
        }

        fn save_tasks(&self, tasks: &[Task]) -> Result<()> {
            *self.tasks.borrow_mut() = tasks.to_vec();
            *self.saves.borrow_mut() += 1;
            Ok(())
        }

        fn load_theme(&self) -> Result<Theme> {
            Ok(*self.theme.borrow())
        }

        fn save_theme(&self, theme: Theme) -> Result<()> {
            *self.theme.borrow_mut() = theme;
            Ok(())
        }
    }

    fn book() -> TaskBook<MemoryStore> {
        TaskBook::load(MemoryStore::default())
            .unwrap_or_else(|err| panic!("memory store must load: {err}"))
    }

    fn expect_ok<T>(result: Result<T>, ctx: &str) -> T {
        result.unwrap_or_else(|err| panic!("{ctx}: {err}"))
    }

    fn added(book: &mut TaskBook<MemoryStore>, text: &str) -> TaskId {
        expect_ok(book.add_task(text), "add task")
            .unwrap_or_else(|| panic!("text {text:?} must produce a task"))
    }

    #[test]
    fn blank_add_leaves_collection_and_store_untouched() {
        let mut book = book();
        assert_eq!(expect_ok(book.add_task(""), "add empty"), None);
        assert_eq!(expect_ok(book.add_task("   "), "add spaces"), None);
        assert!(book.tasks().is_empty());
        assert_eq!(*book.store.saves.borrow(), 0);
    }

    #[test]
    fn add_trims_text_and_appends_in_order() {
        let mut book = book();
        added(&mut book, " a ");
        added(&mut book, "b");
        let texts: Vec<&str> = book.tasks().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b"]);
        assert!(book.tasks().iter().all(|t| !t.completed));
        assert!(book.tasks()[0].id < book.tasks()[1].id);
    }

    #[test]
    fn every_mutation_persists_the_full_collection() {
        let mut book = book();
        let id = added(&mut book, "persist me");
        assert_eq!(*book.store.saves.borrow(), 1);
        expect_ok(book.update_task(id, TaskPatch::completed(true)), "update");
        assert_eq!(*book.store.saves.borrow(), 2);
        assert!(book.store.tasks.borrow()[0].completed);
        expect_ok(book.remove_task(id), "remove");
        assert_eq!(*book.store.saves.borrow(), 3);
        assert!(book.store.tasks.borrow().is_empty());
    }

    #[test]
    fn update_on_missing_id_is_a_no_op() {
        let mut book = book();
        added(&mut book, "only");
        let updated = expect_ok(
            book.update_task(TaskId(999), TaskPatch::text("ghost")),
            "update missing",
        );
        assert!(!updated);
        assert_eq!(book.tasks()[0].text, "only");
    }

    #[test]
    fn update_merges_only_the_given_fields() {
        let mut book = book();
        let id = added(&mut book, "original");
        expect_ok(book.update_task(id, TaskPatch::completed(true)), "complete");
        assert_eq!(book.tasks()[0].text, "original");
        assert!(book.tasks()[0].completed);

        expect_ok(book.update_task(id, TaskPatch::text("renamed")), "rename");
        assert_eq!(book.tasks()[0].text, "renamed");
        assert!(book.tasks()[0].completed, "rename must not reset completion");
    }

    #[test]
    fn toggle_flips_and_reports_the_new_state() {
        let mut book = book();
        let id = added(&mut book, "flip");
        assert_eq!(expect_ok(book.toggle_task(id), "toggle"), Some(true));
        assert_eq!(expect_ok(book.toggle_task(id), "toggle back"), Some(false));
        assert_eq!(expect_ok(book.toggle_task(TaskId(999)), "missing"), None);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut book = book();
        let id = added(&mut book, "doomed");
        assert!(expect_ok(book.remove_task(id), "first remove"));
        let after_first = book.tasks().to_vec();
        assert!(!expect_ok(book.remove_task(id), "second remove"));
        assert_eq!(book.tasks(), after_first.as_slice());
    }

    #[test]
    fn clear_completed_keeps_pending_tasks_and_persists() {
        let mut book = book();
        let a = added(&mut book, "a");
        let b = added(&mut book, "b");
        expect_ok(book.update_task(b, TaskPatch::completed(true)), "complete b");

        assert_eq!(expect_ok(book.clear_completed(), "clear"), 1);
        assert_eq!(book.tasks().len(), 1);
        assert_eq!(book.tasks()[0].id, a);
        assert_eq!(book.store.tasks.borrow().len(), 1);
    }

    #[test]
    fn theme_toggle_persists_the_flag() {
        let mut book = book();
        assert_eq!(book.theme(), Theme::Light);
        assert_eq!(expect_ok(book.toggle_theme(), "toggle theme"), Theme::Dark);
        assert_eq!(*book.store.theme.borrow(), Theme::Dark);
    }

    #[test]
    fn load_restores_a_previously_saved_collection() {
        let store = MemoryStore::default();
        *store.tasks.borrow_mut() = vec![Task::new(TaskId(5), "restored")];
        *store.theme.borrow_mut() = Theme::Dark;

        let book = TaskBook::load(store)
            .unwrap_or_else(|err| panic!("memory store must load: {err}"));
        assert_eq!(book.tasks().len(), 1);
        assert_eq!(book.tasks()[0].text, "restored");
        assert_eq!(book.theme(), Theme::Dark);
    }
}
