use anyhow::Result;
use ticklist_app::{TaskBook, TaskPatch, TaskStore};
use ticklist_core::{StatusFilter, Task, TaskId, TaskListView, Theme, ViewCriteria};

use super::input::InputLine;

/// Input mode of the interaction layer.
///
/// Edit state lives in the mode, not on the tasks: at most one task can
/// be editing at a time because only one `Mode::Edit` value can exist.
#[derive(Debug)]
pub(super) enum Mode {
    /// Navigating the visible list.
    Browse,
    /// Typing the text of a new task.
    NewTask(InputLine),
    /// Typing into the search box; the list filters as the text changes.
    Search(InputLine),
    /// Inline-editing one task.
    Edit(EditState),
}

/// Pending edit of a single task.
#[derive(Debug)]
pub(super) struct EditState {
    /// Task being edited.
    pub(super) id: TaskId,
    /// Text as displayed when the edit started; cancel restores this by
    /// simply discarding the buffer, nothing was persisted meanwhile.
    pub(super) original: String,
    /// Edit buffer.
    pub(super) line: InputLine,
}

/// How an edit commit resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum EditOutcome {
    /// Non-empty text was saved.
    Saved,
    /// Empty text deleted the task instead.
    Deleted,
    /// No edit was in progress.
    NotEditing,
}

/// Application state shared between key handling and rendering.
pub(super) struct App<S: TaskStore> {
    pub(super) book: TaskBook<S>,
    pub(super) criteria: ViewCriteria,
    /// Derived view, recomputed after every mutation or criteria change.
    pub(super) view: TaskListView,
    pub(super) mode: Mode,
    selected: usize,
}

impl<S: TaskStore> App<S> {
    pub(super) fn new(book: TaskBook<S>) -> Self {
        let criteria = ViewCriteria::default();
        let view = TaskListView::compute(book.tasks(), &criteria);
        Self {
            book,
            criteria,
            view,
            mode: Mode::Browse,
            selected: 0,
        }
    }

    /// Recompute the visible list, keeping the selection on the same
    /// task when it is still visible.
    fn refresh(&mut self) {
        self.refresh_with(self.selected_task_id());
    }

    fn refresh_with(&mut self, preferred: Option<TaskId>) {
        self.view = TaskListView::compute(self.book.tasks(), &self.criteria);
        self.selected = self.resolve_selection(preferred);
    }

    fn resolve_selection(&self, preferred: Option<TaskId>) -> usize {
        if self.view.is_empty() {
            return 0;
        }
        if let Some(id) = preferred
            && let Some(pos) = self
                .view
                .visible_tasks(self.book.tasks())
                .position(|task| task.id == id)
        {
            return pos;
        }
        self.selected.min(self.view.len() - 1)
    }

    pub(super) const fn selected_index(&self) -> usize {
        self.selected
    }

    pub(super) fn selected_task(&self) -> Option<&Task> {
        let idx = *self.view.visible_indexes().get(self.selected)?;
        self.book.tasks().get(idx)
    }

    pub(super) fn selected_task_id(&self) -> Option<TaskId> {
        self.selected_task().map(|task| task.id)
    }

    pub(super) fn select_next(&mut self) {
        if !self.view.is_empty() && self.selected + 1 < self.view.len() {
            self.selected += 1;
        }
    }

    pub(super) fn select_prev(&mut self) {
        if !self.view.is_empty() && self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub(super) fn set_filter(&mut self, filter: StatusFilter) {
        if self.criteria.filter == filter {
            return;
        }
        self.criteria.filter = filter;
        self.refresh();
    }

    pub(super) fn cycle_filter(&mut self) {
        self.set_filter(self.criteria.filter.cycled());
    }

    pub(super) fn set_search(&mut self, search: String) {
        if self.criteria.search == search {
            return;
        }
        self.criteria.search = search;
        self.refresh();
    }

    /// Append a new task; blank input is a no-op returning `None`.
    pub(super) fn add_task(&mut self, text: &str) -> Result<Option<TaskId>> {
        let added = self.book.add_task(text)?;
        if added.is_some() {
            self.refresh_with(added);
        }
        Ok(added)
    }

    /// Flip completion of the selected task, returning its new state.
    pub(super) fn toggle_selected(&mut self) -> Result<Option<bool>> {
        let Some(id) = self.selected_task_id() else {
            return Ok(None);
        };
        let state = self.book.toggle_task(id)?;
        self.refresh_with(Some(id));
        Ok(state)
    }

    /// Delete the selected task, returning its id.
    pub(super) fn delete_selected(&mut self) -> Result<Option<TaskId>> {
        let Some(id) = self.selected_task_id() else {
            return Ok(None);
        };
        self.book.remove_task(id)?;
        self.refresh();
        Ok(Some(id))
    }

    /// Remove every completed task, returning how many were dropped.
    pub(super) fn clear_completed(&mut self) -> Result<usize> {
        let cleared = self.book.clear_completed()?;
        self.refresh();
        Ok(cleared)
    }

    /// Flip and persist the theme preference.
    pub(super) fn toggle_theme(&mut self) -> Result<Theme> {
        self.book.toggle_theme()
    }

    /// Enter edit mode for the selected task.
    ///
    /// Rejected (returns `false`) when another edit is already in
    /// progress or nothing is selected.
    pub(super) fn start_edit(&mut self) -> bool {
        if !matches!(self.mode, Mode::Browse) {
            return false;
        }
        let Some(task) = self.selected_task() else {
            return false;
        };
        self.mode = Mode::Edit(EditState {
            id: task.id,
            original: task.text.clone(),
            line: InputLine::with_text(&task.text),
        });
        true
    }

    /// Commit the pending edit: non-empty text is saved, empty text
    /// deletes the task. Either way the mode returns to browsing.
    pub(super) fn commit_edit(&mut self) -> Result<EditOutcome> {
        let Mode::Edit(state) = std::mem::replace(&mut self.mode, Mode::Browse) else {
            return Ok(EditOutcome::NotEditing);
        };

        let trimmed = state.line.text().trim().to_owned();
        let outcome = if trimmed.is_empty() {
            self.book.remove_task(state.id)?;
            EditOutcome::Deleted
        } else {
            self.book.update_task(state.id, TaskPatch::text(trimmed))?;
            EditOutcome::Saved
        };
        self.refresh_with(Some(state.id));
        Ok(outcome)
    }

    /// Abandon the pending edit without persisting anything, returning
    /// the text the task keeps showing.
    pub(super) fn cancel_edit(&mut self) -> Option<String> {
        match std::mem::replace(&mut self.mode, Mode::Browse) {
            Mode::Edit(state) => Some(state.original),
            other => {
                self.mode = other;
                None
            }
        }
    }
}
