use crate::{StatusFilter, Task, TextQuery};

/// Transient display criteria. Lives only in memory and resets to the
/// defaults (no filter, no search) on every startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewCriteria {
    /// Status predicate applied first.
    pub filter: StatusFilter,
    /// Search text applied second; blank matches everything.
    pub search: String,
}

impl ViewCriteria {
    /// Matcher for the current search text, if any.
    #[must_use]
    pub fn query(&self) -> Option<TextQuery> {
        TextQuery::new(&self.search)
    }
}

/// Render-ready derivation of a task collection: the visible subset in
/// collection order, plus aggregate counts over the full collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListView {
    visible: Vec<usize>,
    /// Tasks not yet completed, counted over the whole collection.
    pub pending: usize,
    /// Completed tasks, counted over the whole collection.
    pub completed: usize,
    /// Size of the whole collection.
    pub total: usize,
    /// Rounded completion percentage; `0` for an empty collection.
    pub percent_complete: u8,
}

impl TaskListView {
    /// Apply filter then search to the collection, preserving order.
    ///
    /// Counts and the completion percentage ignore the criteria: they
    /// always describe the full collection.
    #[must_use]
    pub fn compute(tasks: &[Task], criteria: &ViewCriteria) -> Self {
        let query = criteria.query();
        let visible = tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| criteria.filter.matches(task))
            .filter(|(_, task)| query.as_ref().is_none_or(|q| q.matches(task)))
            .map(|(idx, _)| idx)
            .collect();

        let total = tasks.len();
        let completed = tasks.iter().filter(|task| task.completed).count();
        Self {
            visible,
            pending: total - completed,
            completed,
            total,
            percent_complete: percent(completed, total),
        }
    }

    /// Indices of the visible tasks within the source collection.
    #[must_use]
    pub fn visible_indexes(&self) -> &[usize] {
        &self.visible
    }

    /// Visible tasks in collection order.
    pub fn visible_tasks<'a>(&'a self, tasks: &'a [Task]) -> impl Iterator<Item = &'a Task> + 'a {
        self.visible.iter().filter_map(move |&idx| tasks.get(idx))
    }

    /// Number of visible tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.visible.len()
    }

    /// Whether nothing survives the criteria.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}

/// Round-half-up percentage in integer arithmetic, avoiding float casts.
fn percent(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let rounded = (completed * 200 + total) / (total * 2);
    u8::try_from(rounded.min(100)).unwrap_or(100)
}
