use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::Task;

/// Named predicate selecting which tasks are visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// Every task.
    #[default]
    All,
    /// Tasks not yet completed.
    Pending,
    /// Completed tasks only.
    Completed,
}

impl StatusFilter {
    /// All filters in display order.
    pub const ALL: [Self; 3] = [Self::All, Self::Pending, Self::Completed];

    /// Whether the task passes this filter.
    #[must_use]
    pub const fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Pending => !task.completed,
            Self::Completed => task.completed,
        }
    }

    /// The next filter in cycling order (all → pending → completed → all).
    #[must_use]
    pub const fn cycled(self) -> Self {
        match self {
            Self::All => Self::Pending,
            Self::Pending => Self::Completed,
            Self::Completed => Self::All,
        }
    }

    /// Stable lowercase name used on the CLI and in the filter bar.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown filter name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown filter {0:?}, expected one of: all, pending, completed")]
pub struct ParseFilterError(String);

impl FromStr for StatusFilter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            other => Err(ParseFilterError(other.to_owned())),
        }
    }
}

/// Case-insensitive substring matcher over task text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextQuery {
    needle: String,
}

impl TextQuery {
    /// Normalize a query string into a matcher. Returns `None` for blank
    /// input, which matches everything and needs no matcher at all.
    #[must_use]
    pub fn new(query: &str) -> Option<Self> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self {
            needle: trimmed.to_lowercase(),
        })
    }

    /// Whether the task text contains the query, ignoring case.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        task.text.to_lowercase().contains(&self.needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TaskId;

    fn task(text: &str, completed: bool) -> Task {
        Task {
            id: TaskId(1),
            text: text.to_owned(),
            completed,
        }
    }

    #[test]
    fn all_filter_excludes_nothing() {
        assert!(StatusFilter::All.matches(&task("a", false)));
        assert!(StatusFilter::All.matches(&task("a", true)));
    }

    #[test]
    fn pending_and_completed_partition_tasks() {
        let open = task("open", false);
        let done = task("done", true);
        assert!(StatusFilter::Pending.matches(&open));
        assert!(!StatusFilter::Pending.matches(&done));
        assert!(!StatusFilter::Completed.matches(&open));
        assert!(StatusFilter::Completed.matches(&done));
    }

    #[test]
    fn filter_cycle_visits_every_variant() {
        let mut filter = StatusFilter::default();
        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(filter);
            filter = filter.cycled();
        }
        assert_eq!(filter, StatusFilter::All);
        assert_eq!(seen, StatusFilter::ALL);
    }

    #[test]
    fn filter_parses_its_own_display_output() {
        for filter in StatusFilter::ALL {
            let parsed: StatusFilter = filter
                .to_string()
                .parse()
                .unwrap_or_else(|err| panic!("filter must parse: {err}"));
            assert_eq!(parsed, filter);
        }
        assert!("done".parse::<StatusFilter>().is_err());
    }

    #[test]
    fn query_skips_blank_input() {
        assert!(TextQuery::new("").is_none());
        assert!(TextQuery::new("   ").is_none());
        assert!(TextQuery::new("\n").is_none());
    }

    #[test]
    fn query_matches_case_insensitively() {
        let milk = task("Buy Milk", false);
        let matcher = TextQuery::new("mIlK")
            .unwrap_or_else(|| panic!("matcher must exist for queries with content"));
        assert!(matcher.matches(&milk));

        let missing = TextQuery::new("bread")
            .unwrap_or_else(|| panic!("matcher must exist for queries with content"));
        assert!(!missing.matches(&milk));
    }
}
