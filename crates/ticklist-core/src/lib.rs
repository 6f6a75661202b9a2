//! Domain types and view computation for ticklist.

/// Status and search predicates.
pub mod filter;
/// Identifier types.
pub mod id;
/// Visible-list and progress computation.
pub mod view;

use serde::{Deserialize, Serialize};

pub use crate::filter::{ParseFilterError, StatusFilter, TextQuery};
pub use crate::id::TaskId;
pub use crate::view::{TaskListView, ViewCriteria};

/// A single to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, assigned at creation and never changed.
    pub id: TaskId,
    /// Display text. Stored trimmed and never empty; the edit flow turns
    /// an empty commit into a deletion instead of an empty save.
    pub text: String,
    /// Completion flag.
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Create a pending task with the given identifier and text.
    pub fn new(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }
}

/// Persisted display theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light palette. The default when nothing is stored.
    #[default]
    Light,
    /// Dark palette.
    Dark,
}

impl Theme {
    /// The other theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Stable lowercase name, matching the stored representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
