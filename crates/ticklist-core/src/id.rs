use serde::{Deserialize, Serialize};
use std::{fmt, num::ParseIntError, str::FromStr};
use time::OffsetDateTime;

/// Identifier of a task: unix-epoch milliseconds at creation time.
///
/// Serializes as a bare JSON number, which keeps stored collections
/// readable and the ids naturally ordered by creation.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub i64);

impl TaskId {
    /// Generate a fresh identifier that sorts after `latest`.
    ///
    /// The wall clock alone is not enough: two adds within the same
    /// millisecond would collide, so the new id is bumped past the
    /// largest one already in the collection when necessary.
    #[must_use]
    pub fn next_after(latest: Option<Self>) -> Self {
        let clock = now_millis();
        match latest {
            Some(Self(max)) if clock <= max => Self(max + 1),
            _ => Self(clock),
        }
    }
}

fn now_millis() -> i64 {
    let nanos = OffsetDateTime::now_utc().unix_timestamp_nanos();
    i64::try_from(nanos / 1_000_000).unwrap_or(i64::MAX)
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for TaskId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}
