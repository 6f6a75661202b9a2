//! Application services for ticklist: the authoritative in-memory task
//! collection, the storage seam it persists through, and user
//! configuration.

/// Task collection service.
pub mod book;
/// User configuration file.
pub mod config;
/// Storage abstraction.
pub mod task_store;

pub use crate::book::{TaskBook, TaskPatch};
pub use crate::config::Config;
pub use crate::task_store::TaskStore;
