//! # Storage Layer
//!
//! This module defines the storage abstraction for taskpad. The
//! [`DataStore`] trait lets the application run against different
//! backends without the operation logic knowing which one is wired in.
//!
//! ## Contract
//!
//! - Backends assign ids on insert: a counter for the in-memory store,
//!   `AUTOINCREMENT` for SQLite. Ids are never handed out twice within
//!   one store instance, even after a delete.
//! - `select_all` returns tasks in ascending id order, which equals
//!   creation order. An empty store yields an empty vec, never an error.
//! - Lookup misses are data, not failures: `select_by_id` returns
//!   `Ok(None)` and the mutators return `Ok(false)`. `Err` is reserved
//!   for real backend trouble (I/O, SQL). The not-found error the caller
//!   sees is produced one layer up, in [`crate::api::TaskApi`].
//! - Backends do not validate titles; validation happens before insert.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: map plus counter, for tests and
//!   ephemeral sessions.
//! - [`sqlite::SqliteStore`]: one `rusqlite` connection, one statement
//!   per operation.

use crate::error::Result;
use crate::model::{Task, TaskId};

pub mod memory;
pub mod sqlite;

/// Abstract interface for task persistence.
pub trait DataStore {
    /// Insert a new task, assigning the next id. `completed` starts false.
    fn insert(&mut self, title: &str, description: &str) -> Result<Task>;

    /// Every task, ascending by id (creation order).
    fn select_all(&self) -> Result<Vec<Task>>;

    /// Look up one task. `Ok(None)` when the id is unknown.
    fn select_by_id(&self, id: TaskId) -> Result<Option<Task>>;

    /// Overwrite the stored record. Returns false when the id is unknown.
    fn update_by_id(&mut self, id: TaskId, task: &Task) -> Result<bool>;

    /// Permanently remove a task. Returns false when the id is unknown.
    fn delete_by_id(&mut self, id: TaskId) -> Result<bool>;
}
