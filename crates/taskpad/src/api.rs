//! # API Facade
//!
//! [`TaskApi`] is the single entry point for task operations, regardless
//! of the front end driving it. It owns the rules the backends do not:
//! title validation, normalization, and turning lookup misses into
//! not-found errors.
//!
//! Every operation either fully applies or leaves the store untouched —
//! a rejected title inserts nothing, a miss mutates nothing. There is no
//! retry logic because nothing here is transient.
//!
//! Generic over [`DataStore`] so the same logic runs against the
//! in-memory store in tests and SQLite in production.

use crate::error::{Result, TaskError};
use crate::model::{normalize_title, Task, TaskId};
use crate::store::DataStore;

pub struct TaskApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> TaskApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Create a task. The store assigns the id; `completed` starts false.
    ///
    /// Fails with [`TaskError::EmptyTitle`] when the trimmed title is
    /// empty, in which case nothing is inserted.
    pub fn create(&mut self, title: &str, description: &str) -> Result<Task> {
        let title = normalize_title(title).ok_or(TaskError::EmptyTitle)?;
        self.store.insert(&title, description.trim())
    }

    /// Every stored task in creation order. An empty store yields an
    /// empty vec, never an error.
    pub fn list_all(&self) -> Result<Vec<Task>> {
        self.store.select_all()
    }

    pub fn get_by_id(&self, id: TaskId) -> Result<Task> {
        self.store
            .select_by_id(id)?
            .ok_or(TaskError::NotFound(id))
    }

    /// Replace title and description in place. `id` and `completed` are
    /// untouched.
    pub fn update(&mut self, id: TaskId, title: &str, description: &str) -> Result<Task> {
        let title = normalize_title(title).ok_or(TaskError::EmptyTitle)?;

        let mut task = self.get_by_id(id)?;
        task.title = title;
        task.description = description.trim().to_string();

        if !self.store.update_by_id(id, &task)? {
            return Err(TaskError::NotFound(id));
        }
        Ok(task)
    }

    /// Permanently remove a task. The id is never reassigned afterwards.
    pub fn delete(&mut self, id: TaskId) -> Result<()> {
        if !self.store.delete_by_id(id)? {
            return Err(TaskError::NotFound(id));
        }
        Ok(())
    }

    /// Flip the completion flag. Toggling twice restores the original
    /// value.
    pub fn toggle_completion(&mut self, id: TaskId) -> Result<Task> {
        let mut task = self.get_by_id(id)?;
        task.completed = !task.completed;

        if !self.store.update_by_id(id, &task)? {
            return Err(TaskError::NotFound(id));
        }
        Ok(task)
    }
}
