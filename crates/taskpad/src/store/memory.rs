use super::DataStore;
use crate::error::Result;
use crate::model::{Task, TaskId};
use std::collections::BTreeMap;

/// In-memory storage. Does NOT persist data.
///
/// Backs the unit tests and the ephemeral chat session. Iterating the
/// `BTreeMap` walks ascending ids, which equals creation order because
/// the counter only ever moves forward.
#[derive(Default)]
pub struct InMemoryStore {
    tasks: BTreeMap<TaskId, Task>,
    next_id: TaskId,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn insert(&mut self, title: &str, description: &str) -> Result<Task> {
        self.next_id += 1;
        let task = Task {
            id: self.next_id,
            title: title.to_string(),
            description: description.to_string(),
            completed: false,
        };
        self.tasks.insert(task.id, task.clone());
        Ok(task)
    }

    fn select_all(&self) -> Result<Vec<Task>> {
        Ok(self.tasks.values().cloned().collect())
    }

    fn select_by_id(&self, id: TaskId) -> Result<Option<Task>> {
        Ok(self.tasks.get(&id).cloned())
    }

    fn update_by_id(&mut self, id: TaskId, task: &Task) -> Result<bool> {
        match self.tasks.get_mut(&id) {
            Some(stored) => {
                *stored = task.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete_by_id(&mut self, id: TaskId) -> Result<bool> {
        Ok(self.tasks.remove(&id).is_some())
    }
}
