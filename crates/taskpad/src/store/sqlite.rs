use super::DataStore;
use crate::error::Result;
use crate::model::{Task, TaskId};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

/// SQLite-backed storage.
///
/// Every operation is a single statement, so the database's own row
/// locking is all the coordination the table needs. `AUTOINCREMENT`
/// keeps deleted ids from ever being reassigned for the lifetime of the
/// database file.
pub struct SqliteStore {
    conn: Connection,
}

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    completed INTEGER NOT NULL DEFAULT 0
)";

impl SqliteStore {
    /// Open the database at `path`, creating the file and schema if needed.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.execute(SCHEMA, [])?;
        Ok(Self { conn })
    }

    /// Private in-memory database. Used by tests.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute(SCHEMA, [])?;
        Ok(Self { conn })
    }

    fn row_to_task(row: &rusqlite::Row<'_>) -> rusqlite::Result<Task> {
        Ok(Task {
            id: row.get(0)?,
            title: row.get(1)?,
            description: row.get(2)?,
            completed: row.get(3)?,
        })
    }
}

impl DataStore for SqliteStore {
    fn insert(&mut self, title: &str, description: &str) -> Result<Task> {
        self.conn.execute(
            "INSERT INTO tasks (title, description, completed) VALUES (?1, ?2, 0)",
            params![title, description],
        )?;
        Ok(Task {
            id: self.conn.last_insert_rowid(),
            title: title.to_string(),
            description: description.to_string(),
            completed: false,
        })
    }

    fn select_all(&self) -> Result<Vec<Task>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, title, description, completed FROM tasks ORDER BY id")?;
        let rows = stmt.query_map([], Self::row_to_task)?;

        let mut tasks = Vec::new();
        for row in rows {
            tasks.push(row?);
        }
        Ok(tasks)
    }

    fn select_by_id(&self, id: TaskId) -> Result<Option<Task>> {
        let task = self
            .conn
            .query_row(
                "SELECT id, title, description, completed FROM tasks WHERE id = ?1",
                params![id],
                Self::row_to_task,
            )
            .optional()?;
        Ok(task)
    }

    fn update_by_id(&mut self, id: TaskId, task: &Task) -> Result<bool> {
        let changed = self.conn.execute(
            "UPDATE tasks SET title = ?1, description = ?2, completed = ?3 WHERE id = ?4",
            params![task.title, task.description, task.completed, id],
        )?;
        Ok(changed > 0)
    }

    fn delete_by_id(&mut self, id: TaskId) -> Result<bool> {
        let deleted = self
            .conn
            .execute("DELETE FROM tasks WHERE id = ?1", params![id])?;
        Ok(deleted > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_select_roundtrip() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let task = store.insert("Buy milk", "2%").unwrap();

        assert_eq!(task.id, 1);
        assert!(!task.completed);

        let stored = store.select_by_id(task.id).unwrap().unwrap();
        assert_eq!(stored, task);
    }

    #[test]
    fn test_autoincrement_never_reuses_ids() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        store.insert("A", "").unwrap();
        let b = store.insert("B", "").unwrap();

        // Deleting the max id is the case plain rowid allocation would reuse.
        assert!(store.delete_by_id(b.id).unwrap());
        let c = store.insert("C", "").unwrap();

        assert_eq!(c.id, 3);
    }

    #[test]
    fn test_select_all_ordered_by_id() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        store.insert("first", "").unwrap();
        store.insert("second", "").unwrap();
        store.insert("third", "").unwrap();

        let titles: Vec<String> = store
            .select_all()
            .unwrap()
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_select_all_empty_table() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert!(store.select_all().unwrap().is_empty());
    }

    #[test]
    fn test_lookup_miss_is_none_not_error() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert_eq!(store.select_by_id(42).unwrap(), None);
    }

    #[test]
    fn test_mutations_on_unknown_id_return_false() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let phantom = Task {
            id: 9,
            title: "x".to_string(),
            description: String::new(),
            completed: false,
        };
        assert!(!store.update_by_id(9, &phantom).unwrap());
        assert!(!store.delete_by_id(9).unwrap());
    }

    #[test]
    fn test_update_persists_all_fields() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let mut task = store.insert("old", "d").unwrap();
        task.title = "new".to_string();
        task.description = "changed".to_string();
        task.completed = true;

        assert!(store.update_by_id(task.id, &task).unwrap());
        let stored = store.select_by_id(task.id).unwrap().unwrap();
        assert_eq!(stored, task);
    }

    #[test]
    fn test_reopen_preserves_tasks() {
        let dir = tempfile::TempDir::new().unwrap();
        let db_path = dir.path().join("tasks.db");

        {
            let mut store = SqliteStore::open(&db_path).unwrap();
            store.insert("survives restart", "").unwrap();
        }

        let store = SqliteStore::open(&db_path).unwrap();
        let tasks = store.select_all().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "survives restart");
    }
}
