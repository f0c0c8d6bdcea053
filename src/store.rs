use crate::error::{Error, Result};
use log::debug;
use rusqlite::{Connection, Error as SQLiteError, Result as SQLiteResult};
use std::path::{Path, PathBuf};

impl From<SQLiteError> for Error {
    fn from(value: SQLiteError) -> Self {
        Error::Database(format!("There was a database error: {value:?}"))
    }
}

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS tasks (task TEXT)";
const INSERT_TASK: &str = "INSERT INTO tasks VALUES (?)";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE task = ?";
// rowid is implicit on every SQLite table, so ordering by it keeps the
// one-column schema while returning rows in insertion order.
const SELECT_TASKS: &str = "SELECT task FROM tasks ORDER BY rowid";

/// Durable home of task text: a single `tasks(task TEXT)` table.
///
/// No connection is held between calls. Every operation opens the file, runs
/// its statement and closes the handle again before returning.
pub(crate) struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    pub(crate) fn new(path: impl Into<PathBuf>) -> TaskStore {
        TaskStore { path: path.into() }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn exists(&self) -> bool {
        self.path.is_file()
    }

    fn with_connection<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> SQLiteResult<T>,
    {
        debug!("Opening database at {:?}", self.path);
        let conn = Connection::open(&self.path)?;
        let out = f(&conn)?;
        conn.close().map_err(|(_, e)| e)?;
        debug!("Database connection closed.");
        Ok(out)
    }

    /// Creates the `tasks` table without seeding it.
    pub(crate) fn create(&self) -> Result<()> {
        self.with_connection(|conn| conn.execute(CREATE_TABLE, ()).map(|_| ()))
    }

    /// First-run setup. Does nothing and returns `false` when the database
    /// file is already present.
    pub(crate) fn init_if_absent(&self, placeholder: &str) -> Result<bool> {
        if self.exists() {
            return Ok(false);
        }
        debug!("No database at {:?}, creating it.", self.path);
        self.create()?;
        self.insert(placeholder)?;
        Ok(true)
    }

    pub(crate) fn load_all(&self) -> Result<Vec<String>> {
        self.with_connection(|conn| {
            let mut stmt = conn.prepare(SELECT_TASKS)?;
            let rows = stmt.query_map((), |row| row.get::<_, Option<String>>(0))?;
            let mut tasks = Vec::new();
            for row in rows {
                if let Some(task) = row? {
                    tasks.push(task);
                }
            }
            Ok(tasks)
        })
    }

    pub(crate) fn insert(&self, text: &str) -> Result<()> {
        self.with_connection(|conn| conn.execute(INSERT_TASK, (text,)).map(|_| ()))
    }

    /// Removes every row whose text equals `text`, returning how many went.
    ///
    /// Rows carry no identity besides their text, so two tasks with the same
    /// text are both removed.
    pub(crate) fn delete(&self, text: &str) -> Result<usize> {
        self.with_connection(|conn| conn.execute(DELETE_TASK, (text,)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, TaskStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = TaskStore::new(dir.path().join("tasks.db"));
        (dir, store)
    }

    #[test]
    fn init_seeds_placeholder_once() {
        let (_dir, store) = store();
        assert!(!store.exists());
        assert!(store.init_if_absent("- - - Add Items Here - - -").unwrap());
        assert!(store.exists());
        assert!(!store.init_if_absent("- - - Add Items Here - - -").unwrap());
        assert_eq!(store.load_all().unwrap(), vec!["- - - Add Items Here - - -"]);
    }

    #[test]
    fn load_returns_insertion_order() {
        let (_dir, store) = store();
        store.create().unwrap();
        for text in ["c", "a", "b"] {
            store.insert(text).unwrap();
        }
        assert_eq!(store.load_all().unwrap(), vec!["c", "a", "b"]);
    }

    #[test]
    fn insert_does_not_deduplicate() {
        let (_dir, store) = store();
        store.create().unwrap();
        store.insert("same").unwrap();
        store.insert("same").unwrap();
        assert_eq!(store.load_all().unwrap().len(), 2);
    }

    #[test]
    fn delete_removes_every_matching_row() {
        // Known gap: duplicates cannot be told apart, so all of them go.
        let (_dir, store) = store();
        store.create().unwrap();
        for text in ["dup", "keep", "dup"] {
            store.insert(text).unwrap();
        }
        assert_eq!(store.delete("dup").unwrap(), 2);
        assert_eq!(store.load_all().unwrap(), vec!["keep"]);
    }

    #[test]
    fn delete_matches_exact_text_only() {
        let (_dir, store) = store();
        store.create().unwrap();
        store.insert("Buy milk").unwrap();
        assert_eq!(store.delete("buy milk").unwrap(), 0);
        assert_eq!(store.delete("Buy milk ").unwrap(), 0);
        assert_eq!(store.load_all().unwrap(), vec!["Buy milk"]);
    }

    #[test]
    fn null_rows_are_skipped_on_load() {
        let (_dir, store) = store();
        store.create().unwrap();
        store.insert("real").unwrap();
        Connection::open(store.path())
            .unwrap()
            .execute("INSERT INTO tasks VALUES (NULL)", ())
            .unwrap();
        assert_eq!(store.load_all().unwrap(), vec!["real"]);
    }

    #[test]
    fn missing_table_is_a_database_error() {
        let (_dir, store) = store();
        assert!(matches!(store.load_all(), Err(Error::Database(_))));
    }
}
