//! `SQLite`-backed key-value storage

use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};

use super::{migrations, KeyValueStore};
use crate::error::Result;

/// Durable [`KeyValueStore`] living in a single `SQLite` file.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open the store at `path`, creating the file and parent directories
    /// if needed.
    ///
    /// Runs migrations automatically.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.configure();
        store.migrate()?;
        tracing::debug!("Opened storage at {}", path.display());
        Ok(store)
    }

    /// Open an in-memory store (useful for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    fn configure(&self) {
        // Pragmas are best effort
        if let Err(error) =
            self.conn
                .pragma_update_and_check(None, "journal_mode", "WAL", |row| {
                    row.get::<_, String>(0)
                })
        {
            tracing::debug!("Could not enable WAL journal: {error}");
        }
        if let Err(error) = self.conn.pragma_update(None, "synchronous", "NORMAL") {
            tracing::debug!("Could not set synchronous pragma: {error}");
        }
    }

    fn migrate(&self) -> Result<()> {
        migrations::run(&self.conn)
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?", params![key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?, ?)",
            params![key, value],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_open_in_memory() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert_eq!(store.get("missing").unwrap(), None);
    }

    #[test]
    fn test_set_replaces_value() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.set("key", "one").unwrap();
        store.set("key", "two").unwrap();
        assert_eq!(store.get("key").unwrap().as_deref(), Some("two"));

        let rows: i64 = store
            .conn
            .query_row("SELECT COUNT(*) FROM kv", [], |row| row.get(0))
            .unwrap();
        assert_eq!(rows, 1);
    }

    #[test]
    fn test_values_survive_reopen() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("nested").join("scrawl.db");

        {
            let store = SqliteStore::open(&path).unwrap();
            store.set("simple-notes", "[]").unwrap();
        }

        let reopened = SqliteStore::open(&path).unwrap();
        assert_eq!(
            reopened.get("simple-notes").unwrap().as_deref(),
            Some("[]")
        );
    }
}
