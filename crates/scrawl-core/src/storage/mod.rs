//! Durable key-value storage shared by the note and settings stores

mod memory;
mod migrations;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::error::Result;

/// Key holding the serialized note array
pub const NOTES_KEY: &str = "simple-notes";

/// Key holding the serialized settings object
pub const SETTINGS_KEY: &str = "simple-note-settings";

/// Synchronous string key-value storage.
///
/// Implementations may fail (a full disk, a locked database); callers get
/// the error back and nothing is retried.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<()>;
}
