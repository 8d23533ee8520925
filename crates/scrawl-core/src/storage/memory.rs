//! In-memory storage, used by tests and ephemeral sessions

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use super::KeyValueStore;
use crate::error::{Error, Result};

/// `HashMap`-backed [`KeyValueStore`].
///
/// An optional byte limit makes writes fail the way a full browser storage
/// quota does.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
    write_limit: Mutex<Option<usize>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject writes whose value is longer than `limit` bytes.
    ///
    /// `None` removes the limit.
    pub fn set_write_limit(&self, limit: Option<usize>) {
        if let Ok(mut current) = self.write_limit.lock() {
            *current = limit;
        }
    }

    fn entries(&self) -> Result<MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| Error::Persistence("memory store lock poisoned".to_string()))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let limit = self.write_limit.lock().map_or(None, |limit| *limit);
        if let Some(limit) = limit {
            if value.len() > limit {
                return Err(Error::Persistence(format!(
                    "quota exceeded writing '{key}' ({} bytes, limit {limit})",
                    value.len()
                )));
            }
        }

        self.entries()?.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_value() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);

        store.set("k", "v1").unwrap();
        store.set("k", "v2").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v2"));
    }

    #[test]
    fn test_write_limit_rejects_large_values() {
        let store = MemoryStore::new();
        store.set("k", "small").unwrap();
        store.set_write_limit(Some(4));

        let err = store.set("k", "too large").unwrap_err();
        assert!(err.is_persistence());
        assert_eq!(store.get("k").unwrap().as_deref(), Some("small"));

        store.set_write_limit(None);
        store.set("k", "too large").unwrap();
    }
}
