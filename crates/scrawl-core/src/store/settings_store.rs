//! Settings store

use serde_json::Value;

use crate::error::Result;
use crate::models::{clamp_font_size, Settings, FONT_SIZE_STEP};
use crate::storage::{KeyValueStore, SETTINGS_KEY};

/// Owns the settings record and persists it after every change.
pub struct SettingsStore<'a> {
    storage: &'a dyn KeyValueStore,
    settings: Settings,
}

impl<'a> SettingsStore<'a> {
    /// Create a store holding the defaults, without reading storage
    pub fn new(storage: &'a dyn KeyValueStore) -> Self {
        Self {
            storage,
            settings: Settings::default(),
        }
    }

    /// Create a store and load the persisted record
    pub fn open(storage: &'a dyn KeyValueStore) -> Self {
        let mut store = Self::new(storage);
        store.load();
        store
    }

    /// Load settings from storage, merged field by field onto the defaults.
    ///
    /// Unreadable or malformed data leaves the defaults in place.
    pub fn load(&mut self) -> &Settings {
        let defaults = Settings::default();
        self.settings = match self.storage.get(SETTINGS_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Value>(&raw) {
                Ok(persisted) => defaults.merged_with(&persisted),
                Err(error) => {
                    tracing::warn!("Error parsing settings from storage: {error}");
                    defaults
                }
            },
            Ok(None) => defaults,
            Err(error) => {
                tracing::warn!("Failed to read settings from storage: {error}");
                defaults
            }
        };
        &self.settings
    }

    /// Current settings
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn set_dark_mode(&mut self, enabled: bool) -> Result<Settings> {
        self.apply(|settings| settings.dark_mode = enabled)
    }

    /// Move the font size by `delta` pixels, clamped to the allowed range
    pub fn adjust_font_size(&mut self, delta: i32) -> Result<Settings> {
        let target = i64::from(self.settings.font_size_value) + i64::from(delta);
        let px = clamp_font_size(target);
        self.apply(|settings| settings.set_font_size_value(px))
    }

    /// One step bigger
    pub fn increase_font_size(&mut self) -> Result<Settings> {
        self.adjust_font_size(FONT_SIZE_STEP)
    }

    /// One step smaller
    pub fn decrease_font_size(&mut self) -> Result<Settings> {
        self.adjust_font_size(-FONT_SIZE_STEP)
    }

    /// Any string is accepted; see [`crate::models::FONT_FAMILIES`] for the offered set
    pub fn set_font_family(&mut self, family: &str) -> Result<Settings> {
        let family = family.to_string();
        self.apply(|settings| settings.font_family = family)
    }

    pub fn set_auto_save(&mut self, enabled: bool) -> Result<Settings> {
        self.apply(|settings| settings.auto_save = enabled)
    }

    /// Restore and persist the defaults
    pub fn reset(&mut self) -> Result<Settings> {
        self.apply(|settings| *settings = Settings::default())
    }

    fn apply(&mut self, change: impl FnOnce(&mut Settings)) -> Result<Settings> {
        let mut next = self.settings.clone();
        change(&mut next);

        let serialized = serde_json::to_string(&next)?;
        self.storage.set(SETTINGS_KEY, &serialized)?;
        tracing::debug!("Persisted settings");

        self.settings = next;
        Ok(self.settings.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FontSize, FONT_SIZE_MAX, FONT_SIZE_MIN};
    use crate::storage::testing::UnreadableStore;
    use crate::storage::{MemoryStore, SqliteStore};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_load_default_settings() {
        let storage = MemoryStore::new();
        let store = SettingsStore::open(&storage);
        assert_eq!(store.settings(), &Settings::default());
    }

    #[test]
    fn test_failed_read_falls_back_to_defaults() {
        let storage = UnreadableStore;
        let mut store = SettingsStore::open(&storage);
        assert_eq!(store.settings(), &Settings::default());

        let settings = store.set_dark_mode(false).unwrap();
        assert!(!settings.dark_mode);
    }

    #[test]
    fn test_save_and_load_settings() {
        let storage = SqliteStore::open_in_memory().unwrap();
        {
            let mut store = SettingsStore::open(&storage);
            store.set_dark_mode(false).unwrap();
            store.adjust_font_size(4).unwrap();
            store.set_font_family("Georgia, serif").unwrap();
            store.set_auto_save(true).unwrap();
        }

        let loaded = SettingsStore::open(&storage);
        assert_eq!(
            loaded.settings(),
            &Settings {
                dark_mode: false,
                font_size: FontSize::Large,
                font_size_value: 20,
                font_family: "Georgia, serif".to_string(),
                auto_save: true,
            }
        );
    }

    #[test]
    fn test_load_merges_partial_record() {
        let storage = MemoryStore::new();
        storage
            .set(SETTINGS_KEY, r#"{"darkMode":false,"unknown":1}"#)
            .unwrap();

        let store = SettingsStore::open(&storage);
        assert!(!store.settings().dark_mode);
        assert_eq!(store.settings().font_size_value, 16);
    }

    #[test]
    fn test_load_malformed_record_keeps_defaults() {
        let storage = MemoryStore::new();
        storage.set(SETTINGS_KEY, "darkMode=false").unwrap();

        let store = SettingsStore::open(&storage);
        assert_eq!(store.settings(), &Settings::default());
    }

    #[test]
    fn test_adjust_font_size_clamps_up() {
        let storage = MemoryStore::new();
        let mut store = SettingsStore::open(&storage);

        let settings = store.adjust_font_size(100).unwrap();
        assert_eq!(settings.font_size_value, FONT_SIZE_MAX);
        assert_eq!(settings.font_size, FontSize::Large);
    }

    #[test]
    fn test_adjust_font_size_clamps_down() {
        let storage = MemoryStore::new();
        let mut store = SettingsStore::open(&storage);

        let settings = store.adjust_font_size(-100).unwrap();
        assert_eq!(settings.font_size_value, FONT_SIZE_MIN);
        assert_eq!(settings.font_size, FontSize::Small);
    }

    #[test]
    fn test_step_controls_stop_at_bounds() {
        let storage = MemoryStore::new();
        let mut store = SettingsStore::open(&storage);

        for _ in 0..10 {
            store.increase_font_size().unwrap();
        }
        assert_eq!(store.settings().font_size_value, 24);

        let settings = store.decrease_font_size().unwrap();
        assert_eq!(settings.font_size_value, 22);
        assert_eq!(settings.font_size, FontSize::Large);

        for _ in 0..10 {
            store.decrease_font_size().unwrap();
        }
        assert_eq!(store.settings().font_size_value, 12);
        assert_eq!(store.settings().font_size, FontSize::Small);
    }

    #[test]
    fn test_set_font_family_accepts_any_string() {
        let storage = MemoryStore::new();
        let mut store = SettingsStore::open(&storage);

        let settings = store.set_font_family("Comic Sans MS").unwrap();
        assert_eq!(settings.font_family, "Comic Sans MS");
    }

    #[test]
    fn test_every_mutation_persists_full_record() {
        let storage = MemoryStore::new();
        let mut store = SettingsStore::open(&storage);
        store.set_auto_save(true).unwrap();

        let raw = storage.get(SETTINGS_KEY).unwrap().unwrap();
        let persisted: Settings = serde_json::from_str(&raw).unwrap();
        assert_eq!(&persisted, store.settings());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let storage = MemoryStore::new();
        let mut store = SettingsStore::open(&storage);
        store.set_dark_mode(false).unwrap();
        store.set_font_family("Verdana, sans-serif").unwrap();

        assert_eq!(store.reset().unwrap(), Settings::default());
    }

    #[test]
    fn test_failed_write_keeps_previous_settings() {
        let storage = MemoryStore::new();
        let mut store = SettingsStore::open(&storage);
        storage.set_write_limit(Some(8));

        let err = store.set_dark_mode(false).unwrap_err();
        assert!(err.is_persistence());
        assert!(store.settings().dark_mode);
    }
}
