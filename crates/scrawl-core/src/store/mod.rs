//! Stores owning the application state

mod note_store;
mod settings_store;

pub use note_store::NoteStore;
pub use settings_store::SettingsStore;
