//! scrawl-core - Core library for Scrawl
//!
//! This crate contains the note and settings stores, the key-value
//! persistence they write through to, the secret-note PIN gate and the
//! debounced autosave used by every Scrawl front end.

pub mod autosave;
pub mod error;
pub mod export;
pub mod models;
pub mod notice;
pub mod pin;
pub mod storage;
pub mod store;
pub mod util;

pub use error::{Error, Result};
pub use models::{Note, NoteDraft, NoteId, NoteListItem, Settings};
pub use notice::{Notice, NoticeLevel};
pub use pin::is_correct_pin;
pub use store::{NoteStore, SettingsStore};
