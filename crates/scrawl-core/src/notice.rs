//! User-facing feedback messages.
//!
//! Front ends render these however they like (toast, status line, stderr);
//! the wording is shared so every client says the same thing.

use std::fmt;

use crate::error::Error;
use crate::models::{FontSize, Settings};

/// Severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
    Warning,
    Info,
}

/// A short message describing the outcome of a user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn note_saved(is_secret: bool) -> Self {
        if is_secret {
            Self::new(NoticeLevel::Success, "Secret Note Saved!")
        } else {
            Self::new(NoticeLevel::Success, "Note saved successfully!")
        }
    }

    pub fn note_deleted() -> Self {
        Self::new(NoticeLevel::Info, "Note deleted successfully")
    }

    pub fn all_notes_deleted() -> Self {
        Self::new(NoticeLevel::Warning, "All notes deleted!")
    }

    pub fn dark_mode(enabled: bool) -> Self {
        if enabled {
            Self::new(NoticeLevel::Info, "Dark mode enabled")
        } else {
            Self::new(NoticeLevel::Info, "Light mode enabled")
        }
    }

    pub fn font_size_changed(size: FontSize) -> Self {
        Self::new(NoticeLevel::Info, format!("Font size changed to {size}"))
    }

    pub fn font_family_changed(settings: &Settings) -> Self {
        Self::new(
            NoticeLevel::Info,
            format!("Font changed to {}", settings.font_family_label()),
        )
    }

    pub fn auto_save(enabled: bool) -> Self {
        if enabled {
            Self::new(NoticeLevel::Info, "Auto-save enabled")
        } else {
            Self::new(NoticeLevel::Info, "Auto-save disabled")
        }
    }

    pub fn settings_reset() -> Self {
        Self::new(NoticeLevel::Info, "Settings restored to defaults")
    }

    /// Map a failed operation to the message shown to the user
    pub fn from_error(error: &Error) -> Self {
        match error {
            Error::Validation(detail) => Self::new(NoticeLevel::Error, detail.clone()),
            Error::NotFound(id) => Self::new(NoticeLevel::Error, format!("Note not found: {id}")),
            Error::AuthFailure => {
                Self::new(NoticeLevel::Error, "Incorrect PIN! Please try again.")
            }
            other => Self::new(
                NoticeLevel::Error,
                format!("Could not save your changes: {other}"),
            ),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
