//! Note model

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::util::{strip_html, truncate_with_ellipsis};

/// Title shown in place of a secret note's real title.
pub const LOCKED_TITLE: &str = "[unlock to view]";

/// Placeholder rendered where a secret note's content would be.
pub const LOCKED_CONTENT: &str = "[Protected Content]";

/// Validation message for a note with neither title nor content.
pub const EMPTY_NOTE_MESSAGE: &str = "Please enter a title or content for your note.";

/// A unique identifier for a note.
///
/// Stored as an opaque string so ids written by earlier clients keep
/// loading. Fresh ids are UUID v7 (millisecond timestamp plus random bits).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    /// Generate a new unique note ID
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::now_v7().simple().to_string())
    }

    /// Get the string representation of this ID
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NoteId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for NoteId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A note in the system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Unique identifier, immutable after creation
    pub id: NoteId,
    /// Free-text title, may be empty
    pub title: String,
    /// Rich-text (HTML) body, may be empty
    pub content: String,
    /// Creation or last modification time (Unix ms)
    pub timestamp: i64,
    /// Hidden behind the PIN gate in list views
    #[serde(default)]
    pub is_secret: bool,
}

impl Note {
    /// Redacted projection suitable for list display
    #[must_use]
    pub fn list_item(&self) -> NoteListItem {
        if self.is_secret {
            NoteListItem {
                id: self.id.clone(),
                title: LOCKED_TITLE.to_string(),
                content: None,
                timestamp: self.timestamp,
                locked: true,
            }
        } else {
            NoteListItem {
                id: self.id.clone(),
                title: self.title.clone(),
                content: Some(self.content.clone()),
                timestamp: self.timestamp,
                locked: false,
            }
        }
    }
}

/// List-view projection of a note.
///
/// Secret notes never carry their real title or content here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteListItem {
    pub id: NoteId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub timestamp: i64,
    pub locked: bool,
}

impl NoteListItem {
    /// Line heading for the list: the title, or a plain-text content preview
    /// for untitled notes, truncated to `max_chars` characters
    #[must_use]
    pub fn heading(&self, max_chars: usize) -> String {
        let title = self.title.trim();
        if !title.is_empty() {
            return truncate_with_ellipsis(title, max_chars);
        }

        let preview = self.content.as_deref().map(strip_html).unwrap_or_default();
        truncate_with_ellipsis(&preview, max_chars)
    }
}

/// Editor form state: a note being written, new or existing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    /// `None` until the draft has been saved once
    pub id: Option<NoteId>,
    pub title: String,
    pub content: String,
    pub is_secret: bool,
}

impl NoteDraft {
    /// Start a draft for a brand new note
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>, is_secret: bool) -> Self {
        Self {
            id: None,
            title: title.into(),
            content: content.into(),
            is_secret,
        }
    }

    /// Start a draft that edits an existing note
    #[must_use]
    pub fn editing(note: &Note) -> Self {
        Self {
            id: Some(note.id.clone()),
            title: note.title.clone(),
            content: note.content.clone(),
            is_secret: note.is_secret,
        }
    }

    /// True when both title and content are whitespace-only
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.title.trim().is_empty() && self.content.trim().is_empty()
    }
}

/// Trim title and content, rejecting the pair when both end up empty.
pub fn validate_fields(title: &str, content: &str) -> Result<(String, String)> {
    let title = title.trim();
    let content = content.trim();
    if title.is_empty() && content.is_empty() {
        return Err(Error::Validation(EMPTY_NOTE_MESSAGE.to_string()));
    }
    Ok((title.to_string(), content.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample(is_secret: bool) -> Note {
        Note {
            id: NoteId::from("lq2x9k3abcd"),
            title: "Groceries".to_string(),
            content: "<div>milk &amp; eggs</div>".to_string(),
            timestamp: 1_700_000_000_000,
            is_secret,
        }
    }

    #[test]
    fn test_note_id_unique() {
        let id1 = NoteId::generate();
        let id2 = NoteId::generate();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_note_id_is_not_empty() {
        assert_eq!(NoteId::generate().as_str().len(), 32);
    }

    #[test]
    fn test_note_serializes_with_camel_case_fields() {
        let json = serde_json::to_value(sample(true)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "lq2x9k3abcd",
                "title": "Groceries",
                "content": "<div>milk &amp; eggs</div>",
                "timestamp": 1_700_000_000_000_i64,
                "isSecret": true
            })
        );
    }

    #[test]
    fn test_note_without_secret_flag_defaults_to_public() {
        let note: Note = serde_json::from_str(
            r#"{"id":"abc","title":"t","content":"c","timestamp":5}"#,
        )
        .unwrap();
        assert!(!note.is_secret);
    }

    #[test]
    fn test_list_item_redacts_secret_note() {
        let item = sample(true).list_item();
        assert_eq!(item.title, LOCKED_TITLE);
        assert_eq!(item.content, None);
        assert!(item.locked);
    }

    #[test]
    fn test_list_item_keeps_public_note_fields() {
        let note = sample(false);
        let item = note.list_item();
        assert_eq!(item.title, note.title);
        assert_eq!(item.content.as_deref(), Some(note.content.as_str()));
        assert_eq!(item.timestamp, note.timestamp);
        assert!(!item.locked);
    }

    #[test]
    fn test_heading_prefers_title() {
        assert_eq!(sample(false).list_item().heading(40), "Groceries");
        assert_eq!(sample(false).list_item().heading(7), "Groc...");
        assert_eq!(sample(true).list_item().heading(40), LOCKED_TITLE);
    }

    #[test]
    fn test_heading_of_untitled_note_strips_markup() {
        let note = Note {
            title: String::new(),
            ..sample(false)
        };
        assert_eq!(note.list_item().heading(40), "milk & eggs");
        assert_eq!(note.list_item().heading(7), "milk...");
    }

    #[test]
    fn test_validate_fields_trims() {
        let (title, content) = validate_fields("  Title ", " body\n").unwrap();
        assert_eq!(title, "Title");
        assert_eq!(content, "body");
    }

    #[test]
    fn test_validate_fields_rejects_blank_pair() {
        assert!(matches!(validate_fields("", ""), Err(Error::Validation(_))));
        assert!(matches!(
            validate_fields("   ", "\n\t"),
            Err(Error::Validation(_))
        ));
        assert!(validate_fields("", "only content").is_ok());
    }

    #[test]
    fn test_draft_blank_detection() {
        assert!(NoteDraft::new(" ", "", false).is_blank());
        assert!(!NoteDraft::new("", "x", false).is_blank());
    }
}
