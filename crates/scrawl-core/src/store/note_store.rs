//! Note store: the in-memory note collection and its persistence

use serde_json::Value;

use crate::error::{Error, Result};
use crate::models::{validate_fields, Note, NoteDraft, NoteId, NoteListItem};
use crate::pin::verify_pin;
use crate::storage::{KeyValueStore, NOTES_KEY};
use crate::util::unix_millis_now;

/// Owns the note collection and writes it through to a [`KeyValueStore`].
///
/// The whole collection is serialized on every mutation. A mutation only
/// takes effect in memory once the write has succeeded.
pub struct NoteStore<'a> {
    storage: &'a dyn KeyValueStore,
    notes: Vec<Note>,
}

impl<'a> NoteStore<'a> {
    /// Create an empty store without reading storage
    pub fn new(storage: &'a dyn KeyValueStore) -> Self {
        Self {
            storage,
            notes: Vec::new(),
        }
    }

    /// Create a store and load the persisted collection
    pub fn open(storage: &'a dyn KeyValueStore) -> Self {
        let mut store = Self::new(storage);
        store.load_all();
        store
    }

    /// Replace the in-memory collection with the persisted one.
    ///
    /// Never fails: unreadable or malformed data yields an empty collection,
    /// and individual malformed records are skipped.
    pub fn load_all(&mut self) -> &[Note] {
        self.notes = match self.storage.get(NOTES_KEY) {
            Ok(Some(raw)) => parse_notes(&raw),
            Ok(None) => Vec::new(),
            Err(error) => {
                tracing::warn!("Failed to read notes from storage: {error}; starting empty");
                Vec::new()
            }
        };
        tracing::debug!("Loaded {} notes", self.notes.len());
        &self.notes
    }

    /// Notes in insertion order
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Get a note by ID
    pub fn get(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| &note.id == id)
    }

    /// Create a new note
    pub fn create(&mut self, title: &str, content: &str, is_secret: bool) -> Result<Note> {
        let (title, content) = validate_fields(title, content)?;
        let note = Note {
            id: NoteId::generate(),
            title,
            content,
            timestamp: unix_millis_now(),
            is_secret,
        };

        let mut next = self.notes.clone();
        next.push(note.clone());
        self.commit(next)?;

        tracing::debug!("Created note {}", note.id);
        Ok(note)
    }

    /// Replace a note's title, content and secret flag, refreshing its timestamp
    pub fn update(
        &mut self,
        id: &NoteId,
        title: &str,
        content: &str,
        is_secret: bool,
    ) -> Result<Note> {
        let (title, content) = validate_fields(title, content)?;
        let index = self
            .notes
            .iter()
            .position(|note| &note.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;

        let mut next = self.notes.clone();
        let note = &mut next[index];
        note.title = title;
        note.content = content;
        note.is_secret = is_secret;
        note.timestamp = unix_millis_now();
        let updated = note.clone();
        self.commit(next)?;

        tracing::debug!("Updated note {}", updated.id);
        Ok(updated)
    }

    /// Create or update depending on whether the draft has been saved before
    pub fn save_draft(&mut self, draft: &NoteDraft) -> Result<Note> {
        match &draft.id {
            Some(id) => self.update(id, &draft.title, &draft.content, draft.is_secret),
            None => self.create(&draft.title, &draft.content, draft.is_secret),
        }
    }

    /// Delete a note; deleting an unknown id is a no-op
    pub fn delete(&mut self, id: &NoteId) -> Result<()> {
        let next = self
            .notes
            .iter()
            .filter(|note| &note.id != id)
            .cloned()
            .collect::<Vec<_>>();
        let removed = next.len() != self.notes.len();
        self.commit(next)?;

        if removed {
            tracing::debug!("Deleted note {id}");
        }
        Ok(())
    }

    /// Delete every note, returning how many were removed
    pub fn delete_all(&mut self) -> Result<usize> {
        let count = self.notes.len();
        self.commit(Vec::new())?;
        tracing::info!("Deleted all {count} notes");
        Ok(count)
    }

    /// Notes ordered by timestamp, newest first; ties keep insertion order
    pub fn list_sorted(&self) -> Vec<Note> {
        let mut sorted = self.notes.clone();
        sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        sorted
    }

    /// Sorted list projection with secret notes redacted
    pub fn list_items(&self) -> Vec<NoteListItem> {
        self.list_sorted().iter().map(Note::list_item).collect()
    }

    /// Full note for editing or viewing.
    ///
    /// Secret notes need a PIN; a missing or wrong PIN is an
    /// [`Error::AuthFailure`].
    pub fn open_for_edit(&self, id: &NoteId, pin: Option<&str>) -> Result<Note> {
        let note = self
            .get(id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;

        if note.is_secret {
            verify_pin(pin.ok_or(Error::AuthFailure)?)?;
        }

        Ok(note.clone())
    }

    /// Resolve a full ID or a unique ID prefix to a note
    pub fn resolve_id(&self, query: &str) -> Result<&Note> {
        let query = query.trim();
        if query.is_empty() {
            return Err(Error::Validation("note id cannot be empty".to_string()));
        }

        if let Some(note) = self.notes.iter().find(|note| note.id.as_str() == query) {
            return Ok(note);
        }

        let matches = self
            .notes
            .iter()
            .filter(|note| note.id.as_str().starts_with(query))
            .collect::<Vec<_>>();

        match matches.as_slice() {
            [] => Err(Error::NotFound(query.to_string())),
            [note] => Ok(*note),
            _ => {
                let options = matches
                    .iter()
                    .take(3)
                    .map(|note| note.id.as_str().chars().take(13).collect::<String>())
                    .collect::<Vec<_>>()
                    .join(", ");
                Err(Error::Validation(format!(
                    "id prefix '{query}' is ambiguous; matches: {options}"
                )))
            }
        }
    }

    fn commit(&mut self, next: Vec<Note>) -> Result<()> {
        let serialized = serde_json::to_string(&next)?;
        self.storage.set(NOTES_KEY, &serialized)?;
        tracing::debug!("Persisted {} notes", next.len());
        self.notes = next;
        Ok(())
    }
}

fn parse_notes(raw: &str) -> Vec<Note> {
    let records = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(records)) => records,
        Ok(other) => {
            tracing::warn!(
                "Persisted notes are not an array (found {}); starting empty",
                json_kind(&other)
            );
            return Vec::new();
        }
        Err(error) => {
            tracing::warn!("Error parsing notes from storage: {error}; starting empty");
            return Vec::new();
        }
    };

    records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value::<Note>(record) {
            Ok(note) => Some(note),
            Err(error) => {
                tracing::warn!("Skipping malformed note record #{index}: {error}");
                None
            }
        })
        .collect()
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
