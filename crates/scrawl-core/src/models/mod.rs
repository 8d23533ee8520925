//! Data models for Scrawl

mod note;
mod settings;

pub use note::{
    validate_fields, Note, NoteDraft, NoteId, NoteListItem, EMPTY_NOTE_MESSAGE, LOCKED_CONTENT,
    LOCKED_TITLE,
};
pub use settings::{
    FontSize, Settings, DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE, FONT_FAMILIES, FONT_SIZE_MAX,
    FONT_SIZE_MIN, FONT_SIZE_STEP,
};

pub(crate) use settings::clamp_font_size;
