use std::path::Path;

use scrawl_core::{NoteStore, Notice};

use crate::commands::common::{
    edit_in_editor, open_storage, print_notice, resolve_note_id, unlock_note,
};
use crate::error::CliError;

/// Requested changes to an existing note
#[derive(Debug, Default)]
pub struct EditRequest<'a> {
    pub title: Option<&'a str>,
    pub content: Option<&'a str>,
    pub secret: Option<bool>,
    pub pin: Option<&'a str>,
}

pub fn run_edit(id: &str, request: &EditRequest<'_>, db_path: &Path) -> Result<(), CliError> {
    let storage = open_storage(db_path)?;
    let mut store = NoteStore::open(&storage);
    let note_id = resolve_note_id(id, &store)?;
    let note = unlock_note(&store, &note_id, request.pin)?;

    let title = request.title.unwrap_or(&note.title).trim().to_string();
    let content = match request.content {
        Some(content) => content.trim().to_string(),
        None if request.title.is_some() || request.secret.is_some() => note.content.clone(),
        None => edit_in_editor(&note.content)?.unwrap_or_default(),
    };
    let is_secret = request.secret.unwrap_or(note.is_secret);

    if title == note.title && content == note.content && is_secret == note.is_secret {
        println!("No changes for {}", note.id);
        return Ok(());
    }

    let updated = store.update(&note.id, &title, &content, is_secret)?;
    print_notice(&Notice::note_saved(updated.is_secret));
    println!("{}", updated.id);
    Ok(())
}
