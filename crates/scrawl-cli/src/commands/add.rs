use std::path::Path;

use scrawl_core::{NoteStore, Notice};

use crate::commands::common::{open_storage, print_notice, resolve_note_content};
use crate::error::CliError;

pub fn run_add(
    title: Option<&str>,
    content_parts: &[String],
    is_secret: bool,
    db_path: &Path,
) -> Result<(), CliError> {
    let title = title.map(str::trim).unwrap_or_default();
    let content = resolve_note_content(content_parts, !title.is_empty())?;

    let storage = open_storage(db_path)?;
    let mut store = NoteStore::open(&storage);
    let note = store.create(title, &content, is_secret)?;

    print_notice(&Notice::note_saved(note.is_secret));
    println!("{}", note.id);
    Ok(())
}
