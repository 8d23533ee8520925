use std::path::Path;

use scrawl_core::NoteStore;

use crate::commands::common::{format_note_details, open_storage, resolve_note_id, unlock_note};
use crate::error::CliError;

pub fn run_show(id: &str, pin: Option<&str>, as_json: bool, db_path: &Path) -> Result<(), CliError> {
    let storage = open_storage(db_path)?;
    let store = NoteStore::open(&storage);
    let note_id = resolve_note_id(id, &store)?;
    let note = unlock_note(&store, &note_id, pin)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&note)?);
    } else {
        println!("{}", format_note_details(&note));
    }

    Ok(())
}
