use std::path::Path;

use scrawl_core::{NoteStore, Notice};

use crate::commands::common::{open_storage, print_notice, resolve_note_id};
use crate::error::CliError;

pub fn run_delete(id: &str, db_path: &Path) -> Result<(), CliError> {
    let storage = open_storage(db_path)?;
    let mut store = NoteStore::open(&storage);
    let note_id = resolve_note_id(id, &store)?;

    store.delete(&note_id)?;
    print_notice(&Notice::note_deleted());
    println!("{note_id}");
    Ok(())
}
