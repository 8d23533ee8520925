use std::path::Path;

use scrawl_core::{NoteStore, Notice};

use crate::commands::common::{open_storage, print_notice};
use crate::error::CliError;

pub fn run_clear(confirmed: bool, db_path: &Path) -> Result<(), CliError> {
    if !confirmed {
        return Err(CliError::ConfirmationRequired);
    }

    let storage = open_storage(db_path)?;
    let mut store = NoteStore::open(&storage);
    let removed = store.delete_all()?;

    print_notice(&Notice::all_notes_deleted());
    println!("{removed}");
    Ok(())
}
