use std::path::Path;

use chrono::Local;
use scrawl_core::NoteStore;

use crate::commands::common::{format_note_lines, open_storage};
use crate::error::CliError;

pub fn run_list(limit: Option<usize>, as_json: bool, db_path: &Path) -> Result<(), CliError> {
    let storage = open_storage(db_path)?;
    let store = NoteStore::open(&storage);

    let mut items = store.list_items();
    if let Some(limit) = limit {
        items.truncate(limit);
    }

    if as_json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else if items.is_empty() {
        println!("No notes yet. Create one with `scrawl add`.");
    } else {
        for line in format_note_lines(&items, &Local) {
            println!("{line}");
        }
    }

    Ok(())
}
