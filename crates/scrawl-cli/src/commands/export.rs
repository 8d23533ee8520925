use std::path::{Path, PathBuf};

use scrawl_core::export::{
    render_notes_export, suggested_export_file_name, ExportFormat as RenderFormat,
};
use scrawl_core::pin::verify_pin;
use scrawl_core::util::unix_millis_now;
use scrawl_core::NoteStore;

use crate::cli::ExportFormat;
use crate::commands::common::open_storage;
use crate::error::CliError;

pub fn run_export(
    format: ExportFormat,
    output_path: Option<&Path>,
    pin: Option<&str>,
    db_path: &Path,
) -> Result<(), CliError> {
    if let Some(pin) = pin {
        verify_pin(pin)?;
    }
    let include_secrets = pin.is_some();

    let storage = open_storage(db_path)?;
    let store = NoteStore::open(&storage);
    let notes = store.list_sorted();
    let rendered = render_notes_export(&notes, render_format(format), include_secrets)?;

    if let Some(path) = output_path {
        let path = export_target(path, format, unix_millis_now());
        std::fs::write(&path, rendered)?;
        println!("{}", path.display());
    } else {
        println!("{rendered}");
    }

    Ok(())
}

const fn render_format(format: ExportFormat) -> RenderFormat {
    match format {
        ExportFormat::Json => RenderFormat::Json,
        ExportFormat::Markdown => RenderFormat::Markdown,
    }
}

/// A directory output gets a timestamped file name inside it
pub fn export_target(output_path: &Path, format: ExportFormat, timestamp_ms: i64) -> PathBuf {
    if output_path.is_dir() {
        output_path.join(suggested_export_file_name(render_format(format), timestamp_ms))
    } else {
        output_path.to_path_buf()
    }
}
