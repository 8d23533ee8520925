//! Note export in JSON and Markdown.

use std::fmt::Write as _;

use serde::Serialize;

use crate::models::{Note, LOCKED_CONTENT, LOCKED_TITLE};

/// Export output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Markdown,
}

impl ExportFormat {
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Markdown => "md",
        }
    }
}

/// Serializable note representation used in JSON and Markdown exports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportNote {
    pub id: String,
    pub title: String,
    pub content: String,
    pub timestamp: i64,
    pub is_secret: bool,
    /// True when title and content were withheld
    pub redacted: bool,
}

/// Convert a note into an export record.
///
/// Secret notes are redacted unless `include_secrets` is set.
#[must_use]
pub fn note_to_export_item(note: &Note, include_secrets: bool) -> ExportNote {
    let redacted = note.is_secret && !include_secrets;
    let (title, content) = if redacted {
        (LOCKED_TITLE.to_string(), LOCKED_CONTENT.to_string())
    } else {
        (note.title.clone(), note.content.clone())
    };

    ExportNote {
        id: note.id.to_string(),
        title,
        content,
        timestamp: note.timestamp,
        is_secret: note.is_secret,
        redacted,
    }
}

/// Render notes as pretty-printed JSON.
pub fn render_json_export(notes: &[Note], include_secrets: bool) -> serde_json::Result<String> {
    let items = notes
        .iter()
        .map(|note| note_to_export_item(note, include_secrets))
        .collect::<Vec<ExportNote>>();
    serde_json::to_string_pretty(&items)
}

/// Render notes in Markdown with frontmatter blocks.
#[must_use]
pub fn render_markdown_export(notes: &[Note], include_secrets: bool) -> String {
    let mut output = String::new();

    for (index, note) in notes.iter().enumerate() {
        if index > 0 {
            output.push('\n');
        }

        let export_note = note_to_export_item(note, include_secrets);
        let _ = writeln!(output, "---");
        let _ = writeln!(output, "id: {}", export_note.id);
        let _ = writeln!(output, "timestamp: {}", export_note.timestamp);
        let _ = writeln!(output, "secret: {}", export_note.is_secret);
        let _ = writeln!(output, "---");
        let _ = writeln!(output);
        if !export_note.title.is_empty() {
            let _ = writeln!(output, "# {}", export_note.title);
            let _ = writeln!(output);
        }
        output.push_str(&export_note.content);
        output.push('\n');
    }

    output
}

/// Render notes based on selected export format.
pub fn render_notes_export(
    notes: &[Note],
    format: ExportFormat,
    include_secrets: bool,
) -> serde_json::Result<String> {
    match format {
        ExportFormat::Json => render_json_export(notes, include_secrets),
        ExportFormat::Markdown => Ok(render_markdown_export(notes, include_secrets)),
    }
}

/// Default file name for an export written into a directory.
#[must_use]
pub fn suggested_export_file_name(format: ExportFormat, timestamp_ms: i64) -> String {
    format!("scrawl-export-{timestamp_ms}.{}", format.extension())
}
