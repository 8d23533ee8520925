use std::env;
use std::io::{self, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

use chrono::{DateTime, Local, TimeZone};
use scrawl_core::storage::SqliteStore;
use scrawl_core::util::strip_html;
use scrawl_core::{Error, Note, NoteId, NoteListItem, NoteStore, Notice, NoticeLevel};

use crate::error::CliError;

const DB_PATH_ENV: &str = "SCRAWL_DB_PATH";
const SHORT_ID_LEN: usize = 13;
const HEADING_WIDTH: usize = 40;

#[cfg(windows)]
pub const DEFAULT_EDITOR: &str = "notepad";
#[cfg(not(windows))]
pub const DEFAULT_EDITOR: &str = "vi";

pub fn open_storage(path: &Path) -> Result<SqliteStore, CliError> {
    Ok(SqliteStore::open(path)?)
}

/// Resolve an id argument (full id or unique prefix) to a note id
pub fn resolve_note_id(query: &str, store: &NoteStore<'_>) -> Result<NoteId, CliError> {
    let normalized = normalize_note_identifier(query)?;
    Ok(store.resolve_id(&normalized)?.id.clone())
}

/// Open a note for viewing or editing, asking for `--pin` on secret notes
pub fn unlock_note(
    store: &NoteStore<'_>,
    id: &NoteId,
    pin: Option<&str>,
) -> Result<Note, CliError> {
    match store.open_for_edit(id, pin) {
        Ok(note) => Ok(note),
        Err(Error::AuthFailure) if pin.is_none() => Err(CliError::PinRequired(id.to_string())),
        Err(error) => Err(error.into()),
    }
}

pub fn print_notice(notice: &Notice) {
    match notice.level {
        NoticeLevel::Error | NoticeLevel::Warning => eprintln!("{notice}"),
        NoticeLevel::Success | NoticeLevel::Info => println!("{notice}"),
    }
}

/// One line per note: short id, heading, last-modified date and a secret marker
pub fn format_note_lines<Tz: TimeZone>(items: &[NoteListItem], tz: &Tz) -> Vec<String>
where
    Tz::Offset: std::fmt::Display,
{
    items
        .iter()
        .map(|item| {
            let short_id = item.id.as_str().chars().take(SHORT_ID_LEN).collect::<String>();
            let heading = item.heading(HEADING_WIDTH);
            let modified = format_timestamp(item.timestamp, tz);

            if item.locked {
                format!("{short_id:<13}  {heading:<40}  {modified:<22}  [secret]")
            } else {
                format!("{short_id:<13}  {heading:<40}  {modified}")
            }
        })
        .collect()
}

pub fn format_note_details(note: &Note) -> String {
    let mut lines = Vec::new();
    if !note.title.is_empty() {
        lines.push(note.title.clone());
    }
    lines.push(format!(
        "Last modified: {}",
        format_timestamp(note.timestamp, &Local)
    ));
    if note.is_secret {
        lines.push("Secret: yes".to_string());
    }
    let body = strip_html(&note.content);
    if !body.is_empty() {
        lines.push(String::new());
        lines.push(body);
    }
    lines.join("\n")
}

/// Render a timestamp like `Mar 5, 2024, 09:30 AM`
pub fn format_timestamp<Tz: TimeZone>(timestamp_ms: i64, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    DateTime::from_timestamp_millis(timestamp_ms).map_or_else(
        || timestamp_ms.to_string(),
        |date_time| {
            date_time
                .with_timezone(tz)
                .format("%b %-d, %Y, %I:%M %p")
                .to_string()
        },
    )
}

/// Content from arguments, then piped stdin, then the editor.
///
/// When `allow_empty` is set (a title was given) the editor is skipped and
/// missing content is fine.
pub fn resolve_note_content(
    content_parts: &[String],
    allow_empty: bool,
) -> Result<String, CliError> {
    if let Some(content) = normalize_content(&content_parts.join(" ")) {
        return Ok(content);
    }

    if let Some(content) = read_piped_stdin()? {
        return Ok(content);
    }

    if allow_empty {
        return Ok(String::new());
    }

    if let Some(content) = edit_in_editor("")? {
        return Ok(content);
    }

    Err(CliError::EmptyContent)
}

pub fn normalize_content(content: &str) -> Option<String> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn normalize_note_identifier(id: &str) -> Result<String, CliError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        Err(CliError::EmptyNoteId)
    } else {
        Ok(trimmed.to_string())
    }
}

pub fn read_piped_stdin() -> Result<Option<String>, CliError> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }

    let mut buffer = String::new();
    stdin.lock().read_to_string(&mut buffer)?;
    Ok(normalize_content(&buffer))
}

/// Open `initial_content` in the user's editor and return what was saved
pub fn edit_in_editor(initial_content: &str) -> Result<Option<String>, CliError> {
    let mut draft = tempfile::Builder::new()
        .prefix("scrawl-note-")
        .suffix(".html")
        .tempfile()?;
    draft.write_all(initial_content.as_bytes())?;
    draft.flush()?;

    run_editor(&editor_command(), draft.path())?;

    let edited = std::fs::read_to_string(draft.path())?;
    Ok(normalize_content(&edited))
}

fn run_editor(command: &[String], file_path: &Path) -> Result<(), CliError> {
    let Some((program, args)) = command.split_first() else {
        return Err(CliError::EditorFailed("no editor configured".to_string()));
    };

    let status = Command::new(program)
        .args(args)
        .arg(file_path)
        .status()
        .map_err(|error| CliError::EditorFailed(format!("could not start `{program}`: {error}")))?;

    if status.success() {
        Ok(())
    } else {
        Err(CliError::EditorFailed(format!(
            "`{program}` exited with status {status}"
        )))
    }
}

/// Editor from `$VISUAL`, then `$EDITOR`, then the platform default
pub fn editor_command() -> Vec<String> {
    ["VISUAL", "EDITOR"]
        .into_iter()
        .filter_map(|var| env::var(var).ok())
        .map(|value| split_editor_command(&value))
        .find(|command| !command.is_empty())
        .unwrap_or_else(|| vec![DEFAULT_EDITOR.to_string()])
}

/// Split an editor setting such as `code --wait` into program and arguments
pub fn split_editor_command(value: &str) -> Vec<String> {
    value.split_whitespace().map(str::to_string).collect()
}

pub fn resolve_db_path(cli_db_path: Option<PathBuf>) -> Result<PathBuf, CliError> {
    if let Some(path) = cli_db_path.or_else(|| env::var_os(DB_PATH_ENV).map(PathBuf::from)) {
        return Ok(path);
    }
    default_db_path()
}

pub fn default_db_path() -> Result<PathBuf, CliError> {
    dirs::data_dir()
        .map(|dir| dir.join("scrawl").join("scrawl.db"))
        .ok_or_else(|| {
            CliError::Config(format!(
                "could not resolve a data directory; pass --db-path or set {DB_PATH_ENV}"
            ))
        })
}
