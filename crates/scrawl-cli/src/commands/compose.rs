use std::io::{self, IsTerminal};
use std::path::Path;

use scrawl_core::autosave::AutoSaver;
use scrawl_core::util::escape_html;
use scrawl_core::{Note, NoteDraft, NoteId, NoteStore, Notice, SettingsStore};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::commands::common::{open_storage, print_notice};
use crate::error::CliError;

/// A note being written line by line.
///
/// Saves go through [`ComposeSession::save`] whether they come from the
/// autosave timer or the final flush, so the first save creates the note and
/// every later one updates it.
pub struct ComposeSession<'a> {
    store: NoteStore<'a>,
    draft: NoteDraft,
    last_saved: Option<NoteDraft>,
}

impl<'a> ComposeSession<'a> {
    pub fn new(store: NoteStore<'a>, title: &str, is_secret: bool) -> Self {
        Self {
            store,
            draft: NoteDraft::new(title, "", is_secret),
            last_saved: None,
        }
    }

    /// Append one line of plain text as an HTML block.
    ///
    /// Blank lines before any text are dropped.
    pub fn push_line(&mut self, line: &str) {
        let block = if line.trim().is_empty() {
            if self.draft.content.is_empty() {
                return;
            }
            "<div><br></div>".to_string()
        } else {
            format!("<div>{}</div>", escape_html(line))
        };
        self.draft.content.push_str(&block);
    }

    pub const fn draft(&self) -> &NoteDraft {
        &self.draft
    }

    pub fn note_id(&self) -> Option<&NoteId> {
        self.draft.id.as_ref()
    }

    pub const fn store(&self) -> &NoteStore<'a> {
        &self.store
    }

    /// Persist `draft`, returning `None` when it matches the last save
    pub fn save(&mut self, mut draft: NoteDraft) -> scrawl_core::Result<Option<Note>> {
        if draft.id.is_none() {
            draft.id.clone_from(&self.draft.id);
        }
        if self
            .last_saved
            .as_ref()
            .is_some_and(|saved| same_fields(saved, &draft))
        {
            return Ok(None);
        }

        let note = self.store.save_draft(&draft)?;
        self.draft.id = Some(note.id.clone());
        draft.id = Some(note.id.clone());
        self.last_saved = Some(draft);
        Ok(Some(note))
    }

    /// Save the current draft unless it is blank or unchanged
    pub fn flush(&mut self) -> scrawl_core::Result<Option<Note>> {
        if self.draft.is_blank() {
            return Ok(None);
        }
        self.save(self.draft.clone())
    }
}

fn same_fields(a: &NoteDraft, b: &NoteDraft) -> bool {
    a.title == b.title && a.content == b.content && a.is_secret == b.is_secret
}

pub async fn run_compose(
    title: Option<&str>,
    is_secret: bool,
    db_path: &Path,
) -> Result<(), CliError> {
    let storage = open_storage(db_path)?;
    let auto_save = SettingsStore::open(&storage).settings().auto_save;
    let mut session = ComposeSession::new(
        NoteStore::open(&storage),
        title.unwrap_or_default(),
        is_secret,
    );
    let (mut saver, mut saves) = AutoSaver::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    if io::stdin().is_terminal() {
        eprintln!("Type your note, then press Ctrl-D to save.");
    }

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                session.push_line(&line);
                if auto_save {
                    saver.input(session.draft());
                }
            }
            Some(draft) = saves.recv() => {
                match session.save(draft) {
                    Ok(Some(note)) => tracing::info!("Auto-saved note {}", note.id),
                    Ok(None) => {}
                    Err(error) => {
                        if error.is_persistence() {
                            tracing::warn!("Auto-save failed; will retry on the next edit: {error}");
                        }
                        print_notice(&Notice::from_error(&error));
                    }
                }
            }
        }
    }

    if saver.is_pending() {
        tracing::debug!("Input ended before auto-save fired; saving now");
    }
    saver.cancel();
    while saves.try_recv().is_ok() {}

    match session.flush()? {
        Some(note) => {
            print_notice(&Notice::note_saved(note.is_secret));
            println!("{}", note.id);
        }
        None => match session.note_id() {
            Some(id) => println!("{id}"),
            None => return Err(CliError::EmptyContent),
        },
    }

    Ok(())
}
