//! Debounced autosave.
//!
//! Each input event cancels the pending save and schedules a new one, so at
//! most one save is ever waiting. Saves are delivered on a channel and
//! performed by whoever owns the [`NoteStore`](crate::store::NoteStore); the
//! timer never touches the store itself.

use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

use crate::models::NoteDraft;

/// Quiet period after the last edit before the note is saved
pub const AUTOSAVE_DELAY: Duration = Duration::from_secs(2);

/// Cancellable delayed delivery of the most recent value.
///
/// Must be used from within a tokio runtime.
pub struct Debouncer<T> {
    delay: Duration,
    tx: UnboundedSender<T>,
    pending: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Create a debouncer and the receiver its values are delivered on
    pub fn new(delay: Duration) -> (Self, UnboundedReceiver<T>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let debouncer = Self {
            delay,
            tx,
            pending: None,
        };
        (debouncer, rx)
    }

    /// Deliver `value` after the delay unless another value is scheduled first
    pub fn schedule(&mut self, value: T) {
        self.cancel();

        let tx = self.tx.clone();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(value).is_err() {
                tracing::debug!("Debounced value dropped; receiver closed");
            }
        }));
    }

    /// Drop the pending delivery, returning whether one was waiting
    pub fn cancel(&mut self) -> bool {
        let Some(handle) = self.pending.take() else {
            return false;
        };
        let was_pending = !handle.is_finished();
        handle.abort();
        was_pending
    }

    /// Whether a delivery is scheduled and has not fired yet
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

/// Debounced saving of an editor draft.
///
/// Blank drafts are never scheduled, matching the rule that a note needs a
/// title or content.
pub struct AutoSaver {
    debouncer: Debouncer<NoteDraft>,
}

impl AutoSaver {
    /// Create an autosaver using [`AUTOSAVE_DELAY`]
    pub fn new() -> (Self, UnboundedReceiver<NoteDraft>) {
        Self::with_delay(AUTOSAVE_DELAY)
    }

    pub fn with_delay(delay: Duration) -> (Self, UnboundedReceiver<NoteDraft>) {
        let (debouncer, rx) = Debouncer::new(delay);
        (Self { debouncer }, rx)
    }

    /// Record an edit. Returns `false` when the draft is blank and nothing
    /// was scheduled; any previously pending save is still cancelled.
    pub fn input(&mut self, draft: &NoteDraft) -> bool {
        if draft.is_blank() {
            self.debouncer.cancel();
            return false;
        }
        self.debouncer.schedule(draft.clone());
        true
    }

    /// Drop the pending save, returning whether one was waiting
    pub fn cancel(&mut self) -> bool {
        self.debouncer.cancel()
    }

    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn delivers_after_delay() {
        let (mut debouncer, mut rx) = Debouncer::new(Duration::from_secs(2));
        let start = Instant::now();

        debouncer.schedule(1);
        assert!(debouncer.is_pending());

        assert_eq!(rx.recv().await, Some(1));
        assert!(start.elapsed() >= Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn new_value_replaces_pending_one() {
        let (mut debouncer, mut rx) = Debouncer::new(Duration::from_secs(2));
        let start = Instant::now();

        debouncer.schedule("first");
        tokio::time::sleep(Duration::from_millis(1500)).await;
        debouncer.schedule("second");

        assert_eq!(rx.recv().await, Some("second"));
        assert!(start.elapsed() >= Duration::from_millis(3500));

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_prevents_delivery() {
        let (mut debouncer, mut rx) = Debouncer::new(Duration::from_secs(2));

        debouncer.schedule(7);
        assert!(debouncer.cancel());
        assert!(!debouncer.is_pending());
        assert!(!debouncer.cancel());

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn autosaver_skips_blank_drafts() {
        let (mut saver, mut rx) = AutoSaver::new();

        assert!(saver.input(&NoteDraft::new("Title", "", false)));
        assert!(!saver.input(&NoteDraft::new("  ", "", false)));
        assert!(!saver.is_pending());

        tokio::time::sleep(AUTOSAVE_DELAY * 2).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn autosaver_delivers_latest_draft_once() {
        let (mut saver, mut rx) = AutoSaver::new();

        saver.input(&NoteDraft::new("T", "a", false));
        saver.input(&NoteDraft::new("T", "ab", false));
        saver.input(&NoteDraft::new("T", "abc", false));

        let delivered = rx.recv().await.unwrap();
        assert_eq!(delivered.content, "abc");

        tokio::time::sleep(AUTOSAVE_DELAY * 2).await;
        assert!(rx.try_recv().is_err());
    }
}
