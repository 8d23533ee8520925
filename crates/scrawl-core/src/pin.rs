//! PIN gate for secret notes.
//!
//! This is a UI nuisance-gate, not a security boundary: the PIN is a
//! compile-time constant and secret notes are stored in plaintext. Anyone
//! with access to the storage file can read them. Real confidentiality would
//! need a user-derived key and encryption at rest.

use crate::error::{Error, Result};

/// The PIN that unlocks secret notes
pub const SECRET_PIN: &str = "1234";

/// Compare a candidate (after trimming surrounding whitespace) to the PIN
pub fn is_correct_pin(candidate: &str) -> bool {
    candidate.trim() == SECRET_PIN
}

/// Like [`is_correct_pin`], but reports a mismatch as [`Error::AuthFailure`].
///
/// There is no lockout or attempt counting.
pub fn verify_pin(candidate: &str) -> Result<()> {
    if is_correct_pin(candidate) {
        Ok(())
    } else {
        tracing::debug!("Rejected secret note PIN");
        Err(Error::AuthFailure)
    }
}
