//! # Domain Model: the Task record
//!
//! A task is deliberately small: an id the store hands out, a title, a
//! free-text description, and a completion flag. Titles are the one field
//! with an integrity rule — a stored task never has an empty title.
//!
//! ## Normalization
//!
//! Input arrives from chat lines, shell arguments and JSON bodies, so
//! titles and descriptions are normalized on the way in:
//!
//! 1. Surrounding whitespace is trimmed.
//! 2. A title that trims to nothing is rejected before anything is stored.
//! 3. Descriptions may trim to the empty string; that is their default.
//!
//! The `completed` flag starts `false` and is only ever flipped by the
//! toggle operation, never written through update.

use serde::{Deserialize, Serialize};

/// Identifier assigned by the store at creation time.
///
/// Ids increase monotonically and are never reassigned to a different
/// task within one store instance, even after deletion.
pub type TaskId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub completed: bool,
}

/// Trims surrounding whitespace from a raw title.
///
/// Returns `None` when nothing is left; callers reject that as invalid
/// input before touching the store.
pub fn normalize_title(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
