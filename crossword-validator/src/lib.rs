//! Structural validation for crossword puzzle JSON.
//!
//! A document is an object with `cols`, `rows`, `cells`, `words` and
//! `questions`. Validation parses the text into an untyped JSON tree, runs a
//! fixed sequence of checks (see [`Check`]) and stops at the first failure.

#![warn(missing_docs, clippy::pedantic)]

mod document;
mod error;
mod pipeline;

/// Typed view of a validated crossword.
pub use document::{CrosswordDocument, Direction, Word};
/// Validation failure type and result alias.
pub use error::{ValidationError, ValidationResult};
/// Check pipeline entry points.
pub use pipeline::{Check, check_document, is_cell_text};

/// Smallest accepted value for `cols` and `rows`.
pub const MIN_DIMENSION: usize = 10;

/// Largest accepted value for `cols` and `rows`.
pub const MAX_DIMENSION: usize = 15;

/// Message returned for a document that passes every check.
pub const VALID_MESSAGE: &str = "Valid crossword JSON.";

/// Validates crossword JSON text, returning a pass flag and a message.
///
/// The message is [`VALID_MESSAGE`] on success, otherwise the text of the
/// first failing check.
///
/// ```
/// let (ok, message) = crossword_validator::validate("{not json");
/// assert!(!ok);
/// assert!(message.starts_with("Invalid JSON: "));
/// ```
#[must_use]
pub fn validate(document_text: &str) -> (bool, String) {
    match check_document(document_text) {
        Ok(_) => (true, VALID_MESSAGE.to_owned()),
        Err(err) => (false, err.to_string()),
    }
}
