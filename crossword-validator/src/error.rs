//! Validation failures and their user-facing messages.

use serde_json::{Error as SerdeError, Number};
use thiserror::Error;

use crate::pipeline::Check;
use crate::{MAX_DIMENSION, MIN_DIMENSION};

/// Result alias for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// The first rule a crossword document was found to break.
///
/// The `Display` output of each variant is the message reported to the user.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The text is not syntactically valid JSON.
    #[error("Invalid JSON: {source}")]
    InvalidJson {
        /// Parser error from `serde_json`.
        #[from]
        source: SerdeError,
    },

    /// `cols` or `rows` is missing or not an integer.
    #[error("Cols and rows must be integers.")]
    DimensionsNotIntegers,

    /// `cols` or `rows` lies outside the accepted range.
    #[error("Cols and rows must be between {min} and {max}.", min = MIN_DIMENSION, max = MAX_DIMENSION)]
    DimensionsOutOfRange {
        /// Column count as supplied.
        cols: Number,
        /// Row count as supplied.
        rows: Number,
    },

    /// `cells` is not an array of `cols * rows` elements.
    #[error("Cells must be a list of length cols × rows.")]
    CellsLengthMismatch {
        /// Required number of cells.
        expected: usize,
        /// Length found, or `None` when `cells` is not an array.
        actual: Option<usize>,
    },

    /// A cell is not a string of uppercase letters or the empty string.
    #[error("Each cell must be an uppercase letter or an empty string.")]
    InvalidCell {
        /// Index of the offending cell.
        index: usize,
    },

    /// `words` is not an array of strings.
    #[error("Words must be a list of strings.")]
    WordsNotStrings,

    /// `questions` is not an array of strings.
    #[error("Questions must be a list of strings.")]
    QuestionsNotStrings,

    /// `words` and `questions` differ in length.
    #[error("The number of words and questions must be equal.")]
    CountMismatch {
        /// Number of words.
        words: usize,
        /// Number of questions.
        questions: usize,
    },

    /// A word string contains no positions at all.
    #[error("Each word must have at least one position.")]
    EmptyWord {
        /// Index of the word in `words`.
        index: usize,
    },

    /// A word contains a position that is not an integer.
    #[error("Word position '{token}' is not an integer.")]
    InvalidPosition {
        /// Index of the word in `words`.
        index: usize,
        /// The token that failed to parse, trimmed.
        token: String,
    },

    /// A word contains an integer position too large for the grid index type.
    #[error("Word position '{token}' is out of range.")]
    PositionOutOfRange {
        /// Index of the word in `words`.
        index: usize,
        /// The token that overflowed, trimmed.
        token: String,
    },

    /// A word's positions are neither a horizontal nor a vertical run.
    #[error("Word positions {positions:?} are not consecutive horizontally or vertically.")]
    NotContiguous {
        /// Index of the word in `words`.
        index: usize,
        /// The parsed positions.
        positions: Vec<i64>,
    },
}

impl ValidationError {
    /// Returns the pipeline stage that reported this error.
    #[must_use]
    pub const fn check(&self) -> Check {
        match self {
            Self::InvalidJson { .. } => Check::Parse,
            Self::DimensionsNotIntegers => Check::DimensionTypes,
            Self::DimensionsOutOfRange { .. } => Check::DimensionRange,
            Self::CellsLengthMismatch { .. } => Check::CellShape,
            Self::InvalidCell { .. } => Check::CellContent,
            Self::WordsNotStrings => Check::WordTypes,
            Self::QuestionsNotStrings => Check::QuestionTypes,
            Self::CountMismatch { .. } => Check::Parity,
            Self::EmptyWord { .. }
            | Self::InvalidPosition { .. }
            | Self::PositionOutOfRange { .. }
            | Self::NotContiguous { .. } => Check::Geometry,
        }
    }
}
