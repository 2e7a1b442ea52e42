//! Ordered, short-circuiting structural checks.
//!
//! Each stage consumes the untyped [`serde_json::Value`] (or the output of an
//! earlier stage) and either narrows it towards a [`CrosswordDocument`] or
//! stops with the first [`ValidationError`]. Stage order decides which message
//! is reported for documents that break several rules at once.

use std::fmt;
use std::num::IntErrorKind;

use serde_json::{Number, Value};
use tracing::{debug, trace};

use crate::document::{CrosswordDocument, Direction, Word};
use crate::error::{ValidationError, ValidationResult};
use crate::{MAX_DIMENSION, MIN_DIMENSION};

/// Named validation stages, in the order they run.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Check {
    /// The text parses as JSON.
    Parse,
    /// `cols` and `rows` are integers.
    DimensionTypes,
    /// `cols` and `rows` are within range.
    DimensionRange,
    /// `cells` is an array of `cols * rows` elements.
    CellShape,
    /// Every cell is empty or uppercase letters.
    CellContent,
    /// `words` is an array of strings.
    WordTypes,
    /// `questions` is an array of strings.
    QuestionTypes,
    /// `words` and `questions` have equal length.
    Parity,
    /// Every word is a horizontal or vertical run.
    Geometry,
}

impl Check {
    /// All stages in execution order.
    pub const ALL: [Self; 9] = [
        Self::Parse,
        Self::DimensionTypes,
        Self::DimensionRange,
        Self::CellShape,
        Self::CellContent,
        Self::WordTypes,
        Self::QuestionTypes,
        Self::Parity,
        Self::Geometry,
    ];

    /// Short machine-friendly name of the stage.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Parse => "parse",
            Self::DimensionTypes => "dimension_types",
            Self::DimensionRange => "dimension_range",
            Self::CellShape => "cell_shape",
            Self::CellContent => "cell_content",
            Self::WordTypes => "word_types",
            Self::QuestionTypes => "question_types",
            Self::Parity => "parity",
            Self::Geometry => "geometry",
        }
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns `true` if `cell` is empty or made only of uppercase letters.
///
/// Every character must be both alphabetic and uppercase, so digits and
/// punctuation are rejected while non-ASCII capitals such as `É` pass.
#[must_use]
pub fn is_cell_text(cell: &str) -> bool {
    cell.chars().all(|c| c.is_alphabetic() && c.is_uppercase())
}

/// Runs every check against `document_text` and returns the typed document.
///
/// # Errors
///
/// Returns the [`ValidationError`] of the first failing [`Check`].
pub fn check_document(document_text: &str) -> ValidationResult<CrosswordDocument> {
    let result = run(document_text);
    match &result {
        Ok(doc) => debug!(
            cols = doc.cols(),
            rows = doc.rows(),
            words = doc.words().len(),
            across = doc.count(Direction::Across),
            down = doc.count(Direction::Down),
            "crossword document is valid"
        ),
        Err(err) => debug!(check = %err.check(), error = %err, "crossword document rejected"),
    }
    result
}

fn run(document_text: &str) -> ValidationResult<CrosswordDocument> {
    let value: Value = serde_json::from_str(document_text)?;
    passed(Check::Parse);

    let (cols, rows) = dimensions(&value)?;
    let cells = cells(value.get("cells"), cols, rows)?;

    let words = string_list(value.get("words")).ok_or(ValidationError::WordsNotStrings)?;
    passed(Check::WordTypes);
    let questions =
        string_list(value.get("questions")).ok_or(ValidationError::QuestionsNotStrings)?;
    passed(Check::QuestionTypes);

    if words.len() != questions.len() {
        return Err(ValidationError::CountMismatch {
            words: words.len(),
            questions: questions.len(),
        });
    }
    passed(Check::Parity);

    let words = words
        .iter()
        .enumerate()
        .map(|(index, text)| word(index, text, cols))
        .collect::<ValidationResult<Vec<_>>>()?;
    passed(Check::Geometry);

    Ok(CrosswordDocument::new(cols, rows, cells, words, questions))
}

fn passed(check: Check) {
    trace!(%check, "check passed");
}

/// A JSON number written without fraction or exponent, of any magnitude.
///
/// Relies on `arbitrary_precision`, which keeps the literal's text.
fn integer(value: Option<&Value>) -> Option<&Number> {
    match value {
        Some(Value::Number(n)) if !n.to_string().contains(['.', 'e', 'E']) => Some(n),
        _ => None,
    }
}

fn in_range(n: &Number) -> Option<usize> {
    n.as_u64()
        .and_then(|v| usize::try_from(v).ok())
        .filter(|v| (MIN_DIMENSION..=MAX_DIMENSION).contains(v))
}

fn dimensions(value: &Value) -> ValidationResult<(usize, usize)> {
    let (Some(cols), Some(rows)) = (integer(value.get("cols")), integer(value.get("rows"))) else {
        return Err(ValidationError::DimensionsNotIntegers);
    };
    passed(Check::DimensionTypes);

    let (Some(c), Some(r)) = (in_range(cols), in_range(rows)) else {
        return Err(ValidationError::DimensionsOutOfRange {
            cols: cols.clone(),
            rows: rows.clone(),
        });
    };
    passed(Check::DimensionRange);
    Ok((c, r))
}

fn cells(value: Option<&Value>, cols: usize, rows: usize) -> ValidationResult<Vec<String>> {
    let expected = cols * rows;
    let items = match value {
        Some(Value::Array(items)) if items.len() == expected => items,
        other => {
            return Err(ValidationError::CellsLengthMismatch {
                expected,
                actual: other.and_then(Value::as_array).map(Vec::len),
            });
        }
    };
    passed(Check::CellShape);

    let cells = items
        .iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::String(text) if is_cell_text(text) => Ok(text.clone()),
            _ => Err(ValidationError::InvalidCell { index }),
        })
        .collect::<ValidationResult<Vec<_>>>()?;
    passed(Check::CellContent);
    Ok(cells)
}

fn string_list(value: Option<&Value>) -> Option<Vec<String>> {
    value?
        .as_array()?
        .iter()
        .map(|item| item.as_str().map(str::to_owned))
        .collect()
}

fn word(index: usize, text: &str, cols: usize) -> ValidationResult<Word> {
    if text.trim().is_empty() {
        return Err(ValidationError::EmptyWord { index });
    }

    let positions = text
        .split(',')
        .map(|token| {
            let token = token.trim();
            token.parse::<i64>().map_err(|err| match err.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                    ValidationError::PositionOutOfRange {
                        index,
                        token: token.to_owned(),
                    }
                }
                _ => ValidationError::InvalidPosition {
                    index,
                    token: token.to_owned(),
                },
            })
        })
        .collect::<ValidationResult<Vec<_>>>()?;

    match Direction::classify(&positions, cols) {
        Some(direction) => Ok(Word::new(positions, direction)),
        None => Err(ValidationError::NotContiguous { index, positions }),
    }
}
