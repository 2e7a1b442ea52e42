//! Typed crossword document produced by a successful validation.

use serde::Serialize;

/// Orientation of a word on the grid.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Positions increase by one: a horizontal run.
    Across,
    /// Positions increase by the column count: a vertical run.
    Down,
}

impl Direction {
    /// Classifies a run of flattened cell positions on a grid `cols` wide.
    ///
    /// A run with fewer than two positions has no steps to check and counts as
    /// [`Direction::Across`]. Returns `None` when the steps are neither all `1`
    /// nor all `cols`.
    #[must_use]
    pub fn classify(positions: &[i64], cols: usize) -> Option<Self> {
        let steps_by = |step: i64| {
            positions
                .windows(2)
                .all(|pair| pair[1].checked_sub(pair[0]) == Some(step))
        };

        if steps_by(1) {
            Some(Self::Across)
        } else if i64::try_from(cols).is_ok_and(steps_by) {
            Some(Self::Down)
        } else {
            None
        }
    }
}

/// A word slot: the cells it occupies and its orientation.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Word {
    positions: Vec<i64>,
    direction: Direction,
}

impl Word {
    pub(crate) fn new(positions: Vec<i64>, direction: Direction) -> Self {
        Self {
            positions,
            direction,
        }
    }

    /// Flattened, row-major cell positions in reading order.
    #[must_use]
    pub fn positions(&self) -> &[i64] {
        &self.positions
    }

    /// Orientation of the word.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Number of cells the word spans.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Always `false`: validated words have at least one position.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// A crossword that passed every structural check.
///
/// The only way to obtain one is [`crate::check_document`]. It implements
/// `Serialize` but not `Deserialize`:
///
/// ```compile_fail
/// use crossword_validator::CrosswordDocument;
///
/// let _: CrosswordDocument = serde_json::from_str(r#"{"cols":3}"#).unwrap();
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct CrosswordDocument {
    cols: usize,
    rows: usize,
    cells: Vec<String>,
    words: Vec<Word>,
    questions: Vec<String>,
}

impl CrosswordDocument {
    pub(crate) fn new(
        cols: usize,
        rows: usize,
        cells: Vec<String>,
        words: Vec<Word>,
        questions: Vec<String>,
    ) -> Self {
        Self {
            cols,
            rows,
            cells,
            words,
            questions,
        }
    }

    /// Grid width.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Grid height.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// All cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    /// Cell content at `(row, col)`, or `None` outside the grid.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells.get(row * self.cols + col).map(String::as_str)
    }

    /// Word slots in document order.
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Clues in document order.
    #[must_use]
    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    /// Pairs each word with its clue.
    pub fn entries(&self) -> impl Iterator<Item = (&Word, &str)> {
        self.words
            .iter()
            .zip(self.questions.iter().map(String::as_str))
    }

    /// Number of words running in `direction`.
    #[must_use]
    pub fn count(&self, direction: Direction) -> usize {
        self.words
            .iter()
            .filter(|word| word.direction == direction)
            .count()
    }

    /// Concatenates the cells a word covers.
    ///
    /// Returns `None` if any position falls outside the grid; positions are
    /// not bounds-checked during validation.
    #[must_use]
    pub fn answer(&self, word: &Word) -> Option<String> {
        word.positions
            .iter()
            .map(|&pos| {
                usize::try_from(pos)
                    .ok()
                    .and_then(|idx| self.cells.get(idx))
                    .map(String::as_str)
            })
            .collect()
    }
}
