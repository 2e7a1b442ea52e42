//! Line-based input sources.

use std::io::{self, BufRead};

use serde::de::IgnoredAny;

/// Something that hands out one line of user input at a time.
pub trait LineSource {
    /// Returns the next line without its line terminator, or `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// [`LineSource`] over any buffered reader, such as locked stdin.
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let end = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(end);
        Ok(Some(line))
    }
}

/// Reads a pasted JSON document that may span several lines.
///
/// Leading blank lines are skipped. Reading stops once the text collected so
/// far is a complete JSON value or is broken beyond repair, at a blank line,
/// or at end of input. Only a parse that ran out of input keeps reading.
pub fn read_json_blob<S: LineSource + ?Sized>(source: &mut S) -> io::Result<String> {
    let mut blob = String::new();

    while let Some(line) = source.read_line()? {
        if line.trim().is_empty() {
            if blob.is_empty() {
                continue;
            }
            break;
        }

        if !blob.is_empty() {
            blob.push('\n');
        }
        blob.push_str(&line);

        match serde_json::from_str::<IgnoredAny>(&blob) {
            Err(err) if err.is_eof() => {}
            _ => break,
        }
    }

    tracing::debug!(len = blob.len(), "read crossword JSON");
    Ok(blob)
}
