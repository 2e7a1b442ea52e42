//! One prompt-then-validate round trip with the user.

use std::io::Write;

use anyhow::{Context, Result};
use crossword_kit::prompts::build_prompt;
use crossword_kit::validator::{CrosswordDocument, ValidationError, check_document};
use tracing::{debug, info};

use crate::config::SessionConfig;
use crate::input::{LineSource, read_json_blob};

const THEME_QUESTION: &str = "Enter the theme of the crossword puzzle: ";
const LANGUAGE_QUESTION: &str = "Enter the language of the crossword puzzle: ";
const JSON_QUESTION: &str = "\nPaste the generated crossword JSON here:\n";

/// Result of a completed session.
#[derive(Debug)]
pub enum Outcome {
    /// The pasted JSON passed every check.
    Valid(CrosswordDocument),
    /// The pasted JSON broke a rule.
    Invalid(ValidationError),
}

impl Outcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }
}

/// Drives the console conversation: ask, print the prompt, validate the reply.
pub struct Session {
    config: SessionConfig,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self { config }
    }

    /// Runs the session once. There is no retry on invalid JSON.
    ///
    /// Fails only on I/O errors or when input ends before the theme or
    /// language is entered; a rejected document is a normal [`Outcome`].
    pub fn run<S, W>(&self, input: &mut S, output: &mut W) -> Result<Outcome>
    where
        S: LineSource + ?Sized,
        W: Write + ?Sized,
    {
        let theme = ask(input, output, THEME_QUESTION, self.config.theme.as_deref())?
            .context("input ended before a theme was entered")?;
        let language = ask(input, output, LANGUAGE_QUESTION, self.config.language.as_deref())?
            .context("input ended before a language was entered")?;
        info!(%theme, %language, "building crossword prompt");

        let prompt = build_prompt(&theme, &language);
        writeln!(output, "\nGenerated Prompt:\n")?;
        writeln!(output, "{prompt}")?;

        write!(output, "{JSON_QUESTION}")?;
        output.flush()?;
        let blob = read_json_blob(input).context("failed to read crossword JSON")?;

        let outcome = match check_document(&blob) {
            Ok(document) => {
                writeln!(output, "\nThe generated crossword JSON is valid.")?;
                for (word, clue) in document.entries() {
                    debug!(
                        direction = ?word.direction(),
                        answer = %document.answer(word).unwrap_or_default(),
                        clue,
                        "entry"
                    );
                }
                Outcome::Valid(document)
            }
            Err(err) => {
                writeln!(output, "\nValidation Error: {err}")?;
                Outcome::Invalid(err)
            }
        };
        output.flush()?;
        Ok(outcome)
    }
}

fn ask<S, W>(
    input: &mut S,
    output: &mut W,
    question: &str,
    preset: Option<&str>,
) -> Result<Option<String>>
where
    S: LineSource + ?Sized,
    W: Write + ?Sized,
{
    if let Some(value) = preset {
        return Ok(Some(value.to_owned()));
    }
    write!(output, "{question}")?;
    output.flush()?;
    Ok(input.read_line()?)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use crossword_kit::validator::Check;

    use super::*;
    use crate::input::ReaderSource;

    fn crossword_json(cols: u32, words: &str) -> String {
        let mut cells = vec!["\"\""; 100];
        cells[0] = "\"C\"";
        cells[1] = "\"A\"";
        cells[2] = "\"T\"";
        format!(
            "{{\"cols\":{cols},\"rows\":10,\"cells\":[{}],\"words\":[{words}],\"questions\":[\"Pet\"]}}",
            cells.join(",")
        )
    }

    fn run_session(config: SessionConfig, stdin: &str) -> (Result<Outcome>, String) {
        let mut input = ReaderSource::new(Cursor::new(stdin.as_bytes().to_vec()));
        let mut output = Vec::new();
        let outcome = Session::new(config).run(&mut input, &mut output);
        (outcome, String::from_utf8(output).unwrap())
    }

    #[test]
    fn valid_crossword_transcript() {
        let stdin = format!("Pets\nEnglish\n{}\n", crossword_json(10, "\"0,1,2\""));
        let (outcome, stdout) = run_session(SessionConfig::default(), &stdin);

        let Outcome::Valid(document) = outcome.unwrap() else {
            panic!("expected a valid crossword");
        };
        assert_eq!(document.answer(&document.words()[0]).as_deref(), Some("CAT"));

        let expected_head = format!(
            "{THEME_QUESTION}{LANGUAGE_QUESTION}\nGenerated Prompt:\n\n{}\n{JSON_QUESTION}",
            build_prompt("Pets", "English")
        );
        assert!(stdout.starts_with(&expected_head), "{stdout}");
        assert!(stdout.ends_with("\nThe generated crossword JSON is valid.\n"));
    }

    #[test]
    fn invalid_crossword_prints_error_label() {
        let stdin = format!("Pets\nEnglish\n{}\n", crossword_json(9, "\"0,1,2\""));
        let (outcome, stdout) = run_session(SessionConfig::default(), &stdin);

        let Outcome::Invalid(err) = outcome.unwrap() else {
            panic!("expected a rejected crossword");
        };
        assert_eq!(err.check(), Check::DimensionRange);
        assert!(
            stdout.ends_with("\nValidation Error: Cols and rows must be between 10 and 15.\n")
        );
    }

    #[test]
    fn malformed_json_is_reported_not_raised() {
        let (outcome, stdout) =
            run_session(SessionConfig::default(), "Pets\nEnglish\n{not json\n");
        assert!(!outcome.unwrap().is_valid());
        assert!(stdout.contains("\nValidation Error: Invalid JSON: "));
    }

    #[test]
    fn presets_skip_questions() {
        let config = SessionConfig {
            theme: Some("Rivers".into()),
            language: Some("French".into()),
        };
        let stdin = format!("{}\n", crossword_json(10, "\"0,10,20\""));
        let (outcome, stdout) = run_session(config, &stdin);

        assert!(outcome.unwrap().is_valid());
        assert!(!stdout.contains(THEME_QUESTION));
        assert!(!stdout.contains(LANGUAGE_QUESTION));
        assert!(stdout.contains("The theme is 'Rivers' and the language is 'French'."));
    }

    #[test]
    fn missing_language_is_an_error() {
        let (outcome, stdout) = run_session(SessionConfig::default(), "Pets\n");
        let err = outcome.unwrap_err();
        assert!(err.to_string().contains("language"), "{err}");
        assert!(!stdout.contains("Generated Prompt"));
    }

    #[test]
    fn empty_paste_is_invalid_json() {
        let (outcome, stdout) = run_session(SessionConfig::default(), "Pets\nEnglish\n");
        let Outcome::Invalid(err) = outcome.unwrap() else {
            panic!("expected a rejected crossword");
        };
        assert_eq!(err.check(), Check::Parse);
        assert!(stdout.contains("Validation Error: Invalid JSON: "));
    }
}
