//! Command-line arguments and dispatch.

use std::io;

use anyhow::Result;
use clap::{ArgAction, Parser};

use crate::config::SessionConfig;
use crate::input::ReaderSource;
use crate::session::Session;

/// Builds a crossword request prompt and validates the JSON answer.
#[derive(Parser, Debug)]
#[command(name = "crossword", version, about)]
pub struct Cli {
    /// Crossword theme; asked for interactively when omitted.
    #[arg(long)]
    pub theme: Option<String>,

    /// Crossword language; asked for interactively when omitted.
    #[arg(long)]
    pub language: Option<String>,

    /// Log more to stderr (-v info, -vv debug, -vvv trace). `RUST_LOG` wins.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Runs one prompt/validate session on stdin and stdout.
    pub fn run(self) -> Result<()> {
        let session = Session::new(self.into());

        let mut input = ReaderSource::new(io::stdin().lock());
        let mut output = io::stdout().lock();
        let outcome = session.run(&mut input, &mut output)?;

        tracing::info!(valid = outcome.is_valid(), "session finished");
        Ok(())
    }
}

// The session layer never sees clap types.
impl From<Cli> for SessionConfig {
    fn from(cli: Cli) -> Self {
        Self {
            theme: cli.theme,
            language: cli.language,
        }
    }
}
