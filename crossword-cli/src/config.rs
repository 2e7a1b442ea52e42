//! Session settings and logging setup.

use tracing_subscriber::EnvFilter;

/// Values that pre-fill the interactive questions.
///
/// A `None` field is asked for on the input source.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionConfig {
    /// Crossword theme.
    pub theme: Option<String>,
    /// Language the crossword should be written in.
    pub language: Option<String>,
}

/// Log directive used when `RUST_LOG` is unset.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the global subscriber.
///
/// Logs go to stderr so stdout carries only the prompt transcript.
pub fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
