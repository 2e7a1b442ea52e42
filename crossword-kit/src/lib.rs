//! Crossword prompt building and JSON validation toolkit.
//!
//! Bundles the component crates behind feature flags so downstream users can
//! pull in only the prompt builder or only the validator.

#![warn(missing_docs, clippy::pedantic)]

/// Prompt templates and the crossword request prompt (enabled by `prompts` feature).
#[cfg(feature = "prompts")]
pub use crossword_prompts as prompts;

/// Crossword JSON validation (enabled by `validator` feature).
#[cfg(feature = "validator")]
pub use crossword_validator as validator;
