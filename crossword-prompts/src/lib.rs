//! Prompt construction for crossword generation requests.
//!
//! The prompts produced here are meant to be handed to an external text
//! generator by a human; nothing in this crate talks to a model.

#![warn(missing_docs, clippy::pedantic)]

pub mod crossword;
pub mod template;

pub use crossword::{build_prompt, crossword_template};
pub use template::{PromptTemplate, TemplateBuilder, TemplateError, TemplateResult};
