//! The crossword request prompt.

use std::collections::HashMap;

use crate::template::PromptTemplate;

const CROSSWORD_TEMPLATE: &str = r#"
You are an AI crossword generator. Your task is to create a thematic crossword puzzle in JSON format. The theme is '{{theme}}' and the language is '{{language}}'.

Please adhere strictly to the following JSON structure:

{
  "cols": 13,
  "rows": 13,
  "cells": [
    "R","E","Y","","H","I","J","O","N","","","","",
    "","","","A","B","C","","D","E","F","","","","",
    ...
  ],
  "words": [
    "0,1,2",
    "4,5,6,7",
    ...
  ],
  "questions": [
    "I have set my ___ upon Zion",
    "My ___ you are",
    ...
  ]
}

Guidelines:
- 'cols' and 'rows' must be integers between 10 and 15.
- 'cells' must be a list of length 'cols' × 'rows', containing uppercase letters or empty strings ("").
- Each entry in 'words' must be a string of comma-separated integers representing consecutive positions in 'cells' (either horizontal or vertical).
- 'questions' must be a list of clues corresponding to each word in 'words'.
- The lengths of 'words' and 'questions' must be equal.

Ensure that the JSON is syntactically valid and all fields meet the specified criteria.
"#;

/// Returns the crossword request template with `theme` and `language` slots.
#[must_use]
pub fn crossword_template() -> PromptTemplate {
    PromptTemplate::builder(CROSSWORD_TEMPLATE)
        .with_required_variable("theme")
        .with_required_variable("language")
        .build()
        .unwrap_or_else(|err| {
            tracing::warn!(error = %err, "crossword template failed to build; rendering unchecked");
            PromptTemplate::new(CROSSWORD_TEMPLATE)
        })
}

/// Builds the prompt asking for a themed crossword in the expected JSON shape.
///
/// Both values are inserted verbatim; the result is trimmed of surrounding
/// whitespace.
#[must_use]
pub fn build_prompt(theme: &str, language: &str) -> String {
    let mut vars = HashMap::with_capacity(2);
    vars.insert("theme".to_owned(), theme.to_owned());
    vars.insert("language".to_owned(), language.to_owned());

    let prompt = crossword_template().render_partial(&vars);
    tracing::debug!(theme, language, len = prompt.len(), "built crossword prompt");
    prompt.trim().to_owned()
}
