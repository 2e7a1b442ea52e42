//! Code-based prompt template system with single-pass variable substitution.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Result alias for template operations.
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Errors that can occur during template operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TemplateError {
    /// A required variable was not provided.
    #[error("missing required variable: {name}")]
    MissingVariable {
        /// Name of the missing variable.
        name: String,
    },

    /// The template text contains a placeholder that cannot be parsed.
    #[error("malformed template at byte {offset}: {reason}")]
    Malformed {
        /// Byte offset of the offending `{{`.
        offset: usize,
        /// Reason for the failure.
        reason: &'static str,
    },
}

/// A code-based prompt template with variable substitution.
///
/// Templates use `{{variable}}` placeholders. Single braces are left alone, so
/// JSON snippets can be embedded in the template text without escaping.
/// Substituted values are inserted verbatim and never re-scanned for
/// placeholders.
///
/// # Examples
///
/// ```
/// use crossword_prompts::template::PromptTemplate;
///
/// let template = PromptTemplate::builder("Theme: {{theme}} ({{language}})")
///     .with_variable("language", "English")
///     .with_required_variable("theme")
///     .build()
///     .unwrap();
///
/// let mut vars = std::collections::HashMap::new();
/// vars.insert("theme".to_owned(), "Space".to_owned());
/// assert_eq!(template.render_with(&vars).unwrap(), "Theme: Space (English)");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PromptTemplate {
    template: String,
    variables: HashMap<String, String>,
    required_variables: Vec<String>,
}

impl PromptTemplate {
    /// Creates a new template with the supplied text.
    ///
    /// No syntax check is performed; an unterminated `{{` renders literally.
    /// Use [`PromptTemplate::builder`] to reject malformed text up front.
    #[must_use]
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            variables: HashMap::new(),
            required_variables: Vec::new(),
        }
    }

    /// Returns a builder for constructing templates.
    #[must_use]
    pub fn builder(template: impl Into<String>) -> TemplateBuilder {
        TemplateBuilder::new(template)
    }

    /// Sets a variable value.
    pub fn set_variable(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(name.into(), value.into());
    }

    /// Returns the placeholder names referenced by the template, in order of
    /// first appearance.
    #[must_use]
    pub fn variable_names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        for segment in scan_lenient(&self.template) {
            if let Segment::Variable(name) = segment {
                if !names.contains(&name) {
                    names.push(name);
                }
            }
        }
        names
    }

    /// Renders the template with the current variables.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::MissingVariable`] if a required variable is not set.
    pub fn render(&self) -> TemplateResult<String> {
        self.render_with(&HashMap::new())
    }

    /// Renders the template with additional runtime variables.
    ///
    /// Runtime variables override template variables.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::MissingVariable`] if a required variable is not set.
    pub fn render_with(&self, runtime_vars: &HashMap<String, String>) -> TemplateResult<String> {
        for name in self.variable_names() {
            let provided = runtime_vars.contains_key(name) || self.variables.contains_key(name);
            if !provided && self.required_variables.iter().any(|r| r == name) {
                return Err(TemplateError::MissingVariable {
                    name: name.to_owned(),
                });
            }
        }

        Ok(self.render_partial(runtime_vars))
    }

    /// Renders the template without enforcing required variables.
    ///
    /// Placeholders with no value render as the empty string.
    #[must_use]
    pub fn render_partial(&self, runtime_vars: &HashMap<String, String>) -> String {
        let mut rendered = String::with_capacity(self.template.len());
        let mut substituted = 0_usize;

        for segment in scan_lenient(&self.template) {
            match segment {
                Segment::Literal(text) => rendered.push_str(text),
                Segment::Variable(name) => {
                    let value = runtime_vars
                        .get(name)
                        .or_else(|| self.variables.get(name))
                        .map_or("", String::as_str);
                    rendered.push_str(value);
                    substituted += 1;
                }
            }
        }

        tracing::trace!(substituted, len = rendered.len(), "rendered prompt template");
        rendered
    }
}

/// Builder for constructing prompt templates.
pub struct TemplateBuilder {
    template: String,
    variables: HashMap<String, String>,
    required_variables: Vec<String>,
}

impl TemplateBuilder {
    /// Creates a new builder with the supplied template text.
    #[must_use]
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            variables: HashMap::new(),
            required_variables: Vec::new(),
        }
    }

    /// Sets a variable with a default value.
    #[must_use]
    pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }

    /// Declares a required variable (must be provided at render time).
    #[must_use]
    pub fn with_required_variable(mut self, name: impl Into<String>) -> Self {
        self.required_variables.push(name.into());
        self
    }

    /// Builds the template.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::Malformed`] if a `{{` is never closed or a
    /// placeholder has an empty name.
    pub fn build(self) -> TemplateResult<PromptTemplate> {
        scan(&self.template)?;
        Ok(PromptTemplate {
            template: self.template,
            variables: self.variables,
            required_variables: self.required_variables,
        })
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Segment<'a> {
    Literal(&'a str),
    Variable(&'a str),
}

/// Splits template text into literal runs and placeholder names.
fn scan(template: &str) -> TemplateResult<Vec<Segment<'_>>> {
    let mut segments = Vec::new();
    let mut rest = template;
    let mut offset = 0;

    while let Some(open) = rest.find("{{") {
        if open > 0 {
            segments.push(Segment::Literal(&rest[..open]));
        }
        let inner = &rest[open + 2..];
        let Some(close) = inner.find("}}") else {
            return Err(TemplateError::Malformed {
                offset: offset + open,
                reason: "unterminated placeholder",
            });
        };
        let name = inner[..close].trim();
        if name.is_empty() {
            return Err(TemplateError::Malformed {
                offset: offset + open,
                reason: "empty placeholder name",
            });
        }
        segments.push(Segment::Variable(name));

        let consumed = open + 2 + close + 2;
        offset += consumed;
        rest = &rest[consumed..];
    }

    if !rest.is_empty() {
        segments.push(Segment::Literal(rest));
    }
    Ok(segments)
}

/// Like [`scan`], but keeps unparsable placeholders as literal text.
fn scan_lenient(template: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut rest = template;

    loop {
        match scan(rest) {
            Ok(mut tail) => {
                segments.append(&mut tail);
                return segments;
            }
            Err(TemplateError::Malformed { offset, .. }) => {
                // Everything before the bad `{{` is well formed.
                if let Ok(mut head) = scan(&rest[..offset]) {
                    segments.append(&mut head);
                }
                let bad = &rest[offset..];
                match bad.get(2..).and_then(|inner| inner.find("}}")) {
                    Some(close) => {
                        let end = offset + 2 + close + 2;
                        segments.push(Segment::Literal(&rest[offset..end]));
                        rest = &rest[end..];
                    }
                    None => {
                        segments.push(Segment::Literal(bad));
                        return segments;
                    }
                }
            }
            Err(TemplateError::MissingVariable { .. }) => return segments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_simple_template() {
        let template = PromptTemplate::builder("Hello {{name}}!")
            .with_variable("name", "World")
            .build()
            .unwrap();

        assert_eq!(template.render().unwrap(), "Hello World!");
    }

    #[test]
    fn runtime_variables_override_defaults() {
        let template = PromptTemplate::builder("Theme: {{theme}}")
            .with_variable("theme", "Animals")
            .build()
            .unwrap();

        let mut runtime = HashMap::new();
        runtime.insert("theme".to_owned(), "Rivers".to_owned());

        assert_eq!(template.render_with(&runtime).unwrap(), "Theme: Rivers");
    }

    #[test]
    fn required_variables_error_when_missing() {
        let template = PromptTemplate::builder("Theme: {{theme}}")
            .with_required_variable("theme")
            .build()
            .unwrap();

        let err = template.render().expect_err("should error");
        assert_eq!(
            err,
            TemplateError::MissingVariable {
                name: "theme".into()
            }
        );
    }

    #[test]
    fn partial_render_blanks_missing_required_variables() {
        let template = PromptTemplate::builder("[{{theme}}]")
            .with_required_variable("theme")
            .build()
            .unwrap();

        assert_eq!(template.render_partial(&HashMap::new()), "[]");
    }

    #[test]
    fn substituted_values_are_not_rescanned() {
        let template = PromptTemplate::new("{{theme}} / {{language}}");
        let mut vars = HashMap::new();
        vars.insert("theme".to_owned(), "{{language}}".to_owned());
        vars.insert("language".to_owned(), "Dutch".to_owned());

        assert_eq!(template.render_with(&vars).unwrap(), "{{language}} / Dutch");
    }

    #[test]
    fn single_braces_are_literal() {
        let template = PromptTemplate::builder("{\n  \"cols\": {{cols}}\n}")
            .build()
            .unwrap();
        let mut vars = HashMap::new();
        vars.insert("cols".to_owned(), "13".to_owned());

        assert_eq!(template.render_with(&vars).unwrap(), "{\n  \"cols\": 13\n}");
    }

    #[test]
    fn lists_variable_names_in_order() {
        let template = PromptTemplate::new("{{ b }} {{a}} {{b}} {x}");
        assert_eq!(template.variable_names(), vec!["b", "a"]);
    }

    #[test]
    fn builder_rejects_unterminated_placeholder() {
        let err = PromptTemplate::builder("ok {{oops").build().unwrap_err();
        assert_eq!(
            err,
            TemplateError::Malformed {
                offset: 3,
                reason: "unterminated placeholder"
            }
        );
    }

    #[test]
    fn builder_rejects_empty_placeholder() {
        let err = PromptTemplate::builder("{{  }}").build().unwrap_err();
        assert!(matches!(err, TemplateError::Malformed { offset: 0, .. }));
    }

    #[test]
    fn unchecked_template_renders_bad_placeholders_literally() {
        let mut template = PromptTemplate::new("{{}} {{name}} {{tail");
        template.set_variable("name", "Ada");

        assert_eq!(template.render().unwrap(), "{{}} Ada {{tail");
    }
}
