//! Single-pass placeholder substitution.

use regex::Regex;
use tracing::debug;

use crate::error::{RenderError, RenderResult};
use crate::model::{display_value, Model};

/// Policy for placeholders whose field is absent from the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingFieldPolicy {
    /// Fail the render with an unknown-field error.
    #[default]
    Strict,
    /// Substitute the empty string.
    Lenient,
}

/// Renders template text against a model.
///
/// Templates are literal text with `{{field}}` placeholders; a field is a
/// dotted path of identifiers resolved against the model. The renderer is
/// stateless: output is byte-for-byte deterministic for a given
/// (template, model) pair, with no locale or environment dependence.
pub struct TemplateRenderer {
    field_pattern: Regex,
    policy: MissingFieldPolicy,
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer {
    /// Create a renderer with the strict missing-field policy.
    pub fn new() -> Self {
        Self::with_policy(MissingFieldPolicy::Strict)
    }

    /// Create a renderer with an explicit missing-field policy.
    pub fn with_policy(policy: MissingFieldPolicy) -> Self {
        Self {
            // Dotted path of identifier segments, e.g. `name` or `user.name`
            field_pattern: Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*(\.[a-zA-Z_][a-zA-Z0-9_]*)*$")
                .unwrap(),
            policy,
        }
    }

    /// Render template text against a model.
    ///
    /// Scans the template once, left to right. Literal text is copied through
    /// unchanged; each `{{field}}` placeholder (inner whitespace tolerated)
    /// is replaced by the field's string form. An unterminated `{{` or a
    /// malformed field name fails with a syntax error carrying the byte
    /// offset of the placeholder.
    pub fn render(&self, template: &str, model: &Model) -> RenderResult<String> {
        let mut output = String::with_capacity(template.len());
        let mut rest = template;
        let mut offset = 0usize;

        while let Some(open) = rest.find("{{") {
            output.push_str(&rest[..open]);

            let after_open = &rest[open + 2..];
            let close = after_open.find("}}").ok_or_else(|| RenderError::Syntax {
                offset: offset + open,
                message: "unterminated placeholder".to_string(),
            })?;

            let field = after_open[..close].trim();
            if !self.field_pattern.is_match(field) {
                return Err(RenderError::Syntax {
                    offset: offset + open,
                    message: format!("invalid field name `{}`", field),
                });
            }

            match model.lookup(field).and_then(display_value) {
                Some(text) => output.push_str(&text),
                None => match self.policy {
                    MissingFieldPolicy::Strict => {
                        return Err(RenderError::UnknownField(field.to_string()));
                    }
                    MissingFieldPolicy::Lenient => {
                        debug!("No printable value for field `{}`, substituting empty", field);
                    }
                },
            }

            let consumed = open + 2 + close + 2;
            offset += consumed;
            rest = &rest[consumed..];
        }

        output.push_str(rest);
        Ok(output)
    }
}
