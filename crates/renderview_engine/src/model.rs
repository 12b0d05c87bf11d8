//! Model values substituted into templates.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{RenderError, RenderResult};

/// Named-field input for a single render.
///
/// A model is built by the caller, is immutable once constructed, and is
/// discarded after the render; every render is a pure function of the
/// template text and the model. Field values are strings, numbers, booleans,
/// or nested mappings. Nested fields are addressed with dotted paths
/// (`user.name`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Model {
    fields: Map<String, Value>,
}

impl Model {
    /// Create an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field, consuming and returning the model.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Parse a model from a JSON object.
    pub fn from_json_str(input: &str) -> RenderResult<Self> {
        let value: Value = serde_json::from_str(input)?;
        Self::from_value(value)
    }

    /// Parse a model from a YAML mapping.
    pub fn from_yaml_str(input: &str) -> RenderResult<Self> {
        let value: Value = serde_yaml::from_str(input)?;
        Self::from_value(value)
    }

    fn from_value(value: Value) -> RenderResult<Self> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(RenderError::InvalidModel(format!(
                "expected a mapping of named fields, got {}",
                value_kind(&other)
            ))),
        }
    }

    /// Look up a field by dotted path.
    pub fn lookup(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let mut current = self.fields.get(segments.next()?)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }

    /// Whether the model has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// String form of a field value, if it is printable.
///
/// Strings render verbatim, numbers and booleans through their display form.
/// Null, mappings, and arrays are not printable.
pub(crate) fn display_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Object(_) | Value::Array(_) => None,
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a mapping",
    }
}
