//! Error types for template operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for render operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that can occur while locating or rendering a template.
///
/// Every error is terminal for the render it occurs in; there is no retry
/// and no partial output.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Template not found: {0}")]
    NotFound(PathBuf),

    #[error("Template not readable: {0}")]
    AccessDenied(PathBuf),

    #[error("Invalid template reference: {0}")]
    InvalidReference(String),

    #[error("Template syntax error at byte {offset}: {message}")]
    Syntax { offset: usize, message: String },

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Invalid model: {0}")]
    InvalidModel(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
