//! Unified Error Type System
//!
//! Centralized error types for the entire crate.
//!
//! ## Error Classes
//!
//! - **InvalidInput**: input-type violations caught at the analysis boundary (fail fast)
//! - **Config**: configuration failed to load or validate
//! - **UnknownTool**: a tool request named an operation that does not exist
//! - **DocumentNotFound**: the document source has no document with that id
//! - **Source**: opaque failure from the document source, reported verbatim
//!
//! The analysis pipeline itself never fails for well-formed input; degenerate
//! text resolves to zero-valued results instead of errors.

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Structured validation error with context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// What validation failed
    pub kind: ValidationErrorKind,
    /// Field or component that failed validation
    pub field: Option<String>,
    /// Detailed message
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "invalid input for '{}': {}", field, self.message)
        } else {
            write!(f, "invalid input: {}", self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

impl ValidationError {
    /// Create a new validation error
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            field: None,
            message: message.into(),
        }
    }

    /// Add field context
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Wrong JSON type where a specific shape was expected
    pub fn wrong_type(expected: &str, actual: &serde_json::Value) -> Self {
        Self::new(
            ValidationErrorKind::Type,
            format!("expected {}, got {}", expected, json_type_name(actual)),
        )
    }

    /// Create from simple message
    pub fn from_message(message: impl Into<String>) -> Self {
        Self::new(ValidationErrorKind::General, message)
    }
}

/// Validation error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Value has the wrong type
    Type,
    /// Required field missing
    MissingField,
    /// Value out of range
    Range,
    /// General validation error
    General,
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

// =============================================================================
// Application Error
// =============================================================================

#[derive(Debug, Error)]
pub enum DocsightError {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // -------------------------------------------------------------------------
    // Domain Errors
    // -------------------------------------------------------------------------
    #[error("{0}")]
    InvalidInput(ValidationError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Unknown tool: {name} (available: {})", .available.join(", "))]
    UnknownTool {
        name: String,
        available: Vec<&'static str>,
    },

    #[error("Document not found: {0}")]
    DocumentNotFound(String),

    /// Failure raised by the document source, passed through untouched
    #[error("{0}")]
    Source(Box<dyn std::error::Error + Send + Sync>),
}

impl From<ValidationError> for DocsightError {
    fn from(err: ValidationError) -> Self {
        DocsightError::InvalidInput(err)
    }
}

pub type Result<T> = std::result::Result<T, DocsightError>;

// =============================================================================
// Helper Functions
// =============================================================================

impl DocsightError {
    /// Create an invalid-input error from a message
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(ValidationError::from_message(message))
    }

    /// Wrap a document-source failure without interpreting it
    pub fn from_source<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Source(Box::new(err))
    }

    /// Whether the caller supplied malformed input
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::UnknownTool { .. })
    }
}

/// Context extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error, classifying it as a configuration failure
    fn config_context<C: Into<String>>(self, context: C) -> Result<T>;
}

impl<T, E: std::error::Error + Send + Sync + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn config_context<C: Into<String>>(self, context: C) -> Result<T> {
        self.map_err(|e| DocsightError::Config(format!("{}: {}", context.into(), e)))
    }
}

// =============================================================================
// Tests
// =============================================================================
