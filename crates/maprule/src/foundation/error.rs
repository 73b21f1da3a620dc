//! Validation failures.
//!
//! A failed comparison yields exactly one [`ValidationError`]: the first
//! violation found, located by its [`FieldPath`] and classified by its
//! [`ErrorKind`].
//!
//! Messages follow a fixed shape, `<path> <detail>`:
//!
//! ```text
//! age should be greater than 0
//! tags[1] should have at least 3 characters
//! user has an unnecessary key "admin"
//! purple is invalid, color should be one of red, green
//! ```

use crate::foundation::kind::ValueKind;
use crate::foundation::path::FieldPath;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

// ============================================================================
// ERROR KIND
// ============================================================================

/// What went wrong at the failing location.
///
/// The `Display` output is the detail part of the message, without the path.
#[derive(Debug, Clone, PartialEq, Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[non_exhaustive]
pub enum ErrorKind {
    /// A non-nullable field received `null` or a missing key.
    #[error("should not be null")]
    Null,

    /// The value's runtime kind is not one the field accepts.
    #[error("has invalid type")]
    Type {
        expected: Vec<ValueKind>,
        actual: ValueKind,
    },

    /// Integer below its lower bound.
    #[error("should be greater than {minimum}")]
    BelowMinimum { minimum: i64 },

    /// Integer above its upper bound.
    #[error("should be less than {maximum}")]
    AboveMaximum { maximum: i64 },

    /// String shorter than its minimum length.
    #[error("should have at least {min_length} characters")]
    TooShort { min_length: usize, actual: usize },

    /// String longer than its maximum length.
    #[error("should have at most {max_length} characters")]
    TooLong { max_length: usize, actual: usize },

    /// A custom predicate rejected the value.
    #[error("{}", .message.as_deref().unwrap_or("failed custom validation"))]
    Predicate { message: Option<String> },

    /// A mapping carried a key its schema does not declare.
    #[error("has an unnecessary key \"{key}\"")]
    UnknownKey { key: String },

    /// A decimal field could not convert its input to a number.
    #[error("should be a decimal value")]
    Coercion,

    /// A choice field received a value outside its allowed set.
    #[error("should be one of {}", join_values(.allowed))]
    Choice { value: Value, allowed: Vec<Value> },
}

impl ErrorKind {
    /// Stable machine-readable code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Type { .. } => "invalid_type",
            Self::BelowMinimum { .. } => "below_minimum",
            Self::AboveMaximum { .. } => "above_maximum",
            Self::TooShort { .. } => "too_short",
            Self::TooLong { .. } => "too_long",
            Self::Predicate { .. } => "predicate",
            Self::UnknownKey { .. } => "unknown_key",
            Self::Coercion => "not_decimal",
            Self::Choice { .. } => "invalid_choice",
        }
    }
}

/// Renders a value for a message: strings bare, everything else as JSON.
pub(crate) fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn join_values(values: &[Value]) -> String {
    values
        .iter()
        .map(display_value)
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// The first violation found while comparing a value against a field tree.
///
/// # Examples
///
/// ```rust
/// use maprule::foundation::{ErrorKind, FieldPath, ValidationError};
///
/// let kind = ErrorKind::BelowMinimum { minimum: 0 };
/// let error = ValidationError::new(FieldPath::named("age"), kind);
/// assert_eq!(error.to_string(), "age should be greater than 0");
/// assert_eq!(error.code(), "below_minimum");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationError {
    path: FieldPath,
    #[serde(flatten)]
    kind: ErrorKind,
}

impl ValidationError {
    /// Creates an error at `path`.
    #[must_use]
    pub fn new(path: FieldPath, kind: ErrorKind) -> Self {
        Self { path, kind }
    }

    /// Where the violation happened.
    #[must_use]
    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    /// What the violation was.
    #[must_use]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Stable machine-readable code, see [`ErrorKind::code`].
    #[must_use]
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// The human-readable message, same as `to_string()`.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Structured form for reporting.
    #[must_use]
    pub fn to_json_value(&self) -> Value {
        serde_json::json!({
            "code": self.code(),
            "path": self.path.to_string(),
            "message": self.message(),
            "details": serde_json::to_value(&self.kind).unwrap_or_default(),
        })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.path.label();
        match &self.kind {
            ErrorKind::Choice { value, .. } => {
                write!(f, "{} is invalid, {label} {}", display_value(value), self.kind)
            }
            kind => write!(f, "{label} {kind}"),
        }
    }
}

impl std::error::Error for ValidationError {}
