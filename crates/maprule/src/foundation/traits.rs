//! The comparison contract shared by every field.

use crate::foundation::coercion::{Coercion, Validated};
use crate::foundation::error::ValidationError;
use crate::foundation::path::FieldPath;
use serde_json::Value;

/// A node of a schema tree that can check a JSON value against its shape.
///
/// Implementors only provide [`compare_at`](Compare::compare_at); the
/// entry points build the root path and collect coercions.
///
/// Comparison never mutates the field, so one tree can serve any number of
/// callers, including from several threads.
///
/// # Examples
///
/// ```rust
/// use maprule::prelude::*;
/// use serde_json::json;
///
/// let age = Field::integer().minimum(0);
/// assert!(age.compare(&json!(19)));
///
/// let error = age.validate(&json!(-1)).unwrap_err();
/// assert_eq!(error.to_string(), "value should be greater than 0");
/// ```
pub trait Compare {
    /// Checks `value` located at `path`.
    ///
    /// `None` means the value is absent (a missing mapping key) and is
    /// treated exactly like JSON `null`. Successful coercions are pushed
    /// onto `coercions`.
    fn compare_at(
        &self,
        value: Option<&Value>,
        path: &FieldPath,
        coercions: &mut Vec<Coercion>,
    ) -> Result<(), ValidationError>;

    /// Display label used for the root of the path.
    fn label(&self) -> Option<&str> {
        None
    }

    /// Validates a possibly absent value.
    fn validate_optional(&self, value: Option<&Value>) -> Result<Validated, ValidationError> {
        let path = FieldPath::root(self.label());
        let mut coercions = Vec::new();
        match self.compare_at(value, &path, &mut coercions) {
            Ok(()) => Ok(Validated::new(coercions)),
            Err(error) => {
                tracing::debug!(path = %error.path(), code = error.code(), "validation failed");
                Err(error)
            }
        }
    }

    /// Validates `value`, returning the first violation on failure.
    fn validate(&self, value: &Value) -> Result<Validated, ValidationError> {
        self.validate_optional(Some(value))
    }

    /// Returns whether `value` matches this field.
    fn compare(&self, value: &Value) -> bool {
        self.validate(value).is_ok()
    }
}
