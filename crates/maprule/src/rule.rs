//! Stateful façade over a field tree.
//!
//! [`Rule`] keeps the error of the most recent failed comparison, for callers
//! that prefer a `bool` result and read the message afterwards. The field
//! tree itself stays immutable; only the rule records state, which is why
//! its comparisons take `&mut self`.

use crate::fields::Field;
use crate::foundation::{Compare, ValidationError, ValidationResult, Validated};
use serde_json::Value;

/// A schema root together with the outcome of its last comparison.
///
/// # Examples
///
/// ```rust
/// use maprule::prelude::*;
/// use serde_json::json;
///
/// let mut rule = Rule::new(Field::array(Field::string().min_length(3)).named("tags"));
///
/// assert!(!rule.compare(&json!(["rubbie", "in"])));
/// assert_eq!(
///     rule.last_error_message().as_deref(),
///     Some("tags[1] should have at least 3 characters")
/// );
///
/// assert!(rule.compare(&json!(["rubbie"])));
/// assert!(rule.last_error().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Rule {
    field: Field,
    last_error: Option<ValidationError>,
}

impl Rule {
    /// Wraps the root of a field tree.
    pub fn new(field: impl Into<Field>) -> Self {
        Self {
            field: field.into(),
            last_error: None,
        }
    }

    /// The root field.
    #[must_use]
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Compares `value`, recording the error on failure and clearing it on success.
    pub fn compare(&mut self, value: &Value) -> bool {
        self.compare_optional(Some(value))
    }

    /// Compares a possibly absent value.
    pub fn compare_optional(&mut self, value: Option<&Value>) -> bool {
        let outcome = self.field.validate_optional(value);
        self.record(outcome).is_some()
    }

    /// Compares `value` and, on success, writes decimal coercions back into it.
    ///
    /// On failure `value` is left untouched.
    pub fn compare_and_coerce(&mut self, value: &mut Value) -> bool {
        let outcome = self.field.validate(value);
        match self.record(outcome) {
            Some(validated) => {
                validated.apply(value);
                true
            }
            None => false,
        }
    }

    /// Stateless validation; does not touch [`last_error`](Self::last_error).
    pub fn validate(&self, value: &Value) -> ValidationResult<Validated> {
        self.field.validate(value)
    }

    /// The error of the last comparison, if it failed.
    #[must_use]
    pub fn last_error(&self) -> Option<&ValidationError> {
        self.last_error.as_ref()
    }

    /// The message of the last comparison's error, if it failed.
    #[must_use]
    pub fn last_error_message(&self) -> Option<String> {
        self.last_error.as_ref().map(ValidationError::message)
    }

    fn record(&mut self, outcome: ValidationResult<Validated>) -> Option<Validated> {
        match outcome {
            Ok(validated) => {
                self.last_error = None;
                Some(validated)
            }
            Err(error) => {
                self.last_error = Some(error);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn failure_is_recorded_and_success_clears_it() {
        let mut rule = Rule::new(Field::integer().minimum(0).named("age"));
        assert!(!rule.compare(&json!(-1)));
        assert_eq!(
            rule.last_error_message().as_deref(),
            Some("age should be greater than 0")
        );

        assert!(rule.compare(&json!(1)));
        assert!(rule.last_error().is_none());
    }

    #[test]
    fn absent_root_follows_nullability() {
        let mut strict = Rule::new(Field::string());
        assert!(!strict.compare_optional(None));
        assert_eq!(strict.last_error().map(ValidationError::code), Some("null"));

        let mut lenient = Rule::new(Field::string().nullable());
        assert!(lenient.compare_optional(None));
    }

    #[test]
    fn coercions_are_written_back_on_success() {
        let mut rule = Rule::new(
            Field::dictionary()
                .field("price", Field::decimal())
                .field("qty", Field::integer()),
        );
        let mut order = json!({"price": "3.25", "qty": 2});
        assert!(rule.compare_and_coerce(&mut order));
        assert_eq!(order, json!({"price": 3.25, "qty": 2}));
    }

    #[test]
    fn failed_comparison_leaves_input_alone() {
        let mut rule = Rule::new(
            Field::dictionary()
                .field("price", Field::decimal())
                .field("qty", Field::integer().minimum(1)),
        );
        let mut order = json!({"price": "3.25", "qty": 0});
        assert!(!rule.compare_and_coerce(&mut order));
        assert_eq!(order["price"], json!("3.25"));
        assert_eq!(rule.last_error().map(ValidationError::code), Some("below_minimum"));
    }

    #[test]
    fn validate_does_not_record() {
        let mut rule = Rule::new(Field::boolean());
        assert!(!rule.compare(&json!(1)));
        assert!(rule.validate(&json!(true)).is_ok());
        assert!(rule.last_error().is_some());
    }
}
