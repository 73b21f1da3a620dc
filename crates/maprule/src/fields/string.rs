//! String field with length bounds.

use super::predicate::{self, Predicate};
use super::{invalid_type, resolve_null};
use crate::foundation::{
    Coercion, Compare, ErrorKind, FieldPath, ValidationError, ValidationResult, ValueKind,
};
use serde_json::Value;

/// Maximum length used when none is configured.
pub const DEFAULT_MAX_LENGTH: usize = 100_000_000;

/// Accepts strings whose length lies within `min_length..=max_length`.
///
/// Length is counted in Unicode scalar values, so `"héllo"` has length 5.
#[derive(Debug, Clone)]
pub struct StringField {
    name: Option<String>,
    nullable: bool,
    predicate: Option<Predicate<str>>,
    min_length: usize,
    max_length: usize,
}

impl Default for StringField {
    fn default() -> Self {
        Self {
            name: None,
            nullable: false,
            predicate: None,
            min_length: 0,
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

impl StringField {
    /// Creates a field with no practical length limit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the inclusive minimum length.
    #[must_use = "builder methods must be chained or built"]
    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// Sets the inclusive maximum length.
    #[must_use = "builder methods must be chained or built"]
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Sets both length bounds.
    #[must_use = "builder methods must be chained or built"]
    pub fn length_range(self, min_length: usize, max_length: usize) -> Self {
        self.min_length(min_length).max_length(max_length)
    }

    /// The configured `(min_length, max_length)`.
    #[must_use]
    pub fn length_bounds(&self) -> (usize, usize) {
        (self.min_length, self.max_length)
    }

    fn check_length(&self, text: &str, path: &FieldPath) -> ValidationResult<()> {
        let actual = text.chars().count();
        let mut violation = None;
        if actual < self.min_length {
            violation = Some(ErrorKind::TooShort {
                min_length: self.min_length,
                actual,
            });
        }
        if actual > self.max_length {
            violation = Some(ErrorKind::TooLong {
                max_length: self.max_length,
                actual,
            });
        }
        violation.map_or(Ok(()), |kind| Err(ValidationError::new(path.clone(), kind)))
    }
}

super::contract_builders!(StringField, str);

impl Compare for StringField {
    fn compare_at(
        &self,
        value: Option<&Value>,
        path: &FieldPath,
        _coercions: &mut Vec<Coercion>,
    ) -> ValidationResult<()> {
        let Some(value) = resolve_null(value, self.nullable, path)? else {
            return Ok(());
        };
        let Some(text) = value.as_str() else {
            return Err(invalid_type(path, ValueKind::String, value));
        };
        predicate::run(self.predicate.as_ref(), text, path)?;
        self.check_length(text, path)
    }

    fn label(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn min_length_boundary() {
        let field = StringField::new().min_length(3);
        assert!(!field.compare(&json!("he")));
        assert!(field.compare(&json!("her")));
    }

    #[test]
    fn max_length_boundary() {
        let field = StringField::new().max_length(3);
        assert!(field.compare(&json!("her")));
        assert!(!field.compare(&json!("hers")));
    }

    #[test]
    fn length_counts_chars_not_bytes() {
        let field = StringField::new().max_length(5);
        assert!(field.compare(&json!("héllo")));
    }

    #[test]
    fn numbers_are_not_strings() {
        let error = StringField::new().validate(&json!(9)).unwrap_err();
        assert_eq!(error.code(), "invalid_type");
    }

    #[test]
    fn nullable_accepts_null() {
        assert!(StringField::new().nullable().compare(&Value::Null));
    }

    #[test]
    fn messages_name_the_bound() {
        let error = StringField::new()
            .min_length(3)
            .named("name")
            .validate(&json!("ay"))
            .unwrap_err();
        assert_eq!(error.to_string(), "name should have at least 3 characters");

        let error = StringField::new()
            .max_length(2)
            .named("code")
            .validate(&json!("abc"))
            .unwrap_err();
        assert_eq!(error.to_string(), "code should have at most 2 characters");
    }

    #[test]
    fn inverted_range_reports_maximum() {
        let error = StringField::new()
            .length_range(5, 1)
            .validate(&json!("abc"))
            .unwrap_err();
        assert_eq!(
            error.kind(),
            &ErrorKind::TooLong {
                max_length: 1,
                actual: 3
            }
        );
    }

    #[test]
    fn predicate_sees_str() {
        let field = StringField::new().predicate(|s| s.starts_with('#'));
        assert!(field.compare(&json!("#tag")));
        let error = field.validate(&json!("tag")).unwrap_err();
        assert_eq!(error.to_string(), "value failed custom validation");
    }
}
