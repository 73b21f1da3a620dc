//! Boolean field.

use super::predicate::{self, Predicate};
use super::{invalid_type, resolve_null};
use crate::foundation::{Coercion, Compare, FieldPath, ValidationResult, ValueKind};
use serde_json::Value;

/// Accepts `true` and `false`.
#[derive(Debug, Clone, Default)]
pub struct BooleanField {
    name: Option<String>,
    nullable: bool,
    predicate: Option<Predicate<bool>>,
}

impl BooleanField {
    /// Creates a non-nullable boolean field.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

super::contract_builders!(BooleanField, bool);

impl Compare for BooleanField {
    fn compare_at(
        &self,
        value: Option<&Value>,
        path: &FieldPath,
        _coercions: &mut Vec<Coercion>,
    ) -> ValidationResult<()> {
        let Some(value) = resolve_null(value, self.nullable, path)? else {
            return Ok(());
        };
        let Some(flag) = value.as_bool() else {
            return Err(invalid_type(path, ValueKind::Boolean, value));
        };
        predicate::run(self.predicate.as_ref(), &flag, path)
    }

    fn label(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ErrorKind;
    use serde_json::json;

    #[test]
    fn accepts_both_booleans() {
        assert!(BooleanField::new().compare(&json!(true)));
        assert!(BooleanField::new().compare(&json!(false)));
    }

    #[test]
    fn nullable_accepts_null() {
        assert!(BooleanField::new().nullable().compare(&Value::Null));
        assert!(BooleanField::new().nullable().validate_optional(None).is_ok());
    }

    #[test]
    fn rejects_null_by_default() {
        let error = BooleanField::new().validate(&Value::Null).unwrap_err();
        assert_eq!(error.kind(), &ErrorKind::Null);
        assert_eq!(error.to_string(), "value should not be null");
    }

    #[test]
    fn numbers_are_not_booleans() {
        let error = BooleanField::new().validate(&json!(1)).unwrap_err();
        assert_eq!(error.code(), "invalid_type");
    }

    #[test]
    fn predicate_runs_after_type_check() {
        let must_be_true = BooleanField::new()
            .named("accepted")
            .predicate_with_message(|b| *b, "terms must be accepted");
        assert!(must_be_true.compare(&json!(true)));

        let error = must_be_true.validate(&json!(false)).unwrap_err();
        assert_eq!(error.to_string(), "accepted terms must be accepted");

        let error = must_be_true.validate(&json!("false")).unwrap_err();
        assert_eq!(error.code(), "invalid_type");
    }
}
