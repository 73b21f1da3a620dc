//! Any field: a wildcard, or a closed union of value kinds.

use crate::foundation::{
    Coercion, Compare, ErrorKind, FieldPath, ValidationError, ValidationResult, ValueKind,
};
use serde_json::Value;

/// Accepts every value, or every value of the given kinds.
///
/// With no kinds the field is a true wildcard and accepts `null` and
/// missing keys too. With kinds, `null` passes only if
/// [`ValueKind::Null`] is among them.
#[derive(Debug, Clone, Default)]
pub struct AnyField {
    name: Option<String>,
    kinds: Vec<ValueKind>,
}

impl AnyField {
    /// Creates a wildcard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a field accepting values of any of `kinds`.
    pub fn of(kinds: impl IntoIterator<Item = ValueKind>) -> Self {
        let mut field = Self::default();
        for kind in kinds {
            if !field.kinds.contains(&kind) {
                field.kinds.push(kind);
            }
        }
        field
    }

    /// Sets the label shown for this field when it is the root of a comparison.
    #[must_use = "builder methods must be chained or built"]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The accepted kinds; empty for a wildcard.
    #[must_use]
    pub fn kinds(&self) -> &[ValueKind] {
        &self.kinds
    }

    /// Whether values of `kind` pass this field.
    #[must_use]
    pub fn accepts(&self, kind: ValueKind) -> bool {
        self.kinds.is_empty() || self.kinds.contains(&kind)
    }
}

impl Compare for AnyField {
    fn compare_at(
        &self,
        value: Option<&Value>,
        path: &FieldPath,
        _coercions: &mut Vec<Coercion>,
    ) -> ValidationResult<()> {
        let actual = ValueKind::of_optional(value);
        if self.accepts(actual) {
            Ok(())
        } else {
            Err(ValidationError::new(
                path.clone(),
                ErrorKind::Type {
                    expected: self.kinds.clone(),
                    actual,
                },
            ))
        }
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
    fn wildcard_accepts_everything() {
        let field = AnyField::new();
        for value in [json!(null), json!(1), json!("x"), json!([]), json!({})] {
            assert!(field.compare(&value), "{value}");
        }
        assert!(field.validate_optional(None).is_ok());
    }

    #[test]
    fn union_accepts_listed_kinds() {
        let field = AnyField::of([ValueKind::String, ValueKind::Integer]);
        assert!(field.compare(&json!("x")));
        assert!(field.compare(&json!(7)));
        assert!(!field.compare(&json!(7.5)));
        assert!(!field.compare(&json!(null)));
    }

    #[test]
    fn union_failure_is_type_violation() {
        let error = AnyField::of([ValueKind::Boolean])
            .named("flag")
            .validate(&json!("yes"))
            .unwrap_err();
        assert_eq!(error.to_string(), "flag has invalid type");
        assert_eq!(
            error.kind(),
            &ErrorKind::Type {
                expected: vec![ValueKind::Boolean],
                actual: ValueKind::String
            }
        );
    }

    #[test]
    fn null_kind_admits_absent_values() {
        let field = AnyField::of([ValueKind::Null, ValueKind::Mapping]);
        assert!(field.validate_optional(None).is_ok());
        assert!(field.compare(&json!({})));
    }
}
