//! Decimal field: the one field that coerces its input.

use super::predicate::{self, Predicate};
use super::resolve_null;
use crate::foundation::{
    Coercion, Compare, ErrorKind, FieldPath, ValidationError, ValidationResult,
};
use serde_json::Value;

/// Accepts any value convertible to a finite `f64`.
///
/// JSON numbers convert directly; strings are trimmed and parsed, so
/// `"3.25"` and `" 2 "` pass. Booleans, containers and non-finite results
/// (`"inf"`, `"NaN"`) are rejected.
///
/// On success the converted number is recorded as a [`Coercion`]; the input
/// itself is left untouched. The predicate sees the converted number.
#[derive(Debug, Clone, Default)]
pub struct DecimalField {
    name: Option<String>,
    nullable: bool,
    predicate: Option<Predicate<f64>>,
}

impl DecimalField {
    /// Creates a non-nullable decimal field.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

super::contract_builders!(DecimalField, f64);

/// Converts `value` to a finite number, if it has one.
fn coerce(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}

impl Compare for DecimalField {
    fn compare_at(
        &self,
        value: Option<&Value>,
        path: &FieldPath,
        coercions: &mut Vec<Coercion>,
    ) -> ValidationResult<()> {
        let Some(value) = resolve_null(value, self.nullable, path)? else {
            return Ok(());
        };
        let Some(number) = coerce(value) else {
            return Err(ValidationError::new(path.clone(), ErrorKind::Coercion));
        };
        tracing::trace!(path = %path, value = number, "coerced decimal");
        coercions.push(Coercion::new(path.clone(), number));
        predicate::run(self.predicate.as_ref(), &number, path)
    }

    fn label(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(3.25), 3.25)]
    #[case(json!(2), 2.0)]
    #[case(json!("3.25"), 3.25)]
    #[case(json!(" -0.5 "), -0.5)]
    #[case(json!("1e3"), 1000.0)]
    fn convertible_inputs(#[case] input: Value, #[case] expected: f64) {
        let validated = DecimalField::new().validate(&input).unwrap();
        assert_eq!(validated.coercions().len(), 1);
        assert_eq!(validated.coercions()[0].value(), expected);
    }

    #[rstest]
    #[case(json!("abc"))]
    #[case(json!(""))]
    #[case(json!("inf"))]
    #[case(json!("NaN"))]
    #[case(json!(true))]
    #[case(json!([1.5]))]
    #[case(json!({"v": 1}))]
    fn unconvertible_inputs(#[case] input: Value) {
        let error = DecimalField::new().named("price").validate(&input).unwrap_err();
        assert_eq!(error.kind(), &ErrorKind::Coercion);
        assert_eq!(error.to_string(), "price should be a decimal value");
    }

    #[test]
    fn input_is_not_mutated() {
        let input = json!("3.25");
        let validated = DecimalField::new().validate(&input).unwrap();
        assert_eq!(input, json!("3.25"));
        assert!(!validated.is_unchanged());
    }

    #[test]
    fn null_follows_nullability() {
        assert_eq!(
            DecimalField::new().validate(&Value::Null).unwrap_err().kind(),
            &ErrorKind::Null
        );
        let validated = DecimalField::new().nullable().validate(&Value::Null).unwrap();
        assert!(validated.is_unchanged());
    }

    #[test]
    fn predicate_sees_coerced_number() {
        let positive = DecimalField::new().predicate_with_message(|n| *n > 0.0, "must be positive");
        assert!(positive.compare(&json!("0.01")));

        let error = positive.validate(&json!("-1")).unwrap_err();
        assert_eq!(error.to_string(), "value must be positive");
    }
}
