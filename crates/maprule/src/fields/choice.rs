//! Choice field: membership in a fixed set of values.

use crate::foundation::{
    Coercion, Compare, ErrorKind, FieldPath, ValidationError, ValidationResult,
};
use serde_json::Value;

/// Accepts one of a fixed set of JSON values.
///
/// Unlike the other leaves there is no type check: any value, `null`
/// included, is looked up in the allowed set. The effective set is the
/// allowed values minus the excluded ones, in declaration order.
///
/// # Examples
///
/// ```rust
/// use maprule::prelude::*;
/// use serde_json::json;
///
/// let color = Field::choice(["red", "green", "blue"]).exclude(["blue"]).named("color");
/// assert!(color.compare(&json!("red")));
///
/// let error = color.validate(&json!("blue")).unwrap_err();
/// assert_eq!(error.to_string(), "blue is invalid, color should be one of red, green");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ChoiceField {
    name: Option<String>,
    nullable: bool,
    allowed: Vec<Value>,
    excluded: Vec<Value>,
}

impl ChoiceField {
    /// Creates a field accepting `allowed`. Duplicates are ignored.
    pub fn new<I, V>(allowed: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self {
            allowed: dedup(allowed),
            ..Self::default()
        }
    }

    /// Removes `values` from the accepted set.
    #[must_use = "builder methods must be chained or built"]
    pub fn exclude<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        for value in values {
            let value = value.into();
            if !self.excluded.contains(&value) {
                self.excluded.push(value);
            }
        }
        self
    }

    /// Sets the label shown for this field when it is the root of a comparison.
    #[must_use = "builder methods must be chained or built"]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Lets `null` and missing keys pass regardless of the allowed set.
    #[must_use = "builder methods must be chained or built"]
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Whether `null` and missing keys pass this field.
    #[must_use]
    pub fn is_nullable(&self) -> bool {
        self.nullable || self.accepts(&Value::Null)
    }

    /// The effective set: allowed values that are not excluded.
    pub fn choices(&self) -> impl Iterator<Item = &Value> {
        self.allowed
            .iter()
            .filter(|value| !self.excluded.contains(value))
    }

    /// Whether `value` belongs to the effective set.
    #[must_use]
    pub fn accepts(&self, value: &Value) -> bool {
        self.choices().any(|choice| choice == value)
    }
}

fn dedup<I, V>(values: I) -> Vec<Value>
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    let mut unique: Vec<Value> = Vec::new();
    for value in values {
        let value = value.into();
        if !unique.contains(&value) {
            unique.push(value);
        }
    }
    unique
}

impl Compare for ChoiceField {
    fn compare_at(
        &self,
        value: Option<&Value>,
        path: &FieldPath,
        _coercions: &mut Vec<Coercion>,
    ) -> ValidationResult<()> {
        let candidate = value.unwrap_or(&Value::Null);
        if (self.nullable && candidate.is_null()) || self.accepts(candidate) {
            return Ok(());
        }
        Err(ValidationError::new(
            path.clone(),
            ErrorKind::Choice {
                value: candidate.clone(),
                allowed: self.choices().cloned().collect(),
            },
        ))
    }

    fn label(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
