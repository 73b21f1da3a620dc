//! Integer field with inclusive bounds.

use super::predicate::{self, Predicate};
use super::{invalid_type, resolve_null};
use crate::foundation::{
    Coercion, Compare, ErrorKind, FieldPath, ValidationError, ValidationResult, ValueKind,
};
use serde_json::Value;

/// Lower bound used when none is configured.
pub const DEFAULT_INTEGER_MINIMUM: i64 = -100_000_000;

/// Upper bound used when none is configured.
pub const DEFAULT_INTEGER_MAXIMUM: i64 = 100_000_000;

/// Accepts JSON integers within `minimum..=maximum`.
///
/// Floats such as `1.0` are a type violation. Both bounds are always
/// checked; when both fail (only possible with `minimum > maximum`) the
/// upper-bound violation is the one reported.
#[derive(Debug, Clone)]
pub struct IntegerField {
    name: Option<String>,
    nullable: bool,
    predicate: Option<Predicate<i64>>,
    minimum: i64,
    maximum: i64,
}

impl Default for IntegerField {
    fn default() -> Self {
        Self {
            name: None,
            nullable: false,
            predicate: None,
            minimum: DEFAULT_INTEGER_MINIMUM,
            maximum: DEFAULT_INTEGER_MAXIMUM,
        }
    }
}

impl IntegerField {
    /// Creates a field bounded by the default range.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the inclusive lower bound.
    #[must_use = "builder methods must be chained or built"]
    pub fn minimum(mut self, minimum: i64) -> Self {
        self.minimum = minimum;
        self
    }

    /// Sets the inclusive upper bound.
    #[must_use = "builder methods must be chained or built"]
    pub fn maximum(mut self, maximum: i64) -> Self {
        self.maximum = maximum;
        self
    }

    /// Sets both bounds.
    #[must_use = "builder methods must be chained or built"]
    pub fn range(self, minimum: i64, maximum: i64) -> Self {
        self.minimum(minimum).maximum(maximum)
    }

    /// The configured `(minimum, maximum)`.
    #[must_use]
    pub fn bounds(&self) -> (i64, i64) {
        (self.minimum, self.maximum)
    }

    fn check_bounds(&self, number: i64, path: &FieldPath) -> ValidationResult<()> {
        let mut violation = None;
        if number < self.minimum {
            violation = Some(ErrorKind::BelowMinimum {
                minimum: self.minimum,
            });
        }
        if number > self.maximum {
            violation = Some(ErrorKind::AboveMaximum {
                maximum: self.maximum,
            });
        }
        violation.map_or(Ok(()), |kind| Err(ValidationError::new(path.clone(), kind)))
    }
}

super::contract_builders!(IntegerField, i64);

impl Compare for IntegerField {
    fn compare_at(
        &self,
        value: Option<&Value>,
        path: &FieldPath,
        _coercions: &mut Vec<Coercion>,
    ) -> ValidationResult<()> {
        let Some(value) = resolve_null(value, self.nullable, path)? else {
            return Ok(());
        };
        let number = match value {
            Value::Number(number) if number.is_i64() || number.is_u64() => number,
            other => return Err(invalid_type(path, ValueKind::Integer, other)),
        };
        // Integers past i64::MAX exceed any configurable upper bound.
        let Some(number) = number.as_i64() else {
            return Err(ValidationError::new(
                path.clone(),
                ErrorKind::AboveMaximum {
                    maximum: self.maximum,
                },
            ));
        };
        predicate::run(self.predicate.as_ref(), &number, path)?;
        self.check_bounds(number, path)
    }

    fn label(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
