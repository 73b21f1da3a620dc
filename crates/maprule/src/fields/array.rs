//! Array field: a homogeneous sequence.

use super::predicate::{self, Predicate};
use super::{Field, invalid_type, resolve_null};
use crate::foundation::{Coercion, Compare, FieldPath, ValidationResult, ValueKind};
use serde_json::Value;

/// Validates a JSON array whose every element matches one item field.
///
/// Elements are checked in order and validation stops at the first failing
/// one; its error carries this field's path extended by the element's
/// index, e.g. `tags[1]`.
///
/// # Examples
///
/// ```rust
/// use maprule::prelude::*;
/// use serde_json::json;
///
/// let tags = Field::array(Field::string().min_length(3)).named("tags");
/// assert!(tags.compare(&json!(["rubbie", "kelvin"])));
///
/// let error = tags.validate(&json!(["rubbie", "in"])).unwrap_err();
/// assert_eq!(error.to_string(), "tags[1] should have at least 3 characters");
/// ```
#[derive(Debug, Clone)]
pub struct ArrayField {
    name: Option<String>,
    nullable: bool,
    predicate: Option<Predicate<[Value]>>,
    item: Box<Field>,
}

impl ArrayField {
    /// Creates a non-nullable array of `item`.
    pub fn new(item: impl Into<Field>) -> Self {
        Self {
            name: None,
            nullable: false,
            predicate: None,
            item: Box::new(item.into()),
        }
    }

    /// The field every element is checked against.
    #[must_use]
    pub fn item(&self) -> &Field {
        &self.item
    }
}

super::contract_builders!(ArrayField, [Value]);

impl Compare for ArrayField {
    fn compare_at(
        &self,
        value: Option<&Value>,
        path: &FieldPath,
        coercions: &mut Vec<Coercion>,
    ) -> ValidationResult<()> {
        let Some(value) = resolve_null(value, self.nullable, path)? else {
            return Ok(());
        };
        let Some(items) = value.as_array() else {
            return Err(invalid_type(path, ValueKind::Sequence, value));
        };
        predicate::run(self.predicate.as_ref(), items.as_slice(), path)?;

        tracing::trace!(path = %path, len = items.len(), "comparing sequence");
        for (index, element) in items.iter().enumerate() {
            self.item.compare_at(Some(element), &path.index(index), coercions)?;
        }
        Ok(())
    }

    fn label(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
