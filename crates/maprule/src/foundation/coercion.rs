//! Coerced values produced by successful validation.
//!
//! Validation never touches the input. A decimal field that accepts `"3.25"`
//! records a [`Coercion`] instead, and the caller chooses whether to write it
//! back with [`Validated::apply`].

use crate::foundation::path::{FieldPath, PathSegment};
use serde::Serialize;
use serde_json::{Number, Value};

/// A numeric value a decimal field derived from its input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Coercion {
    path: FieldPath,
    value: f64,
}

impl Coercion {
    pub(crate) fn new(path: FieldPath, value: f64) -> Self {
        Self { path, value }
    }

    /// Location of the coerced value.
    #[must_use]
    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    /// The coerced number.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Writes the coerced number into `target` at this coercion's path.
    ///
    /// Returns `false` when the path no longer resolves in `target` or the
    /// number is not representable in JSON.
    pub fn apply_to(&self, target: &mut Value) -> bool {
        let Some(number) = Number::from_f64(self.value) else {
            return false;
        };
        let Some(slot) = resolve_mut(target, self.path.segments()) else {
            return false;
        };
        *slot = Value::Number(number);
        true
    }
}

fn resolve_mut<'v>(target: &'v mut Value, segments: &[PathSegment]) -> Option<&'v mut Value> {
    segments
        .iter()
        .try_fold(target, |current, segment| match segment {
            PathSegment::Key(key) => current.as_object_mut()?.get_mut(key),
            PathSegment::Index(index) => current.as_array_mut()?.get_mut(*index),
        })
}

/// Successful validation outcome.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Validated {
    coercions: Vec<Coercion>,
}

impl Validated {
    pub(crate) fn new(coercions: Vec<Coercion>) -> Self {
        Self { coercions }
    }

    /// Coercions in the order their fields were visited.
    #[must_use]
    pub fn coercions(&self) -> &[Coercion] {
        &self.coercions
    }

    /// True when no field coerced its input.
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.coercions.is_empty()
    }

    /// Writes every coercion into `target`, returning how many were applied.
    pub fn apply(&self, target: &mut Value) -> usize {
        let applied = self
            .coercions
            .iter()
            .filter(|coercion| coercion.apply_to(target))
            .count();
        tracing::trace!(applied, total = self.coercions.len(), "applied coercions");
        applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn writes_under_mapping_key() {
        let mut doc = json!({"price": "3.25"});
        let coercion = Coercion::new(FieldPath::new().key("price"), 3.25);
        assert!(coercion.apply_to(&mut doc));
        assert_eq!(doc, json!({"price": 3.25}));
    }

    #[test]
    fn writes_at_sequence_index() {
        let mut doc = json!({"items": [{"cost": "1"}, {"cost": "2.5"}]});
        let coercion = Coercion::new(FieldPath::new().key("items").index(1).key("cost"), 2.5);
        assert!(coercion.apply_to(&mut doc));
        assert_eq!(doc["items"][1]["cost"], json!(2.5));
        assert_eq!(doc["items"][0]["cost"], json!("1"));
    }

    #[test]
    fn root_coercion_replaces_document() {
        let mut doc = json!("7");
        let coercion = Coercion::new(FieldPath::named("amount"), 7.0);
        assert!(coercion.apply_to(&mut doc));
        assert_eq!(doc, json!(7.0));
    }

    #[test]
    fn missing_location_is_skipped() {
        let mut doc = json!({"other": 1});
        let coercion = Coercion::new(FieldPath::new().key("price"), 1.0);
        assert!(!coercion.apply_to(&mut doc));
        assert_eq!(doc, json!({"other": 1}));
    }

    #[test]
    fn apply_counts_written_values() {
        let mut doc = json!({"a": "1", "b": "2"});
        let validated = Validated::new(vec![
            Coercion::new(FieldPath::new().key("a"), 1.0),
            Coercion::new(FieldPath::new().key("missing"), 2.0),
        ]);
        assert_eq!(validated.apply(&mut doc), 1);
        assert_eq!(doc["a"], json!(1.0));
    }
}
