//! Dictionary field: a mapping of named child fields.

use super::predicate::{self, Predicate};
use super::{Field, invalid_type, resolve_null};
use crate::foundation::{
    Coercion, Compare, ErrorKind, FieldPath, ValidationError, ValidationResult, ValueKind,
};
use indexmap::IndexMap;
use serde_json::{Map, Value};

/// Validates a JSON object against a set of named child fields.
///
/// Children are checked in declaration order and validation stops at the
/// first failing child, whose error is returned as is; its path is this
/// field's path extended by the child's key. A key missing from the input
/// is passed to its child as an absent value, so the child's own
/// nullability decides.
///
/// Keys present in the input but not declared are rejected unless
/// [`allow_unknown_keys`](Self::allow_unknown_keys) is set; only the first
/// one (in the input's key order) is reported.
///
/// # Examples
///
/// ```rust
/// use maprule::prelude::*;
/// use serde_json::json;
///
/// let user = Field::dictionary()
///     .field("name", Field::string())
///     .field("address", Field::dictionary().field("city", Field::string().min_length(2)))
///     .named("user");
///
/// let error = user
///     .validate(&json!({"name": "ay", "address": {"city": "X"}}))
///     .unwrap_err();
/// assert_eq!(error.to_string(), "user.address.city should have at least 2 characters");
///
/// let error = user.validate(&json!({"name": "ay", "admin": true})).unwrap_err();
/// assert_eq!(error.to_string(), "user has an unnecessary key \"admin\"");
/// ```
#[derive(Debug, Clone, Default)]
pub struct DictionaryField {
    name: Option<String>,
    nullable: bool,
    predicate: Option<Predicate<Map<String, Value>>>,
    children: IndexMap<String, Field>,
    allow_unknown_keys: bool,
}

impl DictionaryField {
    /// Creates an empty, strict dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a child field under `key`.
    #[must_use = "builder methods must be chained or built"]
    pub fn field(mut self, key: impl Into<String>, field: impl Into<Field>) -> Self {
        self.add_rule(key, field);
        self
    }

    /// Sets whether undeclared keys are tolerated.
    #[must_use = "builder methods must be chained or built"]
    pub fn allow_unknown_keys(mut self, allow: bool) -> Self {
        self.allow_unknown_keys = allow;
        self
    }

    /// Declares or replaces a child field after construction.
    ///
    /// A replaced child keeps its original position.
    pub fn add_rule(&mut self, key: impl Into<String>, field: impl Into<Field>) {
        self.children.insert(key.into(), field.into());
    }

    /// Declares or replaces several child fields.
    pub fn add_rules<K, F>(&mut self, rules: impl IntoIterator<Item = (K, F)>)
    where
        K: Into<String>,
        F: Into<Field>,
    {
        for (key, field) in rules {
            self.add_rule(key, field);
        }
    }

    /// Whether undeclared keys are tolerated.
    #[must_use]
    pub fn allows_unknown_keys(&self) -> bool {
        self.allow_unknown_keys
    }

    /// The declared children, in declaration order.
    #[must_use]
    pub fn children(&self) -> &IndexMap<String, Field> {
        &self.children
    }

    /// The child declared under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Field> {
        self.children.get(key)
    }

    /// Number of declared children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// True when no children are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    fn first_unknown_key<'m>(&self, map: &'m Map<String, Value>) -> Option<&'m String> {
        map.keys().find(|key| !self.children.contains_key(key.as_str()))
    }
}

super::contract_builders!(DictionaryField, Map<String, Value>);

impl Compare for DictionaryField {
    fn compare_at(
        &self,
        value: Option<&Value>,
        path: &FieldPath,
        coercions: &mut Vec<Coercion>,
    ) -> ValidationResult<()> {
        let Some(value) = resolve_null(value, self.nullable, path)? else {
            return Ok(());
        };
        let Some(map) = value.as_object() else {
            return Err(invalid_type(path, ValueKind::Mapping, value));
        };
        predicate::run(self.predicate.as_ref(), map, path)?;

        if !self.allow_unknown_keys
            && let Some(key) = self.first_unknown_key(map)
        {
            return Err(ValidationError::new(
                path.clone(),
                ErrorKind::UnknownKey { key: key.clone() },
            ));
        }

        tracing::trace!(path = %path, children = self.children.len(), "comparing mapping");
        for (key, child) in &self.children {
            child.compare_at(map.get(key), &path.key(key.as_str()), coercions)?;
        }
        Ok(())
    }

    fn label(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl<K, F> FromIterator<(K, F)> for DictionaryField
where
    K: Into<String>,
    F: Into<Field>,
{
    fn from_iter<I: IntoIterator<Item = (K, F)>>(iter: I) -> Self {
        let mut field = Self::new();
        field.add_rules(iter);
        field
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn person() -> DictionaryField {
        DictionaryField::new()
            .field("name", Field::string().min_length(3))
            .field("age", Field::integer().minimum(0))
    }

    #[test]
    fn valid_mapping_passes() {
        assert!(person().compare(&json!({"name": "rubbie", "age": 19})));
    }

    #[test]
    fn first_declared_failure_wins() {
        let error = person()
            .validate(&json!({"name": "ay", "age": -1}))
            .unwrap_err();
        assert_eq!(error.to_string(), "name should have at least 3 characters");

        let error = person()
            .validate(&json!({"name": "rubbie", "age": -1}))
            .unwrap_err();
        assert_eq!(error.to_string(), "age should be greater than 0");
    }

    #[test]
    fn missing_key_is_null_for_the_child() {
        let error = person().validate(&json!({"name": "rubbie"})).unwrap_err();
        assert_eq!(error.to_string(), "age should not be null");

        let optional_age = person().field("age", Field::integer().nullable());
        assert!(optional_age.compare(&json!({"name": "rubbie"})));
    }

    #[test]
    fn unknown_keys_rejected_by_default() {
        let error = person()
            .validate(&json!({"name": "rubbie", "age": 19, "admin": true}))
            .unwrap_err();
        assert_eq!(error.kind(), &ErrorKind::UnknownKey { key: "admin".into() });
        assert_eq!(error.to_string(), "value has an unnecessary key \"admin\"");
    }

    #[test]
    fn unknown_key_check_precedes_children() {
        let error = person()
            .validate(&json!({"name": "ay", "extra": 1}))
            .unwrap_err();
        assert_eq!(error.code(), "unknown_key");
    }

    #[test]
    fn unknown_keys_allowed_when_configured() {
        let lenient = person().allow_unknown_keys(true);
        assert!(lenient.allows_unknown_keys());
        assert!(lenient.compare(&json!({"name": "rubbie", "age": 19, "admin": true})));
    }

    #[test]
    fn non_mapping_is_type_violation() {
        let error = person().validate(&json!([1, 2])).unwrap_err();
        assert_eq!(error.code(), "invalid_type");
    }

    #[test]
    fn add_rule_replaces_in_place() {
        let mut schema = person();
        schema.add_rule("name", Field::string());
        schema.add_rules([("email", Field::string().nullable())]);

        let keys: Vec<_> = schema.children().keys().cloned().collect();
        assert_eq!(keys, vec!["name", "age", "email"]);
        assert!(schema.compare(&json!({"name": "x", "age": 1})));
    }

    #[test]
    fn predicate_sees_whole_map() {
        let schema = DictionaryField::new()
            .field("start", Field::integer())
            .field("end", Field::integer())
            .predicate_with_message(
                |map| {
                    map.get("start").and_then(Value::as_i64)
                        <= map.get("end").and_then(Value::as_i64)
                },
                "start must not be after end",
            )
            .named("window");
        assert!(schema.compare(&json!({"start": 1, "end": 2})));

        let error = schema.validate(&json!({"start": 3, "end": 2})).unwrap_err();
        assert_eq!(error.to_string(), "window start must not be after end");
    }

    #[test]
    fn collects_from_pairs() {
        let schema: DictionaryField = [("a", Field::boolean()), ("b", Field::boolean())]
            .into_iter()
            .collect();
        assert_eq!(schema.len(), 2);
        assert!(schema.get("a").is_some());
        assert!(!schema.is_empty());
    }

    #[test]
    fn nested_paths_accumulate() {
        let schema = DictionaryField::new().field(
            "address",
            DictionaryField::new().field("zip", Field::string().max_length(5)),
        );
        let error = schema
            .validate(&json!({"address": {"zip": "123456"}}))
            .unwrap_err();
        assert_eq!(error.path().to_string(), "address.zip");
    }
}
