//! Macros for literal schema construction.

/// Builds a [`DictionaryField`](crate::fields::DictionaryField) from
/// `key => field` pairs, keeping their order.
///
/// # Examples
///
/// ```rust
/// use maprule::dictionary;
/// use maprule::prelude::*;
/// use serde_json::json;
///
/// let person = dictionary! {
///     "name" => Field::string().min_length(3),
///     "age" => Field::integer().minimum(0),
///     "address" => dictionary! {
///         "city" => Field::string(),
///     },
/// };
///
/// assert!(person.compare(&json!({"name": "rubbie", "age": 19, "address": {"city": "Lagos"}})));
/// ```
#[macro_export]
macro_rules! dictionary {
    () => {
        $crate::fields::DictionaryField::new()
    };
    ($($key:expr => $field:expr),+ $(,)?) => {
        $crate::fields::DictionaryField::new()
            $(.field($key, $field))+
    };
}
