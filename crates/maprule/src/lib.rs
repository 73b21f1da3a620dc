//! # maprule
//!
//! Declarative shape validation for JSON values.
//!
//! Describe the expected shape once as a tree of fields, then compare any
//! number of [`serde_json::Value`]s against it. Validation is fail-fast: the
//! first violation is reported, located by a path such as `user.tags[2]`.
//!
//! ## Quick Start
//!
//! ```rust
//! use maprule::prelude::*;
//! use serde_json::json;
//!
//! let person = Field::dictionary()
//!     .field("name", Field::string().min_length(3))
//!     .field("age", Field::integer().minimum(0))
//!     .field("tags", Field::array(Field::string()).nullable());
//!
//! assert!(person.compare(&json!({"name": "rubbie", "age": 19})));
//!
//! let input = json!({"name": "rubbie", "age": 19, "tags": ["a", 1]});
//! let error = person.validate(&input).unwrap_err();
//! assert_eq!(error.to_string(), "tags[1] has invalid type");
//! ```
//!
//! ## Fields
//!
//! - **Scalars**: [`BooleanField`](fields::BooleanField),
//!   [`IntegerField`](fields::IntegerField), [`StringField`](fields::StringField)
//! - **Coercing**: [`DecimalField`](fields::DecimalField) turns `"3.25"` into `3.25`
//! - **Special**: [`ChoiceField`](fields::ChoiceField), [`AnyField`](fields::AnyField)
//! - **Composite**: [`DictionaryField`](fields::DictionaryField),
//!   [`ArrayField`](fields::ArrayField)
//!
//! ## Coercion
//!
//! Validation never mutates its input. Decimal fields report the numbers
//! they derived as [`Coercion`](foundation::Coercion)s in the
//! [`Validated`](foundation::Validated) result; apply them when wanted:
//!
//! ```rust
//! use maprule::prelude::*;
//! use serde_json::json;
//!
//! let order = Field::dictionary().field("price", Field::decimal());
//! let mut input = json!({"price": "3.25"});
//!
//! let validated = order.validate(&input)?;
//! validated.apply(&mut input);
//! assert_eq!(input, json!({"price": 3.25}));
//! # Ok::<(), maprule::foundation::ValidationError>(())
//! ```
//!
//! ## Sharing
//!
//! Field trees hold no per-call state, are `Send + Sync`, and can validate
//! from several threads at once. [`Rule`](rule::Rule) adds a remembered
//! last error on top and therefore needs exclusive access.

pub mod fields;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod rule;
