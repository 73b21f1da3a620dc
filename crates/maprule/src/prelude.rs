//! Prelude module for convenient imports.
//!
//! ```rust
//! use maprule::prelude::*;
//!
//! let schema = Field::dictionary().field("active", Field::boolean());
//! ```

pub use crate::dictionary;
pub use crate::fields::{
    AnyField, ArrayField, BooleanField, ChoiceField, DecimalField, DictionaryField, Field,
    IntegerField, Predicate, StringField,
};
pub use crate::foundation::{
    Coercion, Compare, ErrorKind, FieldPath, PathSegment, ValidationError, ValidationResult,
    Validated, ValueKind,
};
pub use crate::rule::Rule;
