//! Field descriptors.
//!
//! A schema is a tree of [`Field`]s: scalar leaves ([`BooleanField`],
//! [`IntegerField`], [`StringField`], [`DecimalField`]), the special leaves
//! [`ChoiceField`] and [`AnyField`], and the composites [`DictionaryField`]
//! and [`ArrayField`].
//!
//! Every leaf except choice and any follows the same precedence:
//!
//! 1. `null` / missing: passes when nullable, otherwise a null violation
//! 2. wrong runtime kind: type violation, nothing else runs
//! 3. custom predicate
//! 4. the field's own checks (bounds, lengths, children, items)
//!
//! # Examples
//!
//! ```rust
//! use maprule::prelude::*;
//! use serde_json::json;
//!
//! let person = Field::dictionary()
//!     .field("name", Field::string().min_length(3))
//!     .field("age", Field::integer().minimum(0));
//!
//! assert!(person.compare(&json!({"name": "rubbie", "age": 19})));
//!
//! let error = person.validate(&json!({"name": "ay", "age": 19})).unwrap_err();
//! assert_eq!(error.to_string(), "name should have at least 3 characters");
//! ```

/// Builders shared by every field that follows the null → type → predicate
/// contract.
macro_rules! contract_builders {
    ($field:ty, $input:ty) => {
        impl $field {
            /// Sets the label shown for this field when it is the root of a comparison.
            ///
            /// Inside a dictionary or array the key or index is shown instead.
            #[must_use = "builder methods must be chained or built"]
            pub fn named(mut self, name: impl Into<String>) -> Self {
                self.name = Some(name.into());
                self
            }

            /// Whether `null` and missing keys pass this field.
            #[must_use]
            pub fn is_nullable(&self) -> bool {
                self.nullable
            }

            /// Lets `null` and missing keys pass without further checks.
            #[must_use = "builder methods must be chained or built"]
            pub fn nullable(mut self) -> Self {
                self.nullable = true;
                self
            }

            /// Adds a custom check; failures report the generic predicate message.
            #[must_use = "builder methods must be chained or built"]
            pub fn predicate<F>(mut self, check: F) -> Self
            where
                F: Fn(&$input) -> bool + Send + Sync + 'static,
            {
                self.predicate = Some($crate::fields::Predicate::new(check, None));
                self
            }

            /// Adds a custom check reporting `message` when it fails.
            #[must_use = "builder methods must be chained or built"]
            pub fn predicate_with_message<F>(mut self, check: F, message: impl Into<String>) -> Self
            where
                F: Fn(&$input) -> bool + Send + Sync + 'static,
            {
                self.predicate = Some($crate::fields::Predicate::new(check, Some(message.into())));
                self
            }
        }
    };
}

pub(crate) use contract_builders;

pub mod any;
pub mod array;
pub mod boolean;
pub mod choice;
pub mod decimal;
pub mod dictionary;
pub mod integer;
pub mod predicate;
pub mod string;

pub use any::AnyField;
pub use array::ArrayField;
pub use boolean::BooleanField;
pub use choice::ChoiceField;
pub use decimal::DecimalField;
pub use dictionary::DictionaryField;
pub use integer::{DEFAULT_INTEGER_MAXIMUM, DEFAULT_INTEGER_MINIMUM, IntegerField};
pub use predicate::Predicate;
pub use string::{DEFAULT_MAX_LENGTH, StringField};

use crate::foundation::{
    Coercion, Compare, ErrorKind, FieldPath, ValidationError, ValidationResult, ValueKind,
};
use serde_json::Value;

// ============================================================================
// FIELD
// ============================================================================

/// Any node of a schema tree.
///
/// Build leaves with the constructors below and convert them with `.into()`
/// (composites accept `impl Into<Field>` directly).
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum Field {
    Boolean(BooleanField),
    Integer(IntegerField),
    String(StringField),
    Decimal(DecimalField),
    Choice(ChoiceField),
    Any(AnyField),
    Dictionary(DictionaryField),
    Array(ArrayField),
}

impl Field {
    /// A `true` / `false` field.
    #[must_use]
    pub fn boolean() -> BooleanField {
        BooleanField::new()
    }

    /// An integer field bounded by ±100,000,000 until configured.
    #[must_use]
    pub fn integer() -> IntegerField {
        IntegerField::new()
    }

    /// A string field with no practical length limit until configured.
    #[must_use]
    pub fn string() -> StringField {
        StringField::new()
    }

    /// A field accepting anything convertible to a finite `f64`.
    #[must_use]
    pub fn decimal() -> DecimalField {
        DecimalField::new()
    }

    /// A field accepting one of `allowed`.
    pub fn choice<I, V>(allowed: I) -> ChoiceField
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        ChoiceField::new(allowed)
    }

    /// A field accepting every value, `null` included.
    #[must_use]
    pub fn any() -> AnyField {
        AnyField::new()
    }

    /// A field accepting values of any of `kinds`.
    pub fn any_of(kinds: impl IntoIterator<Item = ValueKind>) -> AnyField {
        AnyField::of(kinds)
    }

    /// A mapping that rejects undeclared keys.
    #[must_use]
    pub fn dictionary() -> DictionaryField {
        DictionaryField::new()
    }

    /// A mapping whose unknown-key policy is chosen by the caller.
    #[must_use]
    pub fn json_dict(allow_unknown_keys: bool) -> DictionaryField {
        DictionaryField::new().allow_unknown_keys(allow_unknown_keys)
    }

    /// A sequence whose every element matches `item`.
    pub fn array(item: impl Into<Field>) -> ArrayField {
        ArrayField::new(item)
    }

    /// The runtime kind this field requires (or, for decimals, coerces to).
    ///
    /// Choice and any fields match values without a fixed kind and return `None`.
    #[must_use]
    pub fn expected_kind(&self) -> Option<ValueKind> {
        match self {
            Self::Boolean(_) => Some(ValueKind::Boolean),
            Self::Integer(_) => Some(ValueKind::Integer),
            Self::String(_) => Some(ValueKind::String),
            Self::Decimal(_) => Some(ValueKind::Float),
            Self::Dictionary(_) => Some(ValueKind::Mapping),
            Self::Array(_) => Some(ValueKind::Sequence),
            Self::Choice(_) | Self::Any(_) => None,
        }
    }

    /// Whether `null` and missing keys pass this field.
    #[must_use]
    pub fn is_nullable(&self) -> bool {
        match self {
            Self::Boolean(field) => field.is_nullable(),
            Self::Integer(field) => field.is_nullable(),
            Self::String(field) => field.is_nullable(),
            Self::Decimal(field) => field.is_nullable(),
            Self::Choice(field) => field.is_nullable(),
            Self::Any(field) => field.accepts(ValueKind::Null),
            Self::Dictionary(field) => field.is_nullable(),
            Self::Array(field) => field.is_nullable(),
        }
    }
}

impl Compare for Field {
    fn compare_at(
        &self,
        value: Option<&Value>,
        path: &FieldPath,
        coercions: &mut Vec<Coercion>,
    ) -> ValidationResult<()> {
        match self {
            Self::Boolean(field) => field.compare_at(value, path, coercions),
            Self::Integer(field) => field.compare_at(value, path, coercions),
            Self::String(field) => field.compare_at(value, path, coercions),
            Self::Decimal(field) => field.compare_at(value, path, coercions),
            Self::Choice(field) => field.compare_at(value, path, coercions),
            Self::Any(field) => field.compare_at(value, path, coercions),
            Self::Dictionary(field) => field.compare_at(value, path, coercions),
            Self::Array(field) => field.compare_at(value, path, coercions),
        }
    }

    fn label(&self) -> Option<&str> {
        match self {
            Self::Boolean(field) => field.label(),
            Self::Integer(field) => field.label(),
            Self::String(field) => field.label(),
            Self::Decimal(field) => field.label(),
            Self::Choice(field) => field.label(),
            Self::Any(field) => field.label(),
            Self::Dictionary(field) => field.label(),
            Self::Array(field) => field.label(),
        }
    }
}

macro_rules! impl_from_field {
    ($($variant:ident($field:ty)),+ $(,)?) => {
        $(
            impl From<$field> for Field {
                fn from(field: $field) -> Self {
                    Self::$variant(field)
                }
            }
        )+
    };
}

impl_from_field! {
    Boolean(BooleanField),
    Integer(IntegerField),
    String(StringField),
    Decimal(DecimalField),
    Choice(ChoiceField),
    Any(AnyField),
    Dictionary(DictionaryField),
    Array(ArrayField),
}

// ============================================================================
// SHARED CHECKS
// ============================================================================

/// Resolves nullability.
///
/// Returns `Ok(None)` when the value is `null`/absent and allowed (the
/// caller must stop and succeed), `Ok(Some(value))` when checking continues.
pub(crate) fn resolve_null<'v>(
    value: Option<&'v Value>,
    nullable: bool,
    path: &FieldPath,
) -> ValidationResult<Option<&'v Value>> {
    match value {
        None | Some(Value::Null) if nullable => Ok(None),
        None | Some(Value::Null) => Err(ValidationError::new(path.clone(), ErrorKind::Null)),
        Some(value) => Ok(Some(value)),
    }
}

/// Type violation for a value that is not of the `expected` kind.
pub(crate) fn invalid_type(
    path: &FieldPath,
    expected: ValueKind,
    actual: &Value,
) -> ValidationError {
    ValidationError::new(
        path.clone(),
        ErrorKind::Type {
            expected: vec![expected],
            actual: ValueKind::of(actual),
        },
    )
}
