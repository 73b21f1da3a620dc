//! Runtime kinds of JSON values.
//!
//! Every leaf field expects exactly one [`ValueKind`]; [`AnyField`](crate::fields::AnyField)
//! accepts a set of them.

use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// The dynamic kind of a [`serde_json::Value`].
///
/// Numbers are split into [`Integer`](ValueKind::Integer) and
/// [`Float`](ValueKind::Float): `1` is an integer, `1.0` is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// `null`, or a key missing from its mapping.
    Null,
    /// `true` / `false`.
    Boolean,
    /// A number representable as `i64` or `u64`.
    Integer,
    /// Any other number.
    Float,
    /// A string.
    String,
    /// An array.
    Sequence,
    /// An object.
    Mapping,
}

impl ValueKind {
    /// Returns the kind of `value`.
    #[must_use]
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(n) if n.is_i64() || n.is_u64() => Self::Integer,
            Value::Number(_) => Self::Float,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Sequence,
            Value::Object(_) => Self::Mapping,
        }
    }

    /// Returns the kind of a possibly absent value; absence is [`ValueKind::Null`].
    #[must_use]
    pub fn of_optional(value: Option<&Value>) -> Self {
        value.map_or(Self::Null, Self::of)
    }

    /// Stable lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::String => "string",
            Self::Sequence => "sequence",
            Self::Mapping => "mapping",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
