//! Building blocks shared by all fields.
//!
//! - **Trait**: [`Compare`]
//! - **Errors**: [`ValidationError`], [`ErrorKind`]
//! - **Locations**: [`FieldPath`], [`PathSegment`]
//! - **Results**: [`Validated`], [`Coercion`]
//! - **Kinds**: [`ValueKind`]

pub mod coercion;
pub mod error;
pub mod kind;
pub mod path;
pub mod traits;

pub use coercion::{Coercion, Validated};
pub use error::{ErrorKind, ValidationError};
pub use kind::ValueKind;
pub use path::{FieldPath, PathSegment, ROOT_LABEL};
pub use traits::Compare;

/// A validation result carrying the first violation on failure.
pub type ValidationResult<T> = Result<T, ValidationError>;
