//! Custom checks attached to fields.

use crate::foundation::{ErrorKind, FieldPath, ValidationError, ValidationResult};
use std::fmt;
use std::sync::Arc;

/// A caller-supplied check over a field's concrete value, with the message
/// reported when it fails.
///
/// The check only runs once the value has passed the null and type checks,
/// so it always sees the field's own value type: `bool`, `i64`, `str`,
/// `f64`, a JSON object map or a slice of JSON values.
pub struct Predicate<T: ?Sized> {
    check: Arc<dyn Fn(&T) -> bool + Send + Sync>,
    message: Option<String>,
}

impl<T: ?Sized> Predicate<T> {
    /// Wraps `check`; `message` is reported when it returns `false`.
    pub fn new<F>(check: F, message: Option<String>) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self {
            check: Arc::new(check),
            message,
        }
    }

    /// The failure message, if one was given.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Runs the check against `value` located at `path`.
    pub fn check(&self, value: &T, path: &FieldPath) -> ValidationResult<()> {
        if (self.check)(value) {
            Ok(())
        } else {
            Err(ValidationError::new(
                path.clone(),
                ErrorKind::Predicate {
                    message: self.message.clone(),
                },
            ))
        }
    }
}

/// Runs an optional predicate; an absent one always passes.
pub(crate) fn run<T: ?Sized>(
    predicate: Option<&Predicate<T>>,
    value: &T,
    path: &FieldPath,
) -> ValidationResult<()> {
    predicate.map_or(Ok(()), |predicate| predicate.check(value, path))
}

// Manual impls: derives would require `T: Clone` / `T: Debug`.
impl<T: ?Sized> Clone for Predicate<T> {
    fn clone(&self) -> Self {
        Self {
            check: Arc::clone(&self.check),
            message: self.message.clone(),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Predicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("check", &"<function>")
            .field("message", &self.message)
            .finish()
    }
}
