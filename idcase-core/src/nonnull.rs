//! Fail-fast assertions for values that must be present.

use thiserror::Error;

/// Error raised when a required value turned out to be absent.
///
/// The `Display` form always starts with `[NullValueError]`; when the caller
/// supplied a message it follows after a single space.
#[derive(Debug, Error)]
pub enum NullValueError {
    /// Absence with no extra context.
    #[error("[NullValueError]")]
    Absent,
    /// Absence with a description of the value that was expected.
    #[error("[NullValueError] {0}")]
    AbsentWith(String),
}

/// Unwrap a value that must be present.
///
/// Identity on `Some`; on `None` returns a [`NullValueError`] for the caller
/// to propagate. Absence means `None` only: `Some(0)`, `Some("")`, and
/// `Some(false)` all pass through unchanged.
pub fn nullthrows<T>(value: Option<T>) -> Result<T, NullValueError> {
    value.ok_or(NullValueError::Absent)
}

/// Unwrap a value that must be present, attaching a message naming it.
pub fn nullthrows_with<T>(
    value: Option<T>,
    message: impl Into<String>,
) -> Result<T, NullValueError> {
    value.ok_or_else(|| NullValueError::AbsentWith(message.into()))
}
