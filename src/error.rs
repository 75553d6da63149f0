//! Error types shared by the partial operations of the crate.
//!
//! Only one failure mode exists in this library: an operation that needs at
//! least one element received none. Everything that can merely be absent
//! (`head`, `safe_index`, `find`, ...) returns [`Option`] instead.

use thiserror::Error;

/// An operation that is only defined for non-empty input received an empty one.
///
/// Returned by `foldl1`, `foldr1`, `scanl1`, `scanr1`, `maximum`, `minimum`
/// and by the `ArrayZipper` constructors.
///
/// # Examples
///
/// ```rust
/// use preludium::error::EmptyInputError;
///
/// let error = EmptyInputError::new("foldl1");
/// assert_eq!(error.operation, "foldl1");
/// assert_eq!(error.to_string(), "foldl1: cannot be applied to an empty input");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("{operation}: cannot be applied to an empty input")]
pub struct EmptyInputError {
    /// Name of the operation that rejected the input.
    pub operation: &'static str,
}

impl EmptyInputError {
    /// Creates a new `EmptyInputError` for the named operation.
    #[must_use]
    pub fn new(operation: &'static str) -> Self {
        tracing::debug!(operation, "rejected empty input");
        Self { operation }
    }
}
