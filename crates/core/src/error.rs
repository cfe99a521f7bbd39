//! Domain error model.

use thiserror::Error;

use crate::collections::CollectionError;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// invariants, conflicts, missing entries). Persistence concerns belong in
/// the infrastructure layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed numeric input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// A requested title or customer does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// A conflict occurred (e.g. a title that is already in the catalog).
    #[error("conflict: {0}")]
    Conflict(String),

    /// A container contract was broken (positional access, empty queue).
    #[error(transparent)]
    Collection(#[from] CollectionError),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// Whether this is an expected "no such entry" outcome rather than a fault.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_errors_convert_transparently() {
        let err: DomainError = CollectionError::EmptyQueue.into();
        assert_eq!(err.to_string(), CollectionError::EmptyQueue.to_string());
        assert!(!err.is_not_found());
    }

    #[test]
    fn not_found_carries_the_missing_key() {
        let err = DomainError::not_found("title `Matrix`");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "not found: title `Matrix`");
    }
}
