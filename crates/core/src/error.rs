//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// The submission pipeline itself is total; these variants only describe
/// failures at its boundaries (host-supplied field names, configuration,
/// parsing a deep link back, or driving a state machine out of order).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A state machine invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// The host referred to a field the form does not have.
    #[error("unknown field: {0}")]
    UnknownField(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn unknown_field(name: impl Into<String>) -> Self {
        Self::UnknownField(name.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_context() {
        assert_eq!(
            DomainError::unknown_field("fax").to_string(),
            "unknown field: fax"
        );
        assert_eq!(
            DomainError::validation("empty destination").to_string(),
            "validation failed: empty destination"
        );
    }
}
