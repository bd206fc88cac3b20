//! Unified error types for the domain layer
//!
//! Value objects report construction failures through `DomainError` so that
//! adapters can map them without falling back to `String` or `anyhow`.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for value objects and enums)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for rule violations.
    ///
    /// Use this when a value object refuses its input:
    /// - Required text is too short
    /// - A string does not have the expected shape
    ///
    /// # Example
    /// ```ignore
    /// if trimmed.encode_utf16().count() < MIN_INTEREST_CHARS {
    ///     return Err(DomainError::validation("Interest is too short"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr` implementations when the input string
    /// doesn't match any known variant.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
