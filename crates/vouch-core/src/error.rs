//! # Error Types
//!
//! Configuration-time errors. Validation failures are not errors: they are
//! returned as [`ValidationResult`](crate::ValidationResult) data. The only
//! ways a schema operation returns `Err` are a pattern that fails to compile
//! while the schema is being built, and the explicit
//! `ensure_valid` convenience which converts an invalid result into
//! [`SchemaError::ValidationFailed`].

use thiserror::Error;

use crate::result::ValidationViolations;

/// Error raised while building or enforcing a schema.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The regular expression source supplied to a string schema is invalid.
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The rejected pattern source.
        pattern: String,
        /// Compilation error from the regex engine.
        source: regex::Error,
    },

    /// A value was required to be valid and was not.
    #[error("validation failed:\n{violations}")]
    ValidationFailed {
        /// Every leaf violation, located by JSON Pointer.
        violations: ValidationViolations,
    },
}
