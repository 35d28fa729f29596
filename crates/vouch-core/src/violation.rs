//! # Violations
//!
//! A [`Violation`] is a single leaf failure: the reason one value did not
//! satisfy one schema. Its `Display` output is the human-readable message
//! reported to callers; [`Violation::category`] classifies it.
//!
//! Bound violations carry the measured quantity. For numbers that is the
//! value itself, for strings the character count, for arrays the element
//! count.

use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::kind::SchemaKind;

/// Broad classification of a violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationCategory {
    /// The value was `null` or missing and the schema does not allow that.
    Absence,
    /// The value has the wrong runtime type for the schema.
    TypeMismatch,
    /// A number, length or element count fell outside `[min, max]`.
    Bound,
    /// A string did not match the configured pattern.
    Pattern,
    /// Missing key, unexpected key, or an extra item in a strict array.
    Structural,
}

/// A single leaf validation failure.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Violation {
    /// Value is `null` or absent.
    #[error("{0} is null or undefined")]
    Absent(SchemaKind),

    /// Value has the wrong type.
    #[error("not {}", .expected.with_article())]
    TypeMismatch {
        /// The kind the schema expects.
        expected: SchemaKind,
    },

    /// Measured quantity is below the inclusive minimum.
    #[error("less than minimum ({actual} < {minimum})")]
    BelowMinimum {
        /// Configured minimum.
        minimum: f64,
        /// Measured value, length or count.
        actual: f64,
    },

    /// Measured quantity is above the inclusive maximum.
    #[error("greater than maximum ({actual} > {maximum})")]
    AboveMaximum {
        /// Configured maximum.
        maximum: f64,
        /// Measured value, length or count.
        actual: f64,
    },

    /// String did not match the configured regular expression.
    #[error("regular expression did not match /{pattern}/")]
    PatternMismatch {
        /// Source of the pattern that failed.
        pattern: String,
    },

    /// A strict positional array received more items than it declares.
    #[error("more items than expected (array in strict mode)")]
    ExtraItem,

    /// A declared map key is not present in the input.
    #[error("missing this key")]
    MissingKey,

    /// A strict map received a key it does not declare.
    #[error("unexpected key (map in strict mode)")]
    UnexpectedKey,
}

impl Violation {
    /// Shorthand for a type mismatch against `expected`.
    pub fn not_a(expected: SchemaKind) -> Self {
        Violation::TypeMismatch { expected }
    }

    /// Returns the taxonomy bucket of this violation.
    pub fn category(&self) -> ViolationCategory {
        match self {
            Violation::Absent(_) => ViolationCategory::Absence,
            Violation::TypeMismatch { .. } => ViolationCategory::TypeMismatch,
            Violation::BelowMinimum { .. } | Violation::AboveMaximum { .. } => {
                ViolationCategory::Bound
            }
            Violation::PatternMismatch { .. } => ViolationCategory::Pattern,
            Violation::ExtraItem | Violation::MissingKey | Violation::UnexpectedKey => {
                ViolationCategory::Structural
            }
        }
    }
}

/// Violations serialize as their message.
impl Serialize for Violation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
