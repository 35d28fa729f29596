//! # The Validator Capability
//!
//! Every schema variant implements [`Validator`]. The trait owns the
//! absence rule so that it runs before any type or constraint check, the
//! same way for every variant: implementors only see present, non-null
//! values in [`Validator::check_present`].

use serde_json::Value;
use vouch_core::{SchemaKind, ValidationResult, Violation};

/// Tests candidate values against a configured schema.
pub trait Validator {
    /// The schema variant.
    fn kind(&self) -> SchemaKind;

    /// Whether `null` and missing values pass.
    fn allows_absent(&self) -> bool;

    /// Validate a value already known to be present and non-null.
    fn check_present(&self, value: &Value) -> ValidationResult;

    /// Validate a value that may be missing altogether.
    ///
    /// `None` and `Some(Value::Null)` are both treated as absent.
    fn test_optional(&self, value: Option<&Value>) -> ValidationResult {
        match value {
            None | Some(Value::Null) if self.allows_absent() => ValidationResult::Valid,
            None | Some(Value::Null) => Violation::Absent(self.kind()).into(),
            Some(value) => self.check_present(value),
        }
    }

    /// Validate a value.
    fn test(&self, value: &Value) -> ValidationResult {
        self.test_optional(Some(value))
    }
}

/// Inclusive `[min, max]` check shared by numbers, lengths and counts.
pub(crate) fn check_bounds(actual: f64, min: Option<f64>, max: Option<f64>) -> Option<Violation> {
    if let Some(minimum) = min {
        if actual < minimum {
            return Some(Violation::BelowMinimum { minimum, actual });
        }
    }
    if let Some(maximum) = max {
        if actual > maximum {
            return Some(Violation::AboveMaximum { maximum, actual });
        }
    }
    None
}

/// Warn once a builder holds bounds that no value can satisfy.
pub(crate) fn warn_if_inverted(kind: SchemaKind, min: Option<f64>, max: Option<f64>) {
    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            tracing::warn!(%kind, min, max, "minimum exceeds maximum; schema rejects every value");
        }
    }
}
