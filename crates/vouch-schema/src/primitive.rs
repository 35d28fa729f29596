//! # Primitive Validators
//!
//! Leaf schemas for booleans, numbers and strings. No type coercion is
//! performed: the string `"5"` is not a number and `1` is not a boolean.
//!
//! ## Checks, in order
//!
//! 1. Absence (handled by [`Validator::test_optional`]).
//! 2. Runtime type.
//! 3. Inclusive `min`/`max` bounds (value for numbers, character count for
//!    strings).
//! 4. Pattern search (strings only, unanchored unless the pattern anchors
//!    itself).

use regex::Regex;
use serde_json::Value;
use vouch_core::{SchemaError, SchemaKind, ValidationResult, Violation};

use crate::validator::{check_bounds, warn_if_inverted, Validator};

/// Accepts `true` and `false`.
#[derive(Debug, Clone, Default)]
pub struct BooleanSchema {
    allows_absent: bool,
}

impl BooleanSchema {
    /// A boolean schema that rejects absent values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether `null` and missing values pass.
    pub fn allow_absent(mut self, allow: bool) -> Self {
        self.allows_absent = allow;
        self
    }

    /// Shorthand for `allow_absent(true)`.
    pub fn optional(self) -> Self {
        self.allow_absent(true)
    }
}

impl Validator for BooleanSchema {
    fn kind(&self) -> SchemaKind {
        SchemaKind::Boolean
    }

    fn allows_absent(&self) -> bool {
        self.allows_absent
    }

    fn check_present(&self, value: &Value) -> ValidationResult {
        match value {
            Value::Bool(_) => ValidationResult::Valid,
            _ => Violation::not_a(SchemaKind::Boolean).into(),
        }
    }
}

/// Accepts integral and fractional numbers within optional inclusive bounds.
#[derive(Debug, Clone, Default)]
pub struct NumberSchema {
    allows_absent: bool,
    min: Option<f64>,
    max: Option<f64>,
}

impl NumberSchema {
    /// An unbounded number schema that rejects absent values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether `null` and missing values pass.
    pub fn allow_absent(mut self, allow: bool) -> Self {
        self.allows_absent = allow;
        self
    }

    /// Shorthand for `allow_absent(true)`.
    pub fn optional(self) -> Self {
        self.allow_absent(true)
    }

    /// Inclusive lower bound. A NaN bound is ignored.
    pub fn min(mut self, min: f64) -> Self {
        if min.is_nan() {
            tracing::warn!("number schema: NaN minimum ignored");
            return self;
        }
        self.min = Some(min);
        warn_if_inverted(SchemaKind::Number, self.min, self.max);
        self
    }

    /// Inclusive upper bound. A NaN bound is ignored.
    pub fn max(mut self, max: f64) -> Self {
        if max.is_nan() {
            tracing::warn!("number schema: NaN maximum ignored");
            return self;
        }
        self.max = Some(max);
        warn_if_inverted(SchemaKind::Number, self.min, self.max);
        self
    }

    /// Configured lower bound.
    pub fn minimum(&self) -> Option<f64> {
        self.min
    }

    /// Configured upper bound.
    pub fn maximum(&self) -> Option<f64> {
        self.max
    }
}

impl Validator for NumberSchema {
    fn kind(&self) -> SchemaKind {
        SchemaKind::Number
    }

    fn allows_absent(&self) -> bool {
        self.allows_absent
    }

    fn check_present(&self, value: &Value) -> ValidationResult {
        let Some(number) = value.as_f64() else {
            return Violation::not_a(SchemaKind::Number).into();
        };
        match check_bounds(number, self.min, self.max) {
            Some(violation) => violation.into(),
            None => ValidationResult::Valid,
        }
    }
}

/// Accepts strings within optional character-count bounds, optionally
/// required to contain a match for a regular expression.
#[derive(Debug, Clone, Default)]
pub struct StringSchema {
    allows_absent: bool,
    min: Option<usize>,
    max: Option<usize>,
    pattern: Option<Regex>,
}

impl StringSchema {
    /// An unconstrained string schema that rejects absent values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether `null` and missing values pass.
    pub fn allow_absent(mut self, allow: bool) -> Self {
        self.allows_absent = allow;
        self
    }

    /// Shorthand for `allow_absent(true)`.
    pub fn optional(self) -> Self {
        self.allow_absent(true)
    }

    /// Inclusive minimum length, in characters.
    pub fn min(mut self, min: usize) -> Self {
        self.min = Some(min);
        self.warn_if_inverted();
        self
    }

    /// Inclusive maximum length, in characters.
    pub fn max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self.warn_if_inverted();
        self
    }

    /// Require the string to contain a match for `source`.
    ///
    /// The pattern is compiled here, once.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::InvalidPattern`] if `source` is not a valid
    /// regular expression.
    pub fn pattern(mut self, source: &str) -> Result<Self, SchemaError> {
        let regex = Regex::new(source).map_err(|source_err| SchemaError::InvalidPattern {
            pattern: source.to_string(),
            source: source_err,
        })?;
        tracing::debug!(pattern = source, "compiled string pattern");
        self.pattern = Some(regex);
        Ok(self)
    }

    /// Source of the configured pattern, if any.
    pub fn pattern_source(&self) -> Option<&str> {
        self.pattern.as_ref().map(Regex::as_str)
    }

    fn warn_if_inverted(&self) {
        warn_if_inverted(
            SchemaKind::String,
            self.min.map(|n| n as f64),
            self.max.map(|n| n as f64),
        );
    }
}

impl Validator for StringSchema {
    fn kind(&self) -> SchemaKind {
        SchemaKind::String
    }

    fn allows_absent(&self) -> bool {
        self.allows_absent
    }

    fn check_present(&self, value: &Value) -> ValidationResult {
        let Value::String(s) = value else {
            return Violation::not_a(SchemaKind::String).into();
        };
        let length = s.chars().count() as f64;
        if let Some(violation) = check_bounds(
            length,
            self.min.map(|n| n as f64),
            self.max.map(|n| n as f64),
        ) {
            return violation.into();
        }
        if let Some(regex) = &self.pattern {
            if !regex.is_match(s) {
                return Violation::PatternMismatch {
                    pattern: regex.as_str().to_string(),
                }
                .into();
            }
        }
        ValidationResult::Valid
    }
}
