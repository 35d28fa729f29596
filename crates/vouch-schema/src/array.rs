//! # Array Validator
//!
//! An array schema runs in exactly one of two modes:
//!
//! - **Uniform** — set with [`ArraySchema::element`]. Element-count bounds
//!   are checked first and reported as a single leaf failure; otherwise every
//!   element is tested against the same schema.
//! - **Positional** — built with repeated [`ArraySchema::item`] calls, one
//!   schema per index. Items past the last declared position stop the scan:
//!   silently in lenient mode, with an extra-item failure in strict mode.
//!
//! The mode is uniform whenever an element schema is set; positional items
//! are then ignored. `min`/`max` only apply in uniform mode.

use serde_json::Value;
use vouch_core::{SchemaKind, ValidationResult, Violation};

use crate::schema::Schema;
use crate::validator::{check_bounds, warn_if_inverted, Validator};

/// Which of the two array validation strategies a schema uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayMode {
    /// Every element validated against one shared schema.
    Uniform,
    /// Each index validated against its own schema.
    Positional,
}

/// Validates JSON arrays, uniformly or by position.
#[derive(Debug, Clone, Default)]
pub struct ArraySchema {
    allows_absent: bool,
    min: Option<usize>,
    max: Option<usize>,
    element: Option<Box<Schema>>,
    positional: Vec<Schema>,
    strict: bool,
}

impl ArraySchema {
    /// A positional schema with no items, rejecting absent values.
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

    /// Inclusive minimum element count (uniform mode only).
    pub fn min(mut self, min: usize) -> Self {
        self.min = Some(min);
        self.warn_if_inverted();
        self
    }

    /// Inclusive maximum element count (uniform mode only).
    pub fn max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self.warn_if_inverted();
        self
    }

    /// Append the schema for the next index (positional mode).
    pub fn item(mut self, schema: impl Into<Schema>) -> Self {
        if self.element.is_some() {
            tracing::warn!(
                index = self.positional.len(),
                "array schema: positional item ignored, element schema already set"
            );
        }
        self.positional.push(schema.into());
        self
    }

    /// Validate every element against `schema` (uniform mode).
    pub fn element(mut self, schema: impl Into<Schema>) -> Self {
        if !self.positional.is_empty() {
            tracing::warn!(
                items = self.positional.len(),
                "array schema: element schema set, positional items will be ignored"
            );
        }
        self.element = Some(Box::new(schema.into()));
        self
    }

    /// Reject items beyond the declared positions (positional mode).
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// The mode this schema validates in.
    pub fn mode(&self) -> ArrayMode {
        if self.element.is_some() {
            ArrayMode::Uniform
        } else {
            ArrayMode::Positional
        }
    }

    /// Whether extra positional items fail.
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    fn warn_if_inverted(&self) {
        warn_if_inverted(
            SchemaKind::Array,
            self.min.map(|n| n as f64),
            self.max.map(|n| n as f64),
        );
    }

    fn check_uniform(&self, element: &Schema, items: &[Value]) -> ValidationResult {
        if let Some(violation) = check_bounds(
            items.len() as f64,
            self.min.map(|n| n as f64),
            self.max.map(|n| n as f64),
        ) {
            return violation.into();
        }

        let results: Vec<ValidationResult> = items.iter().map(|item| element.test(item)).collect();
        if results.iter().all(ValidationResult::is_valid) {
            ValidationResult::Valid
        } else {
            tracing::trace!(len = results.len(), "uniform array failed");
            ValidationResult::InvalidSequence(results)
        }
    }

    fn check_positional(&self, items: &[Value]) -> ValidationResult {
        let mut results: Vec<ValidationResult> =
            Vec::with_capacity(items.len().min(self.positional.len() + 1));
        let mut failed = false;

        for (index, item) in items.iter().enumerate() {
            let Some(schema) = self.positional.get(index) else {
                if self.strict {
                    results.push(Violation::ExtraItem.into());
                    failed = true;
                }
                break;
            };
            let result = schema.test(item);
            failed |= result.is_invalid();
            results.push(result);
        }

        if failed {
            tracing::trace!(scanned = results.len(), "positional array failed");
            ValidationResult::InvalidSequence(results)
        } else {
            ValidationResult::Valid
        }
    }
}

impl Validator for ArraySchema {
    fn kind(&self) -> SchemaKind {
        SchemaKind::Array
    }

    fn allows_absent(&self) -> bool {
        self.allows_absent
    }

    fn check_present(&self, value: &Value) -> ValidationResult {
        let Value::Array(items) = value else {
            return Violation::not_a(SchemaKind::Array).into();
        };
        match &self.element {
            Some(element) => self.check_uniform(element, items),
            None => self.check_positional(items),
        }
    }
}
