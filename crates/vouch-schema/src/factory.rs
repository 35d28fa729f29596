//! # Factory
//!
//! Entry points for building schemas. Each call returns a fresh, independent
//! builder; chain configuration calls on it and then call
//! [`Validator::test`] (or [`validate`]) as often as needed.
//!
//! ```
//! use serde_json::json;
//! use vouch_schema::{array, number, string, Validator};
//!
//! let pair = array()
//!     .strict(true)
//!     .item(number().min(2.0).max(10.0))
//!     .item(string().min(3).max(7));
//!
//! assert!(pair.test(&json!([2, "hello"])).is_valid());
//! assert!(pair.test(&json!([3, "testing", "extra"])).is_invalid());
//! ```

use serde_json::Value;
use vouch_core::{SchemaError, ValidationResult};

use crate::array::ArraySchema;
use crate::map::MapSchema;
use crate::primitive::{BooleanSchema, NumberSchema, StringSchema};
use crate::validator::Validator;

/// A new boolean schema.
pub fn boolean() -> BooleanSchema {
    BooleanSchema::new()
}

/// A new, unbounded number schema.
pub fn number() -> NumberSchema {
    NumberSchema::new()
}

/// A new, unconstrained string schema.
pub fn string() -> StringSchema {
    StringSchema::new()
}

/// A new array schema (positional with no items until configured).
pub fn array() -> ArraySchema {
    ArraySchema::new()
}

/// A new map schema with no declared keys.
pub fn map() -> MapSchema {
    MapSchema::new()
}

/// Test `value` against `schema`. Equivalent to `schema.test(value)`.
pub fn validate<V: Validator + ?Sized>(schema: &V, value: &Value) -> ValidationResult {
    schema.test(value)
}

/// Test `value` against `schema`, turning a failure into an error.
///
/// # Errors
///
/// Returns [`SchemaError::ValidationFailed`] listing every violation if the
/// value does not satisfy the schema.
pub fn ensure_valid<V: Validator + ?Sized>(schema: &V, value: &Value) -> Result<(), SchemaError> {
    let result = schema.test(value);
    if result.is_valid() {
        return Ok(());
    }
    Err(SchemaError::ValidationFailed {
        violations: result.violations(),
    })
}
