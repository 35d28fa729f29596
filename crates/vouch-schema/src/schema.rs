//! # Schema
//!
//! The closed set of schema variants behind one [`Validator`] capability.
//! Composite schemas hold their children as `Schema` values, so any builder
//! can be nested in any composite through `impl Into<Schema>`.

use serde_json::Value;
use vouch_core::{SchemaKind, ValidationResult};

use crate::array::ArraySchema;
use crate::map::MapSchema;
use crate::primitive::{BooleanSchema, NumberSchema, StringSchema};
use crate::validator::Validator;

/// A configured validator of any kind.
#[derive(Debug, Clone)]
pub enum Schema {
    /// See [`BooleanSchema`].
    Boolean(BooleanSchema),
    /// See [`NumberSchema`].
    Number(NumberSchema),
    /// See [`StringSchema`].
    String(StringSchema),
    /// See [`ArraySchema`].
    Array(ArraySchema),
    /// See [`MapSchema`].
    Map(MapSchema),
}

impl Schema {
    fn as_validator(&self) -> &dyn Validator {
        match self {
            Schema::Boolean(s) => s,
            Schema::Number(s) => s,
            Schema::String(s) => s,
            Schema::Array(s) => s,
            Schema::Map(s) => s,
        }
    }
}

impl Validator for Schema {
    fn kind(&self) -> SchemaKind {
        self.as_validator().kind()
    }

    fn allows_absent(&self) -> bool {
        self.as_validator().allows_absent()
    }

    fn check_present(&self, value: &Value) -> ValidationResult {
        self.as_validator().check_present(value)
    }
}

impl From<BooleanSchema> for Schema {
    fn from(schema: BooleanSchema) -> Self {
        Schema::Boolean(schema)
    }
}

impl From<NumberSchema> for Schema {
    fn from(schema: NumberSchema) -> Self {
        Schema::Number(schema)
    }
}

impl From<StringSchema> for Schema {
    fn from(schema: StringSchema) -> Self {
        Schema::String(schema)
    }
}

impl From<ArraySchema> for Schema {
    fn from(schema: ArraySchema) -> Self {
        Schema::Array(schema)
    }
}

impl From<MapSchema> for Schema {
    fn from(schema: MapSchema) -> Self {
        Schema::Map(schema)
    }
}
