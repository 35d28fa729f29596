//! # vouch-schema — Composable Validators
//!
//! Build a schema describing the expected shape of a value, then test
//! candidate `serde_json::Value`s against it:
//!
//! ```
//! use serde_json::json;
//! use vouch_schema::{map, number, Validator};
//!
//! let schema = map().strict(true).key("id1", number().min(0.0).max(100.0));
//!
//! assert!(schema.test(&json!({"id1": 19})).is_valid());
//!
//! let result = schema.test(&json!({"id1": 19, "id2": 2}));
//! assert_eq!(result.to_json(), json!({"id1": null, "id2": "unexpected key (map in strict mode)"}));
//! ```
//!
//! ## Modules
//!
//! - [`primitive`] — boolean, number and string leaf validators.
//! - [`array`](mod@array) — uniform and positional array validation.
//! - [`map`](mod@map) — per-key object validation with optional strictness.
//! - [`schema`] — the closed [`Schema`] enum tying the variants together.
//! - [`factory`] — constructors plus [`validate`] and [`ensure_valid`].
//!
//! ## Crate Policy
//!
//! - Depends only on `vouch-core` internally.
//! - Validation never returns `Err` and never panics; failures are
//!   [`ValidationResult`] values. The only build-time error is an invalid
//!   pattern source.
//! - `test` takes `&self`: a built schema is immutable and `Send + Sync`.

pub mod array;
pub mod factory;
pub mod map;
pub mod primitive;
pub mod schema;
pub mod validator;

pub use array::{ArrayMode, ArraySchema};
pub use factory::{array, boolean, ensure_valid, map, number, string, validate};
pub use map::MapSchema;
pub use primitive::{BooleanSchema, NumberSchema, StringSchema};
pub use schema::Schema;
pub use validator::Validator;

pub use vouch_core::{
    LocatedViolation, SchemaError, SchemaKind, ValidationResult, ValidationViolations, Violation,
    ViolationCategory,
};
