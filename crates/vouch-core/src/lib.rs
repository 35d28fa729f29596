//! # vouch-core — Foundational Types for vouch
//!
//! This crate defines the data every validator in the workspace produces
//! and consumes. It depends on nothing internal; `vouch-schema` builds the
//! validators on top of it.
//!
//! ## Key Design Principles
//!
//! 1. **Failures are data.** A validation failure is a [`ValidationResult`]
//!    value, never an `Err`. Only configuration mistakes (an invalid regex
//!    source) surface as [`SchemaError`].
//!
//! 2. **Nested results keep their shape.** Arrays report per-index results,
//!    maps report per-key results, so consumers can render partial failures
//!    deep inside a document instead of a single boolean.
//!
//! 3. **Typed violations.** Every leaf failure is a [`Violation`] variant with
//!    a stable human-readable message and a [`ViolationCategory`].
//!
//! ## Crate Policy
//!
//! - No dependencies on other `vouch-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod kind;
pub mod result;
pub mod violation;

// Re-export primary types for ergonomic imports.
pub use error::SchemaError;
pub use kind::SchemaKind;
pub use result::{LocatedViolation, ValidationResult, ValidationViolations};
pub use violation::{Violation, ViolationCategory};
