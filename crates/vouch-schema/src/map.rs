//! # Map Validator
//!
//! Validates JSON objects key by key. Every declared key is checked: a key
//! the input lacks is reported as missing, otherwise its value is tested
//! against the declared schema. In strict mode every input key that is not
//! declared is reported as unexpected.
//!
//! A declared key holding `null` counts as missing, whatever the child
//! schema's absence rule says.

use std::collections::{BTreeMap, HashSet};

use serde_json::{Map, Value};
use vouch_core::{SchemaKind, ValidationResult, Violation};

use crate::schema::Schema;
use crate::validator::Validator;

/// Validates string-keyed objects against per-key schemas.
#[derive(Debug, Clone, Default)]
pub struct MapSchema {
    allows_absent: bool,
    strict: bool,
    keys: Vec<(String, Schema)>,
}

impl MapSchema {
    /// A lenient map with no declared keys, rejecting absent values.
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

    /// Reject keys that are not declared.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Declare `name` with `schema`, replacing any earlier declaration of
    /// the same key in place.
    pub fn key(mut self, name: impl Into<String>, schema: impl Into<Schema>) -> Self {
        let name = name.into();
        let schema = schema.into();
        match self.keys.iter_mut().find(|(declared, _)| *declared == name) {
            Some(slot) => slot.1 = schema,
            None => self.keys.push((name, schema)),
        }
        self
    }

    /// Declared key names, in declaration order.
    pub fn key_names(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(|(name, _)| name.as_str())
    }

    /// The schema declared for `name`.
    pub fn schema_for(&self, name: &str) -> Option<&Schema> {
        self.keys
            .iter()
            .find(|(declared, _)| declared == name)
            .map(|(_, schema)| schema)
    }

    /// Whether undeclared keys fail.
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    fn check_object(&self, object: &Map<String, Value>) -> ValidationResult {
        let mut entries: BTreeMap<String, ValidationResult> = BTreeMap::new();
        let mut failed = false;

        for (name, schema) in &self.keys {
            let result = match object.get(name) {
                Some(value) if !value.is_null() => schema.test(value),
                _ => Violation::MissingKey.into(),
            };
            failed |= result.is_invalid();
            entries.insert(name.clone(), result);
        }

        if self.strict {
            let declared: HashSet<&str> = self.key_names().collect();
            for name in object.keys() {
                if !declared.contains(name.as_str()) {
                    entries.insert(name.clone(), Violation::UnexpectedKey.into());
                    failed = true;
                }
            }
        }

        if failed {
            tracing::trace!(keys = entries.len(), "map failed");
            ValidationResult::InvalidMapping(entries)
        } else {
            ValidationResult::Valid
        }
    }
}

impl Validator for MapSchema {
    fn kind(&self) -> SchemaKind {
        SchemaKind::Map
    }

    fn allows_absent(&self) -> bool {
        self.allows_absent
    }

    fn check_present(&self, value: &Value) -> ValidationResult {
        match value {
            Value::Object(object) => self.check_object(object),
            _ => Violation::not_a(SchemaKind::Map).into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::NumberSchema;
    use serde_json::json;

    fn ids() -> MapSchema {
        MapSchema::new()
            .strict(true)
            .key("id1", NumberSchema::new().min(0.0).max(100.0))
            .key("id2", NumberSchema::new().min(1.0).max(100.0))
    }

    #[test]
    fn rejects_non_objects() {
        assert_eq!(
            ids().test(&json!([1, 2])),
            ValidationResult::InvalidLeaf(Violation::not_a(SchemaKind::Map))
        );
        assert_eq!(
            ids().test(&Value::Null),
            ValidationResult::InvalidLeaf(Violation::Absent(SchemaKind::Map))
        );
        assert!(ids().optional().test(&Value::Null).is_valid());
    }

    #[test]
    fn strict_scenario() {
        let schema = MapSchema::new()
            .strict(true)
            .key("id1", NumberSchema::new().min(0.0).max(100.0));
        assert!(schema.test(&json!({"id1": 19})).is_valid());

        let result = schema.test(&json!({"id1": 19, "id2": 2}));
        let entries = result.as_mapping().unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries["id1"].is_valid());
        assert_eq!(
            entries["id2"],
            ValidationResult::InvalidLeaf(Violation::UnexpectedKey)
        );
    }

    #[test]
    fn strict_accepts_exact_keys() {
        assert!(ids().test(&json!({"id1": 19, "id2": 2})).is_valid());
        assert!(ids().test(&json!({"id1": 99, "id2": 50})).is_valid());
    }

    #[test]
    fn reports_missing_and_unexpected_keys() {
        let result = ids().test(&json!({"id2": 19, "id3": 2}));
        let violations = result.violations();
        assert_eq!(violations.at("/id1"), Some(&Violation::MissingKey));
        assert_eq!(violations.at("/id3"), Some(&Violation::UnexpectedKey));
        assert!(violations.at("/id2").is_none());
        assert_eq!(result.as_mapping().map(BTreeMap::len), Some(3));
    }

    #[test]
    fn reports_every_failure_at_once() {
        let result = ids().test(&json!({"id1": 100, "id2": -3, "other": 42}));
        let violations = result.violations();
        assert_eq!(violations.len(), 2);
        assert!(violations.at("/id2").is_some());
        assert_eq!(violations.at("/other"), Some(&Violation::UnexpectedKey));
    }

    #[test]
    fn lenient_ignores_undeclared_keys() {
        let schema = ids().strict(false);
        assert!(!schema.is_strict());
        assert!(schema.test(&json!({"id1": 1, "id2": 2, "extra": "x"})).is_valid());
        assert!(schema.test(&json!({"id1": 1})).is_invalid());
    }

    #[test]
    fn null_value_counts_as_missing_key() {
        let schema = MapSchema::new()
            .key("a", NumberSchema::new().optional())
            .key("b", NumberSchema::new());
        let result = schema.test(&json!({"a": null, "b": null}));
        let violations = result.violations();
        assert_eq!(violations.at("/a"), Some(&Violation::MissingKey));
        assert_eq!(violations.at("/b"), Some(&Violation::MissingKey));

        let optional_only = MapSchema::new().key("a", NumberSchema::new().optional());
        assert_eq!(
            optional_only.test(&json!({"a": null})).to_json(),
            json!({"a": "missing this key"})
        );
        assert!(optional_only.test(&json!({"a": 1})).is_valid());
    }

    #[test]
    fn redeclaring_a_key_replaces_it_in_place() {
        let schema = MapSchema::new()
            .key("x", NumberSchema::new())
            .key("y", NumberSchema::new())
            .key("x", NumberSchema::new().max(1.0));
        assert_eq!(schema.key_names().collect::<Vec<_>>(), vec!["x", "y"]);
        assert!(schema.schema_for("x").is_some());
        assert!(schema.schema_for("z").is_none());
        assert!(schema.test(&json!({"x": 2, "y": 0})).is_invalid());
    }

    #[test]
    fn empty_lenient_map_accepts_any_object() {
        assert!(MapSchema::new().test(&json!({"anything": [1, 2]})).is_valid());
        assert!(MapSchema::new().strict(true).test(&json!({"k": 1})).is_invalid());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Undeclared keys in a strict map always fail as unexpected.
            #[test]
            fn strict_flags_every_undeclared_key(
                extra in prop::collection::btree_set("[a-z]{1,6}", 1..6),
            ) {
                let mut input = serde_json::Map::new();
                input.insert("id1".into(), json!(1));
                input.insert("id2".into(), json!(1));
                for key in &extra {
                    input.entry(key.clone()).or_insert(json!(true));
                }
                let result = ids().test(&Value::Object(input));
                let violations = result.violations();
                for key in extra.iter().filter(|k| *k != "id1" && *k != "id2") {
                    let path = format!("/{key}");
                    prop_assert_eq!(violations.at(&path), Some(&Violation::UnexpectedKey));
                }
            }

            /// Repeated tests of equal input give equal results.
            #[test]
            fn test_is_idempotent(a in -10i64..200, b in -10i64..200) {
                let input = json!({"id1": a, "id2": b, "z": 0});
                prop_assert_eq!(ids().test(&input), ids().test(&input.clone()));
            }
        }
    }
}
