//! # Validation Results
//!
//! [`ValidationResult`] is the return value of every `test` call. Leaf
//! schemas produce [`ValidationResult::Valid`] or a single
//! [`ValidationResult::InvalidLeaf`]. Arrays and maps aggregate their
//! children into [`ValidationResult::InvalidSequence`] and
//! [`ValidationResult::InvalidMapping`], keeping `Valid` entries for the
//! positions that passed so consumers can map index or key to reason.
//!
//! ## Rendering
//!
//! - [`ValidationResult::violations`] flattens the tree into JSON Pointer
//!   paths (RFC 6901), e.g. `/items/2`.
//! - `Display` prints one line per violation.
//! - [`ValidationResult::to_json`] (and `Serialize`) produce the dynamic
//!   shape: `null` for valid, a message string for a leaf, an array for a
//!   sequence and an object for a mapping.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::violation::Violation;

/// Outcome of testing one value against one schema.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ValidationResult {
    /// The value satisfied the schema.
    #[default]
    Valid,
    /// A leaf failure: primitive checks, or bound/type failures on composites.
    InvalidLeaf(Violation),
    /// Per-index results of an array, `Valid` where the element passed.
    InvalidSequence(Vec<ValidationResult>),
    /// Per-key results of a map, `Valid` where the key passed.
    InvalidMapping(BTreeMap<String, ValidationResult>),
}

impl ValidationResult {
    /// Returns true if the value satisfied the schema.
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    /// Returns true if any violation was recorded.
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Returns the leaf violation, if this result is a leaf failure.
    pub fn as_leaf(&self) -> Option<&Violation> {
        match self {
            ValidationResult::InvalidLeaf(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the per-index results, if this is a sequence failure.
    pub fn as_sequence(&self) -> Option<&[ValidationResult]> {
        match self {
            ValidationResult::InvalidSequence(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the per-key results, if this is a mapping failure.
    pub fn as_mapping(&self) -> Option<&BTreeMap<String, ValidationResult>> {
        match self {
            ValidationResult::InvalidMapping(entries) => Some(entries),
            _ => None,
        }
    }

    /// Flatten every leaf violation in the tree, in traversal order,
    /// together with its JSON Pointer path.
    pub fn violations(&self) -> ValidationViolations {
        let mut out = Vec::new();
        self.collect_into(&mut String::new(), &mut out);
        ValidationViolations { violations: out }
    }

    fn collect_into(&self, path: &mut String, out: &mut Vec<LocatedViolation>) {
        match self {
            ValidationResult::Valid => {}
            ValidationResult::InvalidLeaf(violation) => out.push(LocatedViolation {
                path: path.clone(),
                violation: violation.clone(),
            }),
            ValidationResult::InvalidSequence(items) => {
                for (index, item) in items.iter().enumerate() {
                    let len = path.len();
                    path.push('/');
                    path.push_str(&index.to_string());
                    item.collect_into(path, out);
                    path.truncate(len);
                }
            }
            ValidationResult::InvalidMapping(entries) => {
                for (key, entry) in entries {
                    let len = path.len();
                    path.push('/');
                    push_escaped(path, key);
                    entry.collect_into(path, out);
                    path.truncate(len);
                }
            }
        }
    }

    /// Render the result in its dynamic JSON shape.
    pub fn to_json(&self) -> Value {
        match self {
            ValidationResult::Valid => Value::Null,
            ValidationResult::InvalidLeaf(v) => Value::String(v.to_string()),
            ValidationResult::InvalidSequence(items) => {
                Value::Array(items.iter().map(ValidationResult::to_json).collect())
            }
            ValidationResult::InvalidMapping(entries) => Value::Object(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
        }
    }
}

/// Escape a map key as a JSON Pointer reference token.
fn push_escaped(path: &mut String, key: &str) {
    for c in key.chars() {
        match c {
            '~' => path.push_str("~0"),
            '/' => path.push_str("~1"),
            c => path.push(c),
        }
    }
}

impl From<Violation> for ValidationResult {
    fn from(violation: Violation) -> Self {
        ValidationResult::InvalidLeaf(violation)
    }
}

impl Serialize for ValidationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ValidationResult::Valid => serializer.serialize_none(),
            ValidationResult::InvalidLeaf(v) => v.serialize(serializer),
            ValidationResult::InvalidSequence(items) => serializer.collect_seq(items),
            ValidationResult::InvalidMapping(entries) => serializer.collect_map(entries),
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            return f.write_str("valid");
        }
        write!(f, "{}", self.violations())
    }
}

/// One leaf of a failed result tree, addressed by where it sits in the
/// tested document.
#[derive(Debug, Clone, PartialEq)]
pub struct LocatedViolation {
    /// RFC 6901 pointer into the tested value (`/tags/1`); `""` is the root.
    pub path: String,
    /// The failure recorded at `path`.
    pub violation: Violation,
}

impl fmt::Display for LocatedViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "  (root): {}", self.violation)
        } else {
            write!(f, "  {}: {}", self.path, self.violation)
        }
    }
}

/// Every leaf failure of one [`ValidationResult`], in traversal order
/// (array indices ascending, map keys sorted).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValidationViolations {
    violations: Vec<LocatedViolation>,
}

impl ValidationViolations {
    /// Number of failing leaves.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// True when no leaf failed.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Located failures, in traversal order.
    pub fn violations(&self) -> &[LocatedViolation] {
        &self.violations
    }

    /// The failure at exactly `path`, if that position failed. Passing
    /// positions and interior nodes return `None`.
    pub fn at(&self, path: &str) -> Option<&Violation> {
        self.violations
            .iter()
            .find(|v| v.path == path)
            .map(|v| &v.violation)
    }

    /// Take ownership of the located failures.
    pub fn into_inner(self) -> Vec<LocatedViolation> {
        self.violations
    }
}

impl fmt::Display for ValidationViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines = self.violations.iter();
        if let Some(first) = lines.next() {
            write!(f, "{first}")?;
        }
        lines.try_for_each(|located| write!(f, "\n{located}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::SchemaKind;
    use serde_json::json;

    fn nested() -> ValidationResult {
        let mut inner = BTreeMap::new();
        inner.insert("ok".to_string(), ValidationResult::Valid);
        inner.insert(
            "a/b".to_string(),
            ValidationResult::InvalidLeaf(Violation::not_a(SchemaKind::Number)),
        );

        let mut outer = BTreeMap::new();
        outer.insert("id".to_string(), ValidationResult::InvalidLeaf(Violation::MissingKey));
        outer.insert(
            "tags".to_string(),
            ValidationResult::InvalidSequence(vec![
                ValidationResult::Valid,
                ValidationResult::InvalidMapping(inner),
            ]),
        );
        ValidationResult::InvalidMapping(outer)
    }

    #[test]
    fn valid_is_default() {
        assert!(ValidationResult::default().is_valid());
        assert_eq!(ValidationResult::Valid.to_string(), "valid");
    }

    #[test]
    fn flatten_produces_json_pointers() {
        let violations = nested().violations();
        assert_eq!(violations.len(), 2);
        assert_eq!(violations.at("/id"), Some(&Violation::MissingKey));
        assert_eq!(
            violations.at("/tags/1/a~1b"),
            Some(&Violation::not_a(SchemaKind::Number))
        );
        assert!(violations.at("/tags/0").is_none());
    }

    #[test]
    fn root_leaf_renders_as_root() {
        let result = ValidationResult::from(Violation::Absent(SchemaKind::Boolean));
        assert_eq!(result.to_string(), "  (root): boolean is null or undefined");
    }

    #[test]
    fn display_lists_one_line_per_violation() {
        let rendered = nested().to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "  /id: missing this key");
        assert_eq!(lines[1], "  /tags/1/a~1b: not a number");
    }

    #[test]
    fn to_json_matches_serialize() {
        let result = nested();
        let expected = json!({
            "id": "missing this key",
            "tags": [null, {"a/b": "not a number", "ok": null}],
        });
        assert_eq!(result.to_json(), expected);
        assert_eq!(serde_json::to_value(&result).unwrap(), expected);
    }

    #[test]
    fn accessors_select_variant() {
        let seq = ValidationResult::InvalidSequence(vec![ValidationResult::Valid]);
        assert!(seq.as_sequence().is_some());
        assert!(seq.as_mapping().is_none());
        assert!(seq.as_leaf().is_none());
        assert!(seq.is_invalid());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn leaf() -> impl Strategy<Value = ValidationResult> {
            prop_oneof![
                Just(ValidationResult::Valid),
                Just(ValidationResult::InvalidLeaf(Violation::MissingKey)),
                Just(ValidationResult::InvalidLeaf(Violation::ExtraItem)),
                (-100.0f64..100.0).prop_map(|actual| {
                    ValidationResult::InvalidLeaf(Violation::BelowMinimum {
                        minimum: 100.0,
                        actual,
                    })
                }),
            ]
        }

        fn tree() -> impl Strategy<Value = ValidationResult> {
            leaf().prop_recursive(4, 64, 6, |inner| {
                prop_oneof![
                    prop::collection::vec(inner.clone(), 0..6)
                        .prop_map(ValidationResult::InvalidSequence),
                    prop::collection::btree_map("[a-z~/]{1,6}", inner, 0..6)
                        .prop_map(ValidationResult::InvalidMapping),
                ]
            })
        }

        fn count_strings(value: &Value) -> usize {
            match value {
                Value::String(_) => 1,
                Value::Array(items) => items.iter().map(count_strings).sum(),
                Value::Object(entries) => entries.values().map(count_strings).sum(),
                _ => 0,
            }
        }

        proptest! {
            /// Every leaf in the JSON shape is exactly one flattened violation.
            #[test]
            fn flatten_counts_every_leaf(result in tree()) {
                prop_assert_eq!(result.violations().len(), count_strings(&result.to_json()));
            }

            /// The manual JSON rendering agrees with the serde implementation.
            #[test]
            fn to_json_agrees_with_serde(result in tree()) {
                prop_assert_eq!(serde_json::to_value(&result).unwrap(), result.to_json());
            }
        }
    }
}
