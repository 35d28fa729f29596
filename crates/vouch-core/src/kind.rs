//! # Schema Kinds
//!
//! The closed set of validator variants. Used to name the expected type in
//! absence and type-mismatch violations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The variant of a schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaKind {
    /// `true` or `false`.
    Boolean,
    /// Any JSON number, integral or fractional.
    Number,
    /// A UTF-8 string.
    String,
    /// An ordered sequence of values.
    Array,
    /// A string-keyed object.
    Map,
}

impl SchemaKind {
    /// All variants, in declaration order.
    pub const ALL: [SchemaKind; 5] = [
        SchemaKind::Boolean,
        SchemaKind::Number,
        SchemaKind::String,
        SchemaKind::Array,
        SchemaKind::Map,
    ];

    /// Lowercase name used in violation messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaKind::Boolean => "boolean",
            SchemaKind::Number => "number",
            SchemaKind::String => "string",
            SchemaKind::Array => "array",
            SchemaKind::Map => "map",
        }
    }

    /// The name preceded by its indefinite article ("a number", "an array").
    pub fn with_article(&self) -> &'static str {
        match self {
            SchemaKind::Boolean => "a boolean",
            SchemaKind::Number => "a number",
            SchemaKind::String => "a string",
            SchemaKind::Array => "an array",
            SchemaKind::Map => "a map",
        }
    }
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_lowercase() {
        for kind in SchemaKind::ALL {
            assert_eq!(kind.as_str(), kind.as_str().to_lowercase());
            assert_eq!(kind.to_string(), kind.as_str());
        }
    }

    #[test]
    fn articles_match_leading_sound() {
        assert_eq!(SchemaKind::Array.with_article(), "an array");
        assert_eq!(SchemaKind::Map.with_article(), "a map");
        assert_eq!(SchemaKind::Boolean.with_article(), "a boolean");
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&SchemaKind::Number).unwrap();
        assert_eq!(json, "\"number\"");
        let back: SchemaKind = serde_json::from_str("\"map\"").unwrap();
        assert_eq!(back, SchemaKind::Map);
    }
}
