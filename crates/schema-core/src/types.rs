//! JSON Schema type names.
//!
//! This module defines `SchemaType`, one of the seven primitive JSON Schema
//! type names, and `TypeSet`, the value of the `type` keyword.
//!
//! # Format
//!
//! The `type` keyword accepts either a single name or a list of names:
//! ```json
//! { "type": "string" }
//! { "type": ["string", "null"] }
//! ```
//!
//! Unrecognised names are kept as `SchemaType::Unknown` instead of failing the
//! parse, so the generator can report them as unsupported for the exact
//! sub-schema that uses them.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A JSON Schema primitive type name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SchemaType {
    /// `"string"`
    String,

    /// `"number"` (any JSON number)
    Number,

    /// `"integer"` (numbers without a fractional part)
    Integer,

    /// `"boolean"`
    Boolean,

    /// `"object"`
    Object,

    /// `"array"`
    Array,

    /// `"null"`
    Null,

    /// Any other name. Parsed successfully, rejected at generation time.
    Unknown(String),
}

impl SchemaType {
    /// The keyword spelling of this type.
    pub fn as_str(&self) -> &str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Object => "object",
            Self::Array => "array",
            Self::Null => "null",
            Self::Unknown(name) => name,
        }
    }
}

impl From<&str> for SchemaType {
    fn from(name: &str) -> Self {
        match name {
            "string" => Self::String,
            "number" => Self::Number,
            "integer" => Self::Integer,
            "boolean" => Self::Boolean,
            "object" => Self::Object,
            "array" => Self::Array,
            "null" => Self::Null,
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SchemaType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SchemaType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(SchemaType::from(name.as_str()))
    }
}

/// The declared types of a schema (`type` keyword).
///
/// An empty set means no type was declared; the generator then infers the
/// type from the schema's structure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeSet {
    types: Vec<SchemaType>,
    /// Whether the document used the list form, kept so serialization
    /// round-trips `["string"]` as a list.
    list_form: bool,
}

impl TypeSet {
    /// Create a set holding a single type.
    pub fn single(schema_type: SchemaType) -> Self {
        Self {
            types: vec![schema_type],
            list_form: false,
        }
    }

    /// Create a set from a list of types.
    pub fn many(types: impl IntoIterator<Item = SchemaType>) -> Self {
        Self {
            types: types.into_iter().collect(),
            list_form: true,
        }
    }

    /// All declared types, in document order.
    pub fn types(&self) -> &[SchemaType] {
        &self.types
    }

    /// Check if no type was declared.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl From<SchemaType> for TypeSet {
    fn from(schema_type: SchemaType) -> Self {
        Self::single(schema_type)
    }
}

impl Serialize for TypeSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.types.as_slice() {
            [only] if !self.list_form => only.serialize(serializer),
            types => types.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for TypeSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{Error, SeqAccess, Visitor};

        struct TypeSetVisitor;

        impl<'de> Visitor<'de> for TypeSetVisitor {
            type Value = TypeSet;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a type name or an array of type names")
            }

            // "string"
            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: Error,
            {
                // An empty string is treated as "no type", matching an absent keyword
                if value.is_empty() {
                    return Ok(TypeSet::default());
                }
                Ok(TypeSet::single(SchemaType::from(value)))
            }

            // ["string", "null"]
            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut types = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(name) = seq.next_element::<String>()? {
                    types.push(SchemaType::from(name.as_str()));
                }
                Ok(TypeSet::many(types))
            }
        }

        deserializer.deserialize_any(TypeSetVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_type_from_str() {
        assert_eq!(SchemaType::from("string"), SchemaType::String);
        assert_eq!(SchemaType::from("integer"), SchemaType::Integer);
        assert_eq!(SchemaType::from("null"), SchemaType::Null);
        assert_eq!(
            SchemaType::from("decimal"),
            SchemaType::Unknown("decimal".to_string())
        );
    }

    #[test]
    fn test_type_set_single() {
        let set: TypeSet = serde_json::from_str(r#""boolean""#).unwrap();
        assert_eq!(set.types(), &[SchemaType::Boolean]);
        assert_eq!(serde_json::to_string(&set).unwrap(), r#""boolean""#);
    }

    #[test]
    fn test_type_set_list() {
        let set: TypeSet = serde_json::from_str(r#"["string", "null"]"#).unwrap();
        assert_eq!(set.types(), &[SchemaType::String, SchemaType::Null]);
        assert_eq!(
            serde_json::to_string(&set).unwrap(),
            r#"["string","null"]"#
        );
    }

    #[test]
    fn test_type_set_empty_forms() {
        let empty_list: TypeSet = serde_json::from_str("[]").unwrap();
        assert!(empty_list.is_empty());

        let empty_name: TypeSet = serde_json::from_str(r#""""#).unwrap();
        assert!(empty_name.is_empty());
    }

    #[test]
    fn test_type_set_rejects_non_string_entries() {
        assert!(serde_json::from_str::<TypeSet>("[1, 2]").is_err());
        assert!(serde_json::from_str::<TypeSet>("42").is_err());
    }

    #[test]
    fn test_type_set_keeps_unknown_names() {
        let set: TypeSet = serde_json::from_str(r#""unsupported_type""#).unwrap();
        assert_eq!(
            set.types(),
            &[SchemaType::Unknown("unsupported_type".to_string())]
        );
    }
}
