//! The parsed JSON Schema tree.
//!
//! A [`Schema`] is built once from schema text and is read-only afterwards.
//! Every sub-schema (properties, items, composition branches) is owned by its
//! parent, so a document is a plain tree.
//!
//! ## Supported keywords
//!
//! - Generic: `type`, `enum`, `const`, `title`, `description`
//! - String: `minLength`, `maxLength`, `pattern`, `format`
//! - Number: `minimum`, `maximum`, `exclusiveMinimum`, `exclusiveMaximum`, `multipleOf`
//! - Object: `properties`, `required`, `additionalProperties`
//! - Array: `items` (single schema or tuple), `minItems`, `maxItems`
//! - Composition: `oneOf`, `anyOf`, `allOf`
//!
//! `$ref`, `$defs` and `definitions` are accepted so real-world documents
//! parse, but references are never resolved.

use crate::types::{SchemaType, TypeSet};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for schema parsing.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Error reading schema file
    #[error("Failed to read schema file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing JSON
    #[error("Failed to parse schema: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML schema: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

// ============================================================================
// Schema
// ============================================================================

/// A JSON Schema document or sub-schema.
///
/// `properties` is a `BTreeMap`, so iterating it always visits field names in
/// lexicographic order. Generation draws randomness once per property, and
/// this fixed order is what makes output reproducible for a given seed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    /// Declared type(s); empty when the keyword is absent
    #[serde(rename = "type", default, skip_serializing_if = "TypeSet::is_empty")]
    pub schema_type: TypeSet,

    /// Human-readable title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Candidate values, any one of which is valid
    #[serde(rename = "enum", default, skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<Value>,

    /// Exact value; a JSON `null` here is treated as absent
    #[serde(rename = "const", default, skip_serializing_if = "Option::is_none")]
    pub const_value: Option<Value>,

    // String facet
    /// Minimum string length (inclusive)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,

    /// Maximum string length (inclusive)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,

    /// Regular expression the string must match
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// Named semantic string kind (`email`, `uuid`, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    // Number facet
    /// Inclusive lower bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,

    /// Inclusive upper bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,

    /// Exclusive lower bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclusive_minimum: Option<f64>,

    /// Exclusive upper bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclusive_maximum: Option<f64>,

    /// Values must be a multiple of this
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiple_of: Option<f64>,

    // Object facet
    /// Declared fields, ordered by name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, Schema>>,

    /// Names of fields that must be present
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,

    /// Policy for fields not listed in `properties`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<AdditionalProperties>,

    // Array facet
    /// Element schema(s)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Items>,

    /// Minimum element count (inclusive)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_items: Option<usize>,

    /// Maximum element count (inclusive)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_items: Option<usize>,

    // Composition facet
    /// Exactly one branch should match
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub one_of: Option<Vec<Schema>>,

    /// At least one branch should match
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub any_of: Option<Vec<Schema>>,

    /// Every branch should match
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all_of: Option<Vec<Schema>>,

    // References (accepted, never resolved)
    /// `$ref`
    #[serde(rename = "$ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    /// `$defs` (Draft 2020-12)
    #[serde(rename = "$defs", default, skip_serializing_if = "Option::is_none")]
    pub defs: Option<BTreeMap<String, Value>>,

    /// `definitions` (Draft-07)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definitions: Option<BTreeMap<String, Value>>,
}

impl Schema {
    /// Create an empty schema with a single declared type.
    pub fn of_type(schema_type: SchemaType) -> Self {
        Self {
            schema_type: TypeSet::single(schema_type),
            ..Self::default()
        }
    }

    /// Load schema from a file.
    ///
    /// Files ending in `.yaml` or `.yml` are parsed as YAML, anything else as JSON.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml(&content),
            _ => Self::from_json(&content),
        }
    }

    /// Parse schema from JSON text.
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse schema from JSON bytes.
    pub fn from_json_slice(json: &[u8]) -> Result<Self, SchemaError> {
        Ok(serde_json::from_slice(json)?)
    }

    /// Parse schema from YAML text.
    pub fn from_yaml(yaml: &str) -> Result<Self, SchemaError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Build schema from an already-parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, SchemaError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Declared types in document order (empty when none are declared).
    pub fn types(&self) -> &[SchemaType] {
        self.schema_type.types()
    }

    /// The `pattern` keyword, ignoring an empty expression.
    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_deref().filter(|p| !p.is_empty())
    }

    /// The `format` keyword, ignoring an empty name.
    pub fn format(&self) -> Option<&str> {
        self.format.as_deref().filter(|f| !f.is_empty())
    }

    /// Check if a field is listed in `required`.
    pub fn is_required(&self, field: &str) -> bool {
        self.required.iter().any(|name| name == field)
    }

    /// Get a declared property schema by name.
    pub fn property(&self, name: &str) -> Option<&Schema> {
        self.properties.as_ref().and_then(|props| props.get(name))
    }

    /// Declared property names, in iteration (lexicographic) order.
    pub fn property_names(&self) -> Vec<&str> {
        self.properties
            .iter()
            .flat_map(|props| props.keys().map(String::as_str))
            .collect()
    }
}

// ============================================================================
// additionalProperties / items
// ============================================================================

/// Value of the `additionalProperties` keyword.
#[derive(Debug, Clone, PartialEq)]
pub enum AdditionalProperties {
    /// `true` allows arbitrary extra fields, `false` forbids them
    Allowed(bool),

    /// Extra fields must match this schema
    Schema(Box<Schema>),
}

impl AdditionalProperties {
    /// Check if extra fields are permitted at all.
    pub fn permits_extra(&self) -> bool {
        !matches!(self, Self::Allowed(false))
    }
}

impl Serialize for AdditionalProperties {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Allowed(allowed) => serializer.serialize_bool(*allowed),
            Self::Schema(schema) => schema.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for AdditionalProperties {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        match Value::deserialize(deserializer)? {
            Value::Bool(allowed) => Ok(Self::Allowed(allowed)),
            value @ Value::Object(_) => serde_json::from_value(value)
                .map(|schema| Self::Schema(Box::new(schema)))
                .map_err(|e| D::Error::custom(format!("invalid additionalProperties schema: {e}"))),
            other => Err(D::Error::custom(format!(
                "additionalProperties must be a boolean or a schema, got {other}"
            ))),
        }
    }
}

/// Value of the `items` keyword.
#[derive(Debug, Clone, PartialEq)]
pub enum Items {
    /// One schema applied to every element
    Single(Box<Schema>),

    /// Positional schemas; element `i` uses entry `i`
    Tuple(Vec<Schema>),

    /// Any other JSON shape. Kept verbatim so generation can reject it.
    Unsupported(Value),
}

impl Items {
    /// Short name of the shape, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Single(_) => "schema",
            Self::Tuple(_) => "tuple",
            Self::Unsupported(Value::Null) => "null",
            Self::Unsupported(Value::Bool(_)) => "boolean",
            Self::Unsupported(Value::Number(_)) => "number",
            Self::Unsupported(Value::String(_)) => "string",
            Self::Unsupported(_) => "value",
        }
    }
}

impl Serialize for Items {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Single(schema) => schema.serialize(serializer),
            Self::Tuple(schemas) => schemas.serialize(serializer),
            Self::Unsupported(value) => value.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Items {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        match Value::deserialize(deserializer)? {
            value @ Value::Object(_) => serde_json::from_value(value)
                .map(|schema| Self::Single(Box::new(schema)))
                .map_err(|e| D::Error::custom(format!("invalid items schema: {e}"))),
            Value::Array(entries) => entries
                .into_iter()
                .enumerate()
                .map(|(idx, entry)| {
                    serde_json::from_value(entry)
                        .map_err(|e| D::Error::custom(format!("invalid items schema at index {idx}: {e}")))
                })
                .collect::<Result<Vec<Schema>, _>>()
                .map(Self::Tuple),
            other => Ok(Self::Unsupported(other)),
        }
    }
}
