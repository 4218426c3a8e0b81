//! Classification of a schema node into the rule that generates it.
//!
//! Keywords are checked in a fixed priority order; the first that applies
//! decides the [`Shape`]:
//!
//! 1. `const`
//! 2. `enum` (non-empty)
//! 3. `oneOf`, then `anyOf`, then `allOf` (when present, even if empty)
//! 4. `type` (non-empty)
//! 5. inference: `properties` → object, `items` → array, otherwise empty object
//!
//! Cancellation and depth checks happen before classification, in the
//! generator itself.

use schema_core::{Schema, SchemaType};
use serde_json::Value;

/// Composition keyword selected for a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Composition {
    OneOf,
    AnyOf,
    AllOf,
}

impl Composition {
    /// Keyword spelling, for messages.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::OneOf => "oneOf",
            Self::AnyOf => "anyOf",
            Self::AllOf => "allOf",
        }
    }
}

/// Structure inferred for a node without a declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inferred {
    /// `properties` present
    Object,
    /// `items` present
    Array,
    /// Nothing to go on; generates `{}`
    Empty,
}

/// How a schema node is generated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape<'a> {
    /// Return the literal verbatim
    Const(&'a Value),
    /// Pick one candidate uniformly
    Enum(&'a [Value]),
    /// Pick a branch according to the keyword
    Composition(Composition, &'a [Schema]),
    /// Generate one of the declared types
    Typed(&'a [SchemaType]),
    /// Generate from structure alone
    Inferred(Inferred),
}

/// Decide which rule generates `schema`.
pub fn classify(schema: &Schema) -> Shape<'_> {
    if let Some(value) = &schema.const_value {
        return Shape::Const(value);
    }

    if !schema.enum_values.is_empty() {
        return Shape::Enum(&schema.enum_values);
    }

    let compositions = [
        (Composition::OneOf, &schema.one_of),
        (Composition::AnyOf, &schema.any_of),
        (Composition::AllOf, &schema.all_of),
    ];
    for (kind, branches) in compositions {
        if let Some(branches) = branches {
            return Shape::Composition(kind, branches);
        }
    }

    if !schema.types().is_empty() {
        return Shape::Typed(schema.types());
    }

    if schema.properties.is_some() {
        Shape::Inferred(Inferred::Object)
    } else if schema.items.is_some() {
        Shape::Inferred(Inferred::Array)
    } else {
        Shape::Inferred(Inferred::Empty)
    }
}
