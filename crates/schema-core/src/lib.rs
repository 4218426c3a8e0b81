//! Core schema types for schemagen.
//!
//! This crate provides the read-only model every other part of the
//! workspace consumes:
//!
//! - [`Schema`] - a parsed JSON Schema document (or sub-schema)
//! - [`SchemaType`] / [`TypeSet`] - the `type` keyword
//! - [`Items`] / [`AdditionalProperties`] - polymorphic array and object keywords
//! - [`ValidationError`] - a contradictory bound pair found before generation
//!
//! # Architecture
//!
//! ```text
//! schema-core (this crate)
//!    │
//!    └─── schema-generator  (walks a Schema to produce serde_json::Value)
//!            │
//!            └─── schemagen (CLI)
//! ```
//!
//! # Example
//!
//! ```rust
//! use schema_core::Schema;
//!
//! let schema = Schema::from_json(r#"{
//!     "type": "object",
//!     "properties": {
//!         "age": {"type": "integer", "minimum": 100, "maximum": 10}
//!     }
//! }"#).unwrap();
//!
//! let errors = schema.validate_with_details("");
//! assert_eq!(errors[0].path, "age");
//! ```

pub mod schema;
pub mod types;
pub mod validate;

// Re-exports for convenience
pub use schema::{AdditionalProperties, Items, Schema, SchemaError};
pub use types::{SchemaType, TypeSet};
pub use validate::ValidationError;
