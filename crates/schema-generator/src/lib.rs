//! Seeded value generator for schemagen.
//!
//! This crate provides the [`Generator`], which walks a [`Schema`] tree and
//! produces a `serde_json::Value` that satisfies its constraints. The
//! generator uses a seeded RNG so the same seed, schema and settings always
//! produce the same value.
//!
//! # Architecture
//!
//! ```text
//! Schema (schema-core)
//!        │
//!        ▼  validate()
//! ┌──────────────────────┐
//! │      Generator       │
//! │                      │
//! │  - config            │
//! │  - rng (StdRng)      │
//! └──────────┬───────────┘
//!            │ classify() → Shape
//!            ▼
//!   const │ enum │ oneOf/anyOf/allOf │ typed │ inferred
//!            │
//!            ▼
//!   string / numeric / object / array generators
//!            │
//!            ▼
//!      serde_json::Value
//! ```
//!
//! # Example
//!
//! ```rust
//! use schema_generator::{Generator, GeneratorConfig};
//! use schema_core::Schema;
//!
//! let schema = Schema::from_json(r#"{
//!     "type": "object",
//!     "properties": {
//!         "name": {"type": "string"},
//!         "age": {"type": "integer", "minimum": 18, "maximum": 99}
//!     },
//!     "required": ["name", "age"]
//! }"#).unwrap();
//!
//! let mut generator = Generator::new(GeneratorConfig::new(42));
//! let value = generator.generate_value(&schema).unwrap();
//! assert!(value["age"].as_i64().unwrap() >= 18);
//! ```
//!
//! # Cancellation
//!
//! [`Generator::generate_with_cancel`] polls a [`CancelSignal`] before every
//! recursive step. Use an `AtomicBool` to stop from another thread, or a
//! [`Deadline`] for a time limit.

pub mod cancel;
pub mod config;
pub mod error;
pub mod generator;
pub mod generators;
pub mod shape;

// Re-exports for convenience
pub use cancel::{CancelSignal, Deadline, NeverCancel};
pub use config::{GeneratorConfig, MergeStrategy, DEFAULT_MAX_DEPTH};
pub use error::GeneratorError;
pub use generator::{DocumentIterator, Generator};
pub use schema_core::Schema;
pub use shape::{classify, Composition, Inferred, Shape};
