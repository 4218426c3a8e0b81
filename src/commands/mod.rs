//! Command handlers.
//!
//! This module contains handlers for the generate and validate commands.

pub mod generate;
pub mod validate;

pub use generate::{run_generate, write_documents, GenerateMetrics};
pub use validate::{run_validate, validate_schema_file};
