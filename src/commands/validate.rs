//! `schemagen validate` command handler.

use crate::ValidateArgs;
use anyhow::Context;
use schema_core::{Schema, ValidationError};
use std::path::Path;
use tracing::info;

/// Load a schema file and collect every validation error in it.
pub fn validate_schema_file(path: &Path) -> anyhow::Result<Vec<ValidationError>> {
    let schema = Schema::from_file(path)
        .with_context(|| format!("Failed to load schema from {path:?}"))?;
    Ok(schema.validate_with_details(""))
}

/// Run the validate command.
///
/// Prints one line per error and fails when any were found.
pub fn run_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let errors = validate_schema_file(&args.schema)?;

    if errors.is_empty() {
        info!("Schema {:?} is valid", args.schema);
        println!("{}: ok", args.schema.display());
        return Ok(());
    }

    for error in &errors {
        let path = if error.path.is_empty() {
            "(root)"
        } else {
            error.path.as_str()
        };
        println!("{path}: {}", error.message);
    }

    anyhow::bail!(
        "Schema {:?} has {} validation error(s)",
        args.schema,
        errors.len()
    )
}
