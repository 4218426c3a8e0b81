//! Command-line interface for schemagen
//!
//! # Usage Examples
//!
//! ## Generate
//! ```bash
//! # One document to stdout
//! schemagen generate --schema user.json --seed 7
//!
//! # A reproducible batch of JSON lines
//! schemagen generate --schema user.json --count 1000 --output users.jsonl
//!
//! # Fill optional fields, cap recursion, pretty-print
//! schemagen generate --schema order.yaml --all-fields --max-depth 4 --pretty
//! ```
//!
//! ## Validate
//! ```bash
//! schemagen validate --schema user.json
//! ```
//!
//! ## Environment
//! - `SCHEMAGEN_SEED`, `SCHEMAGEN_MAX_DEPTH`, `SCHEMAGEN_CONFIG` back the
//!   corresponding flags
//! - `RUST_LOG` controls log output (e.g. `RUST_LOG=schema_generator=debug`)

use clap::{Parser, Subcommand};
use schemagen::commands::{run_generate, run_validate};
use schemagen::{GenerateArgs, ValidateArgs};

#[derive(Parser)]
#[command(name = "schemagen")]
#[command(about = "Generate synthetic JSON values from a JSON Schema")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate documents that satisfy a schema
    Generate {
        #[command(flatten)]
        args: GenerateArgs,
    },

    /// Check a schema for contradictory bounds
    Validate {
        #[command(flatten)]
        args: ValidateArgs,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { args } => {
            run_generate(args)?;
        }
        Commands::Validate { args } => {
            run_validate(args)?;
        }
    }

    Ok(())
}
