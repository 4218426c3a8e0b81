//! schemagen library
//!
//! Command handlers and argument definitions behind the `schemagen` binary.
//! The generation engine itself lives in the `schema-generator` crate and the
//! schema model in `schema-core`.
//!
//! # CLI Usage
//!
//! ```bash
//! # One document, seed 42
//! schemagen generate --schema user.json
//!
//! # 100 documents as JSON lines, all optional fields filled
//! schemagen generate --schema user.json --count 100 --all-fields --output users.jsonl
//!
//! # Settings from a file, with a time limit per document
//! schemagen generate --schema user.yaml --config schemagen.toml --timeout 2s
//!
//! # Report contradictory bounds
//! schemagen validate --schema user.json
//! ```

use clap::Args;
use std::path::PathBuf;

pub mod commands;
pub mod config;

/// Arguments for `schemagen generate`.
#[derive(Args, Clone, Debug)]
pub struct GenerateArgs {
    /// Path to the JSON Schema file (.json, .yaml or .yml)
    #[arg(long, short = 's')]
    pub schema: PathBuf,

    /// Random seed for deterministic generation (same seed = same data) [default: 42]
    #[arg(long, env = "SCHEMAGEN_SEED")]
    pub seed: Option<u64>,

    /// Maximum recursion depth [default: 10]
    #[arg(long, env = "SCHEMAGEN_MAX_DEPTH")]
    pub max_depth: Option<usize>,

    /// Populate optional properties and synthesize additional properties
    #[arg(long)]
    pub all_fields: bool,

    /// Number of documents to generate [default: 1]
    #[arg(long, short = 'n')]
    pub count: Option<u64>,

    /// Pretty-print each document instead of one JSON line per document
    #[arg(long)]
    pub pretty: bool,

    /// Time limit per document (e.g. "500ms", "30s", "1m")
    #[arg(long)]
    pub timeout: Option<String>,

    /// Config file with default settings (TOML, YAML or JSON)
    #[arg(long, env = "SCHEMAGEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

/// Arguments for `schemagen validate`.
#[derive(Args, Clone, Debug)]
pub struct ValidateArgs {
    /// Path to the JSON Schema file (.json, .yaml or .yml)
    #[arg(long, short = 's')]
    pub schema: PathBuf,
}
