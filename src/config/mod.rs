//! Configuration for the `generate` command.
//!
//! Settings are resolved in three layers, highest priority first:
//!
//! 1. Command-line flags (and their `SCHEMAGEN_*` environment variables)
//! 2. The optional config file (`--config`, TOML, YAML or JSON)
//! 3. Built-in defaults
//!
//! ```toml
//! seed = 7
//! max_depth = 5
//! generate_all_fields = true
//! count = 10
//! timeout = "30s"
//! ```

pub mod duration;

use anyhow::Context;
use schema_generator::{GeneratorConfig, MergeStrategy, DEFAULT_MAX_DEPTH};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::GenerateArgs;

/// Seed used when neither the command line nor the config file sets one.
pub const DEFAULT_SEED: u64 = 42;

/// Contents of a config file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub seed: Option<u64>,
    pub max_depth: Option<usize>,
    pub generate_all_fields: Option<bool>,
    pub merge_strategy: Option<MergeStrategy>,
    pub count: Option<u64>,
    pub pretty: Option<bool>,
    /// Duration string, e.g. "30s"
    pub timeout: Option<String>,
}

impl FileConfig {
    /// Load a config file, choosing the format from its extension.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {path:?}"))?;

        let config: Self = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => toml::from_str(&content)
                .with_context(|| format!("TOML parse error in {path:?}"))?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .with_context(|| format!("YAML parse error in {path:?}"))?,
            Some("json") => serde_json::from_str(&content)
                .with_context(|| format!("JSON parse error in {path:?}"))?,
            other => anyhow::bail!(
                "Unsupported config file extension {other:?} (expected toml, yaml, yml or json)"
            ),
        };
        Ok(config)
    }
}

/// Fully resolved settings for one `generate` run.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateSettings {
    pub generator: GeneratorConfig,
    pub count: u64,
    pub pretty: bool,
    pub timeout: Option<Duration>,
}

impl GenerateSettings {
    /// Merge command-line arguments over the config file they name.
    pub fn resolve(args: &GenerateArgs) -> anyhow::Result<Self> {
        let file = match &args.config {
            Some(path) => FileConfig::from_file(path)?,
            None => FileConfig::default(),
        };
        Self::merge(args, file)
    }

    /// Merge command-line arguments over an already-loaded config file.
    pub fn merge(args: &GenerateArgs, file: FileConfig) -> anyhow::Result<Self> {
        let seed = args.seed.or(file.seed).unwrap_or(DEFAULT_SEED);
        let max_depth = args
            .max_depth
            .or(file.max_depth)
            .unwrap_or(DEFAULT_MAX_DEPTH);
        let generate_all_fields = args.all_fields || file.generate_all_fields.unwrap_or(false);

        let generator = GeneratorConfig::new(seed)
            .with_max_depth(max_depth)
            .with_generate_all_fields(generate_all_fields)
            .with_merge_strategy(file.merge_strategy.unwrap_or_default());

        let timeout = match args.timeout.as_deref().or(file.timeout.as_deref()) {
            Some(raw) => Some(
                duration::parse_duration(raw)
                    .with_context(|| format!("Invalid timeout format: {raw}"))?,
            ),
            None => None,
        };

        Ok(Self {
            generator,
            count: args.count.or(file.count).unwrap_or(1),
            pretty: args.pretty || file.pretty.unwrap_or(false),
            timeout,
        })
    }
}
