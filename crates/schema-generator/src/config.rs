//! Generator configuration.

use serde::{Deserialize, Serialize};

/// Default ceiling on recursion depth.
pub const DEFAULT_MAX_DEPTH: usize = 10;

/// How `allOf` branches are combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum MergeStrategy {
    /// Generate from the first branch and ignore the others.
    ///
    /// The result is not guaranteed to satisfy the remaining branches.
    #[default]
    FirstBranchOnly,
}

/// Configuration for a [`Generator`](crate::Generator).
///
/// Built once and handed to the generator at construction. The builder
/// methods consume and return the config so it can be assembled inline:
///
/// ```rust
/// use schema_generator::GeneratorConfig;
///
/// let config = GeneratorConfig::new(42)
///     .with_max_depth(5)
///     .with_generate_all_fields(true);
/// assert_eq!(config.seed, 42);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Seed for the random stream (same seed = same output)
    pub seed: u64,

    /// Recursion ceiling; reaching it fails generation
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Populate optional properties and synthesize additional properties
    #[serde(default)]
    pub generate_all_fields: bool,

    /// Policy for `allOf`
    #[serde(default)]
    pub merge_strategy: MergeStrategy,
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

impl GeneratorConfig {
    /// Create a config with the given seed and default settings.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            max_depth: DEFAULT_MAX_DEPTH,
            generate_all_fields: false,
            merge_strategy: MergeStrategy::default(),
        }
    }

    /// Set the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the recursion ceiling.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Generate optional fields too, not only `required` ones.
    pub fn with_generate_all_fields(mut self, all: bool) -> Self {
        self.generate_all_fields = all;
        self
    }

    /// Set the `allOf` policy.
    pub fn with_merge_strategy(mut self, strategy: MergeStrategy) -> Self {
        self.merge_strategy = strategy;
        self
    }
}

impl Default for GeneratorConfig {
    /// Default settings with a seed drawn from OS entropy.
    fn default() -> Self {
        Self::new(rand::random())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::new(7);
        assert_eq!(config.seed, 7);
        assert_eq!(config.max_depth, 10);
        assert!(!config.generate_all_fields);
        assert_eq!(config.merge_strategy, MergeStrategy::FirstBranchOnly);
    }

    #[test]
    fn test_builder_chain() {
        let config = GeneratorConfig::default()
            .with_seed(1)
            .with_max_depth(3)
            .with_generate_all_fields(true);
        assert_eq!(config.seed, 1);
        assert_eq!(config.max_depth, 3);
        assert!(config.generate_all_fields);
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: GeneratorConfig = serde_json::from_str(r#"{"seed": 99}"#).unwrap();
        assert_eq!(config, GeneratorConfig::new(99));

        let config: GeneratorConfig = serde_json::from_str(
            r#"{"seed": 1, "max_depth": 4, "generate_all_fields": true, "merge_strategy": "first_branch_only"}"#,
        )
        .unwrap();
        assert_eq!(config.max_depth, 4);
        assert!(config.generate_all_fields);
    }
}
