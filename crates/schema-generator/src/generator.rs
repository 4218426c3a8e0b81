//! Main generator producing values from a schema tree.

use crate::cancel::{CancelSignal, Deadline, NeverCancel};
use crate::config::GeneratorConfig;
use crate::error::GeneratorError;
use crate::generators::numeric::{self, NumberKind};
use crate::generators::string;
use crate::shape::{classify, Inferred, Shape};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use schema_core::{Schema, SchemaType};
use serde_json::{Map, Value};
use std::time::Duration;

/// Multiplier spreading per-index seeds across the seed space.
const SEED_STRIDE: u64 = 0x9E3779B97F4A7C15;

/// Schema-driven value generator.
///
/// Holds the configuration and a seeded random stream. Every draw advances
/// the stream, so two generators built from the same seed produce the same
/// sequence of values for the same sequence of calls.
///
/// Generating takes `&mut self`: one generator serves one caller at a time.
/// Use one generator per thread for parallel generation.
pub struct Generator {
    /// Active configuration
    pub(crate) config: GeneratorConfig,
    /// Seeded random number generator for reproducibility
    pub(crate) rng: StdRng,
}

impl Generator {
    /// Create a generator from a configuration.
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            rng: StdRng::seed_from_u64(config.seed),
            config,
        }
    }

    /// Create a generator with the given seed and default settings.
    pub fn with_seed(seed: u64) -> Self {
        Self::new(GeneratorConfig::new(seed))
    }

    /// Get the active configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Get the seed the random stream was last reset to.
    pub fn seed(&self) -> u64 {
        self.config.seed
    }

    /// Get the recursion ceiling.
    pub fn max_depth(&self) -> usize {
        self.config.max_depth
    }

    /// Reset the random stream to a fresh state for `seed`.
    pub fn set_seed(&mut self, seed: u64) -> &mut Self {
        self.config.seed = seed;
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Set the recursion ceiling.
    pub fn set_max_depth(&mut self, max_depth: usize) -> &mut Self {
        self.config.max_depth = max_depth;
        self
    }

    /// Populate optional properties and synthesize additional ones.
    pub fn set_generate_all_fields(&mut self, all: bool) -> &mut Self {
        self.config.generate_all_fields = all;
        self
    }

    /// Compute the seed for the `index`-th document of a batch.
    ///
    /// Index 0 maps to `seed` itself, so a batch of one matches a single
    /// call with the same seed.
    pub fn seed_for_index(seed: u64, index: u64) -> u64 {
        seed.wrapping_add(index.wrapping_mul(SEED_STRIDE))
    }

    /// Validate `schema`, then generate one value from the root.
    pub fn generate_value(&mut self, schema: &Schema) -> Result<Value, GeneratorError> {
        self.generate_with_cancel(schema, &NeverCancel)
    }

    /// Validate `schema`, then generate one value, polling `cancel` at every
    /// recursive step.
    pub fn generate_with_cancel(
        &mut self,
        schema: &Schema,
        cancel: &dyn CancelSignal,
    ) -> Result<Value, GeneratorError> {
        schema.validate()?;
        tracing::debug!(
            seed = self.config.seed,
            max_depth = self.config.max_depth,
            all_fields = self.config.generate_all_fields,
            "Generating value"
        );
        self.generate(schema, 0, cancel)
    }

    /// Parse JSON schema text, validate it, and generate one value.
    pub fn generate_from_str(&mut self, raw: &str) -> Result<Value, GeneratorError> {
        let schema = Schema::from_json(raw)?;
        self.generate_value(&schema)
    }

    /// Generate one value and serialize it to compact JSON.
    pub fn generate_as_bytes(&mut self, schema: &Schema) -> Result<Vec<u8>, GeneratorError> {
        let value = self.generate_value(schema)?;
        Ok(serde_json::to_vec(&value)?)
    }

    /// Lazily generate `count` documents, each from its own derived seed.
    ///
    /// Document `i` is produced after re-seeding with
    /// [`seed_for_index`](Self::seed_for_index), so any single document can
    /// be reproduced without generating the ones before it.
    ///
    /// Only the RNG stream is re-seeded; [`seed`](Self::seed) keeps
    /// reporting the configured seed during and after the batch.
    pub fn documents<'a>(&'a mut self, schema: &'a Schema, count: u64) -> DocumentIterator<'a> {
        DocumentIterator {
            base_seed: self.config.seed,
            generator: self,
            schema,
            index: 0,
            count,
            timeout: None,
        }
    }

    /// Generate a value for `schema` at the given depth.
    ///
    /// This is the recursive entry point. It does not validate; callers at
    /// the root should go through [`generate_value`](Self::generate_value).
    pub fn generate(
        &mut self,
        schema: &Schema,
        depth: usize,
        cancel: &dyn CancelSignal,
    ) -> Result<Value, GeneratorError> {
        if cancel.is_cancelled() {
            return Err(GeneratorError::Cancelled);
        }

        if depth >= self.config.max_depth {
            return Err(GeneratorError::DepthExceeded {
                max_depth: self.config.max_depth,
            });
        }

        match classify(schema) {
            Shape::Const(value) => Ok(value.clone()),
            Shape::Enum(values) => {
                let idx = self.rng.gen_range(0..values.len());
                Ok(values[idx].clone())
            }
            Shape::Composition(kind, branches) => {
                self.generate_composition(kind, branches, depth, cancel)
            }
            Shape::Typed(types) => {
                let chosen = if types.len() > 1 {
                    &types[self.rng.gen_range(0..types.len())]
                } else {
                    &types[0]
                };
                self.generate_type(schema, chosen, depth, cancel)
            }
            Shape::Inferred(Inferred::Object) => self.generate_object(schema, depth, cancel),
            Shape::Inferred(Inferred::Array) => self.generate_array(schema, depth, cancel),
            Shape::Inferred(Inferred::Empty) => Ok(Value::Object(Map::new())),
        }
    }

    fn generate_type(
        &mut self,
        schema: &Schema,
        schema_type: &SchemaType,
        depth: usize,
        cancel: &dyn CancelSignal,
    ) -> Result<Value, GeneratorError> {
        match schema_type {
            SchemaType::String => string::generate_string(&mut self.rng, schema).map(Value::String),
            SchemaType::Number => numeric::generate_number(&mut self.rng, schema, NumberKind::Float),
            SchemaType::Integer => {
                numeric::generate_number(&mut self.rng, schema, NumberKind::Integer)
            }
            SchemaType::Boolean => Ok(Value::Bool(self.rng.gen_bool(0.5))),
            SchemaType::Null => Ok(Value::Null),
            SchemaType::Object => self.generate_object(schema, depth, cancel),
            SchemaType::Array => self.generate_array(schema, depth, cancel),
            SchemaType::Unknown(name) => Err(GeneratorError::UnsupportedType(name.clone())),
        }
    }
}

impl Default for Generator {
    /// A generator with default settings and an entropy-drawn seed.
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

/// Iterator that lazily generates documents from one schema.
pub struct DocumentIterator<'a> {
    generator: &'a mut Generator,
    schema: &'a Schema,
    base_seed: u64,
    index: u64,
    count: u64,
    timeout: Option<Duration>,
}

impl DocumentIterator<'_> {
    /// Give each document its own deadline of `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Index of the next document to be produced.
    pub fn current_index(&self) -> u64 {
        self.index
    }
}

impl Iterator for DocumentIterator<'_> {
    type Item = Result<Value, GeneratorError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.count {
            return None;
        }

        let seed = Generator::seed_for_index(self.base_seed, self.index);
        self.index += 1;
        self.generator.rng = StdRng::seed_from_u64(seed);
        Some(match self.timeout {
            Some(timeout) => self
                .generator
                .generate_with_cancel(self.schema, &Deadline::after(timeout)),
            None => self.generator.generate_value(self.schema),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.count - self.index) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DocumentIterator<'_> {}
