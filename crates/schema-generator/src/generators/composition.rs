//! `oneOf` / `anyOf` / `allOf` handling.

use crate::cancel::CancelSignal;
use crate::config::MergeStrategy;
use crate::error::GeneratorError;
use crate::generator::Generator;
use crate::shape::Composition;
use rand::Rng;
use schema_core::Schema;
use serde_json::Value;

impl Generator {
    /// Generate from one branch of a composition.
    ///
    /// `oneOf` and `anyOf` pick a branch uniformly. `allOf` follows the
    /// configured [`MergeStrategy`]. The chosen branch is generated one
    /// level deeper.
    pub(crate) fn generate_composition(
        &mut self,
        kind: Composition,
        branches: &[Schema],
        depth: usize,
        cancel: &dyn CancelSignal,
    ) -> Result<Value, GeneratorError> {
        if branches.is_empty() {
            return Err(GeneratorError::EmptyComposition(kind.keyword()));
        }

        let chosen = match kind {
            Composition::OneOf | Composition::AnyOf => {
                &branches[self.rng.gen_range(0..branches.len())]
            }
            Composition::AllOf => match self.config.merge_strategy {
                MergeStrategy::FirstBranchOnly => {
                    if branches.len() > 1 {
                        tracing::debug!(
                            ignored = branches.len() - 1,
                            "allOf: generating from the first branch only"
                        );
                    }
                    &branches[0]
                }
            },
        };

        self.generate(chosen, depth + 1, cancel)
    }
}
