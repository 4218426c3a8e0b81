//! Array value generation.

use super::faker;
use crate::cancel::CancelSignal;
use crate::error::GeneratorError;
use crate::generator::Generator;
use rand::Rng;
use schema_core::{Items, Schema};
use serde_json::Value;

/// Upper element count used when `maxItems` is absent.
pub const DEFAULT_MAX_ITEMS: usize = 5;

impl Generator {
    /// Generate an array from `items`, `minItems` and `maxItems`.
    ///
    /// Without `items` every element is a word. A tuple applies its schemas
    /// by position; slots past the end of the tuple are words.
    pub(crate) fn generate_array(
        &mut self,
        schema: &Schema,
        depth: usize,
        cancel: &dyn CancelSignal,
    ) -> Result<Value, GeneratorError> {
        if let Some(items @ Items::Unsupported(_)) = &schema.items {
            return Err(GeneratorError::UnsupportedItems(items.kind().to_string()));
        }

        let min = schema.min_items.unwrap_or(0);
        let max = schema.max_items.unwrap_or(DEFAULT_MAX_ITEMS).max(min);
        let count = if max > min {
            self.rng.gen_range(min..=max)
        } else {
            min
        };

        let mut elements = Vec::with_capacity(count);
        for index in 0..count {
            let item_schema = match &schema.items {
                Some(Items::Single(item)) => Some(item.as_ref()),
                Some(Items::Tuple(positional)) => positional.get(index),
                _ => None,
            };

            let element = match item_schema {
                Some(item) => self
                    .generate(item, depth + 1, cancel)
                    .map_err(|e| e.in_item(index))?,
                None => Value::String(faker::word(&mut self.rng)),
            };
            elements.push(element);
        }

        Ok(Value::Array(elements))
    }
}
