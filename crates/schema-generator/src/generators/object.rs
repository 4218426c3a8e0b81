//! Object value generation.

use super::faker;
use crate::cancel::CancelSignal;
use crate::error::GeneratorError;
use crate::generator::Generator;
use rand::Rng;
use schema_core::{AdditionalProperties, Schema};
use serde_json::{Map, Value};

/// Most extra entries synthesized from `additionalProperties`.
pub const MAX_EXTRA_PROPERTIES: usize = 2;

impl Generator {
    /// Generate an object from `properties`, `required` and
    /// `additionalProperties`.
    ///
    /// Properties are visited in name order. Only required ones are filled
    /// unless `generate_all_fields` is set. A required name with no declared
    /// schema still gets a value (a plain word), but only when `properties`
    /// is present: without it the object is empty no matter what `required`
    /// lists, and `additionalProperties` is not consulted either.
    pub(crate) fn generate_object(
        &mut self,
        schema: &Schema,
        depth: usize,
        cancel: &dyn CancelSignal,
    ) -> Result<Value, GeneratorError> {
        let mut object = Map::new();

        let Some(properties) = &schema.properties else {
            return Ok(Value::Object(object));
        };

        for (name, property) in properties {
            if !self.config.generate_all_fields && !schema.is_required(name) {
                continue;
            }
            let value = self
                .generate(property, depth + 1, cancel)
                .map_err(|e| e.in_field(name.as_str()))?;
            object.insert(name.clone(), value);
        }

        for name in &schema.required {
            if !object.contains_key(name) && !properties.contains_key(name) {
                object.insert(name.clone(), Value::String(faker::word(&mut self.rng)));
            }
        }

        if self.config.generate_all_fields {
            if let Some(additional) = &schema.additional_properties {
                self.generate_additional(&mut object, schema, additional, depth, cancel)?;
            }
        }

        Ok(Value::Object(object))
    }

    fn generate_additional(
        &mut self,
        object: &mut Map<String, Value>,
        schema: &Schema,
        additional: &AdditionalProperties,
        depth: usize,
        cancel: &dyn CancelSignal,
    ) -> Result<(), GeneratorError> {
        if !additional.permits_extra() {
            return Ok(());
        }

        let count = self.rng.gen_range(0..=MAX_EXTRA_PROPERTIES);
        for _ in 0..count {
            let key = faker::word(&mut self.rng);
            let value = match additional {
                AdditionalProperties::Schema(extra) => self
                    .generate(extra, depth + 1, cancel)
                    .map_err(|e| e.in_field(key.as_str()))?,
                AdditionalProperties::Allowed(_) => Value::String(faker::word(&mut self.rng)),
            };

            if schema.property(&key).is_some() || object.contains_key(&key) {
                continue;
            }
            object.insert(key, value);
        }

        Ok(())
    }
}
