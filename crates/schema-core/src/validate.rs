//! Pre-generation validation of schema bounds.
//!
//! The validator does not check full JSON Schema correctness. It only looks
//! for bound pairs that no value could ever satisfy:
//!
//! - `minimum > maximum`
//! - `exclusiveMinimum >= exclusiveMaximum`
//! - `minLength > maxLength`
//! - `minItems > maxItems`
//!
//! Each finding carries the dotted/indexed path of the offending sub-schema,
//! e.g. `user.profile.oneOf[1]`.

use crate::schema::Schema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A contradictory constraint found in a schema.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{}", display_validation(.path, .message))]
pub struct ValidationError {
    /// Path of the sub-schema; empty for the document root
    pub path: String,

    /// What is wrong
    pub message: String,
}

impl ValidationError {
    /// Create a new validation error.
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

fn display_validation(path: &str, message: &str) -> String {
    if path.is_empty() {
        message.to_string()
    } else {
        format!("validation error at {path}: {message}")
    }
}

impl Schema {
    /// Validate the schema, returning the first error found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.validate_with_details("").into_iter().next() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    /// Validate the schema and return every error found, in document order.
    ///
    /// Errors for this node come first, then errors from properties (by name),
    /// then from `oneOf`, `anyOf` and `allOf` branches.
    pub fn validate_with_details(&self, base_path: &str) -> Vec<ValidationError> {
        let mut errors = self.bound_errors(base_path);

        if let Some(properties) = &self.properties {
            for (name, property) in properties {
                let path = property_path(base_path, name);
                errors.extend(property.validate_with_details(&path));
            }
        }

        let branches = [
            ("oneOf", &self.one_of),
            ("anyOf", &self.any_of),
            ("allOf", &self.all_of),
        ];
        for (keyword, schemas) in branches {
            for (idx, branch) in schemas.iter().flatten().enumerate() {
                let path = branch_path(base_path, keyword, idx);
                errors.extend(branch.validate_with_details(&path));
            }
        }

        errors
    }

    /// Check the four bound pairs of this node only.
    fn bound_errors(&self, path: &str) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if let (Some(min), Some(max)) = (self.minimum, self.maximum) {
            if min > max {
                errors.push(ValidationError::new(
                    path,
                    format!("minimum ({min}) cannot be greater than maximum ({max})"),
                ));
            }
        }

        if let (Some(min), Some(max)) = (self.exclusive_minimum, self.exclusive_maximum) {
            if min >= max {
                errors.push(ValidationError::new(
                    path,
                    format!("exclusiveMinimum ({min}) must be less than exclusiveMaximum ({max})"),
                ));
            }
        }

        if let (Some(min), Some(max)) = (self.min_length, self.max_length) {
            if min > max {
                errors.push(ValidationError::new(
                    path,
                    format!("minLength ({min}) cannot be greater than maxLength ({max})"),
                ));
            }
        }

        if let (Some(min), Some(max)) = (self.min_items, self.max_items) {
            if min > max {
                errors.push(ValidationError::new(
                    path,
                    format!("minItems ({min}) cannot be greater than maxItems ({max})"),
                ));
            }
        }

        errors
    }
}

fn property_path(base: &str, name: &str) -> String {
    if base.is_empty() {
        name.to_string()
    } else {
        format!("{base}.{name}")
    }
}

fn branch_path(base: &str, keyword: &str, idx: usize) -> String {
    if base.is_empty() {
        format!("{keyword}[{idx}]")
    } else {
        format!("{base}.{keyword}[{idx}]")
    }
}
