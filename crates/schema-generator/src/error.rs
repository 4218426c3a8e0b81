//! Error types for value generation.

use schema_core::{SchemaError, ValidationError};
use thiserror::Error;

/// Errors that can occur while generating a value.
///
/// Every error aborts the whole generation call; no partial value is ever
/// returned. Failures inside nested properties or array elements are wrapped
/// in [`GeneratorError::Field`] / [`GeneratorError::Item`] so the message
/// shows where they happened; [`GeneratorError::root_cause`] strips that
/// context again.
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// Schema text could not be parsed.
    #[error("{0}")]
    Schema(#[from] SchemaError),

    /// Schema contains contradictory bounds.
    #[error("invalid schema: {0}")]
    InvalidSchema(#[from] ValidationError),

    /// The cancellation signal was observed.
    #[error("generation cancelled")]
    Cancelled,

    /// Recursion reached the configured ceiling.
    #[error("maximum recursion depth ({max_depth}) exceeded")]
    DepthExceeded { max_depth: usize },

    /// A `type` name outside the seven JSON Schema types.
    #[error("unsupported type: {0}")]
    UnsupportedType(String),

    /// An `items` value that is neither a schema nor a list of schemas.
    #[error("unsupported items type: {0}")]
    UnsupportedItems(String),

    /// `oneOf`, `anyOf` or `allOf` present with no branches.
    #[error("{0} array is empty")]
    EmptyComposition(&'static str),

    /// `pattern` is not a usable regular expression.
    #[error("invalid regex pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// `pattern` is a valid regex that uses constructs the string generator
    /// cannot produce, such as word boundaries or anchors inside a group.
    #[error("unsupported regex pattern '{pattern}': {reason}")]
    UnsupportedPattern { pattern: String, reason: String },

    /// No candidate matched `pattern` within the attempt budget.
    #[error("no string matching pattern '{pattern}' after {attempts} attempts")]
    PatternExhausted { pattern: String, attempts: usize },

    /// Resolved numeric bounds leave no room for a value.
    #[error("minimum ({min}) is greater than maximum ({max})")]
    BoundsConflict { min: f64, max: f64 },

    /// A float draw produced NaN or infinity (unbounded numeric range).
    #[error("generated number {0} is not finite")]
    NonFiniteNumber(f64),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Failure while generating an object field.
    #[error("failed to generate field {field}: {source}")]
    Field {
        field: String,
        source: Box<GeneratorError>,
    },

    /// Failure while generating an array element.
    #[error("failed to generate array item {index}: {source}")]
    Item {
        index: usize,
        source: Box<GeneratorError>,
    },
}

impl GeneratorError {
    /// Wrap this error with the name of the field being generated.
    pub fn in_field(self, field: impl Into<String>) -> Self {
        Self::Field {
            field: field.into(),
            source: Box::new(self),
        }
    }

    /// Wrap this error with the index of the array element being generated.
    pub fn in_item(self, index: usize) -> Self {
        Self::Item {
            index,
            source: Box::new(self),
        }
    }

    /// The innermost error, with all field/item context removed.
    pub fn root_cause(&self) -> &GeneratorError {
        match self {
            Self::Field { source, .. } | Self::Item { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// Location of the failure inside the generated value, e.g. `user.tags[1]`.
    ///
    /// Empty when the failure happened at the root.
    pub fn path(&self) -> String {
        let mut path = String::new();
        let mut current = self;
        loop {
            match current {
                Self::Field { field, source } => {
                    if !path.is_empty() {
                        path.push('.');
                    }
                    path.push_str(field);
                    current = &**source;
                }
                Self::Item { index, source } => {
                    path.push_str(&format!("[{index}]"));
                    current = &**source;
                }
                _ => return path,
            }
        }
    }

    /// Check if generation stopped because of the cancellation signal.
    pub fn is_cancelled(&self) -> bool {
        matches!(self.root_cause(), Self::Cancelled)
    }

    /// Check if generation stopped at the depth ceiling.
    pub fn is_depth_exceeded(&self) -> bool {
        matches!(self.root_cause(), Self::DepthExceeded { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_wrapping() {
        let err = GeneratorError::UnsupportedType("decimal".to_string())
            .in_field("price")
            .in_item(2)
            .in_field("orders");

        assert_eq!(err.path(), "orders[2].price");
        assert!(matches!(
            err.root_cause(),
            GeneratorError::UnsupportedType(name) if name == "decimal"
        ));
        assert_eq!(
            err.to_string(),
            "failed to generate field orders: failed to generate array item 2: \
             failed to generate field price: unsupported type: decimal"
        );
    }

    #[test]
    fn test_root_error_has_empty_path() {
        let err = GeneratorError::DepthExceeded { max_depth: 3 };
        assert_eq!(err.path(), "");
        assert!(err.is_depth_exceeded());
        assert!(!err.is_cancelled());
    }

    #[test]
    fn test_cancelled_through_context() {
        let err = GeneratorError::Cancelled.in_field("a").in_field("b");
        assert!(err.is_cancelled());
        assert_eq!(err.path(), "b.a");
    }
}
