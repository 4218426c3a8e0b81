//! Numeric value generators.

use crate::error::GeneratorError;
use rand::Rng;
use schema_core::Schema;
use serde_json::{Number, Value};

/// Lower bound used when neither `minimum` nor `exclusiveMinimum` is set.
pub const DEFAULT_MINIMUM: f64 = 0.0;

/// Upper bound used when neither `maximum` nor `exclusiveMaximum` is set.
pub const DEFAULT_MAXIMUM: f64 = 1000.0;

/// Whether the value is an `integer` or a `number`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberKind {
    Integer,
    Float,
}

/// Resolve the effective inclusive `(min, max)` for a schema.
///
/// Inclusive bounds win over exclusive ones. For integers an exclusive
/// bound becomes the nearest integer strictly inside it.
pub fn resolve_bounds(schema: &Schema, kind: NumberKind) -> (f64, f64) {
    let min = schema
        .minimum
        .or_else(|| {
            schema.exclusive_minimum.map(|bound| match kind {
                NumberKind::Integer => bound.floor() + 1.0,
                NumberKind::Float => bound,
            })
        })
        .unwrap_or(DEFAULT_MINIMUM);

    let max = schema
        .maximum
        .or_else(|| {
            schema.exclusive_maximum.map(|bound| match kind {
                NumberKind::Integer => bound.floor() - 1.0,
                NumberKind::Float => bound,
            })
        })
        .unwrap_or(DEFAULT_MAXIMUM);

    (min, max)
}

/// Generate an `integer` or `number` value within the schema's bounds.
pub fn generate_number<R: Rng>(
    rng: &mut R,
    schema: &Schema,
    kind: NumberKind,
) -> Result<Value, GeneratorError> {
    let (min, max) = resolve_bounds(schema, kind);
    if min > max {
        return Err(GeneratorError::BoundsConflict { min, max });
    }

    let mut value = match kind {
        NumberKind::Integer => generate_int_in(rng, min, max),
        NumberKind::Float => generate_float_in(rng, min, max),
    };

    if let Some(multiple) = schema.multiple_of.filter(|m| *m > 0.0) {
        value = snap_to_multiple(value, multiple, min, max);
        // A fractional multiple can leave an integer draw fractional
        if kind == NumberKind::Integer {
            value = value.trunc();
        }
    }

    to_json_number(value, kind)
}

/// Uniform integer over `[ceil(min), floor(max)]`.
///
/// When rounding leaves no integer in range, `ceil(min)` is returned as is.
fn generate_int_in<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
    let low = min.ceil();
    let high = max.floor();
    if low >= high {
        return low;
    }
    rng.gen_range(low as i64..=high as i64) as f64
}

/// Uniform float over `[min, max)`.
fn generate_float_in<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
    if max > min {
        min + rng.gen::<f64>() * (max - min)
    } else {
        min
    }
}

/// Round to the nearest multiple, then step one multiple back inside the
/// range if rounding pushed the value out.
///
/// A single step is not always enough: when `multiple` is wider than the
/// range the result can still be out of bounds. That value is returned
/// anyway and a warning is logged.
pub fn snap_to_multiple(value: f64, multiple: f64, min: f64, max: f64) -> f64 {
    let mut snapped = (value / multiple).round() * multiple;
    if snapped < min {
        snapped += multiple;
    } else if snapped > max {
        snapped -= multiple;
    }

    if snapped < min || snapped > max {
        tracing::warn!(
            value = snapped,
            multiple,
            min,
            max,
            "multipleOf correction left value outside bounds"
        );
    }

    snapped
}

fn to_json_number(value: f64, kind: NumberKind) -> Result<Value, GeneratorError> {
    if kind == NumberKind::Integer
        && value.fract() == 0.0
        && value >= i64::MIN as f64
        && value <= i64::MAX as f64
    {
        return Ok(Value::from(value as i64));
    }

    Number::from_f64(value)
        .map(Value::Number)
        .ok_or(GeneratorError::NonFiniteNumber(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn schema(json: &str) -> Schema {
        Schema::from_json(json).unwrap()
    }

    #[test]
    fn test_generate_integer_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let schema = schema(r#"{"type": "integer", "minimum": 10, "maximum": 20}"#);

        for _ in 0..100 {
            let value = generate_number(&mut rng, &schema, NumberKind::Integer).unwrap();
            if let Some(v) = value.as_i64() {
                assert!((10..=20).contains(&v));
            } else {
                panic!("Expected integer value, got {value}");
            }
        }
    }

    #[test]
    fn test_generate_float_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let schema = schema(r#"{"type": "number", "minimum": 0.5, "maximum": 1.5}"#);

        for _ in 0..100 {
            let value = generate_number(&mut rng, &schema, NumberKind::Float).unwrap();
            if let Some(v) = value.as_f64() {
                assert!((0.5..1.5).contains(&v));
            } else {
                panic!("Expected float value, got {value}");
            }
        }
    }

    #[test]
    fn test_default_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let schema = schema(r#"{"type": "integer"}"#);

        for _ in 0..100 {
            let value = generate_number(&mut rng, &schema, NumberKind::Integer).unwrap();
            let v = value.as_i64().unwrap();
            assert!((0..=1000).contains(&v));
        }
    }

    #[test]
    fn test_exclusive_integer_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let schema = schema(r#"{"type": "integer", "exclusiveMinimum": 5, "exclusiveMaximum": 8}"#);
        assert_eq!(resolve_bounds(&schema, NumberKind::Integer), (6.0, 7.0));

        for _ in 0..50 {
            let value = generate_number(&mut rng, &schema, NumberKind::Integer).unwrap();
            let v = value.as_i64().unwrap();
            assert!(v == 6 || v == 7, "{v} not strictly inside (5, 8)");
        }
    }

    #[test]
    fn test_exclusive_fractional_integer_bounds() {
        let schema = schema(r#"{"exclusiveMinimum": 2.5, "exclusiveMaximum": 9.5}"#);
        assert_eq!(resolve_bounds(&schema, NumberKind::Integer), (3.0, 8.0));
        assert_eq!(resolve_bounds(&schema, NumberKind::Float), (2.5, 9.5));
    }

    #[test]
    fn test_inclusive_bounds_win() {
        let schema = schema(r#"{"minimum": 1, "exclusiveMinimum": 50, "maximum": 2, "exclusiveMaximum": 60}"#);
        assert_eq!(resolve_bounds(&schema, NumberKind::Integer), (1.0, 2.0));
    }

    #[test]
    fn test_bounds_conflict() {
        let mut rng = StdRng::seed_from_u64(42);
        let schema = schema(r#"{"type": "integer", "minimum": 100, "maximum": 10}"#);

        let err = generate_number(&mut rng, &schema, NumberKind::Integer).unwrap_err();
        if let GeneratorError::BoundsConflict { min, max } = err {
            assert_eq!(min, 100.0);
            assert_eq!(max, 10.0);
        } else {
            panic!("Expected BoundsConflict, got {err:?}");
        }
    }

    #[test]
    fn test_only_minimum_above_default_maximum() {
        let mut rng = StdRng::seed_from_u64(42);
        let schema = schema(r#"{"type": "number", "minimum": 5000}"#);
        let err = generate_number(&mut rng, &schema, NumberKind::Float).unwrap_err();
        assert!(matches!(err, GeneratorError::BoundsConflict { .. }));
    }

    #[test]
    fn test_collapsed_integer_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let schema = schema(r#"{"type": "integer", "minimum": 1.2, "maximum": 1.8}"#);

        let value = generate_number(&mut rng, &schema, NumberKind::Integer).unwrap();
        assert_eq!(value.as_i64(), Some(2));
    }

    #[test]
    fn test_equal_float_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let schema = schema(r#"{"type": "number", "minimum": 3.25, "maximum": 3.25}"#);

        let value = generate_number(&mut rng, &schema, NumberKind::Float).unwrap();
        assert_eq!(value.as_f64(), Some(3.25));
    }

    #[test]
    fn test_multiple_of() {
        let mut rng = StdRng::seed_from_u64(42);
        let schema = schema(r#"{"type": "integer", "minimum": 0, "maximum": 100, "multipleOf": 5}"#);

        for _ in 0..100 {
            let value = generate_number(&mut rng, &schema, NumberKind::Integer).unwrap();
            let v = value.as_i64().unwrap();
            assert_eq!(v % 5, 0);
            assert!((0..=100).contains(&v));
        }
    }

    #[test]
    fn test_multiple_of_nudged_inside() {
        let mut rng = StdRng::seed_from_u64(42);
        let schema = schema(r#"{"type": "integer", "minimum": 10, "maximum": 15, "multipleOf": 7}"#);

        for _ in 0..20 {
            let value = generate_number(&mut rng, &schema, NumberKind::Integer).unwrap();
            assert_eq!(value.as_i64(), Some(14));
        }
    }

    #[test]
    fn test_multiple_wider_than_range_can_escape() {
        // Nearest multiple of 10 to anything in [1, 2] is 0; one step up is
        // 10, still outside. The value is returned rather than rejected.
        assert_eq!(snap_to_multiple(1.5, 10.0, 1.0, 2.0), 10.0);

        let mut rng = StdRng::seed_from_u64(42);
        let schema = schema(r#"{"type": "integer", "minimum": 1, "maximum": 2, "multipleOf": 10}"#);
        let value = generate_number(&mut rng, &schema, NumberKind::Integer).unwrap();
        assert_eq!(value.as_i64(), Some(10));
    }

    #[test]
    fn test_fractional_multiple_on_number() {
        let mut rng = StdRng::seed_from_u64(42);
        let schema = schema(r#"{"type": "number", "minimum": 0, "maximum": 10, "multipleOf": 0.5}"#);

        for _ in 0..50 {
            let value = generate_number(&mut rng, &schema, NumberKind::Float).unwrap();
            let v = value.as_f64().unwrap();
            assert_eq!((v * 2.0).fract(), 0.0);
            assert!((0.0..=10.0).contains(&v));
        }
    }

    #[test]
    fn test_fractional_multiple_on_integer_stays_integral() {
        let mut rng = StdRng::seed_from_u64(42);
        let schema = schema(r#"{"type": "integer", "minimum": 0, "maximum": 10, "multipleOf": 2.5}"#);

        for _ in 0..50 {
            let value = generate_number(&mut rng, &schema, NumberKind::Integer).unwrap();
            if let Some(v) = value.as_i64() {
                assert!((0..=10).contains(&v));
            } else {
                panic!("Expected integer value, got {value}");
            }
        }
    }

    #[test]
    fn test_non_finite_rejected() {
        let mut rng = StdRng::seed_from_u64(42);
        let schema = schema(r#"{"type": "number", "minimum": -1e308, "maximum": 1e308}"#);

        // The span overflows to infinity; most draws are then non-finite
        let results: Vec<_> = (0..20)
            .map(|_| generate_number(&mut rng, &schema, NumberKind::Float))
            .collect();
        assert!(results
            .iter()
            .any(|r| matches!(r, Err(GeneratorError::NonFiniteNumber(_)))));
    }
}
