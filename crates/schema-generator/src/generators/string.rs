//! String value generation.

use super::{faker, pattern};
use crate::error::GeneratorError;
use rand::Rng;
use schema_core::Schema;

/// Upper length used when `maxLength` is absent.
pub const DEFAULT_MAX_LENGTH: usize = 20;

/// Generate a string for a `"type": "string"` schema.
///
/// `pattern` wins over `format`, which wins over length-bounded text.
pub fn generate_string<R: Rng>(rng: &mut R, schema: &Schema) -> Result<String, GeneratorError> {
    if let Some(expr) = schema.pattern() {
        return pattern::generate_from_pattern(rng, expr);
    }

    if let Some(format) = schema.format() {
        return Ok(faker::generate_format(rng, format));
    }

    let min = schema.min_length.unwrap_or(0);
    let max = schema.max_length.unwrap_or(DEFAULT_MAX_LENGTH).max(min);
    let length = if max > min {
        rng.gen_range(min..=max)
    } else {
        min
    };

    Ok(random_text(rng, length))
}

/// Text of exactly `length` characters.
///
/// Short lengths get a letters-only token; longer ones are built from words
/// and cut to size.
pub fn random_text<R: Rng>(rng: &mut R, length: usize) -> String {
    if length == 0 {
        return String::new();
    }
    if length <= 3 {
        return faker::letters(rng, length);
    }

    let mut text = String::new();
    while text.chars().count() < length {
        let word = faker::word(rng);
        if word.is_empty() {
            // Keep the loop moving even if a provider ever yields nothing
            text.push_str(&faker::letters(rng, 1));
            continue;
        }
        text.push_str(&word);
    }

    text.chars().take(length).collect()
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
    fn test_length_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let schema = schema(r#"{"type": "string", "minLength": 5, "maxLength": 12}"#);

        for _ in 0..100 {
            let value = generate_string(&mut rng, &schema).unwrap();
            let len = value.chars().count();
            assert!((5..=12).contains(&len), "length {len} out of range");
        }
    }

    #[test]
    fn test_default_max_length() {
        let mut rng = StdRng::seed_from_u64(42);
        let schema = schema(r#"{"type": "string"}"#);

        for _ in 0..100 {
            let value = generate_string(&mut rng, &schema).unwrap();
            assert!(value.chars().count() <= DEFAULT_MAX_LENGTH);
        }
    }

    #[test]
    fn test_max_below_min_is_clamped() {
        let mut rng = StdRng::seed_from_u64(42);
        let schema = schema(r#"{"type": "string", "minLength": 30}"#);

        let value = generate_string(&mut rng, &schema).unwrap();
        assert_eq!(value.chars().count(), 30);
    }

    #[test]
    fn test_short_lengths_are_letters() {
        let mut rng = StdRng::seed_from_u64(42);
        let schema = schema(r#"{"type": "string", "minLength": 2, "maxLength": 2}"#);

        let value = generate_string(&mut rng, &schema).unwrap();
        assert_eq!(value.len(), 2);
        assert!(value.chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn test_zero_length() {
        let mut rng = StdRng::seed_from_u64(42);
        let schema = schema(r#"{"type": "string", "maxLength": 0}"#);
        assert_eq!(generate_string(&mut rng, &schema).unwrap(), "");
    }

    #[test]
    fn test_pattern_beats_format() {
        let mut rng = StdRng::seed_from_u64(42);
        let schema = schema(r#"{"type": "string", "pattern": "^[0-9]{3}$", "format": "email"}"#);

        let value = generate_string(&mut rng, &schema).unwrap();
        assert_eq!(value.len(), 3);
        assert!(value.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_format_ignores_length() {
        let mut rng = StdRng::seed_from_u64(42);
        let schema = schema(r#"{"type": "string", "format": "uuid", "maxLength": 3}"#);

        let value = generate_string(&mut rng, &schema).unwrap();
        assert_eq!(value.len(), 36);
    }

    #[test]
    fn test_empty_pattern_and_format_are_ignored() {
        let mut rng = StdRng::seed_from_u64(42);
        let schema = schema(r#"{"type": "string", "pattern": "", "format": "", "maxLength": 3, "minLength": 3}"#);

        let value = generate_string(&mut rng, &schema).unwrap();
        assert_eq!(value.len(), 3);
    }

    #[test]
    fn test_random_text_exact_length() {
        let mut rng = StdRng::seed_from_u64(42);
        for length in [4, 7, 19, 64] {
            assert_eq!(random_text(&mut rng, length).chars().count(), length);
        }
    }
}
