//! Regex-driven string generator.
//!
//! Candidates come from proptest's regex strategy, run on a `TestRunner`
//! whose RNG is seeded from the generator's own stream, and are checked
//! against the original expression with the `regex` crate.

use crate::error::GeneratorError;
use proptest::strategy::{Strategy, ValueTree};
use proptest::string::{string_regex, RegexGeneratorStrategy};
use proptest::test_runner::{Config, RngAlgorithm, TestRng, TestRunner};
use rand::Rng;
use regex::Regex;

/// Number of candidates tried before giving up.
pub const PATTERN_ATTEMPTS: usize = 10;

/// Generate a string matching `pattern`.
///
/// Patterns `regex` rejects are [`GeneratorError::InvalidPattern`]; valid
/// patterns the candidate strategy cannot express are
/// [`GeneratorError::UnsupportedPattern`].
pub fn generate_from_pattern<R: Rng>(rng: &mut R, pattern: &str) -> Result<String, GeneratorError> {
    let unsupported = |reason: String| GeneratorError::UnsupportedPattern {
        pattern: pattern.to_string(),
        reason,
    };

    let regex = Regex::new(pattern).map_err(|e| GeneratorError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })?;
    let strategy = build_strategy(pattern).map_err(unsupported)?;

    let mut seed = [0u8; 32];
    rng.fill(&mut seed);
    let mut runner = TestRunner::new_with_rng(
        Config::default(),
        TestRng::from_seed(RngAlgorithm::ChaCha, &seed),
    );

    for _ in 0..PATTERN_ATTEMPTS {
        let tree = strategy
            .new_tree(&mut runner)
            .map_err(|reason| unsupported(reason.message().to_string()))?;
        let candidate = tree.current();
        if regex.is_match(&candidate) {
            return Ok(candidate);
        }
    }

    Err(GeneratorError::PatternExhausted {
        pattern: pattern.to_string(),
        attempts: PATTERN_ATTEMPTS,
    })
}

/// Build the candidate strategy, preferring ASCII classes.
///
/// `\d`, `\w` and friends are Unicode-aware by default, which yields digits
/// and letters from any script. The ASCII form is tried first and the
/// Unicode form is the fallback for expressions that only compile there.
fn build_strategy(pattern: &str) -> Result<RegexGeneratorStrategy<String>, String> {
    let normalized = strip_anchors(pattern)?;
    string_regex(&format!("(?-u:{normalized})"))
        .or_else(|_| string_regex(&normalized))
        .map_err(|e| e.to_string())
}

/// Remove a leading `^` and an unescaped trailing `$` from every top-level
/// alternative.
///
/// The generator always produces the whole string, so anchors at the ends
/// of an alternative are redundant; anchors or boundaries anywhere else
/// cannot be generated.
fn strip_anchors(pattern: &str) -> Result<String, String> {
    if contains_boundary_escape(pattern) {
        return Err("word boundary escapes are unsupported for string generation".to_string());
    }

    let alternatives: Vec<&str> = split_alternatives(pattern)
        .into_iter()
        .map(strip_branch_anchors)
        .collect();
    Ok(alternatives.join("|"))
}

fn strip_branch_anchors(branch: &str) -> &str {
    let bytes = branch.as_bytes();
    let mut start = 0;
    let mut end = bytes.len();
    if bytes.first() == Some(&b'^') {
        start = 1;
    }
    if end > start && bytes[end - 1] == b'$' && !is_escaped(bytes, end - 1) {
        end -= 1;
    }
    &branch[start..end]
}

/// Split on `|` outside groups and character classes.
fn split_alternatives(pattern: &str) -> Vec<&str> {
    let bytes = pattern.as_bytes();
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut in_class = false;
    let mut last = 0;
    let mut idx = 0;

    while idx < bytes.len() {
        match bytes[idx] {
            b'\\' => {
                idx += 2;
                continue;
            }
            b'[' if !in_class => {
                in_class = true;
                // `]` directly after `[` or `[^` is a literal
                if bytes.get(idx + 1) == Some(&b'^') {
                    idx += 1;
                }
                if bytes.get(idx + 1) == Some(&b']') {
                    idx += 1;
                }
            }
            b']' if in_class => in_class = false,
            b'(' if !in_class => depth += 1,
            b')' if !in_class => depth = depth.saturating_sub(1),
            b'|' if !in_class && depth == 0 => {
                parts.push(&pattern[last..idx]);
                last = idx + 1;
            }
            _ => {}
        }
        idx += 1;
    }

    parts.push(&pattern[last..]);
    parts
}

fn contains_boundary_escape(pattern: &str) -> bool {
    let bytes = pattern.as_bytes();
    let mut idx = 0;
    while idx < bytes.len() {
        if bytes[idx] == b'\\' {
            match bytes.get(idx + 1) {
                Some(b'b' | b'B' | b'A' | b'z' | b'Z') => return true,
                Some(_) => {
                    idx += 2;
                    continue;
                }
                None => break,
            }
        }
        idx += 1;
    }
    false
}

fn is_escaped(bytes: &[u8], idx: usize) -> bool {
    let backslashes = bytes[..idx]
        .iter()
        .rev()
        .take_while(|&&b| b == b'\\')
        .count();
    backslashes % 2 == 1
}
