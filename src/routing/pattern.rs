//! Structural JSON pattern matching.
//!
//! # Responsibilities
//! - Decide whether a parsed message body has the shape a route declares
//!
//! # Design Decisions
//! - A pattern is a partial description: keys absent from the pattern are ignored
//! - Arrays match positionally; the value may be longer than the pattern
//! - Numbers compare by value, so `1` and `1.0` are equal
//! - Pure and total: never panics, never allocates

use serde_json::Value;

/// Tests a JSON value against a declared pattern.
pub trait PatternMatcher: Send + Sync + std::fmt::Debug {
    /// Returns true if `value` structurally matches `pattern`.
    fn matches(&self, value: &Value, pattern: &Value) -> bool;
}

/// Default matcher implementing [`match_object_pattern`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuralMatcher;

impl PatternMatcher for StructuralMatcher {
    fn matches(&self, value: &Value, pattern: &Value) -> bool {
        match_object_pattern(value, pattern)
    }
}

/// Returns true if every part of `pattern` is present in `value`.
pub fn match_object_pattern(value: &Value, pattern: &Value) -> bool {
    match (pattern, value) {
        (Value::Object(expected), Value::Object(actual)) => expected.iter().all(|(key, sub)| {
            actual
                .get(key)
                .map(|v| match_object_pattern(v, sub))
                .unwrap_or(false)
        }),
        (Value::Array(expected), Value::Array(actual)) => {
            expected.len() <= actual.len()
                && expected
                    .iter()
                    .zip(actual)
                    .all(|(sub, v)| match_object_pattern(v, sub))
        }
        (Value::Number(expected), Value::Number(actual)) => {
            expected == actual || matches!((expected.as_f64(), actual.as_f64()), (Some(a), Some(b)) if a == b)
        }
        (Value::Object(_), _) | (Value::Array(_), _) => false,
        (expected, actual) => expected == actual,
    }
}
