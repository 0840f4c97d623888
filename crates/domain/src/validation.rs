//! Expected validation errors.
//!
//! Errors may be given as a single key, a list of keys, or a map of key to
//! an expected message (or list of messages). Messages may use `*` as a
//! wildcard.

use regex::Regex;
use serde_json::Value;

/// One expected validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedError {
    /// Field key.
    pub key: String,
    /// Message patterns, each of which must match one of the key's messages.
    /// Empty means "any message".
    pub messages: Vec<String>,
}

impl ExpectedError {
    /// Expects an error for `key` with any message.
    #[must_use]
    pub fn key(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            messages: Vec::new(),
        }
    }

    /// Expects an error for `key` whose message matches `message`.
    #[must_use]
    pub fn with_message(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            messages: vec![message.into()],
        }
    }
}

/// Parses expected errors from their JSON notation.
#[must_use]
pub fn expected_errors(value: &Value) -> Vec<ExpectedError> {
    let mut expected = Vec::new();
    collect_expected(value, &mut expected);
    expected
}

fn collect_expected(value: &Value, expected: &mut Vec<ExpectedError>) {
    match value {
        Value::String(key) => expected.push(ExpectedError::key(key.clone())),
        Value::Array(items) => {
            for item in items {
                collect_expected(item, expected);
            }
        }
        Value::Object(map) => {
            for (key, messages) in map {
                expected.push(ExpectedError {
                    key: key.clone(),
                    messages: string_list(messages),
                });
            }
        }
        Value::Null | Value::Bool(_) | Value::Number(_) => {}
    }
}

/// Flattens a string or list of strings; anything else becomes its JSON text.
#[must_use]
pub fn string_list(value: &Value) -> Vec<String> {
    match value {
        Value::Null => Vec::new(),
        Value::String(text) => vec![text.clone()],
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            })
            .collect(),
        other => vec![other.to_string()],
    }
}

/// Returns true if `value` matches `pattern`, where `*` matches anything.
#[must_use]
pub fn wildcard_match(pattern: &str, value: &str) -> bool {
    if pattern == value {
        return true;
    }
    if !pattern.contains('*') {
        return false;
    }
    let expression = format!("(?s)^{}$", regex::escape(pattern).replace(r"\*", ".*"));
    Regex::new(&expression).is_ok_and(|re| re.is_match(value))
}
