//! Session assertions.

use serde_json::Value;

use super::TestResponse;
use crate::error::{AssertionError, AssertionResult};
use crate::json::loose_eq;

impl TestResponse {
    /// Asserts the session has `key`, equal to `value` when given.
    ///
    /// Values compare loosely, so `2` matches `"2"` and `1.0`.
    ///
    /// # Errors
    ///
    /// Fails if the key is missing or holds a different value.
    pub fn assert_session_has(&self, key: &str, value: Option<&Value>) -> AssertionResult<&Self> {
        match value {
            None => {
                if self.session().has(key) {
                    Ok(self)
                } else {
                    Err(AssertionError::expectation(format!(
                        "Session is missing expected key [{key}]."
                    )))
                }
            }
            Some(expected) => {
                let actual = self.session().get(key).cloned().unwrap_or(Value::Null);
                if loose_eq(&actual, expected) {
                    Ok(self)
                } else {
                    Err(AssertionError::mismatch(
                        format!("Failed asserting that session value [{key}] {actual} equals {expected}."),
                        expected.to_string(),
                        actual.to_string(),
                    ))
                }
            }
        }
    }

    /// Asserts every binding is in the session.
    ///
    /// `bindings` is a key, a list of keys (presence only), or a map of key
    /// to expected value; list entries may themselves be such maps.
    ///
    /// # Errors
    ///
    /// Fails on the first missing or different binding.
    pub fn assert_session_has_all(&self, bindings: &Value) -> AssertionResult<&Self> {
        match bindings {
            Value::String(key) => {
                self.assert_session_has(key, None)?;
            }
            Value::Array(items) => {
                for item in items {
                    self.assert_session_has_all(item)?;
                }
            }
            Value::Object(map) => {
                for (key, value) in map {
                    self.assert_session_has(key, Some(value))?;
                }
            }
            Value::Null | Value::Bool(_) | Value::Number(_) => {}
        }
        Ok(self)
    }
}
