//! Validation error assertions, against a JSON body or the session.

use serde_json::{Map, Value};

use super::TestResponse;
use crate::error::{AssertionError, AssertionResult};
use crate::json::path;
use crate::session::ERRORS_KEY;
use crate::validation::{ExpectedError, expected_errors, string_list, wildcard_match};

impl TestResponse {
    /// Asserts the JSON body has validation errors for `errors`.
    ///
    /// `errors` is a key, a list of keys, or a map of key to message
    /// pattern(s). Errors are read from `response_key`, a dot path.
    ///
    /// # Errors
    ///
    /// Fails if no errors were given, the body is not JSON, or an expected
    /// key or message is missing.
    pub fn assert_json_validation_errors(
        &self,
        errors: &Value,
        response_key: &str,
    ) -> AssertionResult<&Self> {
        let expected = expected_errors(errors);
        if expected.is_empty() {
            return Err(AssertionError::failed("No validation errors were provided."));
        }

        let json = self.json()?;
        let actual = error_map(path::get(&json, response_key).as_ref());
        let summary = if actual.is_empty() {
            "Response does not have JSON validation errors.".to_string()
        } else {
            format!(
                "Response has the following JSON validation errors:\n\n{}\n",
                pretty(&actual)
            )
        };

        check_expected(&expected, &actual, "in the response", &summary)?;
        Ok(self)
    }

    /// Asserts the JSON body has no validation errors for `keys`, or none at
    /// all when `keys` is null.
    ///
    /// An empty body, or a body without `response_key`, passes.
    ///
    /// # Errors
    ///
    /// Fails if the body is not JSON or an unexpected error is present.
    pub fn assert_json_missing_validation_errors(
        &self,
        keys: &Value,
        response_key: &str,
    ) -> AssertionResult<&Self> {
        if self.base_response().body.is_empty() {
            return Ok(self);
        }
        let json = self.json()?;
        let Some(errors) = path::get(&json, response_key) else {
            return Ok(self);
        };
        check_missing(keys, &error_map(Some(&errors)))?;
        Ok(self)
    }

    /// Asserts there are no validation errors for `keys` (or none at all).
    ///
    /// JSON responses are checked under `response_key`; other responses are
    /// checked against `error_bag` in the session.
    ///
    /// # Errors
    ///
    /// Fails if an unexpected validation error is present.
    pub fn assert_valid(
        &self,
        keys: &Value,
        error_bag: &str,
        response_key: &str,
    ) -> AssertionResult<&Self> {
        if self.is_json_response() {
            return self.assert_json_missing_validation_errors(keys, response_key);
        }
        if self.session().has(ERRORS_KEY) {
            check_missing(keys, &self.session().error_bag(error_bag))?;
        }
        Ok(self)
    }

    /// Asserts there are validation errors for `errors`.
    ///
    /// JSON responses are checked under `response_key`; other responses are
    /// checked against `error_bag` in the session.
    ///
    /// # Errors
    ///
    /// Fails if an expected key or message is missing.
    pub fn assert_invalid(
        &self,
        errors: &Value,
        error_bag: &str,
        response_key: &str,
    ) -> AssertionResult<&Self> {
        if self.is_json_response() {
            return self.assert_json_validation_errors(errors, response_key);
        }

        self.assert_session_has(ERRORS_KEY, None)?;
        let actual = self.session().error_bag(error_bag);
        let summary = if actual.is_empty() {
            "Response does not have validation errors in the session.".to_string()
        } else {
            format!(
                "Response has the following validation errors in the session:\n\n{}\n",
                pretty(&actual)
            )
        };

        check_expected(&expected_errors(errors), &actual, "in session", &summary)?;
        Ok(self)
    }
}

fn error_map(errors: Option<&Value>) -> Map<String, Value> {
    match errors {
        Some(Value::Object(map)) => map.clone(),
        _ => Map::new(),
    }
}

fn check_expected(
    expected: &[ExpectedError],
    actual: &Map<String, Value>,
    location: &str,
    summary: &str,
) -> AssertionResult<()> {
    for error in expected {
        let Some(messages) = actual.get(&error.key) else {
            return Err(AssertionError::expectation(format!(
                "Failed to find a validation error {location} for key: '{}'\n\n{summary}",
                error.key
            )));
        };

        let messages = string_list(messages);
        for pattern in &error.messages {
            if !messages.iter().any(|message| wildcard_match(pattern, message)) {
                return Err(AssertionError::expectation(format!(
                    "Failed to find a validation error {location} for key and message: '{}' => '{pattern}'\n\n{summary}",
                    error.key
                )));
            }
        }
    }
    Ok(())
}

fn check_missing(keys: &Value, actual: &Map<String, Value>) -> AssertionResult<()> {
    if keys.is_null() {
        if actual.is_empty() {
            return Ok(());
        }
        return Err(AssertionError::expectation(format!(
            "Response has unexpected validation errors:\n\n{}",
            pretty(actual)
        )));
    }

    for key in string_list(keys) {
        if actual.contains_key(&key) {
            return Err(AssertionError::expectation(format!(
                "Found unexpected validation error for key: '{key}'"
            )));
        }
    }
    Ok(())
}

fn pretty(map: &Map<String, Value>) -> String {
    serde_json::to_string_pretty(map).unwrap_or_default()
}
