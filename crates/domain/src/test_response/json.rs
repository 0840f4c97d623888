//! JSON body assertions.

use serde_json::Value;

use super::TestResponse;
use crate::error::{AssertionError, AssertionResult};
use crate::json::{
    JsonStructure, canonical_string, contains_fragment, fragment_needles, is_subset, path,
};

impl TestResponse {
    /// Asserts the JSON body is a superset of `expected`.
    ///
    /// Scalars compare loosely unless `strict` is set.
    ///
    /// # Errors
    ///
    /// Fails if the body is not JSON or lacks part of `expected`.
    pub fn assert_json(&self, expected: &Value, strict: bool) -> AssertionResult<&Self> {
        let actual = self.json()?;
        if is_subset(expected, &actual, strict) {
            Ok(self)
        } else {
            let expected = pretty(expected);
            let actual = pretty(&actual);
            Err(AssertionError::mismatch(
                format!("Unable to find JSON:\n\n{expected}\n\nwithin response JSON:\n\n{actual}."),
                expected,
                actual,
            ))
        }
    }

    /// Asserts the JSON body equals `expected` exactly, ignoring key order.
    ///
    /// # Errors
    ///
    /// Fails if the body is not JSON or differs from `expected`.
    pub fn assert_exact_json(&self, expected: &Value) -> AssertionResult<&Self> {
        let actual = canonical_string(&self.json()?);
        let expected = canonical_string(expected);
        if actual == expected {
            Ok(self)
        } else {
            Err(AssertionError::mismatch(
                format!("Failed asserting that JSON [{actual}] is identical to [{expected}]."),
                expected,
                actual,
            ))
        }
    }

    /// Asserts every entry of `fragment` appears somewhere in the JSON body.
    ///
    /// # Errors
    ///
    /// Fails if the body is not JSON or an entry is absent.
    pub fn assert_json_fragment(&self, fragment: &Value) -> AssertionResult<&Self> {
        let actual = canonical_string(&self.json()?);
        for needle in fragment_needles(fragment) {
            if !contains_fragment(&actual, &needle) {
                return Err(AssertionError::mismatch(
                    format!("Unable to find JSON fragment:\n\n[{needle}]\n\nwithin\n\n[{actual}]."),
                    needle,
                    actual,
                ));
            }
        }
        Ok(self)
    }

    /// Asserts the JSON body, or `data` when given, has `structure`.
    ///
    /// Without a structure only the validity of the JSON body is checked.
    ///
    /// # Errors
    ///
    /// Fails if the body is not JSON or a key is missing.
    pub fn assert_json_structure(
        &self,
        structure: Option<&JsonStructure>,
        data: Option<&Value>,
    ) -> AssertionResult<&Self> {
        let body = self.json()?;
        if let Some(structure) = structure {
            structure.check(data.unwrap_or(&body)).map_err(|error| {
                AssertionError::expectation(error.message().to_string())
            })?;
        }
        Ok(self)
    }

    /// Asserts the value at `path` is identical to `expected`.
    ///
    /// A missing path compares as `null`.
    ///
    /// # Errors
    ///
    /// Fails if the body is not JSON or the value differs.
    pub fn assert_json_path(&self, json_path: &str, expected: &Value) -> AssertionResult<&Self> {
        let actual = path::get(&self.json()?, json_path).unwrap_or(Value::Null);
        if &actual == expected {
            Ok(self)
        } else {
            Err(AssertionError::mismatch(
                format!(
                    "Failed asserting that JSON path [{json_path}] value {actual} is identical to {expected}."
                ),
                expected.to_string(),
                actual.to_string(),
            ))
        }
    }
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
