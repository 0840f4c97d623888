//! Subjects under test and their normalization.
//!
//! Expectations accept either response form; [`Subject::test_response`]
//! is the single place the two are reconciled.

use std::borrow::Cow;

use serde_json::Value;

use crate::error::ConfigurationError;
use crate::response::RawResponse;
use crate::test_response::TestResponse;

/// The value an expectation chain evaluates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subject {
    /// A response in its raw form.
    Raw(RawResponse),
    /// A response already wrapped for assertions.
    Test(TestResponse),
    /// Any other value. Response expectations reject it.
    Value(Value),
}

impl Subject {
    /// Returns the canonical test response for this subject.
    ///
    /// Wrapped responses are borrowed as-is; raw responses are wrapped.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for non-response subjects.
    pub fn test_response(&self) -> Result<Cow<'_, TestResponse>, ConfigurationError> {
        match self {
            Self::Test(response) => Ok(Cow::Borrowed(response)),
            Self::Raw(response) => Ok(Cow::Owned(TestResponse::from_base_response(
                response.clone(),
            ))),
            Self::Value(value) => Err(ConfigurationError::UnsupportedSubject(
                describe(value).to_string(),
            )),
        }
    }

    /// Converts this subject into its canonical test response.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for non-response subjects.
    pub fn into_test_response(self) -> Result<TestResponse, ConfigurationError> {
        match self {
            Self::Test(response) => Ok(response),
            Self::Raw(response) => Ok(TestResponse::from_base_response(response)),
            Self::Value(value) => Err(ConfigurationError::UnsupportedSubject(
                describe(&value).to_string(),
            )),
        }
    }

    /// Returns a short description of the subject's shape.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Raw(_) => "raw response",
            Self::Test(_) => "test response",
            Self::Value(value) => describe(value),
        }
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl From<RawResponse> for Subject {
    fn from(response: RawResponse) -> Self {
        Self::Raw(response)
    }
}

impl From<TestResponse> for Subject {
    fn from(response: TestResponse) -> Self {
        Self::Test(response)
    }
}

impl From<Value> for Subject {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;
    use serde_json::json;

    #[test]
    fn test_canonical_subject_is_borrowed() {
        let response = TestResponse::from_base_response(RawResponse::new(200))
            .with_session(Session::new().with("k", "v"));
        let subject = Subject::from(response.clone());

        let normalized = subject.test_response().unwrap();
        assert!(matches!(normalized, Cow::Borrowed(_)));
        assert_eq!(normalized.as_ref(), &response);

        if let (Subject::Test(inner), Cow::Borrowed(borrowed)) = (&subject, &normalized) {
            assert!(std::ptr::eq(inner, *borrowed));
        }
    }

    #[test]
    fn test_raw_subject_is_wrapped() {
        let raw = RawResponse::redirect("/home");
        let subject = Subject::from(raw.clone());

        let first = subject.test_response().unwrap().into_owned();
        let second = subject.test_response().unwrap().into_owned();
        assert_eq!(first.base_response(), &raw);
        assert_eq!(first, second);
    }

    #[test]
    fn test_normalizing_twice_is_idempotent() {
        let once = Subject::from(RawResponse::new(204)).into_test_response().unwrap();
        let twice = Subject::from(once.clone()).into_test_response().unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_other_values_are_rejected() {
        let error = Subject::from(json!({"status": 200})).test_response().unwrap_err();
        assert_eq!(error, ConfigurationError::UnsupportedSubject("object".into()));
        assert_eq!(Subject::from(json!(1)).kind(), "number");
    }
}
