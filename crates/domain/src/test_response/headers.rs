//! Header assertions.

use super::TestResponse;
use crate::error::{AssertionError, AssertionResult};

impl TestResponse {
    /// Asserts the header is present and, if given, has `value`.
    ///
    /// # Errors
    ///
    /// Fails if the header is missing or its value differs.
    pub fn assert_header(&self, name: &str, value: Option<&str>) -> AssertionResult<&Self> {
        let Some(actual) = self.header(name) else {
            return Err(AssertionError::expectation(format!(
                "Header [{name}] not present on response."
            )));
        };

        match value {
            Some(expected) if expected != actual => Err(AssertionError::mismatch(
                format!("Header [{name}] was found, but value [{actual}] does not match [{expected}]."),
                expected,
                actual,
            )),
            _ => Ok(self),
        }
    }

    /// Asserts the header is absent.
    ///
    /// # Errors
    ///
    /// Fails if the header is present.
    pub fn assert_header_missing(&self, name: &str) -> AssertionResult<&Self> {
        if self.header(name).is_some() {
            Err(AssertionError::expectation(format!(
                "Unexpected header [{name}] is present on response."
            )))
        } else {
            Ok(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::RawResponse;

    fn response() -> TestResponse {
        TestResponse::from_base_response(RawResponse::new(200).with_header("X-Request-Id", "abc"))
    }

    #[test]
    fn test_assert_header() {
        assert!(response().assert_header("x-request-id", None).is_ok());
        assert!(response().assert_header("X-Request-Id", Some("abc")).is_ok());

        let error = response().assert_header("X-Request-Id", Some("xyz")).unwrap_err();
        assert_eq!(
            error.message(),
            "Header [X-Request-Id] was found, but value [abc] does not match [xyz]."
        );

        let error = response().assert_header("X-Foo", None).unwrap_err();
        assert_eq!(error.message(), "Header [X-Foo] not present on response.");
    }

    #[test]
    fn test_assert_header_missing() {
        assert!(response().assert_header_missing("X-Foo").is_ok());
        assert!(response().assert_header_missing("x-request-id").is_err());
    }
}
