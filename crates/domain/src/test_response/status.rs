//! Status code assertions.

use super::TestResponse;
use crate::error::{AssertionError, AssertionResult};
use crate::response::StatusCode;

impl TestResponse {
    /// Asserts the response has the given status code.
    ///
    /// # Errors
    ///
    /// Fails if the status differs.
    pub fn assert_status(&self, expected: impl Into<StatusCode>) -> AssertionResult<&Self> {
        let expected = expected.into();
        let actual = self.status();
        if actual == expected {
            Ok(self)
        } else {
            Err(status_mismatch(&expected.to_string(), actual))
        }
    }

    /// Asserts the response has a 2xx status code.
    ///
    /// # Errors
    ///
    /// Fails on any other status.
    pub fn assert_successful(&self) -> AssertionResult<&Self> {
        let actual = self.status();
        if actual.is_success() {
            Ok(self)
        } else {
            Err(status_mismatch(">=200, <300", actual))
        }
    }

    /// Asserts the response has a 200 status code.
    ///
    /// # Errors
    ///
    /// Fails on any other status.
    pub fn assert_ok(&self) -> AssertionResult<&Self> {
        self.assert_status(StatusCode::OK)
    }

    /// Asserts the response has a 201 status code.
    ///
    /// # Errors
    ///
    /// Fails on any other status.
    pub fn assert_created(&self) -> AssertionResult<&Self> {
        self.assert_status(StatusCode::CREATED)
    }

    /// Asserts the response has a 404 status code.
    ///
    /// # Errors
    ///
    /// Fails on any other status.
    pub fn assert_not_found(&self) -> AssertionResult<&Self> {
        self.assert_status(StatusCode::NOT_FOUND)
    }

    /// Asserts the response has a 401 status code.
    ///
    /// # Errors
    ///
    /// Fails on any other status.
    pub fn assert_unauthorized(&self) -> AssertionResult<&Self> {
        self.assert_status(StatusCode::UNAUTHORIZED)
    }

    /// Asserts the response has a 403 status code.
    ///
    /// # Errors
    ///
    /// Fails on any other status.
    pub fn assert_forbidden(&self) -> AssertionResult<&Self> {
        self.assert_status(StatusCode::FORBIDDEN)
    }

    /// Asserts the response has the given status and an empty body.
    ///
    /// # Errors
    ///
    /// Fails if the status differs or the body is not empty.
    pub fn assert_no_content(&self, status: impl Into<StatusCode>) -> AssertionResult<&Self> {
        self.assert_status(status)?;
        if self.base_response().body.is_empty() {
            Ok(self)
        } else {
            Err(AssertionError::mismatch(
                "Response content is not empty.",
                "",
                self.content(),
            ))
        }
    }
}

pub(super) fn status_mismatch(expected: &str, actual: StatusCode) -> AssertionError {
    AssertionError::mismatch(
        format!("Expected response status code [{expected}] but received {actual}."),
        expected,
        actual.to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::RawResponse;

    fn response(status: u16) -> TestResponse {
        TestResponse::from_base_response(RawResponse::new(status))
    }

    #[test]
    fn test_assert_status() {
        assert!(response(200).assert_status(200).is_ok());

        let error = response(200).assert_status(201).unwrap_err();
        assert_eq!(
            error.message(),
            "Expected response status code [201] but received 200."
        );
        assert_eq!(error.expected(), Some("201"));
        assert_eq!(error.actual(), Some("200"));
    }

    #[test]
    fn test_named_statuses() {
        assert!(response(200).assert_ok().is_ok());
        assert!(response(201).assert_created().is_ok());
        assert!(response(404).assert_not_found().is_ok());
        assert!(response(401).assert_unauthorized().is_ok());
        assert!(response(403).assert_forbidden().is_ok());

        assert!(response(200).assert_not_found().is_err());
        assert!(response(403).assert_unauthorized().is_err());
    }

    #[test]
    fn test_assert_successful() {
        assert!(response(204).assert_successful().is_ok());
        let error = response(302).assert_successful().unwrap_err();
        assert!(error.message().contains("[>=200, <300]"));
    }

    #[test]
    fn test_assert_no_content() {
        assert!(response(204).assert_no_content(204).is_ok());
        assert!(response(200).assert_no_content(200).is_ok());
        assert!(response(200).assert_no_content(204).is_err());

        let with_body = TestResponse::from_base_response(RawResponse::new(204).with_body("x"));
        let error = with_body.assert_no_content(204).unwrap_err();
        assert_eq!(error.message(), "Response content is not empty.");
    }
}
