//! Redirect and location assertions.

use chrono::{DateTime, Utc};
use serde_json::Value;

use super::TestResponse;
use super::status::status_mismatch;
use crate::error::{AssertionError, AssertionResult, ExpectResult};
use crate::response::REDIRECT_STATUSES;
use crate::routing::UrlGenerator;

impl TestResponse {
    /// Returns the `Location` header, if present.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.header("Location")
    }

    /// Asserts the response is a redirect.
    ///
    /// # Errors
    ///
    /// Fails unless the status is 201, 301, 302, 303, 307 or 308.
    pub fn assert_redirect(&self) -> AssertionResult<&Self> {
        if self.status().is_redirect() {
            Ok(self)
        } else {
            let expected: Vec<String> = REDIRECT_STATUSES.iter().map(ToString::to_string).collect();
            Err(status_mismatch(&expected.join(", "), self.status()))
        }
    }

    /// Asserts the `Location` header resolves to the same URL as `uri`.
    ///
    /// Both sides are resolved against the application root first, so
    /// `/home` and `http://localhost/home` compare equal.
    ///
    /// # Errors
    ///
    /// Fails if the resolved URLs differ.
    pub fn assert_location(&self, url: &UrlGenerator, uri: &str) -> AssertionResult<&Self> {
        let expected = url.to(uri);
        let actual = url.to(self.location().unwrap_or_default());
        if expected == actual {
            Ok(self)
        } else {
            Err(AssertionError::mismatch(
                format!("Failed asserting that location [{actual}] matches [{expected}]."),
                expected,
                actual,
            ))
        }
    }

    /// Asserts the response redirects to a validly signed URL.
    ///
    /// With a route `name`, the signed URL must also point at that route
    /// built from `parameters`.
    ///
    /// # Errors
    ///
    /// Fails if the response is not a redirect, the signature is missing,
    /// invalid or expired, or the target differs from the named route.
    /// Returns a configuration error if the route cannot be built.
    pub fn assert_redirect_to_signed_route(
        &self,
        url: &UrlGenerator,
        now: DateTime<Utc>,
        name: Option<&str>,
        parameters: &Value,
    ) -> ExpectResult<&Self> {
        let expected = name.map(|name| url.route(name, parameters)).transpose()?;

        self.assert_redirect()?;

        let location = self.location().unwrap_or_default();
        if !url.has_valid_signature(location, now) {
            return Err(AssertionError::expectation(
                "The response is not a redirect to a signed route.",
            )
            .into());
        }

        if let Some(expected) = expected {
            let actual = url.without_signature(location)?;
            let expected = url.to(&expected);
            if url.to(&actual) != expected {
                return Err(AssertionError::mismatch(
                    format!("Failed asserting that location [{actual}] matches route [{expected}]."),
                    expected,
                    actual,
                )
                .into());
            }
        }

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExpectError;
    use crate::response::RawResponse;
    use chrono::TimeZone;
    use serde_json::json;

    fn url() -> UrlGenerator {
        UrlGenerator::new("http://localhost", "key")
            .unwrap()
            .with_route("verify", "/verify/{id}")
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()
    }

    fn redirect(location: &str) -> TestResponse {
        TestResponse::from_base_response(RawResponse::redirect(location))
    }

    #[test]
    fn test_assert_redirect() {
        assert!(redirect("/home").assert_redirect().is_ok());

        let ok = TestResponse::from_base_response(RawResponse::new(200));
        let error = ok.assert_redirect().unwrap_err();
        assert_eq!(
            error.message(),
            "Expected response status code [201, 301, 302, 303, 307, 308] but received 200."
        );
    }

    #[test]
    fn test_assert_location_resolves_both_sides() {
        let response = redirect("/home");
        assert!(response.assert_location(&url(), "/home").is_ok());
        assert!(response.assert_location(&url(), "http://localhost/home").is_ok());

        let error = response.assert_location(&url(), "/other").unwrap_err();
        assert_eq!(error.expected(), Some("http://localhost/other"));
        assert_eq!(error.actual(), Some("http://localhost/home"));
    }

    #[test]
    fn test_signed_route_redirect() {
        let url = url();
        let signed = url.signed_route("verify", &json!({"id": 3}), None).unwrap();
        let response = redirect(&signed);

        assert!(response.assert_redirect_to_signed_route(&url, now(), None, &Value::Null).is_ok());
        assert!(response
            .assert_redirect_to_signed_route(&url, now(), Some("verify"), &json!({"id": 3}))
            .is_ok());

        let error = response
            .assert_redirect_to_signed_route(&url, now(), Some("verify"), &json!({"id": 4}))
            .unwrap_err();
        assert!(error.is_assertion_failure());
    }

    #[test]
    fn test_signed_route_redirect_with_encoded_parameter() {
        let url = url().with_route("users.show", "/users/{name}");
        let parameters = json!({"name": "Ada Lovelace"});
        let signed = url.signed_route("users.show", &parameters, None).unwrap();

        assert!(redirect(&signed)
            .assert_redirect_to_signed_route(&url, now(), Some("users.show"), &parameters)
            .is_ok());
    }

    #[test]
    fn test_unsigned_redirect_fails() {
        let error = redirect("/verify/3")
            .assert_redirect_to_signed_route(&url(), now(), None, &Value::Null)
            .unwrap_err();
        assert_eq!(error.to_string(), "The response is not a redirect to a signed route.");
    }

    #[test]
    fn test_unknown_route_is_configuration_error() {
        let error = redirect("/verify/3")
            .assert_redirect_to_signed_route(&url(), now(), Some("nope"), &Value::Null)
            .unwrap_err();
        assert!(matches!(error, ExpectError::Configuration(_)));
    }
}
