//! Canonical test response.
//!
//! [`TestResponse`] wraps a [`RawResponse`] together with the session it was
//! produced under and exposes the full assertion surface. Assertions return
//! `&Self` on success so they can be chained.

mod content;
mod headers;
mod json;
mod redirect;
mod session;
mod status;
mod validation;

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AssertionError, AssertionResult};
use crate::response::{RawResponse, StatusCode};
use crate::session::Session;

/// A response wrapped for assertions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResponse {
    response: RawResponse,
    #[serde(default)]
    session: Session,
}

impl TestResponse {
    /// Wraps a raw response with an empty session.
    #[must_use]
    pub fn from_base_response(response: RawResponse) -> Self {
        Self {
            response,
            session: Session::new(),
        }
    }

    /// Attaches the session the response was produced under.
    #[must_use]
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self
    }

    /// Returns the wrapped raw response.
    #[must_use]
    pub const fn base_response(&self) -> &RawResponse {
        &self.response
    }

    /// Unwraps the raw response.
    #[must_use]
    pub fn into_base_response(self) -> RawResponse {
        self.response
    }

    /// Returns the status code.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.response.status
    }

    /// Returns the value of a header.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.response.header(name)
    }

    /// Returns the body as text.
    #[must_use]
    pub fn content(&self) -> Cow<'_, str> {
        self.response.content()
    }

    /// Returns the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Decodes the body as JSON.
    ///
    /// # Errors
    ///
    /// Fails if the body is not valid JSON.
    pub fn json(&self) -> AssertionResult<Value> {
        serde_json::from_slice(&self.response.body).map_err(|e| {
            AssertionError::failed(format!("Invalid JSON was returned from the route: {e}"))
        })
    }

    /// Returns true if the `Content-Type` essence is `application/json`.
    #[must_use]
    pub fn is_json_response(&self) -> bool {
        self.response
            .content_type()
            .and_then(|value| value.parse::<mime::Mime>().ok())
            .is_some_and(|mime| mime.essence_str() == mime::APPLICATION_JSON.essence_str())
    }
}

impl From<RawResponse> for TestResponse {
    fn from(response: RawResponse) -> Self {
        Self::from_base_response(response)
    }
}
