//! Raw HTTP response
//!
//! The base response form: what an HTTP handler or client hands back,
//! before it is wrapped for assertions.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::{Headers, StatusCode};

/// HTTP response as produced by a handler or captured from the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Response headers.
    #[serde(default)]
    pub headers: Headers,
    /// Response body as raw bytes.
    #[serde(default)]
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Creates an empty response with the given status.
    #[must_use]
    pub fn new(status: impl Into<StatusCode>) -> Self {
        Self {
            status: status.into(),
            headers: Headers::new(),
            body: Vec::new(),
        }
    }

    /// Creates a 302 redirect to `location`.
    #[must_use]
    pub fn redirect(location: impl Into<String>) -> Self {
        Self::new(StatusCode::FOUND).with_header("Location", location)
    }

    /// Creates a response whose body is the given JSON value.
    #[must_use]
    pub fn json(status: impl Into<StatusCode>, value: &serde_json::Value) -> Self {
        Self::new(status)
            .with_header("Content-Type", "application/json")
            .with_body(value.to_string())
    }

    /// Creates an HTML response.
    #[must_use]
    pub fn html(status: impl Into<StatusCode>, body: impl Into<String>) -> Self {
        Self::new(status)
            .with_header("Content-Type", "text/html; charset=UTF-8")
            .with_body(body.into())
    }

    /// Sets a header (builder pattern).
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Sets the body (builder pattern).
    #[must_use]
    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// Returns the body as text, replacing invalid UTF-8 sequences.
    #[must_use]
    pub fn content(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Returns the value of a header.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    /// Returns the `Content-Type` header, if present.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.header("Content-Type")
    }
}
