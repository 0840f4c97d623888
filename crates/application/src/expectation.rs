//! The chainable expectation handle.
//!
//! ```
//! use respect_application::{Harness, HarnessConfig, FixedClock};
//! use respect_domain::RawResponse;
//! use std::sync::Arc;
//!
//! let harness = Harness::from_config(&HarnessConfig::default(), Arc::new(FixedClock(chrono::Utc::now())))?;
//! harness
//!     .expect(RawResponse::redirect("/home"))
//!     .to_be_redirect(Some("/home"))?
//!     .to_have_location("http://localhost/home")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use respect_domain::{ExpectResult, Subject};
use serde_json::Value;

use crate::args::Args;
use crate::harness::Harness;
use crate::names;

/// A subject bound to a harness. Every expectation returns the handle
/// itself, so checks chain with `?`.
#[derive(Debug)]
#[must_use]
pub struct Expectation<'h> {
    harness: &'h Harness,
    subject: Subject,
}

impl<'h> Expectation<'h> {
    pub(crate) const fn new(harness: &'h Harness, subject: Subject) -> Self {
        Self { harness, subject }
    }

    /// Returns the subject under test.
    #[must_use]
    pub const fn subject(&self) -> &Subject {
        &self.subject
    }

    /// Releases the subject.
    #[must_use]
    pub fn into_subject(self) -> Subject {
        self.subject
    }

    /// Continues the chain with a new subject.
    pub fn and(self, subject: impl Into<Subject>) -> Self {
        Self::new(self.harness, subject.into())
    }

    /// Invokes an expectation by name.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for unknown names or bad arguments,
    /// and an assertion error when the expectation does not hold.
    pub fn invoke(self, name: &str, args: Args) -> ExpectResult<Self> {
        self.harness.invoke(&self.subject, name, args)?;
        Ok(self)
    }

    /// Expects a redirect, to `uri` when given.
    ///
    /// # Errors
    ///
    /// Fails if the response is not a redirect or points elsewhere.
    pub fn to_be_redirect(self, uri: Option<&str>) -> ExpectResult<Self> {
        self.invoke(names::TO_BE_REDIRECT, Args::new().with(uri))
    }

    /// Expects a redirect to a validly signed URL, for route `name` when given.
    ///
    /// # Errors
    ///
    /// Fails if the redirect is missing, unsigned, expired or points at
    /// another route.
    pub fn to_be_redirect_to_signed_route(
        self,
        name: Option<&str>,
        parameters: impl Into<Value>,
    ) -> ExpectResult<Self> {
        self.invoke(
            names::TO_BE_REDIRECT_TO_SIGNED_ROUTE,
            Args::new().with(name).with(parameters),
        )
    }

    /// Expects a 2xx status.
    ///
    /// # Errors
    ///
    /// Fails on any other status.
    pub fn to_be_successful(self) -> ExpectResult<Self> {
        self.invoke(names::TO_BE_SUCCESSFUL, Args::new())
    }

    /// Expects status 200.
    ///
    /// # Errors
    ///
    /// Fails on any other status.
    pub fn to_be_ok(self) -> ExpectResult<Self> {
        self.invoke(names::TO_BE_OK, Args::new())
    }

    /// Expects status 201.
    ///
    /// # Errors
    ///
    /// Fails on any other status.
    pub fn to_confirm_creation(self) -> ExpectResult<Self> {
        self.invoke(names::TO_CONFIRM_CREATION, Args::new())
    }

    /// Expects status 404.
    ///
    /// # Errors
    ///
    /// Fails on any other status.
    pub fn to_be_not_found(self) -> ExpectResult<Self> {
        self.invoke(names::TO_BE_NOT_FOUND, Args::new())
    }

    /// Expects status 401.
    ///
    /// # Errors
    ///
    /// Fails on any other status.
    pub fn to_be_unauthorized(self) -> ExpectResult<Self> {
        self.invoke(names::TO_BE_UNAUTHORIZED, Args::new())
    }

    /// Expects `status` (204 when `None`) and an empty body.
    ///
    /// # Errors
    ///
    /// Fails on another status or a non-empty body.
    pub fn to_have_no_content(self, status: Option<u16>) -> ExpectResult<Self> {
        self.invoke(names::TO_HAVE_NO_CONTENT, Args::new().with(status))
    }

    /// Expects status 403.
    ///
    /// # Errors
    ///
    /// Fails on any other status.
    pub fn to_be_forbidden(self) -> ExpectResult<Self> {
        self.invoke(names::TO_BE_FORBIDDEN, Args::new())
    }

    /// Expects exactly `status`.
    ///
    /// # Errors
    ///
    /// Fails on any other status.
    pub fn to_have_status(self, status: u16) -> ExpectResult<Self> {
        self.invoke(names::TO_HAVE_STATUS, Args::new().with(status))
    }

    /// Expects a file download, named `filename` when given.
    ///
    /// # Errors
    ///
    /// Fails if the response is not an attachment or the name differs.
    pub fn to_be_download(self, filename: Option<&str>) -> ExpectResult<Self> {
        self.invoke(names::TO_BE_DOWNLOAD, Args::new().with(filename))
    }

    /// Expects the body to contain a string or every string of a list.
    ///
    /// # Errors
    ///
    /// Fails on the first string not found.
    pub fn to_render(self, text: impl Into<Value>, escape: bool) -> ExpectResult<Self> {
        self.invoke(names::TO_RENDER, Args::new().with(text).with(escape))
    }

    /// Expects the body to contain the strings in order.
    ///
    /// # Errors
    ///
    /// Fails on the first string out of order.
    pub fn to_render_in_order(self, texts: impl Into<Value>, escape: bool) -> ExpectResult<Self> {
        self.invoke(names::TO_RENDER_IN_ORDER, Args::new().with(texts).with(escape))
    }

    /// Expects the body text, tags stripped, to contain the string(s).
    ///
    /// # Errors
    ///
    /// Fails on the first string not found.
    pub fn to_render_text(self, text: impl Into<Value>, escape: bool) -> ExpectResult<Self> {
        self.invoke(names::TO_RENDER_TEXT, Args::new().with(text).with(escape))
    }

    /// Expects the body text, tags stripped, to contain the strings in order.
    ///
    /// # Errors
    ///
    /// Fails on the first string out of order.
    pub fn to_render_text_in_order(self, texts: impl Into<Value>, escape: bool) -> ExpectResult<Self> {
        self.invoke(names::TO_RENDER_TEXT_IN_ORDER, Args::new().with(texts).with(escape))
    }

    /// Same as [`Self::to_render_text`].
    ///
    /// # Errors
    ///
    /// Fails on the first string not found.
    pub fn to_contain_text(self, text: impl Into<Value>, escape: bool) -> ExpectResult<Self> {
        self.invoke(names::TO_CONTAIN_TEXT, Args::new().with(text).with(escape))
    }

    /// Same as [`Self::to_render_text_in_order`].
    ///
    /// # Errors
    ///
    /// Fails on the first string out of order.
    pub fn to_contain_text_in_order(self, texts: impl Into<Value>, escape: bool) -> ExpectResult<Self> {
        self.invoke(names::TO_CONTAIN_TEXT_IN_ORDER, Args::new().with(texts).with(escape))
    }

    /// Expects the JSON body to be a superset of `json`.
    ///
    /// # Errors
    ///
    /// Fails if the body is not JSON or does not contain `json`.
    pub fn to_have_json(self, json: Value, strict: bool) -> ExpectResult<Self> {
        self.invoke(names::TO_HAVE_JSON, Args::new().with(json).with(strict))
    }

    /// Expects the JSON body to equal `json` exactly.
    ///
    /// # Errors
    ///
    /// Fails if the body is not JSON or differs.
    pub fn to_have_exact_json(self, json: Value) -> ExpectResult<Self> {
        self.invoke(names::TO_HAVE_EXACT_JSON, Args::new().with(json))
    }

    /// Expects `json` to appear somewhere in the JSON body.
    ///
    /// # Errors
    ///
    /// Fails if the body is not JSON or the fragment is absent.
    pub fn to_have_json_fragment(self, json: Value) -> ExpectResult<Self> {
        self.invoke(names::TO_HAVE_JSON_FRAGMENT, Args::new().with(json))
    }

    /// Expects the JSON body, or `data`, to have `structure`.
    ///
    /// # Errors
    ///
    /// Fails if the body is not JSON or a key is missing.
    pub fn to_have_json_structure(
        self,
        structure: Option<Value>,
        data: Option<Value>,
    ) -> ExpectResult<Self> {
        self.invoke(
            names::TO_HAVE_JSON_STRUCTURE,
            Args::new().with(structure).with(data),
        )
    }

    /// Expects the value at `path` to be identical to `expected`.
    ///
    /// # Errors
    ///
    /// Fails if the body is not JSON or the value differs.
    pub fn to_have_json_path(self, path: &str, expected: impl Into<Value>) -> ExpectResult<Self> {
        self.invoke(names::TO_HAVE_JSON_PATH, Args::new().with(path).with(expected))
    }

    /// Expects JSON validation errors for `errors` under `response_key`
    /// (`errors` when `None`).
    ///
    /// # Errors
    ///
    /// Fails if no errors were given or an expected error is missing.
    pub fn to_have_json_validation_errors(
        self,
        errors: impl Into<Value>,
        response_key: Option<&str>,
    ) -> ExpectResult<Self> {
        self.invoke(
            names::TO_HAVE_JSON_VALIDATION_ERRORS,
            Args::new().with(errors).with(response_key),
        )
    }

    /// Expects no validation errors for `keys`, or none at all for `null`.
    ///
    /// # Errors
    ///
    /// Fails if an unexpected validation error is present.
    pub fn to_have_valid(
        self,
        keys: impl Into<Value>,
        error_bag: Option<&str>,
        response_key: Option<&str>,
    ) -> ExpectResult<Self> {
        self.invoke(
            names::TO_HAVE_VALID,
            Args::new().with(keys).with(error_bag).with(response_key),
        )
    }

    /// Expects validation errors for `errors`.
    ///
    /// # Errors
    ///
    /// Fails if an expected validation error is missing.
    pub fn to_have_invalid(
        self,
        errors: impl Into<Value>,
        error_bag: Option<&str>,
        response_key: Option<&str>,
    ) -> ExpectResult<Self> {
        self.invoke(
            names::TO_HAVE_INVALID,
            Args::new().with(errors).with(error_bag).with(response_key),
        )
    }

    /// Expects header `name`, equal to `value` when given.
    ///
    /// # Errors
    ///
    /// Fails if the header is missing or differs.
    pub fn to_have_header(self, name: &str, value: Option<&str>) -> ExpectResult<Self> {
        self.invoke(names::TO_HAVE_HEADER, Args::new().with(name).with(value))
    }

    /// Expects header `name` to be absent.
    ///
    /// # Errors
    ///
    /// Fails if the header is present.
    pub fn to_have_missing_header(self, name: &str) -> ExpectResult<Self> {
        self.invoke(names::TO_HAVE_MISSING_HEADER, Args::new().with(name))
    }

    /// Expects the session to have `key`, equal to `value` when given.
    /// A list or map of keys checks every binding.
    ///
    /// # Errors
    ///
    /// Fails if a key is missing or holds a different value.
    pub fn to_have_session(self, key: impl Into<Value>, value: Option<Value>) -> ExpectResult<Self> {
        self.invoke(names::TO_HAVE_SESSION, Args::new().with(key).with(value))
    }

    /// Expects every binding in the session.
    ///
    /// # Errors
    ///
    /// Fails on the first missing or different binding.
    pub fn to_have_all_session(self, bindings: Value) -> ExpectResult<Self> {
        self.invoke(names::TO_HAVE_ALL_SESSION, Args::new().with(bindings))
    }

    /// Expects the `Location` header to resolve to `uri`.
    ///
    /// # Errors
    ///
    /// Fails if the locations differ.
    pub fn to_have_location(self, uri: &str) -> ExpectResult<Self> {
        self.invoke(names::TO_HAVE_LOCATION, Args::new().with(uri))
    }
}
