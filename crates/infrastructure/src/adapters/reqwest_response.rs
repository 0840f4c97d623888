//! Captures `reqwest` responses as raw responses.
//!
//! Redirects are not followed, so a `302` from the server under test stays
//! a `302` and redirect expectations can inspect its `Location`.

use reqwest::header::HeaderMap;
use reqwest::{Client, IntoUrl, RequestBuilder, Response, StatusCode};
use respect_domain::{Headers, RawResponse};

/// Error raised while capturing a response.
#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(String),

    /// The request could not be sent.
    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// The response body could not be read.
    #[error("failed to read body: {0}")]
    Body(#[source] reqwest::Error),
}

/// Sends requests and captures their responses.
#[derive(Debug, Clone)]
pub struct ResponseCapture {
    client: Client,
}

impl ResponseCapture {
    /// Creates a capture with a client that never follows redirects.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn new() -> Result<Self, CaptureError> {
        let client = Client::builder()
            .user_agent(concat!("Respect/", env!("CARGO_PKG_VERSION")))
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| CaptureError::Client(e.to_string()))?;

        Ok(Self { client })
    }

    /// Creates a capture around a custom reqwest client.
    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Returns the underlying client, for building requests.
    #[must_use]
    pub const fn client(&self) -> &Client {
        &self.client
    }

    /// Sends a `GET` to `url` and captures the response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be read.
    pub async fn get(&self, url: impl IntoUrl) -> Result<RawResponse, CaptureError> {
        self.send(self.client.get(url)).await
    }

    /// Sends a prepared request and captures the response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be read.
    pub async fn send(&self, request: RequestBuilder) -> Result<RawResponse, CaptureError> {
        let response = request.send().await.map_err(CaptureError::Request)?;
        capture(response).await
    }
}

/// Reads a response into a [`RawResponse`].
///
/// # Errors
///
/// Returns an error if the body cannot be read.
pub async fn capture(response: Response) -> Result<RawResponse, CaptureError> {
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.bytes().await.map_err(CaptureError::Body)?;

    tracing::debug!(status = status.as_u16(), bytes = body.len(), "captured response");
    Ok(raw_response(status, &headers, body.to_vec()))
}

/// Builds a raw response from already-read parts.
///
/// Repeated headers are kept in order; non UTF-8 values are decoded lossily.
#[must_use]
pub fn raw_response(status: StatusCode, headers: &HeaderMap, body: Vec<u8>) -> RawResponse {
    let headers: Headers = headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();

    RawResponse {
        status: status.as_u16().into(),
        headers,
        body,
    }
}
