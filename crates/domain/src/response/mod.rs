//! HTTP response types
//!
//! Contains the raw response form and its building blocks.

mod headers;
mod raw;
mod status;

pub use headers::{Header, Headers};
pub use raw::RawResponse;
pub use status::{REDIRECT_STATUSES, StatusCode};
