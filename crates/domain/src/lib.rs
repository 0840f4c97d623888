//! Respect Domain - Response types and assertions
//!
//! This crate defines the responses that expectations run against and the
//! assertion surface of the canonical [`TestResponse`].
//! All types here are pure Rust with no I/O dependencies.

pub mod error;
pub mod json;
pub mod response;
pub mod routing;
pub mod session;
pub mod subject;
pub mod test_response;
pub mod text;
pub mod validation;

pub use error::{
    AssertionError, AssertionResult, ConfigurationError, ExpectError, ExpectResult,
};
pub use json::{JsonStructure, StructureNode};
pub use response::{Header, Headers, RawResponse, StatusCode};
pub use routing::UrlGenerator;
pub use session::{DEFAULT_ERROR_BAG, ERRORS_KEY, Session};
pub use subject::Subject;
pub use test_response::TestResponse;
pub use validation::ExpectedError;
