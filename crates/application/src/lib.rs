//! Respect Application - Expectation registry and fluent expectations
//!
//! This crate wires the assertion surface of [`respect_domain`] into named
//! expectations, looked up through an [`ExpectationRegistry`] and invoked
//! through the chainable [`Expectation`] handle.

pub mod args;
pub mod config;
pub mod context;
pub mod expectation;
pub mod expectations;
pub mod harness;
pub mod names;
pub mod ports;
pub mod registry;

pub use args::Args;
pub use config::{DEFAULT_APP_URL, HarnessConfig};
pub use context::HarnessContext;
pub use expectation::Expectation;
pub use harness::Harness;
pub use ports::{Clock, FixedClock};
pub use registry::{ExpectationHandler, ExpectationRegistry, Invocation};
pub use respect_domain::{AssertionError, ConfigurationError, ExpectError, ExpectResult, Subject};
