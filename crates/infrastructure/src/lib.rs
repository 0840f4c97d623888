//! Respect Infrastructure - Adapters and implementations
//!
//! This crate provides the system clock, `reqwest` response capture,
//! configuration file loading and tracing setup.

pub mod adapters;
pub mod bootstrap;
pub mod config;
pub mod logging;

pub use adapters::{CaptureError, ResponseCapture, SystemClock, capture};
pub use bootstrap::{BootstrapError, harness_from_file};
pub use config::{ConfigError, ConfigFormat, load_config};
