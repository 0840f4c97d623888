//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the expectation core and the outside
//! world. Adapters live in the infrastructure layer.

mod clock;

pub use clock::{Clock, FixedClock};
