//! Adapters for the application ports and external libraries.

mod reqwest_response;
mod system_clock;

pub use reqwest_response::{CaptureError, ResponseCapture, capture, raw_response};
pub use system_clock::SystemClock;
