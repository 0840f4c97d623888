//! Built-in response expectations.
//!
//! Each handler normalizes its subject, forwards to one assertion on the
//! canonical test response and maps arguments positionally. The
//! `to_contain_text*` aliases re-invoke their target through the registry.

mod content;
mod headers;
mod json;
mod redirect;
mod session;
mod status;
mod validation;

use crate::registry::ExpectationRegistry;

/// Registers every built-in expectation.
pub fn register_all(registry: &mut ExpectationRegistry) {
    redirect::register(registry);
    status::register(registry);
    content::register(registry);
    json::register(registry);
    validation::register(registry);
    headers::register(registry);
    session::register(registry);
}
