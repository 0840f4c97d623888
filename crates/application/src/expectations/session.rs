//! Session expectations.

use respect_domain::ExpectResult;
use serde_json::Value;

use crate::args::Args;
use crate::names;
use crate::registry::{ExpectationRegistry, Invocation};

pub(super) fn register(registry: &mut ExpectationRegistry) {
    registry.register(names::TO_HAVE_SESSION, to_have_session);
    registry.register(names::TO_HAVE_ALL_SESSION, to_have_all_session);
}

/// A list or map of keys checks every binding; a single key may carry a value.
fn to_have_session(invocation: &Invocation<'_>, args: &Args) -> ExpectResult<()> {
    let response = invocation.response()?;
    match args.required(0)? {
        bindings @ (Value::Array(_) | Value::Object(_)) => {
            response.assert_session_has_all(bindings)?;
        }
        _ => {
            let key = args.string(0)?;
            response.assert_session_has(key, args.optional(1))?;
        }
    }
    Ok(())
}

fn to_have_all_session(invocation: &Invocation<'_>, args: &Args) -> ExpectResult<()> {
    let bindings = args.required(0)?;
    invocation.response()?.assert_session_has_all(bindings)?;
    Ok(())
}
