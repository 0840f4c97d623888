//! Redirect, signed route and location expectations.

use respect_domain::{AssertionError, ExpectResult};
use serde_json::Value;

use crate::args::Args;
use crate::names;
use crate::registry::{ExpectationRegistry, Invocation};

pub(super) fn register(registry: &mut ExpectationRegistry) {
    registry.register(names::TO_BE_REDIRECT, to_be_redirect);
    registry.register(names::TO_BE_REDIRECT_TO_SIGNED_ROUTE, to_be_redirect_to_signed_route);
    registry.register(names::TO_HAVE_LOCATION, to_have_location);
}

/// Location mismatches are reported against the raw `Location` header so
/// the message shows what the response actually sent.
fn to_be_redirect(invocation: &Invocation<'_>, args: &Args) -> ExpectResult<()> {
    let uri = args.optional_string(0)?;
    let response = invocation.response()?;
    response.assert_redirect()?;

    let Some(uri) = uri else {
        return Ok(());
    };

    if let Err(error) = response.assert_location(invocation.context().url(), uri) {
        let location = response.location().unwrap_or_default();
        return Err(match error {
            AssertionError::ExpectationFailed { .. } => AssertionError::mismatch(
                format!("Failed asserting that the redirect uri [{location}] matches [{uri}]"),
                uri,
                location,
            ),
            other @ AssertionError::Failed { .. } => other,
        }
        .into());
    }
    Ok(())
}

fn to_be_redirect_to_signed_route(invocation: &Invocation<'_>, args: &Args) -> ExpectResult<()> {
    let name = args.optional_string(0)?;
    let parameters = args.optional(1).unwrap_or(&Value::Null);
    let context = invocation.context();
    invocation
        .response()?
        .assert_redirect_to_signed_route(context.url(), context.now(), name, parameters)?;
    Ok(())
}

fn to_have_location(invocation: &Invocation<'_>, args: &Args) -> ExpectResult<()> {
    let uri = args.string(0)?;
    invocation
        .response()?
        .assert_location(invocation.context().url(), uri)?;
    Ok(())
}
