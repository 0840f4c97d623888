//! Validation error expectations.

use respect_domain::{DEFAULT_ERROR_BAG, ERRORS_KEY, ExpectResult};

use crate::args::Args;
use crate::names;
use crate::registry::{ExpectationRegistry, Invocation};

pub(super) fn register(registry: &mut ExpectationRegistry) {
    registry.register(names::TO_HAVE_JSON_VALIDATION_ERRORS, to_have_json_validation_errors);
    registry.register(names::TO_HAVE_VALID, to_have_valid);
    registry.register(names::TO_HAVE_INVALID, to_have_invalid);
}

fn to_have_json_validation_errors(invocation: &Invocation<'_>, args: &Args) -> ExpectResult<()> {
    let response_key = args.string_or(1, ERRORS_KEY)?;
    invocation
        .response()?
        .assert_json_validation_errors(args.value(0), response_key)?;
    Ok(())
}

fn to_have_valid(invocation: &Invocation<'_>, args: &Args) -> ExpectResult<()> {
    let error_bag = args.string_or(1, DEFAULT_ERROR_BAG)?;
    let response_key = args.string_or(2, ERRORS_KEY)?;
    invocation
        .response()?
        .assert_valid(args.value(0), error_bag, response_key)?;
    Ok(())
}

fn to_have_invalid(invocation: &Invocation<'_>, args: &Args) -> ExpectResult<()> {
    let error_bag = args.string_or(1, DEFAULT_ERROR_BAG)?;
    let response_key = args.string_or(2, ERRORS_KEY)?;
    invocation
        .response()?
        .assert_invalid(args.value(0), error_bag, response_key)?;
    Ok(())
}
