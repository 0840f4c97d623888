//! Status code expectations.

use respect_domain::{ExpectResult, StatusCode};

use crate::args::Args;
use crate::names;
use crate::registry::{ExpectationRegistry, Invocation};

pub(super) fn register(registry: &mut ExpectationRegistry) {
    registry.register(names::TO_BE_SUCCESSFUL, to_be_successful);
    registry.register(names::TO_BE_OK, to_be_ok);
    registry.register(names::TO_CONFIRM_CREATION, to_confirm_creation);
    registry.register(names::TO_BE_NOT_FOUND, to_be_not_found);
    registry.register(names::TO_BE_UNAUTHORIZED, to_be_unauthorized);
    registry.register(names::TO_BE_FORBIDDEN, to_be_forbidden);
    registry.register(names::TO_HAVE_NO_CONTENT, to_have_no_content);
    registry.register(names::TO_HAVE_STATUS, to_have_status);
}

fn to_be_successful(invocation: &Invocation<'_>, _: &Args) -> ExpectResult<()> {
    invocation.response()?.assert_successful()?;
    Ok(())
}

fn to_be_ok(invocation: &Invocation<'_>, _: &Args) -> ExpectResult<()> {
    invocation.response()?.assert_ok()?;
    Ok(())
}

fn to_confirm_creation(invocation: &Invocation<'_>, _: &Args) -> ExpectResult<()> {
    invocation.response()?.assert_created()?;
    Ok(())
}

fn to_be_not_found(invocation: &Invocation<'_>, _: &Args) -> ExpectResult<()> {
    invocation.response()?.assert_not_found()?;
    Ok(())
}

fn to_be_unauthorized(invocation: &Invocation<'_>, _: &Args) -> ExpectResult<()> {
    invocation.response()?.assert_unauthorized()?;
    Ok(())
}

fn to_be_forbidden(invocation: &Invocation<'_>, _: &Args) -> ExpectResult<()> {
    invocation.response()?.assert_forbidden()?;
    Ok(())
}

fn to_have_no_content(invocation: &Invocation<'_>, args: &Args) -> ExpectResult<()> {
    let status = args.status_or(0, StatusCode::NO_CONTENT.as_u16())?;
    invocation.response()?.assert_no_content(status)?;
    Ok(())
}

fn to_have_status(invocation: &Invocation<'_>, args: &Args) -> ExpectResult<()> {
    let status = args.status(0)?;
    invocation.response()?.assert_status(status)?;
    Ok(())
}
