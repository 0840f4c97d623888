//! Download and rendered content expectations.

use respect_domain::ExpectResult;

use crate::args::Args;
use crate::names;
use crate::registry::{ExpectationRegistry, Invocation};

pub(super) fn register(registry: &mut ExpectationRegistry) {
    registry.register(names::TO_BE_DOWNLOAD, to_be_download);
    registry.register(names::TO_RENDER, to_render);
    registry.register(names::TO_RENDER_IN_ORDER, to_render_in_order);
    registry.register(names::TO_RENDER_TEXT, to_render_text);
    registry.register(names::TO_RENDER_TEXT_IN_ORDER, to_render_text_in_order);
    registry.register(names::TO_CONTAIN_TEXT, |invocation: &Invocation<'_>, args: &Args| {
        invocation.call(names::TO_RENDER_TEXT, args.clone())
    });
    registry.register(names::TO_CONTAIN_TEXT_IN_ORDER, |invocation: &Invocation<'_>, args: &Args| {
        invocation.call(names::TO_RENDER_TEXT_IN_ORDER, args.clone())
    });
}

fn to_be_download(invocation: &Invocation<'_>, args: &Args) -> ExpectResult<()> {
    let filename = args.optional_string(0)?;
    invocation
        .response()?
        .assert_download(filename)
        .map_err(respect_domain::AssertionError::into_expectation_failure)?;
    Ok(())
}

fn to_render(invocation: &Invocation<'_>, args: &Args) -> ExpectResult<()> {
    let values = args.strings(0)?;
    let escape = args.bool_or(1, false)?;
    invocation.response()?.assert_see(&values, escape)?;
    Ok(())
}

fn to_render_in_order(invocation: &Invocation<'_>, args: &Args) -> ExpectResult<()> {
    let values = args.strings(0)?;
    let escape = args.bool_or(1, false)?;
    invocation.response()?.assert_see_in_order(&values, escape)?;
    Ok(())
}

fn to_render_text(invocation: &Invocation<'_>, args: &Args) -> ExpectResult<()> {
    let values = args.strings(0)?;
    let escape = args.bool_or(1, false)?;
    invocation.response()?.assert_see_text(&values, escape)?;
    Ok(())
}

fn to_render_text_in_order(invocation: &Invocation<'_>, args: &Args) -> ExpectResult<()> {
    let values = args.strings(0)?;
    let escape = args.bool_or(1, false)?;
    invocation.response()?.assert_see_text_in_order(&values, escape)?;
    Ok(())
}
