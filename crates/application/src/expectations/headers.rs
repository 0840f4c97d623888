//! Header expectations.

use respect_domain::ExpectResult;

use crate::args::Args;
use crate::names;
use crate::registry::{ExpectationRegistry, Invocation};

pub(super) fn register(registry: &mut ExpectationRegistry) {
    registry.register(names::TO_HAVE_HEADER, to_have_header);
    registry.register(names::TO_HAVE_MISSING_HEADER, to_have_missing_header);
}

fn to_have_header(invocation: &Invocation<'_>, args: &Args) -> ExpectResult<()> {
    let name = args.string(0)?;
    let value = header_value(args)?;
    invocation.response()?.assert_header(name, value.as_deref())?;
    Ok(())
}

fn to_have_missing_header(invocation: &Invocation<'_>, args: &Args) -> ExpectResult<()> {
    let name = args.string(0)?;
    invocation.response()?.assert_header_missing(name)?;
    Ok(())
}

/// Header values may be given as numbers, e.g. `Content-Length`.
fn header_value(args: &Args) -> ExpectResult<Option<String>> {
    Ok(match args.optional(1) {
        None => None,
        Some(serde_json::Value::Number(number)) => Some(number.to_string()),
        Some(_) => args.optional_string(1)?.map(ToString::to_string),
    })
}
