//! JSON body expectations.

use respect_domain::{ExpectResult, JsonStructure};

use crate::args::Args;
use crate::names;
use crate::registry::{ExpectationRegistry, Invocation};

pub(super) fn register(registry: &mut ExpectationRegistry) {
    registry.register(names::TO_HAVE_JSON, to_have_json);
    registry.register(names::TO_HAVE_EXACT_JSON, to_have_exact_json);
    registry.register(names::TO_HAVE_JSON_FRAGMENT, to_have_json_fragment);
    registry.register(names::TO_HAVE_JSON_STRUCTURE, to_have_json_structure);
    registry.register(names::TO_HAVE_JSON_PATH, to_have_json_path);
}

fn to_have_json(invocation: &Invocation<'_>, args: &Args) -> ExpectResult<()> {
    let expected = args.required(0)?;
    let strict = args.bool_or(1, false)?;
    invocation.response()?.assert_json(expected, strict)?;
    Ok(())
}

fn to_have_exact_json(invocation: &Invocation<'_>, args: &Args) -> ExpectResult<()> {
    let expected = args.required(0)?;
    invocation.response()?.assert_exact_json(expected)?;
    Ok(())
}

fn to_have_json_fragment(invocation: &Invocation<'_>, args: &Args) -> ExpectResult<()> {
    let fragment = args.required(0)?;
    invocation.response()?.assert_json_fragment(fragment)?;
    Ok(())
}

fn to_have_json_structure(invocation: &Invocation<'_>, args: &Args) -> ExpectResult<()> {
    let structure = args.optional(0).map(JsonStructure::from_value);
    let data = args.optional(1);
    invocation
        .response()?
        .assert_json_structure(structure.as_ref(), data)?;
    Ok(())
}

/// `null` is a legal expected value here, so the argument is read as-is.
fn to_have_json_path(invocation: &Invocation<'_>, args: &Args) -> ExpectResult<()> {
    let path = args.string(0)?;
    invocation.response()?.assert_json_path(path, args.value(1))?;
    Ok(())
}
