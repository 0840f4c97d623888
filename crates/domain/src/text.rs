//! Rendered-text helpers: HTML escaping, tag stripping and ordered search.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

static TAG: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->|<[^>]*>"));

/// Escapes the HTML special characters `& < > " '`.
#[must_use]
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

/// Removes HTML tags and comments, leaving the text content.
#[must_use]
pub fn strip_tags(html: &str) -> Cow<'_, str> {
    match TAG.as_ref() {
        Ok(tag) => tag.replace_all(html, ""),
        Err(_) => Cow::Borrowed(html),
    }
}

/// Prepares a needle for searching: escaped when `escape` is set.
#[must_use]
pub fn needle(text: &str, escape: bool) -> Cow<'_, str> {
    if escape {
        escape_html(text)
    } else {
        Cow::Borrowed(text)
    }
}

/// Finds every needle in order, each one after the end of the previous.
///
/// Empty needles are skipped. Returns the first needle that could not be
/// found at or after the current position.
pub fn find_in_order<'a, I>(haystack: &str, needles: I) -> Result<(), &'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut position = 0;
    for needle in needles {
        if needle.is_empty() {
            continue;
        }
        match haystack.get(position..).and_then(|rest| rest.find(needle)) {
            Some(offset) => position += offset + needle.len(),
            None => return Err(needle),
        }
    }
    Ok(())
}
