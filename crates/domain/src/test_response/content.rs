//! Rendered content and download assertions.

use super::TestResponse;
use crate::error::{AssertionError, AssertionResult};
use crate::text::{find_in_order, needle, strip_tags};

impl TestResponse {
    /// Asserts the body contains every given string.
    ///
    /// With `escape`, the strings are HTML-escaped before searching.
    ///
    /// # Errors
    ///
    /// Fails on the first string not found.
    pub fn assert_see<S: AsRef<str>>(&self, values: &[S], escape: bool) -> AssertionResult<&Self> {
        contains_all(&self.content(), values, escape)?;
        Ok(self)
    }

    /// Asserts the body contains the given strings in order.
    ///
    /// # Errors
    ///
    /// Fails on the first string not found after its predecessor.
    pub fn assert_see_in_order<S: AsRef<str>>(
        &self,
        values: &[S],
        escape: bool,
    ) -> AssertionResult<&Self> {
        contains_in_order(&self.content(), values, escape)?;
        Ok(self)
    }

    /// Asserts the body text, with HTML tags stripped, contains every string.
    ///
    /// # Errors
    ///
    /// Fails on the first string not found.
    pub fn assert_see_text<S: AsRef<str>>(
        &self,
        values: &[S],
        escape: bool,
    ) -> AssertionResult<&Self> {
        contains_all(&strip_tags(&self.content()), values, escape)?;
        Ok(self)
    }

    /// Asserts the body text, with HTML tags stripped, contains the strings in order.
    ///
    /// # Errors
    ///
    /// Fails on the first string not found after its predecessor.
    pub fn assert_see_text_in_order<S: AsRef<str>>(
        &self,
        values: &[S],
        escape: bool,
    ) -> AssertionResult<&Self> {
        contains_in_order(&strip_tags(&self.content()), values, escape)?;
        Ok(self)
    }

    /// Asserts the response offers a file download, optionally named `filename`.
    ///
    /// Failures are low-level [`AssertionError::Failed`] errors.
    ///
    /// # Errors
    ///
    /// Fails if `Content-Disposition` is not `attachment`, or the filename
    /// is missing or different.
    pub fn assert_download(&self, filename: Option<&str>) -> AssertionResult<&Self> {
        let disposition = self.header("Content-Disposition").unwrap_or_default();
        let mut parts = disposition.split(';');
        let kind = parts.next().unwrap_or_default().trim();

        if kind != "attachment" {
            return Err(AssertionError::failed(format!(
                "Response does not offer a file download.\nDisposition [{kind}] found in header, [attachment] expected."
            )));
        }

        let Some(filename) = filename else {
            return Ok(self);
        };

        let missing = format!("Expected file [{filename}] is not present in Content-Disposition header.");
        let Some(parameter) = parts.next() else {
            return Err(AssertionError::failed(missing));
        };

        let (key, value) = parameter.split_once('=').unwrap_or((parameter, ""));
        if key.trim() != "filename" {
            return Err(AssertionError::failed(
                "Unsupported Content-Disposition header provided.\nDisposition [filename] expected.",
            ));
        }

        let actual = value.trim_matches(|c: char| c == ' ' || c == '"' || c == '\'');
        if actual == filename {
            Ok(self)
        } else {
            Err(AssertionError::failed(missing))
        }
    }
}

fn contains_all<S: AsRef<str>>(haystack: &str, values: &[S], escape: bool) -> AssertionResult<()> {
    for value in values {
        let expected = needle(value.as_ref(), escape);
        if !haystack.contains(&*expected) {
            return Err(AssertionError::mismatch(
                format!("Failed asserting that the response contains \"{expected}\"."),
                expected.to_string(),
                haystack,
            ));
        }
    }
    Ok(())
}

fn contains_in_order<S: AsRef<str>>(
    haystack: &str,
    values: &[S],
    escape: bool,
) -> AssertionResult<()> {
    let needles: Vec<_> = values
        .iter()
        .map(|value| needle(value.as_ref(), escape))
        .collect();
    find_in_order(haystack, needles.iter().map(|n| &**n)).map_err(|missing| {
        let expected: Vec<&str> = needles.iter().map(|n| &**n).collect();
        AssertionError::mismatch(
            format!(
                "Failed asserting that the response contains [{}] in order; [{missing}] was not found in sequence.",
                expected.join(", ")
            ),
            expected.join(", "),
            haystack,
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::RawResponse;

    fn html(body: &str) -> TestResponse {
        TestResponse::from_base_response(RawResponse::html(200, body))
    }

    fn download(disposition: &str) -> TestResponse {
        TestResponse::from_base_response(
            RawResponse::new(200).with_header("Content-Disposition", disposition),
        )
    }

    #[test]
    fn test_assert_see() {
        let response = html("<h1>Hello &amp; welcome</h1>");
        assert!(response.assert_see(&["Hello"], false).is_ok());
        assert!(response.assert_see(&["<h1>", "welcome"], false).is_ok());
        assert!(response.assert_see(&["Hello & welcome"], true).is_ok());

        let error = response.assert_see(&["Goodbye"], false).unwrap_err();
        assert!(error.message().contains("\"Goodbye\""));
    }

    #[test]
    fn test_assert_see_in_order() {
        let response = html("<li>one</li><li>two</li><li>three</li>");
        assert!(response.assert_see_in_order(&["one", "two", "three"], false).is_ok());
        assert!(response.assert_see_in_order(&["three", "one"], false).is_err());
    }

    #[test]
    fn test_assert_see_text_strips_tags() {
        let response = html("<p>Hello <b>World</b></p>");
        assert!(response.assert_see_text(&["Hello World"], false).is_ok());
        assert!(response.assert_see(&["Hello World"], false).is_err());
        assert!(response.assert_see_text_in_order(&["Hello", "World"], false).is_ok());
        assert!(response.assert_see_text_in_order(&["World", "Hello"], false).is_err());
    }

    #[test]
    fn test_assert_download() {
        let response = download("attachment; filename=report.pdf");
        assert!(response.assert_download(None).is_ok());
        assert!(response.assert_download(Some("report.pdf")).is_ok());

        let quoted = download("attachment; filename=\"report.pdf\"");
        assert!(quoted.assert_download(Some("report.pdf")).is_ok());
    }

    #[test]
    fn test_assert_download_failures_are_low_level() {
        let inline = download("inline");
        let error = inline.assert_download(None).unwrap_err();
        assert!(matches!(error, AssertionError::Failed { .. }));
        assert!(error.message().starts_with("Response does not offer a file download."));

        let error = download("attachment").assert_download(Some("a.txt")).unwrap_err();
        assert_eq!(
            error.message(),
            "Expected file [a.txt] is not present in Content-Disposition header."
        );

        let error = download("attachment; filename=b.txt").assert_download(Some("a.txt")).unwrap_err();
        assert!(matches!(error, AssertionError::Failed { .. }));

        let error = download("attachment; name=a.txt").assert_download(Some("a.txt")).unwrap_err();
        assert!(error.message().starts_with("Unsupported Content-Disposition header"));
    }
}
