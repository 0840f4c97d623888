//! Domain error types

use thiserror::Error;

/// A check against a response that did not hold.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AssertionError {
    /// Low-level failure raised by a response assertion.
    #[error("{message}")]
    Failed {
        /// Human readable failure description.
        message: String,
    },

    /// Expectation-level failure, optionally carrying expected vs. actual.
    #[error("{message}")]
    ExpectationFailed {
        /// Human readable failure description.
        message: String,
        /// Rendered expected value, when known.
        expected: Option<String>,
        /// Rendered actual value, when known.
        actual: Option<String>,
    },
}

impl AssertionError {
    /// Creates a low-level failure.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }

    /// Creates an expectation failure without expected/actual details.
    pub fn expectation(message: impl Into<String>) -> Self {
        Self::ExpectationFailed {
            message: message.into(),
            expected: None,
            actual: None,
        }
    }

    /// Creates an expectation failure comparing two rendered values.
    pub fn mismatch(
        message: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::ExpectationFailed {
            message: message.into(),
            expected: Some(expected.into()),
            actual: Some(actual.into()),
        }
    }

    /// Returns the failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Failed { message } | Self::ExpectationFailed { message, .. } => message,
        }
    }

    /// Returns the expected value, if recorded.
    #[must_use]
    pub fn expected(&self) -> Option<&str> {
        match self {
            Self::Failed { .. } => None,
            Self::ExpectationFailed { expected, .. } => expected.as_deref(),
        }
    }

    /// Returns the actual value, if recorded.
    #[must_use]
    pub fn actual(&self) -> Option<&str> {
        match self {
            Self::Failed { .. } => None,
            Self::ExpectationFailed { actual, .. } => actual.as_deref(),
        }
    }

    /// Promotes a low-level failure to an expectation failure.
    ///
    /// The message is preserved; expectation failures are returned unchanged.
    #[must_use]
    pub fn into_expectation_failure(self) -> Self {
        match self {
            Self::Failed { message } => Self::ExpectationFailed {
                message,
                expected: None,
                actual: None,
            },
            other @ Self::ExpectationFailed { .. } => other,
        }
    }
}

/// Setup and programmer errors. These are never assertion outcomes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// No expectation was registered under the given name.
    #[error("no such expectation: {0}")]
    UnknownExpectation(String),

    /// The subject cannot be normalized into a test response.
    #[error("unsupported subject: expected a response, got {0}")]
    UnsupportedSubject(String),

    /// An expectation was invoked with a missing or malformed argument.
    #[error("invalid argument {index} for '{expectation}': {reason}")]
    InvalidArgument {
        /// Expectation name.
        expectation: String,
        /// Zero-based argument position.
        index: usize,
        /// What was wrong with the argument.
        reason: String,
    },

    /// A route name was not present in the route table.
    #[error("route [{0}] not defined")]
    UnknownRoute(String),

    /// A URL could not be built or parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

/// Either outcome of running an expectation that did not pass.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExpectError {
    /// The delegated check did not hold.
    #[error(transparent)]
    Assertion(#[from] AssertionError),

    /// The expectation could not run at all.
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
}

impl ExpectError {
    /// Returns true if this is an assertion failure.
    #[must_use]
    pub const fn is_assertion_failure(&self) -> bool {
        matches!(self, Self::Assertion(_))
    }

    /// Returns true if this is a configuration error.
    #[must_use]
    pub const fn is_configuration_error(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    /// Returns the assertion failure, if any.
    #[must_use]
    pub const fn as_assertion(&self) -> Option<&AssertionError> {
        match self {
            Self::Assertion(error) => Some(error),
            Self::Configuration(_) => None,
        }
    }
}

/// Result type alias for response assertions.
pub type AssertionResult<T> = Result<T, AssertionError>;

/// Result type alias for expectations.
pub type ExpectResult<T> = Result<T, ExpectError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_promotion_preserves_message() {
        let error = AssertionError::failed("Response does not offer a file download.");
        let promoted = error.into_expectation_failure();

        assert!(matches!(promoted, AssertionError::ExpectationFailed { .. }));
        assert_eq!(promoted.message(), "Response does not offer a file download.");
    }

    #[test]
    fn test_promotion_keeps_expectation_failures() {
        let error = AssertionError::mismatch("status", "200", "404");
        assert_eq!(error.clone().into_expectation_failure(), error);
        assert_eq!(error.expected(), Some("200"));
        assert_eq!(error.actual(), Some("404"));
    }

    #[test]
    fn test_expect_error_kinds() {
        let assertion: ExpectError = AssertionError::failed("nope").into();
        let config: ExpectError = ConfigurationError::UnknownExpectation("x".into()).into();

        assert!(assertion.is_assertion_failure());
        assert!(!assertion.is_configuration_error());
        assert!(config.is_configuration_error());
        assert_eq!(assertion.to_string(), "nope");
        assert_eq!(config.to_string(), "configuration error: no such expectation: x");
    }
}
