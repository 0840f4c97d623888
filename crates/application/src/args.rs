//! Positional expectation arguments.

use respect_domain::{ConfigurationError, ExpectResult};
use serde_json::Value;

static NULL: Value = Value::Null;

/// Positional arguments passed to an expectation.
///
/// `null` and missing trailing arguments are treated the same, so optional
/// parameters fall back to their defaults either way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args {
    values: Vec<Value>,
    expectation: String,
}

impl Args {
    /// Creates an empty argument list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            values: Vec::new(),
            expectation: String::new(),
        }
    }

    /// Creates an argument list from values.
    #[must_use]
    pub fn from_values(values: Vec<Value>) -> Self {
        Self {
            values,
            expectation: String::new(),
        }
    }

    /// Appends an argument (builder pattern).
    #[must_use]
    pub fn with(mut self, value: impl Into<Value>) -> Self {
        self.values.push(value.into());
        self
    }

    /// Names the expectation these arguments are for, used in error messages.
    pub(crate) fn bind(&mut self, expectation: &str) {
        expectation.clone_into(&mut self.expectation);
    }

    /// Returns the raw values.
    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Returns the number of arguments.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if there are no arguments.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the argument at `index`, or `null` when absent.
    #[must_use]
    pub fn value(&self, index: usize) -> &Value {
        self.values.get(index).unwrap_or(&NULL)
    }

    /// Returns the argument at `index` unless it is absent or `null`.
    #[must_use]
    pub fn optional(&self, index: usize) -> Option<&Value> {
        self.values.get(index).filter(|value| !value.is_null())
    }

    /// Returns a required argument.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the argument is absent or `null`.
    pub fn required(&self, index: usize) -> ExpectResult<&Value> {
        self.optional(index)
            .ok_or_else(|| self.invalid(index, "missing required argument"))
    }

    /// Returns a required string argument.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the argument is absent or not a string.
    pub fn string(&self, index: usize) -> ExpectResult<&str> {
        self.required(index)?
            .as_str()
            .ok_or_else(|| self.invalid(index, "expected a string"))
    }

    /// Returns an optional string argument.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the argument is present but not a string.
    pub fn optional_string(&self, index: usize) -> ExpectResult<Option<&str>> {
        self.optional(index)
            .map(|value| {
                value
                    .as_str()
                    .ok_or_else(|| self.invalid(index, "expected a string"))
            })
            .transpose()
    }

    /// Returns a string argument, or `default` when absent.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the argument is present but not a string.
    pub fn string_or<'a>(&'a self, index: usize, default: &'a str) -> ExpectResult<&'a str> {
        Ok(self.optional_string(index)?.unwrap_or(default))
    }

    /// Returns a boolean argument, or `default` when absent.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the argument is present but not a boolean.
    pub fn bool_or(&self, index: usize, default: bool) -> ExpectResult<bool> {
        self.optional(index).map_or(Ok(default), |value| {
            value
                .as_bool()
                .ok_or_else(|| self.invalid(index, "expected a boolean"))
        })
    }

    /// Returns a required status code argument.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the argument is absent or not a valid status code.
    pub fn status(&self, index: usize) -> ExpectResult<u16> {
        let value = self.required(index)?;
        value
            .as_u64()
            .and_then(|code| u16::try_from(code).ok())
            .ok_or_else(|| self.invalid(index, "expected a status code"))
    }

    /// Returns a status code argument, or `default` when absent.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the argument is present but not a valid status code.
    pub fn status_or(&self, index: usize, default: u16) -> ExpectResult<u16> {
        if self.optional(index).is_none() {
            return Ok(default);
        }
        self.status(index)
    }

    /// Returns a required string, or list of strings, argument.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the argument is absent or contains
    /// anything but strings.
    pub fn strings(&self, index: usize) -> ExpectResult<Vec<String>> {
        match self.required(index)? {
            Value::String(text) => Ok(vec![text.clone()]),
            Value::Array(items) => items
                .iter()
                .map(|item| {
                    item.as_str()
                        .map(ToString::to_string)
                        .ok_or_else(|| self.invalid(index, "expected a list of strings"))
                })
                .collect(),
            _ => Err(self.invalid(index, "expected a string or a list of strings")),
        }
    }

    fn invalid(&self, index: usize, reason: &str) -> respect_domain::ExpectError {
        ConfigurationError::InvalidArgument {
            expectation: self.expectation.clone(),
            index,
            reason: reason.to_string(),
        }
        .into()
    }
}

impl From<Vec<Value>> for Args {
    fn from(values: Vec<Value>) -> Self {
        Self::from_values(values)
    }
}
