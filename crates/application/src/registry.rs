//! Name-keyed table of expectation handlers.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use respect_domain::{ConfigurationError, ExpectResult, Subject, TestResponse};

use crate::args::Args;
use crate::context::HarnessContext;

/// A named expectation.
///
/// Handlers normalize the subject, perform one delegated assertion (or
/// re-invoke another expectation by name) and report failures as errors.
pub trait ExpectationHandler: Send + Sync {
    /// Runs the expectation.
    ///
    /// # Errors
    ///
    /// Returns an assertion failure when the subject does not meet the
    /// expectation, or a configuration error when it cannot be evaluated.
    fn handle(&self, invocation: &Invocation<'_>, args: &Args) -> ExpectResult<()>;
}

impl<F> ExpectationHandler for F
where
    F: Fn(&Invocation<'_>, &Args) -> ExpectResult<()> + Send + Sync,
{
    fn handle(&self, invocation: &Invocation<'_>, args: &Args) -> ExpectResult<()> {
        self(invocation, args)
    }
}

/// The implicit receiver of a handler: the subject plus the tables it may use.
#[derive(Debug, Clone, Copy)]
pub struct Invocation<'a> {
    registry: &'a ExpectationRegistry,
    context: &'a HarnessContext,
    subject: &'a Subject,
    name: &'a str,
}

impl<'a> Invocation<'a> {
    /// Returns the subject under test.
    #[must_use]
    pub const fn subject(&self) -> &'a Subject {
        self.subject
    }

    /// Returns the harness context.
    #[must_use]
    pub const fn context(&self) -> &'a HarnessContext {
        self.context
    }

    /// Returns the name this handler was invoked under.
    #[must_use]
    pub const fn name(&self) -> &'a str {
        self.name
    }

    /// Returns the subject as the canonical test response.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the subject is not a response.
    pub fn response(&self) -> ExpectResult<Cow<'a, TestResponse>> {
        Ok(self.subject.test_response()?)
    }

    /// Invokes another expectation against the same subject.
    ///
    /// # Errors
    ///
    /// Propagates the invoked expectation's error.
    pub fn call(&self, name: &str, args: Args) -> ExpectResult<()> {
        self.registry.invoke(self.context, self.subject, name, args)
    }
}

/// Maps expectation names to handlers.
///
/// Populated during setup and shared read-only afterwards.
#[derive(Default, Clone)]
pub struct ExpectationRegistry {
    handlers: HashMap<String, Arc<dyn ExpectationHandler>>,
}

impl ExpectationRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every built-in response expectation.
    #[must_use]
    pub fn with_response_expectations() -> Self {
        let mut registry = Self::new();
        crate::expectations::register_all(&mut registry);
        registry
    }

    /// Registers a closure under `name`. A previous handler with the same
    /// name is replaced.
    pub fn register<F>(&mut self, name: impl Into<String>, handler: F)
    where
        F: Fn(&Invocation<'_>, &Args) -> ExpectResult<()> + Send + Sync + 'static,
    {
        self.register_handler(name, Arc::new(handler));
    }

    /// Registers a handler under `name`. A previous handler with the same
    /// name is replaced.
    pub fn register_handler(&mut self, name: impl Into<String>, handler: Arc<dyn ExpectationHandler>) {
        let name = name.into();
        if self.handlers.insert(name.clone(), handler).is_some() {
            tracing::warn!(expectation = %name, "expectation overwritten");
        } else {
            tracing::debug!(expectation = %name, "expectation registered");
        }
    }

    /// Invokes the expectation `name` against `subject`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for unknown names, otherwise whatever
    /// the handler returns.
    pub fn invoke(
        &self,
        context: &HarnessContext,
        subject: &Subject,
        name: &str,
        mut args: Args,
    ) -> ExpectResult<()> {
        let handler = self
            .handlers
            .get(name)
            .ok_or_else(|| ConfigurationError::UnknownExpectation(name.to_string()))?;

        tracing::debug!(expectation = name, subject = subject.kind(), args = args.len(), "invoking expectation");

        args.bind(name);
        let invocation = Invocation {
            registry: self,
            context,
            subject,
            name,
        };
        handler.handle(&invocation, &args)
    }

    /// Returns true if `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Returns the registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of registered expectations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl fmt::Debug for ExpectationRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExpectationRegistry")
            .field("names", &self.names())
            .finish()
    }
}
