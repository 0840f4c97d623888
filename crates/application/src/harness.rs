//! The entry point of expectation chains.

use std::sync::Arc;

use respect_domain::{ConfigurationError, ExpectResult, Subject};

use crate::args::Args;
use crate::config::HarnessConfig;
use crate::context::HarnessContext;
use crate::expectation::Expectation;
use crate::ports::Clock;
use crate::registry::ExpectationRegistry;

/// Owns the expectation registry and the context expectations run in.
///
/// Build it once per test suite; chains only borrow it.
#[derive(Debug, Clone)]
pub struct Harness {
    registry: ExpectationRegistry,
    context: HarnessContext,
}

impl Harness {
    /// Creates a harness from an explicit registry and context.
    #[must_use]
    pub const fn new(registry: ExpectationRegistry, context: HarnessContext) -> Self {
        Self { registry, context }
    }

    /// Creates a harness with every built-in expectation registered.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured application URL is invalid.
    pub fn from_config(config: &HarnessConfig, clock: Arc<dyn Clock>) -> Result<Self, ConfigurationError> {
        let context = HarnessContext::new(config.url_generator()?, clock);
        tracing::debug!(app_url = %config.app_url, routes = config.routes.len(), "harness configured");
        Ok(Self::new(ExpectationRegistry::with_response_expectations(), context))
    }

    /// Starts an expectation chain for `subject`.
    pub fn expect(&self, subject: impl Into<Subject>) -> Expectation<'_> {
        Expectation::new(self, subject.into())
    }

    /// Invokes the expectation `name` directly.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for unknown names, otherwise the
    /// expectation's own result.
    pub fn invoke(&self, subject: &Subject, name: &str, args: Args) -> ExpectResult<()> {
        self.registry.invoke(&self.context, subject, name, args)
    }

    /// Returns the registry.
    #[must_use]
    pub const fn registry(&self) -> &ExpectationRegistry {
        &self.registry
    }

    /// Returns the registry for adding custom expectations during setup.
    pub const fn registry_mut(&mut self) -> &mut ExpectationRegistry {
        &mut self.registry
    }

    /// Returns the context.
    #[must_use]
    pub const fn context(&self) -> &HarnessContext {
        &self.context
    }
}
