//! Shared collaborators handed to every expectation.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use respect_domain::UrlGenerator;

use crate::ports::Clock;

/// Everything an expectation needs besides its subject and arguments.
#[derive(Clone)]
pub struct HarnessContext {
    url: UrlGenerator,
    clock: Arc<dyn Clock>,
}

impl HarnessContext {
    /// Creates a new context.
    #[must_use]
    pub fn new(url: UrlGenerator, clock: Arc<dyn Clock>) -> Self {
        Self { url, clock }
    }

    /// Returns the URL generator used to resolve locations and routes.
    #[must_use]
    pub const fn url(&self) -> &UrlGenerator {
        &self.url
    }

    /// Returns a mutable URL generator, for registering routes during setup.
    pub const fn url_mut(&mut self) -> &mut UrlGenerator {
        &mut self.url
    }

    /// Returns the current time according to the context's clock.
    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }
}

impl fmt::Debug for HarnessContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HarnessContext")
            .field("url", &self.url)
            .field("now", &self.clock.now())
            .finish()
    }
}
