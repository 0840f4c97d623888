//! Harness configuration.

use std::collections::BTreeMap;
use std::fmt;

use respect_domain::{ConfigurationError, UrlGenerator};
use serde::{Deserialize, Serialize};

/// Application URL used when none is configured.
pub const DEFAULT_APP_URL: &str = "http://localhost";

/// Settings the expectation harness is built from.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Root URL relative locations are resolved against.
    #[serde(default = "default_app_url")]
    pub app_url: String,
    /// Key signed route URLs are verified with.
    #[serde(default)]
    pub app_key: String,
    /// Named route templates, e.g. `"user.show": "/users/{user}"`.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub routes: BTreeMap<String, String>,
}

fn default_app_url() -> String {
    DEFAULT_APP_URL.to_string()
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            app_url: default_app_url(),
            app_key: String::new(),
            routes: BTreeMap::new(),
        }
    }
}

impl HarnessConfig {
    /// Creates a configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the application URL.
    #[must_use]
    pub fn with_app_url(mut self, app_url: impl Into<String>) -> Self {
        self.app_url = app_url.into();
        self
    }

    /// Sets the signing key.
    #[must_use]
    pub fn with_app_key(mut self, app_key: impl Into<String>) -> Self {
        self.app_key = app_key.into();
        self
    }

    /// Adds a named route.
    #[must_use]
    pub fn with_route(mut self, name: impl Into<String>, uri: impl Into<String>) -> Self {
        self.routes.insert(name.into(), uri.into());
        self
    }

    /// Builds the URL generator for this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `app_url` is not an absolute URL.
    pub fn url_generator(&self) -> Result<UrlGenerator, ConfigurationError> {
        let mut url = UrlGenerator::new(&self.app_url, self.app_key.as_bytes())?;
        for (name, uri) in &self.routes {
            url.add_route(name, uri);
        }
        Ok(url)
    }
}

impl fmt::Debug for HarnessConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HarnessConfig")
            .field("app_url", &self.app_url)
            .field("app_key", &"[REDACTED]")
            .field("routes", &self.routes)
            .finish()
    }
}
