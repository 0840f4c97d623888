//! Builds a ready-to-use harness from a configuration file.

use std::path::Path;
use std::sync::Arc;

use respect_application::{ConfigurationError, Harness};

use crate::adapters::SystemClock;
use crate::config::{ConfigError, load_config};

/// Error type for harness bootstrap.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    /// The configuration file could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The configuration values are invalid.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

/// Loads `path` and builds a harness with the system clock and every
/// built-in expectation.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded or its `app_url` is invalid.
pub async fn harness_from_file(path: impl AsRef<Path>) -> Result<Harness, BootstrapError> {
    let config = load_config(path).await?;
    Ok(Harness::from_config(&config, Arc::new(SystemClock::new()))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use respect_domain::RawResponse;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_harness_from_yaml_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("respect.yaml");
        tokio::fs::write(&path, "routes:\n  home: /home\n").await.unwrap();

        let harness = harness_from_file(&path).await.unwrap();
        let root = harness.context().url().root().to_string();

        assert!(harness.registry().contains("to_be_redirect"));
        let redirect = RawResponse::redirect(format!("{root}/home"));
        assert!(harness.expect(redirect).to_be_redirect(Some("/home")).is_ok());
    }

    #[tokio::test]
    async fn test_unsupported_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = harness_from_file(temp_dir.path().join("respect.toml")).await;
        assert!(matches!(result, Err(BootstrapError::Config(ConfigError::UnsupportedFormat(_)))));
    }
}
