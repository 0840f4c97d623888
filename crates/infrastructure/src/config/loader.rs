//! Harness configuration files.
//!
//! A configuration file looks like:
//!
//! ```yaml
//! app_url: http://localhost:8080
//! app_key: base64:secret
//! routes:
//!   home: /home
//!   users.show: /users/{user}
//! ```
//!
//! `RESPECT_APP_URL` and `RESPECT_APP_KEY` override the file values.

use std::path::Path;

use respect_application::HarnessConfig;
use tokio::fs;

/// Environment variable overriding `app_url`.
pub const APP_URL_ENV: &str = "RESPECT_APP_URL";

/// Environment variable overriding `app_key`.
pub const APP_KEY_ENV: &str = "RESPECT_APP_KEY";

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error while reading the file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The YAML document is invalid.
    #[error("invalid YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The JSON document is invalid.
    #[error("invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// The file extension is not a supported format.
    #[error("unsupported configuration format: {0}")]
    UnsupportedFormat(String),
}

/// Supported configuration file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.yaml` or `.yml`
    Yaml,
    /// `.json`
    Json,
}

impl ConfigFormat {
    /// Detects the format from a file extension.
    ///
    /// # Errors
    ///
    /// Returns an error for any other extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Parses a configuration document.
///
/// An empty document yields the defaults.
///
/// # Errors
///
/// Returns an error if the document is invalid.
pub fn parse_config(content: &str, format: ConfigFormat) -> Result<HarnessConfig, ConfigError> {
    if content.trim().is_empty() {
        return Ok(HarnessConfig::default());
    }
    Ok(match format {
        ConfigFormat::Yaml => serde_yaml::from_str(content)?,
        ConfigFormat::Json => serde_json::from_str(content)?,
    })
}

/// Applies environment overrides using `lookup` to read variables.
#[must_use]
pub fn apply_overrides(
    mut config: HarnessConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> HarnessConfig {
    if let Some(app_url) = lookup(APP_URL_ENV) {
        tracing::debug!(app_url = %app_url, "app_url overridden from environment");
        config.app_url = app_url;
    }
    if let Some(app_key) = lookup(APP_KEY_ENV) {
        tracing::debug!("app_key overridden from environment");
        config.app_key = app_key;
    }
    config
}

/// Loads a configuration file and applies environment overrides.
///
/// # Errors
///
/// Returns an error if the file cannot be read, has an unsupported
/// extension, or is invalid.
pub async fn load_config(path: impl AsRef<Path>) -> Result<HarnessConfig, ConfigError> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path)?;
    let content = fs::read_to_string(path).await?;
    let config = parse_config(&content, format)?;

    tracing::info!(path = %path.display(), routes = config.routes.len(), "loaded harness configuration");
    Ok(apply_overrides(config, |name| std::env::var(name).ok()))
}
