//! Configuration loading.

mod loader;

pub use loader::{
    APP_KEY_ENV, APP_URL_ENV, ConfigError, ConfigFormat, apply_overrides, load_config,
    parse_config,
};
