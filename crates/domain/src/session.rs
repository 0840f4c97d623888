//! Session state captured alongside a response.
//!
//! Validation errors are flashed under [`ERRORS_KEY`] as a map of
//! error bags, each bag mapping a field to its messages:
//!
//! ```json
//! { "default": { "email": ["The email field is required."] } }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Session key under which validation error bags are stored.
pub const ERRORS_KEY: &str = "errors";

/// Name of the error bag used when none is specified.
pub const DEFAULT_ERROR_BAG: &str = "default";

/// Key/value session store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Session {
    values: BTreeMap<String, Value>,
}

impl Session {
    /// Creates an empty session.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Stores a value (builder pattern).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.put(key, value);
        self
    }

    /// Stores a value.
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Returns true if `key` holds a non-null value.
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some_and(|value| !value.is_null())
    }

    /// Flashes a validation error message into `bag` for `field`.
    pub fn flash_error(&mut self, bag: &str, field: &str, message: impl Into<String>) {
        let bags = self
            .values
            .entry(ERRORS_KEY.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if !bags.is_object() {
            *bags = Value::Object(Map::new());
        }
        let Value::Object(bags) = bags else { return };

        let fields = bags
            .entry(bag.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        let Value::Object(fields) = fields else { return };

        let messages = fields
            .entry(field.to_string())
            .or_insert_with(|| Value::Array(Vec::new()));
        if let Value::Array(messages) = messages {
            messages.push(Value::String(message.into()));
        }
    }

    /// Returns the messages of an error bag, keyed by field.
    ///
    /// A missing or malformed bag yields an empty map.
    #[must_use]
    pub fn error_bag(&self, bag: &str) -> Map<String, Value> {
        self.get(ERRORS_KEY)
            .and_then(|bags| bags.get(bag))
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default()
    }

    /// Returns true if the session holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
