//! URL generation and signed URLs.
//!
//! Named routes are URI templates such as `/users/{user}/posts/{post?}`.
//! Signed URLs carry a `signature` query parameter: the hex HMAC-SHA256 of
//! the URL without that parameter, keyed with the application key. An
//! optional `expires` parameter (unix seconds) bounds their validity.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use serde_json::Value;
use sha2::Sha256;
use url::Url;

use crate::error::ConfigurationError;

/// Query parameter holding the URL signature.
pub const SIGNATURE_PARAM: &str = "signature";

/// Query parameter holding the expiry timestamp.
pub const EXPIRES_PARAM: &str = "expires";

/// Builds absolute URLs, named routes and signed URLs.
#[derive(Clone)]
pub struct UrlGenerator {
    root: String,
    key: Vec<u8>,
    routes: BTreeMap<String, String>,
}

impl UrlGenerator {
    /// Creates a generator rooted at `root` that signs with `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if `root` is not an absolute URL.
    pub fn new(root: &str, key: impl AsRef<[u8]>) -> Result<Self, ConfigurationError> {
        let parsed = Url::parse(root)
            .map_err(|e| ConfigurationError::InvalidUrl(format!("{root}: {e}")))?;
        if parsed.cannot_be_a_base() {
            return Err(ConfigurationError::InvalidUrl(format!(
                "{root}: not a base URL"
            )));
        }
        Ok(Self {
            root: root.trim_end_matches('/').to_string(),
            key: key.as_ref().to_vec(),
            routes: BTreeMap::new(),
        })
    }

    /// Registers a named route (builder pattern).
    #[must_use]
    pub fn with_route(mut self, name: impl Into<String>, uri: impl Into<String>) -> Self {
        self.add_route(name, uri);
        self
    }

    /// Registers a named route.
    pub fn add_route(&mut self, name: impl Into<String>, uri: impl Into<String>) {
        self.routes.insert(name.into(), uri.into());
    }

    /// Returns the application root URL, without a trailing slash.
    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Returns the URI template of a named route.
    #[must_use]
    pub fn route_template(&self, name: &str) -> Option<&str> {
        self.routes.get(name).map(String::as_str)
    }

    /// Resolves `path` against the application root.
    ///
    /// Absolute URLs are returned unchanged.
    #[must_use]
    pub fn to(&self, path: &str) -> String {
        if Url::parse(path).is_ok_and(|url| !url.cannot_be_a_base()) {
            return path.to_string();
        }
        let path = path.trim_matches('/');
        if path.is_empty() {
            self.root.clone()
        } else if path.starts_with('?') {
            format!("{}{path}", self.root)
        } else {
            format!("{}/{path}", self.root)
        }
    }

    /// Builds the absolute URL of a named route.
    ///
    /// `parameters` may be an object (by name), a list (in placeholder
    /// order) or a single scalar. Parameters not consumed by placeholders
    /// are appended as the query string.
    ///
    /// # Errors
    ///
    /// Returns an error if the route is unknown or a required placeholder
    /// has no value.
    pub fn route(&self, name: &str, parameters: &Value) -> Result<String, ConfigurationError> {
        let template = self
            .route_template(name)
            .ok_or_else(|| ConfigurationError::UnknownRoute(name.to_string()))?;

        let (mut named, mut positional) = split_parameters(parameters);
        let mut path = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            path.push_str(&rest[..open]);
            let Some(close) = rest[open..].find('}') else {
                return Err(ConfigurationError::InvalidUrl(format!(
                    "unterminated placeholder in route [{name}]"
                )));
            };
            let placeholder = &rest[open + 1..open + close];
            let (key, optional) = placeholder
                .strip_suffix('?')
                .map_or((placeholder, false), |key| (key, true));

            let value = named.remove(key).or_else(|| {
                if positional.is_empty() {
                    None
                } else {
                    Some(positional.remove(0))
                }
            });
            match value {
                Some(value) => path.push_str(&encode_segment(&value)),
                None if optional => {}
                None => {
                    return Err(ConfigurationError::InvalidUrl(format!(
                        "missing required parameter [{key}] for route [{name}]"
                    )));
                }
            }
            rest = &rest[open + close + 1..];
        }
        path.push_str(rest);

        let path = collapse_slashes(&path);
        let url = self.to(&path);
        let query = encode_query(named.into_iter().collect::<Vec<_>>())?;
        Ok(append_query(url, &query))
    }

    /// Builds a signed URL for a named route.
    ///
    /// # Errors
    ///
    /// Returns an error if the route URL cannot be built.
    pub fn signed_route(
        &self,
        name: &str,
        parameters: &Value,
        expires: Option<DateTime<Utc>>,
    ) -> Result<String, ConfigurationError> {
        let mut parameters = match parameters {
            Value::Object(map) => map.clone(),
            Value::Null => serde_json::Map::new(),
            other => {
                return Err(ConfigurationError::InvalidUrl(format!(
                    "signed route parameters must be an object, got {other}"
                )));
            }
        };
        if let Some(expires) = expires {
            parameters.insert(EXPIRES_PARAM.to_string(), Value::from(expires.timestamp()));
        }
        let unsigned = self.route(name, &Value::Object(parameters))?;
        Ok(self.sign(&unsigned))
    }

    /// Appends a signature to `url`.
    #[must_use]
    pub fn sign(&self, url: &str) -> String {
        let payload = signature_payload(&self.to(url));
        let signature = self.compute(payload.as_bytes()).unwrap_or_default();
        let separator = if payload.contains('?') { '&' } else { '?' };
        format!("{payload}{separator}{SIGNATURE_PARAM}={signature}")
    }

    /// Returns true if `url` carries a valid, unexpired signature.
    #[must_use]
    pub fn has_valid_signature(&self, url: &str, now: DateTime<Utc>) -> bool {
        let absolute = self.to(url);
        let Ok(parsed) = Url::parse(&absolute) else {
            return false;
        };

        let mut signature = None;
        let mut expires = None;
        for (key, value) in parsed.query_pairs() {
            match key.as_ref() {
                SIGNATURE_PARAM => signature = Some(value.into_owned()),
                EXPIRES_PARAM => expires = Some(value.into_owned()),
                _ => {}
            }
        }

        let Some(Ok(signature)) = signature.map(hex::decode) else {
            return false;
        };
        let payload = signature_payload(&absolute);
        let Ok(mut mac) = Hmac::<Sha256>::new_from_slice(&self.key) else {
            return false;
        };
        mac.update(payload.as_bytes());
        if mac.verify_slice(&signature).is_err() {
            return false;
        }

        match expires {
            None => true,
            Some(expires) => expires
                .parse::<i64>()
                .is_ok_and(|timestamp| now.timestamp() <= timestamp),
        }
    }

    /// Returns `url` without its `signature` and `expires` parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn without_signature(&self, url: &str) -> Result<String, ConfigurationError> {
        let absolute = self.to(url);
        let mut parsed = Url::parse(&absolute)
            .map_err(|e| ConfigurationError::InvalidUrl(format!("{absolute}: {e}")))?;
        let kept: Vec<(String, String)> = parsed
            .query_pairs()
            .filter(|(key, _)| key != SIGNATURE_PARAM && key != EXPIRES_PARAM)
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        parsed.set_query(None);
        parsed.set_fragment(None);

        let base = parsed.as_str().trim_end_matches('/').to_string();
        let query = encode_query(kept)?;
        Ok(append_query(base, &query))
    }

    fn compute(&self, payload: &[u8]) -> Option<String> {
        let mut mac = Hmac::<Sha256>::new_from_slice(&self.key).ok()?;
        mac.update(payload);
        Some(hex::encode(mac.finalize().into_bytes()))
    }
}

impl std::fmt::Debug for UrlGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UrlGenerator")
            .field("root", &self.root)
            .field("key", &"[REDACTED]")
            .field("routes", &self.routes)
            .finish()
    }
}

fn split_parameters(parameters: &Value) -> (BTreeMap<String, String>, Vec<String>) {
    match parameters {
        Value::Null => (BTreeMap::new(), Vec::new()),
        Value::Object(map) => (
            map.iter()
                .map(|(key, value)| (key.clone(), scalar_string(value)))
                .collect(),
            Vec::new(),
        ),
        Value::Array(items) => (BTreeMap::new(), items.iter().map(scalar_string).collect()),
        other => (BTreeMap::new(), vec![scalar_string(other)]),
    }
}

fn scalar_string(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Bool(flag) => if *flag { "1" } else { "0" }.to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Percent-encoded bytes that stay literal in route segments.
const PATH_SAFE: [(&str, &str); 10] = [
    ("%2F", "/"),
    ("%40", "@"),
    ("%3A", ":"),
    ("%3B", ";"),
    ("%2C", ","),
    ("%3D", "="),
    ("%2B", "+"),
    ("%21", "!"),
    ("%2A", "*"),
    ("%7C", "|"),
];

fn encode_segment(value: &str) -> String {
    PATH_SAFE
        .iter()
        .fold(urlencoding::encode(value).into_owned(), |encoded, (escaped, literal)| {
            encoded.replace(escaped, literal)
        })
}

fn collapse_slashes(path: &str) -> String {
    let mut collapsed = String::with_capacity(path.len());
    for ch in path.chars() {
        if ch == '/' && collapsed.ends_with('/') {
            continue;
        }
        collapsed.push(ch);
    }
    collapsed
}

fn encode_query(pairs: Vec<(String, String)>) -> Result<String, ConfigurationError> {
    serde_urlencoded::to_string(pairs).map_err(|e| ConfigurationError::InvalidUrl(e.to_string()))
}

fn append_query(url: String, query: &str) -> String {
    if query.is_empty() {
        url
    } else {
        format!("{url}?{query}")
    }
}

/// The signed portion of a URL: everything but the `signature` parameter.
fn signature_payload(url: &str) -> String {
    let url = url.split('#').next().unwrap_or(url);
    let Some((base, query)) = url.split_once('?') else {
        return url.to_string();
    };
    let kept: Vec<&str> = query
        .split('&')
        .filter(|pair| !pair.is_empty() && !pair.starts_with("signature="))
        .collect();
    if kept.is_empty() {
        base.to_string()
    } else {
        format!("{base}?{}", kept.join("&"))
    }
}
