//! Newtype wrappers for the opaque strings exchanged with SharpAPI.
//!
//! Status URLs and API keys are both strings on the wire.
//! Wrapping them keeps a [`StatusUrl`] from being passed where an [`ApiKey`]
//! is expected, and keeps the key out of `Debug` output.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::{SharpApiError, SharpApiResult};

// ---------------------------------------------------------------------------
// Identifiers returned by the API
// ---------------------------------------------------------------------------

/// URL returned by SharpAPI after a job is queued.
///
/// Callers poll it to retrieve the asynchronous job result. The value is
/// opaque: wrappers neither validate nor interpret it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatusUrl(String);

impl StatusUrl {
    /// Creates a new status URL, returning `None` if the value is empty.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let v = value.into();
        if v.is_empty() {
            None
        } else {
            Some(Self(v))
        }
    }

    /// Returns the URL as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the wrapper and returns the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for StatusUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Credentials
// ---------------------------------------------------------------------------

/// A SharpAPI key.
///
/// Held as a [`SecretString`]; `Debug` prints `[REDACTED]` and the key is not
/// serialisable.
#[derive(Clone)]
pub struct ApiKey(SecretString);

impl ApiKey {
    /// Wraps `key`, rejecting an empty string.
    pub fn new(key: impl Into<String>) -> SharpApiResult<Self> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(SharpApiError::configuration("API key must not be empty"));
        }
        Ok(Self(SecretString::new(key.into_boxed_str())))
    }

    /// Returns the raw key for building the `Authorization` header.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_url_rejects_empty_value() {
        assert!(StatusUrl::new("").is_none());
    }

    #[test]
    fn status_url_is_kept_verbatim() {
        let url = StatusUrl::new("https://sharpapi.com/api/v1/job/status/5de4887a")
            .expect("non-empty");
        assert_eq!(url.as_str(), "https://sharpapi.com/api/v1/job/status/5de4887a");
        assert_eq!(url.to_string(), url.clone().into_string());
    }

    #[test]
    fn api_key_rejects_blank_value() {
        assert!(matches!(
            ApiKey::new("   "),
            Err(SharpApiError::Configuration { .. })
        ));
    }

    #[test]
    fn api_key_debug_is_redacted() {
        let key = ApiKey::new("sk-very-secret").unwrap();
        let debug = format!("{key:?}");
        assert!(!debug.contains("sk-very-secret"));
        assert_eq!(key.expose(), "sk-very-secret");
    }
}
