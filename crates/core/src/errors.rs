//! Shared error type for SharpAPI client crates.
//!
//! [`SharpApiError`] is produced by [`crate::CoreService`] implementations and
//! by configuration loading. Service wrappers (e.g. the SEO tags client) return
//! it unchanged; they never translate or wrap a collaborator's error.

use thiserror::Error;

/// Convenience alias used across the SharpAPI client crates.
pub type SharpApiResult<T> = Result<T, SharpApiError>;

// ---------------------------------------------------------------------------
// Client errors
// ---------------------------------------------------------------------------

/// Errors raised while configuring a client or submitting a job.
///
/// Every variant except [`SharpApiError::Configuration`] and
/// [`SharpApiError::Serialization`] originates in the core service
/// collaborator.
#[derive(Debug, Error)]
pub enum SharpApiError {
    /// The API rejected the supplied key (HTTP 401/403 or equivalent).
    #[error("Authentication failed: {message}")]
    Authentication {
        /// Detail reported by the collaborator.
        message: String,
    },

    /// The request never produced an HTTP response (DNS, TLS, connection
    /// reset, timeout).
    #[error("Transport error: {message}")]
    Transport {
        /// Detail reported by the collaborator.
        message: String,
    },

    /// The API answered with a non-success status code.
    ///
    /// Validation failures of the submitted content (e.g. empty text) surface
    /// here; client wrappers do not validate input themselves.
    #[error("API error (HTTP {status}): {message}")]
    Api {
        /// HTTP status code returned by the API.
        status: u16,
        /// Error message extracted from the response body.
        message: String,
    },

    /// The response was received but did not contain the expected fields
    /// (e.g. no `status_url`).
    #[error("Malformed response: {message}")]
    MalformedResponse {
        /// Description of what was missing or unparseable.
        message: String,
    },

    /// Client configuration is invalid (missing API key, bad base URL).
    ///
    /// Produced at construction time, before any request is made.
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration problem.
        message: String,
    },

    /// A request payload could not be rendered as JSON.
    #[error("Failed to serialise request payload: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SharpApiError {
    /// Shorthand for a [`SharpApiError::Configuration`] error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Shorthand for a [`SharpApiError::MalformedResponse`] error.
    pub fn malformed_response(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }
}
