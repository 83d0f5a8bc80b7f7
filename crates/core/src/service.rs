//! The core service port.
//!
//! [`CoreService`] is the contract between SharpAPI service wrappers and
//! whatever performs the HTTP exchange. Implementations own transport,
//! authentication headers, and response parsing; wrappers own only payload
//! construction.

use async_trait::async_trait;

use crate::{ClientConfig, HttpMethod, RawResponse, SharpApiResult, StatusUrl};

/// Sends job requests to SharpAPI and interprets their responses.
///
/// Injected into wrappers as `Arc<dyn CoreService>`. Implementations must be
/// stateless with respect to credentials: everything request-specific arrives
/// through the [`ClientConfig`] argument.
#[async_trait]
pub trait CoreService: Send + Sync {
    /// Issues one request to `endpoint` (a route from
    /// [`crate::JobType::url`]) with `payload` as the JSON body.
    ///
    /// The implementation resolves the route against
    /// [`ClientConfig::base_url`] and authenticates with
    /// [`ClientConfig::api_key`].
    ///
    /// # Errors
    ///
    /// - [`crate::SharpApiError::Transport`] when no response was received.
    /// - [`crate::SharpApiError::Authentication`] when the key is rejected.
    /// - [`crate::SharpApiError::Api`] for any other non-success status.
    async fn make_request(
        &self,
        config: &ClientConfig,
        method: HttpMethod,
        endpoint: &str,
        payload: &serde_json::Value,
    ) -> SharpApiResult<RawResponse>;

    /// Extracts the job status URL from a job-submission response.
    ///
    /// # Errors
    ///
    /// [`crate::SharpApiError::MalformedResponse`] when the response carries
    /// no status URL.
    fn parse_status_url(&self, response: RawResponse) -> SharpApiResult<StatusUrl>;
}
