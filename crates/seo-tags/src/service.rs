//! The SEO tags service wrapper.

use std::sync::Arc;

use sharpapi_core::{ClientConfig, CoreService, HttpMethod, JobType, SharpApiResult, StatusUrl};
use tracing::{debug, warn};

use crate::SeoTagsRequest;

/// `User-Agent` identifying this wrapper to SharpAPI.
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Queues SEO tag generation jobs on SharpAPI.
///
/// Holds immutable configuration and a shared [`CoreService`]; cloning is
/// cheap and clones may be used from concurrent tasks.
#[derive(Clone)]
pub struct SeoTagsService {
    config: ClientConfig,
    core: Arc<dyn CoreService>,
}

impl SeoTagsService {
    /// Creates a service against the default SharpAPI base URL.
    ///
    /// # Errors
    ///
    /// [`sharpapi_core::SharpApiError::Configuration`] if `api_key` is empty.
    pub fn new(api_key: impl Into<String>, core: Arc<dyn CoreService>) -> SharpApiResult<Self> {
        let config = ClientConfig::try_new(api_key)?.with_user_agent(USER_AGENT);
        Ok(Self { config, core })
    }

    /// Creates a service from a prepared configuration, used as given.
    pub fn with_config(config: ClientConfig, core: Arc<dyn CoreService>) -> Self {
        Self { config, core }
    }

    /// Points the service at a different SharpAPI deployment.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> SharpApiResult<Self> {
        self.config = self.config.with_base_url(base_url)?;
        Ok(self)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Generates the most important META tags for `text`.
    ///
    /// `language` and `voice_tone` are forwarded only when `Some`. Returns the
    /// status URL to poll for the generated tags.
    ///
    /// # Errors
    ///
    /// Whatever the core service returns, unchanged.
    pub async fn generate_seo_tags(
        &self,
        text: &str,
        language: Option<&str>,
        voice_tone: Option<&str>,
    ) -> SharpApiResult<StatusUrl> {
        self.submit(SeoTagsRequest::from_parts(text, language, voice_tone))
            .await
    }

    /// Submits a prebuilt request. See [`SeoTagsService::generate_seo_tags`].
    #[tracing::instrument(
        name = "seo_tags.submit",
        skip(self, request),
        fields(
            job_type = %JobType::SeoGenerateTags,
            content_len = request.content().len(),
            has_language = request.language().is_some(),
            has_voice_tone = request.voice_tone().is_some(),
        )
    )]
    pub async fn submit(&self, request: SeoTagsRequest) -> SharpApiResult<StatusUrl> {
        let payload = request.to_payload()?;
        let endpoint = JobType::SeoGenerateTags.url();

        debug!(endpoint, "Submitting SEO tag generation job");

        let response = self
            .core
            .make_request(&self.config, HttpMethod::Post, endpoint, &payload)
            .await
            .inspect_err(|e| warn!(error = %e, "SEO tag generation request failed"))?;

        let status_url = self
            .core
            .parse_status_url(response)
            .inspect_err(|e| warn!(error = %e, "Could not read status URL"))?;

        debug!(status_url = %status_url, "SEO tag generation job queued");
        Ok(status_url)
    }
}

impl std::fmt::Debug for SeoTagsService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeoTagsService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
