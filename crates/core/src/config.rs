//! Client configuration: API key, base URL, and user agent.
//!
//! A [`ClientConfig`] is immutable once built. Service wrappers hold one and
//! pass it to [`crate::CoreService::make_request`] on every call, so a single
//! core service instance can serve several keys or environments.

use std::env;

use crate::{ApiKey, SharpApiError, SharpApiResult};

/// Production SharpAPI endpoint.
pub const DEFAULT_BASE_URL: &str = "https://sharpapi.com/api/v1";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "SHARP_API_KEY";

/// Environment variable overriding [`DEFAULT_BASE_URL`].
pub const BASE_URL_ENV: &str = "SHARP_API_BASE_URL";

const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Immutable per-client settings.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    api_key: ApiKey,
    base_url: String,
    user_agent: String,
}

impl ClientConfig {
    /// Creates a configuration against [`DEFAULT_BASE_URL`].
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Like [`ClientConfig::new`] but takes the raw key.
    pub fn try_new(api_key: impl Into<String>) -> SharpApiResult<Self> {
        Ok(Self::new(ApiKey::new(api_key)?))
    }

    /// Loads the key from `SHARP_API_KEY` and an optional base URL from
    /// `SHARP_API_BASE_URL`.
    pub fn from_env() -> SharpApiResult<Self> {
        let api_key = env::var(API_KEY_ENV)
            .map_err(|_| SharpApiError::configuration(format!("{API_KEY_ENV} not set")))?;

        let config = Self::try_new(api_key)?;
        match env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => config.with_base_url(url),
            _ => Ok(config),
        }
    }

    /// Overrides the base URL. Trailing slashes are dropped.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> SharpApiResult<Self> {
        let base_url = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/');
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(SharpApiError::configuration(format!(
                "base URL must start with http:// or https://, got '{base_url}'"
            )));
        }
        self.base_url = trimmed.to_string();
        Ok(self)
    }

    /// Overrides the `User-Agent` sent with each request.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Joins the base URL and a route such as `/seo/generate_tags` with
    /// exactly one `/` between them.
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    fn config() -> ClientConfig {
        ClientConfig::try_new("test-key").unwrap()
    }

    #[test]
    fn defaults_to_production_base_url() {
        let config = config();
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert!(config.user_agent().starts_with("sharpapi-core/"));
    }

    #[test]
    fn endpoint_url_joins_with_single_slash() {
        let config = config();
        assert_eq!(
            config.endpoint_url("/seo/generate_tags"),
            "https://sharpapi.com/api/v1/seo/generate_tags"
        );
        assert_eq!(
            config.endpoint_url("seo/generate_tags"),
            "https://sharpapi.com/api/v1/seo/generate_tags"
        );
    }

    #[test]
    fn base_url_trailing_slash_is_dropped() {
        let config = config().with_base_url("http://localhost:8080/api/v1/").unwrap();
        assert_eq!(
            config.endpoint_url("/seo/generate_tags"),
            "http://localhost:8080/api/v1/seo/generate_tags"
        );
    }

    #[test]
    fn base_url_without_scheme_is_rejected() {
        let err = config().with_base_url("sharpapi.com/api/v1").unwrap_err();
        assert!(matches!(err, SharpApiError::Configuration { .. }));
    }

    #[test]
    fn empty_key_is_rejected() {
        assert!(matches!(
            ClientConfig::try_new(""),
            Err(SharpApiError::Configuration { .. })
        ));
    }

    #[test]
    fn debug_output_hides_the_key() {
        let debug = format!("{:?}", ClientConfig::try_new("sk-live-123").unwrap());
        assert!(!debug.contains("sk-live-123"));
        assert!(debug.contains(DEFAULT_BASE_URL));
    }

    #[test]
    fn user_agent_can_be_overridden() {
        let config = config().with_user_agent("sharpapi-seo-tags/0.1.0");
        assert_eq!(config.user_agent(), "sharpapi-seo-tags/0.1.0");
    }

    #[test]
    #[serial]
    fn from_env_reads_key_and_base_url() {
        env::set_var(API_KEY_ENV, "env-key");
        env::set_var(BASE_URL_ENV, "http://127.0.0.1:9000/api/v1/");
        let config = ClientConfig::from_env();
        env::remove_var(API_KEY_ENV);
        env::remove_var(BASE_URL_ENV);

        let config = config.unwrap();
        assert_eq!(config.api_key().expose(), "env-key");
        assert_eq!(config.base_url(), "http://127.0.0.1:9000/api/v1");
    }

    #[test]
    #[serial]
    fn from_env_without_key_is_a_configuration_error() {
        env::remove_var(API_KEY_ENV);
        let err = ClientConfig::from_env().unwrap_err();
        assert!(err.to_string().contains(API_KEY_ENV));
    }
}
