//! Request payload for the SEO tag generation job.

use serde::Serialize;
use sharpapi_core::SharpApiResult;

/// Body of a `POST /seo/generate_tags` request.
///
/// Optional fields are omitted from the JSON object when `None`. An empty
/// string is still sent as an explicit value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeoTagsRequest {
    content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    voice_tone: Option<String>,
}

impl SeoTagsRequest {
    /// Starts a request for `content`, sent verbatim.
    ///
    /// Include the page URL and image URLs in the content to get as many tags
    /// populated as possible.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            language: None,
            voice_tone: None,
        }
    }

    pub fn from_parts(
        content: impl Into<String>,
        language: Option<&str>,
        voice_tone: Option<&str>,
    ) -> Self {
        Self {
            content: content.into(),
            language: language.map(str::to_owned),
            voice_tone: voice_tone.map(str::to_owned),
        }
    }

    /// Output language, e.g. `"English"` or `"en"`.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Writing tone, e.g. `"friendly"` or `"neutral"`.
    pub fn with_voice_tone(mut self, voice_tone: impl Into<String>) -> Self {
        self.voice_tone = Some(voice_tone.into());
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn voice_tone(&self) -> Option<&str> {
        self.voice_tone.as_deref()
    }

    /// Renders the JSON object handed to the core service.
    pub fn to_payload(&self) -> SharpApiResult<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}
