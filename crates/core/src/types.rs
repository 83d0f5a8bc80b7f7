//! Value types shared between service wrappers and the core service.
//!
//! [`JobType`] is the registry of job-type endpoint identifiers. Each wrapper
//! crate submits to exactly one of them.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Job-type registry
// ---------------------------------------------------------------------------

/// A SharpAPI job type and the route that queues it.
///
/// Routes are relative to the configured base URL (see
/// [`crate::ClientConfig::endpoint_url`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobType {
    /// Translate text into a target language.
    ContentTranslate,
    /// Rephrase text while keeping its meaning.
    ContentParaphrase,
    /// Produce a shorter summary of the text.
    ContentSummarize,
    /// Extract keywords and tags from the text.
    ContentKeywords,
    /// Flag spam content.
    ContentDetectSpam,
    /// Extract e-mail addresses.
    ContentDetectEmails,
    /// Extract phone numbers.
    ContentDetectPhones,
    /// Generate HTML META tags for a page.
    SeoGenerateTags,
    /// Classify the sentiment of a product review.
    EcommerceReviewSentiment,
    /// Suggest catalogue categories for a product.
    EcommerceProductCategories,
    /// Write a short product introduction.
    EcommerceProductIntro,
}

impl JobType {
    /// Job type key as reported in job status payloads.
    pub fn value(self) -> &'static str {
        match self {
            Self::ContentTranslate => "content_translate",
            Self::ContentParaphrase => "content_paraphrase",
            Self::ContentSummarize => "content_summarize",
            Self::ContentKeywords => "content_keywords",
            Self::ContentDetectSpam => "content_detect_spam",
            Self::ContentDetectEmails => "content_detect_emails",
            Self::ContentDetectPhones => "content_detect_phones",
            Self::SeoGenerateTags => "seo_generate_tags",
            Self::EcommerceReviewSentiment => "ecommerce_review_sentiment",
            Self::EcommerceProductCategories => "ecommerce_product_categories",
            Self::EcommerceProductIntro => "ecommerce_product_intro",
        }
    }

    /// Route that queues a job of this type, with a leading `/`.
    pub fn url(self) -> &'static str {
        match self {
            Self::ContentTranslate => "/content/translate",
            Self::ContentParaphrase => "/content/paraphrase",
            Self::ContentSummarize => "/content/summarize",
            Self::ContentKeywords => "/content/keywords",
            Self::ContentDetectSpam => "/content/detect_spam",
            Self::ContentDetectEmails => "/content/detect_emails",
            Self::ContentDetectPhones => "/content/detect_phones",
            Self::SeoGenerateTags => "/seo/generate_tags",
            Self::EcommerceReviewSentiment => "/ecommerce/review_sentiment",
            Self::EcommerceProductCategories => "/ecommerce/product_categories",
            Self::EcommerceProductIntro => "/ecommerce/product_intro",
        }
    }
}

impl std::fmt::Display for JobType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.value())
    }
}

// ---------------------------------------------------------------------------
// Transport values
// ---------------------------------------------------------------------------

/// HTTP method used for a core service request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// Fetch a resource (job status polling).
    Get,
    /// Queue a job.
    Post,
}

impl HttpMethod {
    /// Upper-case method name as sent on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------

/// Response produced by [`crate::CoreService::make_request`].
///
/// Wrappers treat it as opaque and pass it straight to
/// [`crate::CoreService::parse_status_url`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Decoded JSON body. `Value::Null` when the body was empty.
    pub body: serde_json::Value,
}

impl RawResponse {
    /// Creates a [`RawResponse`].
    pub fn new(status: u16, body: serde_json::Value) -> Self {
        Self { status, body }
    }

    /// Returns `true` for 2xx status codes.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
