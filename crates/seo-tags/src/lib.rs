//! SharpAPI SEO tag generation client.
//!
//! [`SeoTagsService`] builds the request payload for SharpAPI's
//! `seo_generate_tags` job and hands it to an injected
//! [`sharpapi_core::CoreService`], which performs the HTTP exchange and
//! extracts the status URL to poll.
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use sharpapi_core::{CoreService, SharpApiResult};
//! use sharpapi_seo_tags::SeoTagsService;
//!
//! # async fn example(core: Arc<dyn CoreService>) -> SharpApiResult<()> {
//! let service = SeoTagsService::new("your-api-key", core)?;
//! let status_url = service
//!     .generate_seo_tags("<h1>Handmade oak tables</h1>", Some("English"), Some("friendly"))
//!     .await?;
//! println!("poll {status_url}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Architectural Layer
//!
//! **Service wrapper.** Payload construction only. Transport, authentication,
//! and error reporting belong to the core service; its errors are returned
//! unchanged.

mod request;
mod service;

pub use request::SeoTagsRequest;
pub use service::{SeoTagsService, USER_AGENT};
