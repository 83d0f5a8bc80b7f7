//! Shared core for SharpAPI service wrappers.
//!
//! This crate defines the port that every SharpAPI wrapper talks through, plus
//! the configuration, identifier, and error types they share. Wrapper crates
//! build payloads and delegate everything else to a [`CoreService`].
//!
//! ## Architectural Layer
//!
//! **Port definitions.** This crate has no I/O dependencies. HTTP transport,
//! authentication headers, retries, and job polling belong to the
//! [`CoreService`] implementation supplied by the application.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`config`] | `ClientConfig` and the default base URL |
//! | [`errors`] | `SharpApiError` and the `SharpApiResult` alias |
//! | [`identifiers`] | `StatusUrl` and `ApiKey` newtypes |
//! | [`service`] | The `CoreService` trait |
//! | [`types`] | `JobType` registry, `HttpMethod`, `RawResponse` |

pub mod config;
pub mod errors;
pub mod identifiers;
pub mod service;
pub mod types;

// Re-export everything at the crate root for ergonomic usage by wrapper crates.
pub use config::{ClientConfig, API_KEY_ENV, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use errors::{SharpApiError, SharpApiResult};
pub use identifiers::{ApiKey, StatusUrl};
pub use service::CoreService;
pub use types::{HttpMethod, JobType, RawResponse};
