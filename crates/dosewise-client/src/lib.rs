//! Dosewise Client Library
//!
//! Network layer for the dosewise patient/clinic portal: one async domain
//! access function per backend capability, each wrapping a live REST call
//! with its offline fallback policy.
//!
//! # Two-path contract
//!
//! ```text
//! UI ──► domain access function
//!              │
//!       live REST call (bearer token attached)
//!         │            │
//!      success      failure (network / non-2xx)
//!         │            │
//!    Fetched::Live  synthesize via dosewise-core,
//!                   optionally persist to the fallback store
//!                      │
//!                   Fetched::Fallback { data, reason }
//! ```
//!
//! Fallback-bearing operations never surface a transient backend failure to
//! the UI as a hard error; the [`Fetched`] tag lets the UI decide whether to
//! tell the user the data is local. Authentication failures (HTTP 401) are
//! the exception: the session is cleared, the login redirect hook fires
//! once, and the error propagates.
//!
//! # Modules
//!
//! - [`api`]: [`PortalClient`] and the domain access functions
//! - [`http`]: base-URL + bearer-token + 401-interception plumbing
//! - [`fetched`]: the `Live` / `Fallback` result tag

pub mod api;
pub mod fetched;
pub mod http;

pub use api::PortalClient;
pub use fetched::{FallbackReason, Fetched};
pub use http::{HttpClient, HttpError};

use dosewise_core::store::StoreError;

/// Top-level client errors.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("http error: {0}")]
    Http(#[from] HttpError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("lock poisoned: {0}")]
    Lock(String),
}

impl<T> From<std::sync::PoisonError<T>> for ClientError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        ClientError::Lock(e.to_string())
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
