//! HTTP plumbing shared by every domain access function: base URL, bearer
//! token attachment, and global 401 interception.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use dosewise_core::store::{Database, StoreError};

/// Timeout applied to every request. No retry or backoff is attempted.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("authentication expired")]
    Unauthorized,

    #[error("malformed response body: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("token store error: {0}")]
    Store(#[from] StoreError),

    #[error("lock poisoned: {0}")]
    Lock(String),
}

impl<T> From<PoisonError<T>> for HttpError {
    fn from(e: PoisonError<T>) -> Self {
        HttpError::Lock(e.to_string())
    }
}

/// Hook invoked when a 401 forces the session back to the login screen.
pub type RedirectHook = Box<dyn Fn() + Send + Sync>;

/// Backend response envelope; every endpoint except access revocation wraps
/// its payload as `{ "data": ... }`.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

/// Authenticated HTTP client for the portal backend.
pub struct HttpClient {
    base_url: String,
    inner: reqwest::Client,
    db: Arc<Mutex<Database>>,
    /// True while the UI sits on the login screen; guards the redirect hook
    /// against firing repeatedly for every 401 in flight.
    at_login: AtomicBool,
    redirect_hook: Option<RedirectHook>,
}

impl HttpClient {
    /// Build a client against a base URL, reading bearer tokens from the
    /// given store on every request.
    pub fn new(base_url: impl Into<String>, db: Arc<Mutex<Database>>) -> Result<Self, HttpError> {
        let inner = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            inner,
            db,
            at_login: AtomicBool::new(false),
            redirect_hook: None,
        })
    }

    /// Install the hook fired when a 401 clears the session.
    pub fn with_session_expired_hook(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.redirect_hook = Some(Box::new(hook));
        self
    }

    /// Record that a login completed, re-arming the redirect hook.
    pub fn note_authenticated(&self) {
        self.at_login.store(false, Ordering::SeqCst);
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, HttpError> {
        let resp = self.dispatch(path, self.inner.get(self.url(path)), true).await?;
        Self::decode_envelope(resp).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, HttpError> {
        let req = self.inner.post(self.url(path)).json(body);
        let resp = self.dispatch(path, req, true).await?;
        Self::decode_envelope(resp).await
    }

    /// DELETE returning the bare response body; the revoke endpoint is the
    /// one route that skips the `{ "data": ... }` envelope.
    pub async fn delete_raw<T: DeserializeOwned>(&self, path: &str) -> Result<T, HttpError> {
        let resp = self
            .dispatch(path, self.inner.delete(self.url(path)), true)
            .await?;
        resp.json::<T>().await.map_err(HttpError::Decode)
    }

    /// POST without bearer credentials, for login and registration. A 401
    /// here means bad credentials, not an expired session, so it surfaces as
    /// a plain status error.
    pub async fn post_unauthenticated<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, HttpError> {
        let req = self.inner.post(self.url(path)).json(body);
        let resp = self.dispatch(path, req, false).await?;
        Self::decode_envelope(resp).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn dispatch(
        &self,
        path: &str,
        mut req: RequestBuilder,
        authenticated: bool,
    ) -> Result<reqwest::Response, HttpError> {
        if authenticated {
            let token = { self.db.lock()?.stored_token()? };
            if let Some(token) = token {
                req = req.bearer_auth(token);
            }
        }

        debug!(path, "dispatching request");
        let resp = req.send().await?;
        let status = resp.status();

        if authenticated && status == StatusCode::UNAUTHORIZED {
            self.expire_session()?;
            return Err(HttpError::Unauthorized);
        }
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(HttpError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(resp)
    }

    async fn decode_envelope<T: DeserializeOwned>(
        resp: reqwest::Response,
    ) -> Result<T, HttpError> {
        let envelope: Envelope<T> = resp.json().await.map_err(HttpError::Decode)?;
        Ok(envelope.data)
    }

    /// Clear the stored session and fire the login redirect hook, unless the
    /// UI is already at the login screen.
    fn expire_session(&self) -> Result<(), HttpError> {
        self.db.lock()?.clear_tokens()?;
        info!("session cleared after authentication failure");
        if !self.at_login.swap(true, Ordering::SeqCst) {
            if let Some(hook) = &self.redirect_hook {
                hook();
            }
        }
        Ok(())
    }
}
