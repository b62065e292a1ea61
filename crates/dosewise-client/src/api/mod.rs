//! Domain access functions: the typed API consumed by the portal UI.
//!
//! One method per backend capability, grouped by endpoint family the way the
//! backend routes them: auth, patient, clinic, prescriptions, access.

mod access;
mod auth;
mod clinic;
mod patient;
mod prescriptions;

use std::sync::{Arc, Mutex};

use dosewise_core::store::Database;

use crate::fetched::FallbackReason;
use crate::http::{HttpClient, HttpError};
use crate::{ClientError, ClientResult};

/// Portal client: owns the HTTP wrapper and the local store. Construct once
/// and share with the UI layer; all session state lives here rather than in
/// ambient storage.
pub struct PortalClient {
    http: HttpClient,
    db: Arc<Mutex<Database>>,
}

impl PortalClient {
    /// Build a client over an opened store.
    pub fn new(base_url: impl Into<String>, db: Database) -> ClientResult<Self> {
        let db = Arc::new(Mutex::new(db));
        let http = HttpClient::new(base_url, Arc::clone(&db))?;
        Ok(Self { http, db })
    }

    /// Install the hook fired when a 401 forces navigation back to login.
    pub fn with_session_expired_hook(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.http = self.http.with_session_expired_hook(hook);
        self
    }

    /// Shared handle to the local store, for UI state that reads it directly
    /// and for tests.
    pub fn database(&self) -> Arc<Mutex<Database>> {
        Arc::clone(&self.db)
    }
}

/// Split a failed live call into "recoverable via fallback" and "must
/// propagate". Only expired sessions propagate; every other failure becomes
/// a [`FallbackReason`].
pub(crate) fn recover(err: HttpError) -> Result<FallbackReason, ClientError> {
    match err {
        HttpError::Unauthorized => Err(ClientError::Http(HttpError::Unauthorized)),
        other => Ok(FallbackReason::from(&other)),
    }
}
