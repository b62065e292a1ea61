//! Auth endpoints: login, registration, logout.

use serde::Serialize;
use tracing::info;

use dosewise_core::models::{AuthSession, PatientRegistration, Role};

use super::PortalClient;
use crate::ClientResult;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
    user_type: Role,
}

impl PortalClient {
    pub async fn login_patient(&self, email: &str, password: &str) -> ClientResult<AuthSession> {
        self.login(Role::Patient, email, password).await
    }

    pub async fn login_clinic(&self, email: &str, password: &str) -> ClientResult<AuthSession> {
        self.login(Role::Clinic, email, password).await
    }

    async fn login(&self, role: Role, email: &str, password: &str) -> ClientResult<AuthSession> {
        let body = LoginRequest {
            email,
            password,
            user_type: role,
        };
        let session: AuthSession = self.http.post_unauthenticated("/auth/login", &body).await?;
        self.establish(role, &session)?;
        Ok(session)
    }

    /// Register a new patient account. A successful registration is also a
    /// login: the returned token is stored immediately.
    pub async fn register_patient(
        &self,
        registration: &PatientRegistration,
    ) -> ClientResult<AuthSession> {
        let session: AuthSession = self
            .http
            .post_unauthenticated("/auth/patient/register", registration)
            .await?;
        self.establish(Role::Patient, &session)?;
        Ok(session)
    }

    /// Clear the stored session. Local only; the backend keeps no session
    /// state beyond the bearer token itself.
    pub fn logout(&self) -> ClientResult<()> {
        self.db.lock()?.clear_tokens()?;
        info!("session cleared on logout");
        Ok(())
    }

    fn establish(&self, role: Role, session: &AuthSession) -> ClientResult<()> {
        self.db.lock()?.store_token(role, &session.token)?;
        self.http.note_authenticated();
        info!(role = %role, "session established");
        Ok(())
    }
}
