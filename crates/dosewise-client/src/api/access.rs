//! Access control endpoints: QR grants between patients and clinics.

use serde::Serialize;
use tracing::warn;

use dosewise_core::models::{AccessGrant, QrAccess, RevokeReceipt};

use super::{recover, PortalClient};
use crate::fetched::Fetched;
use crate::ClientResult;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateQrRequest<'a> {
    clinic_id: &'a str,
}

impl PortalClient {
    /// Generate a QR access code for a clinic (patient-side). Falls back to
    /// a locally synthesized code with a 15-minute expiry.
    pub async fn generate_qr_code(&self, clinic_id: &str) -> ClientResult<Fetched<QrAccess>> {
        let body = GenerateQrRequest { clinic_id };
        match self.http.post("/access/generate-qr", &body).await {
            Ok(qr) => Ok(Fetched::Live(qr)),
            Err(err) => {
                let reason = recover(err)?;
                warn!(%reason, clinic_id, "QR generation failed, synthesizing access code");
                Ok(Fetched::fallback(QrAccess::synthesized(clinic_id), reason))
            }
        }
    }

    /// Resolve a scanned QR code into an access grant (clinic-side).
    /// Access grants are never synthesized; failures surface to the caller.
    pub async fn scan_qr_code(&self, code: &str) -> ClientResult<AccessGrant> {
        let path = format!("/access/scan/{code}");
        Ok(self.http.get(&path).await?)
    }

    /// Revoke a previously issued grant (patient-side). No fallback.
    pub async fn revoke_access(&self, grant_id: &str) -> ClientResult<RevokeReceipt> {
        let path = format!("/access/revoke/{grant_id}");
        Ok(self.http.delete_raw(&path).await?)
    }
}
