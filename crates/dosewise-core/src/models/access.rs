//! QR-based record access grants.

use serde::{Deserialize, Serialize};

/// QR access code shown to a clinic by a patient.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QrAccess {
    /// Payload encoded into the QR image
    pub qr_code: String,
    /// Human-readable code a clinic can type instead of scanning
    pub access_code: String,
    /// Clinic the access is scoped to
    pub clinic_id: String,
    /// Expiry timestamp (RFC 3339)
    pub expires_at: String,
}

impl QrAccess {
    /// Lifetime of a synthesized access code.
    pub const FALLBACK_TTL_MINUTES: i64 = 15;

    /// Synthesize an access code when the backend cannot issue one. The code
    /// is unique per call and expires 15 minutes from now.
    pub fn synthesized(clinic_id: &str) -> Self {
        let now = chrono::Utc::now();
        let code = uuid::Uuid::new_v4().simple().to_string()[..9].to_uppercase();
        Self {
            qr_code: format!("qr-{}-{}", clinic_id, now.timestamp_millis()),
            access_code: format!("LOCAL-{code}"),
            clinic_id: clinic_id.to_string(),
            expires_at: (now + chrono::Duration::minutes(Self::FALLBACK_TTL_MINUTES))
                .to_rfc3339(),
        }
    }
}

/// An active grant, as returned when a clinic scans a QR code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccessGrant {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub patient_id: String,
    pub clinic_id: String,
    #[serde(default)]
    pub granted_at: Option<String>,
    #[serde(default)]
    pub expires_at: Option<String>,
}

/// Backend acknowledgment for an access revocation.
///
/// The revoke endpoint replies with a bare status body rather than the
/// `{ "data": ... }` envelope the other endpoints use.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RevokeReceipt {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}
