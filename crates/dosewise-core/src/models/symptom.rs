//! Symptom log entries.

use serde::{Deserialize, Serialize};

use super::now_rfc3339;

/// Input for logging a symptom (patient-side form).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewSymptom {
    pub symptom: String,
    /// Self-reported severity, 1-10
    pub severity: u8,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
}

/// A stored symptom entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SymptomEntry {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// Owning patient; unknown on the fallback path
    #[serde(default)]
    pub patient_id: Option<String>,
    pub symptom: String,
    pub severity: u8,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub duration: String,
    pub logged_at: String,
    pub created_at: String,
}

impl SymptomEntry {
    /// Synthesize an entry for a symptom the backend failed to store. The
    /// entry exists only for the duration of the UI session; it is never
    /// persisted locally.
    pub fn synthesized(input: &NewSymptom) -> Self {
        let now = now_rfc3339();
        Self {
            id: format!("symptom-{}", uuid::Uuid::new_v4()),
            patient_id: None,
            symptom: input.symptom.clone(),
            severity: input.severity,
            notes: input.notes.clone().unwrap_or_default(),
            duration: input.duration.clone().unwrap_or_default(),
            logged_at: now.clone(),
            created_at: now,
        }
    }
}
