//! Patient endpoints: profile, records, symptoms, interactions, AI assist.

use serde::Serialize;
use tracing::warn;

use dosewise_core::models::{
    EmrExtraction, InteractionReport, MedicalRecord, NewSymptom, PatientProfile, SymptomEntry,
};

use super::{recover, PortalClient};
use crate::fetched::Fetched;
use crate::ClientResult;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UploadRecordRequest<'a> {
    record_text: &'a str,
}

#[derive(Serialize)]
struct InteractionRequest<'a> {
    medications: &'a [String],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EmrRequest<'a> {
    text: &'a str,
    patient_id: &'a str,
}

impl PortalClient {
    /// Profile of the logged-in patient. No fallback; failures surface to
    /// the caller.
    pub async fn patient_profile(&self) -> ClientResult<PatientProfile> {
        Ok(self.http.get("/patient/me").await?)
    }

    /// All medical records for the logged-in patient. No fallback.
    pub async fn patient_records(&self) -> ClientResult<Vec<MedicalRecord>> {
        Ok(self.http.get("/patient/records").await?)
    }

    /// Upload a free-text record for processing. No fallback.
    pub async fn upload_record(&self, record_text: &str) -> ClientResult<MedicalRecord> {
        let body = UploadRecordRequest { record_text };
        Ok(self.http.post("/patient/upload-record", &body).await?)
    }

    /// Log a symptom. When the backend fails, a synthesized entry keeps the
    /// symptom tracker responsive; it lives only for this UI session and is
    /// never persisted locally.
    pub async fn log_symptom(&self, input: &NewSymptom) -> ClientResult<Fetched<SymptomEntry>> {
        match self.http.post("/patient/symptoms", input).await {
            Ok(entry) => Ok(Fetched::Live(entry)),
            Err(err) => {
                let reason = recover(err)?;
                warn!(%reason, symptom = %input.symptom, "symptom log failed, synthesizing entry");
                Ok(Fetched::fallback(SymptomEntry::synthesized(input), reason))
            }
        }
    }

    /// Symptom history for the logged-in patient. No fallback.
    pub async fn symptoms(&self) -> ClientResult<Vec<SymptomEntry>> {
        Ok(self.http.get("/patient/symptoms").await?)
    }

    /// Check a medication list for interactions, falling back to the local
    /// heuristic when the interaction service is unreachable.
    pub async fn check_drug_interactions(
        &self,
        medications: &[String],
    ) -> ClientResult<Fetched<InteractionReport>> {
        let body = InteractionRequest { medications };
        match self.http.post("/drugs/interactions", &body).await {
            Ok(report) => Ok(Fetched::Live(report)),
            Err(err) => {
                let reason = recover(err)?;
                warn!(%reason, count = medications.len(), "interaction check failed, using local heuristic");
                Ok(Fetched::fallback(
                    InteractionReport::heuristic(medications),
                    reason,
                ))
            }
        }
    }

    /// Extract structured EMR data from free text via the AI-assist service.
    /// No fallback.
    pub async fn extract_emr(&self, text: &str, patient_id: &str) -> ClientResult<EmrExtraction> {
        let body = EmrRequest { text, patient_id };
        Ok(self.http.post("/ai/emr", &body).await?)
    }
}
