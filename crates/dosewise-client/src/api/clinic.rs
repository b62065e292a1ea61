//! Clinic endpoints: patient lookups, encounters, prescription checks.

use tracing::warn;

use dosewise_core::models::{
    ClinicPatientInfo, Encounter, InteractionReport, NewEncounter,
};

use super::{recover, PortalClient};
use crate::fetched::Fetched;
use crate::ClientResult;

#[derive(serde::Serialize)]
struct InteractionRequest<'a> {
    medications: &'a [String],
}

impl PortalClient {
    /// A patient's summary as seen by the clinic. Falls back to the fixed
    /// demo profile so the clinic dashboard can still render.
    pub async fn clinic_patient_info(
        &self,
        patient_id: &str,
    ) -> ClientResult<Fetched<ClinicPatientInfo>> {
        let path = format!("/clinic/patient/{patient_id}");
        match self.http.get(&path).await {
            Ok(info) => Ok(Fetched::Live(info)),
            Err(err) => {
                let reason = recover(err)?;
                warn!(%reason, patient_id, "patient lookup failed, using demo profile");
                Ok(Fetched::fallback(ClinicPatientInfo::demo(patient_id), reason))
            }
        }
    }

    /// Record a clinical encounter. No fallback.
    pub async fn create_encounter(&self, input: &NewEncounter) -> ClientResult<Encounter> {
        Ok(self.http.post("/clinic/encounter", input).await?)
    }

    /// Fetch an encounter, including any interactions the backend flagged.
    /// No fallback.
    pub async fn encounter_by_id(&self, encounter_id: &str) -> ClientResult<Encounter> {
        let path = format!("/clinic/encounter/{encounter_id}");
        Ok(self.http.get(&path).await?)
    }

    /// Clinic-side interaction check run before prescribing. The local
    /// heuristic is never substituted here; failures surface to the caller.
    pub async fn check_prescription_interactions(
        &self,
        medications: &[String],
    ) -> ClientResult<InteractionReport> {
        let body = InteractionRequest { medications };
        Ok(self.http.post("/clinic/prescription/check", &body).await?)
    }
}
