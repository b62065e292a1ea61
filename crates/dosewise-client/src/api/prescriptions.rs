//! Prescription endpoints, with the fallback store standing in for the
//! backend when it is unreachable.

use tracing::warn;

use dosewise_core::models::{NewPrescription, Prescription};

use super::{recover, PortalClient};
use crate::fetched::Fetched;
use crate::ClientResult;

impl PortalClient {
    /// Create a prescription (clinic-side). When the backend fails, the
    /// record is synthesized and appended to the fallback store so patient
    /// views in this session still observe it. Two racing creates both
    /// append; no deduplication is attempted.
    pub async fn create_prescription(
        &self,
        input: &NewPrescription,
    ) -> ClientResult<Fetched<Prescription>> {
        match self.http.post("/clinic/prescription", input).await {
            Ok(stored) => Ok(Fetched::Live(stored)),
            Err(err) => {
                let reason = recover(err)?;
                warn!(%reason, medication = %input.medication, "prescription create failed, storing locally");
                let prescription = Prescription::from_new(input);
                self.db.lock()?.append_fallback_prescription(&prescription)?;
                Ok(Fetched::fallback(prescription, reason))
            }
        }
    }

    /// Prescriptions for a patient. When the backend fails, the fallback
    /// store answers instead, seeding the two demo records the first time a
    /// patient with no local records is queried.
    pub async fn patient_prescriptions(
        &self,
        patient_id: &str,
    ) -> ClientResult<Fetched<Vec<Prescription>>> {
        let path = format!("/prescriptions/patient/{patient_id}");
        match self.http.get(&path).await {
            Ok(prescriptions) => Ok(Fetched::Live(prescriptions)),
            Err(err) => {
                let reason = recover(err)?;
                warn!(%reason, patient_id, "prescription fetch failed, reading fallback store");
                let db = self.db.lock()?;
                db.seed_default_prescriptions_if_empty(patient_id)?;
                let prescriptions = db.fallback_prescriptions_for_patient(patient_id)?;
                Ok(Fetched::fallback(prescriptions, reason))
            }
        }
    }
}
