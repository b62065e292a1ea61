//! Prescription records and the inputs that create them.

use serde::{Deserialize, Serialize};

use super::now_rfc3339;

/// A stored prescription, either returned by the backend or synthesized
/// locally when the backend is unreachable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Prescription {
    /// Unique id; server-generated on the live path, locally generated on
    /// the fallback path
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// Owning patient id
    pub patient_id: String,
    /// Patient display name
    pub patient_name: String,
    /// Medication name, e.g. "Lisinopril 10mg"
    pub medication: String,
    pub dosage: String,
    pub frequency: String,
    pub duration: String,
    pub instructions: String,
    /// Prescribing clinic or clinician name
    pub prescribed_by: String,
    /// Prescription timestamp (RFC 3339)
    pub prescribed_date: String,
    /// "active" unless the backend says otherwise
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Input for creating a prescription (clinic-side form).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewPrescription {
    pub patient_id: String,
    pub patient_name: String,
    pub medication: String,
    pub dosage: String,
    #[serde(default)]
    pub frequency: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub instructions: Option<String>,
    pub prescribed_by: String,
}

impl Prescription {
    /// Synthesize a stored prescription from form input, filling the same
    /// defaults the portal UI uses for blank optional fields.
    pub fn from_new(input: &NewPrescription) -> Self {
        let now = now_rfc3339();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            patient_id: input.patient_id.clone(),
            patient_name: input.patient_name.clone(),
            medication: input.medication.clone(),
            dosage: input.dosage.clone(),
            frequency: input
                .frequency
                .clone()
                .unwrap_or_else(|| "As directed".to_string()),
            duration: input
                .duration
                .clone()
                .unwrap_or_else(|| "Ongoing".to_string()),
            instructions: input
                .instructions
                .clone()
                .unwrap_or_else(|| "Take as prescribed".to_string()),
            prescribed_by: input.prescribed_by.clone(),
            prescribed_date: now.clone(),
            status: "active".to_string(),
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// Check if this prescription is active.
    pub fn is_active(&self) -> bool {
        self.status == "active"
    }

    /// The two demo prescriptions seeded for a patient with no fallback
    /// records. Ids are derived from the patient id so re-seeding the same
    /// patient can never duplicate them.
    pub fn default_seeds(patient_id: &str) -> [Prescription; 2] {
        let now = now_rfc3339();
        let seed = |slug: &str,
                    medication: &str,
                    dosage: &str,
                    frequency: &str,
                    prescribed_date: &str| Prescription {
            id: format!("seed-{patient_id}-{slug}"),
            patient_id: patient_id.to_string(),
            patient_name: "Demo Patient".to_string(),
            medication: medication.to_string(),
            dosage: dosage.to_string(),
            frequency: frequency.to_string(),
            duration: "Ongoing".to_string(),
            instructions: "Take as prescribed".to_string(),
            prescribed_by: "Dr. Sarah Johnson".to_string(),
            prescribed_date: prescribed_date.to_string(),
            status: "active".to_string(),
            created_at: now.clone(),
            updated_at: now.clone(),
        };
        [
            seed(
                "lisinopril",
                "Lisinopril 10mg",
                "Once daily",
                "Daily",
                "2025-10-01T00:00:00+00:00",
            ),
            seed(
                "metformin",
                "Metformin 500mg",
                "Twice daily with meals",
                "Twice daily",
                "2025-09-15T00:00:00+00:00",
            ),
        ]
    }
}
