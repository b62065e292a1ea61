//! Patient-facing profile and record models, plus clinic views of a patient.

use serde::{Deserialize, Serialize};

use super::interaction::DrugInteraction;

/// The logged-in patient's own profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PatientProfile {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub conditions: Vec<String>,
    #[serde(default)]
    pub medications: Vec<String>,
    #[serde(default)]
    pub allergies: Vec<String>,
}

/// A medication mentioned inside a medical record or EMR extraction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecordMedication {
    pub name: String,
    #[serde(default)]
    pub dosage: Option<String>,
    #[serde(default)]
    pub frequency: Option<String>,
}

/// An uploaded/processed medical record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MedicalRecord {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub patient_id: Option<String>,
    #[serde(default)]
    pub record_text: String,
    #[serde(default)]
    pub clinic_id: Option<String>,
    #[serde(default)]
    pub encounter_date: Option<String>,
    #[serde(default)]
    pub medications: Vec<RecordMedication>,
}

/// Structured data extracted from free-text notes by the AI-assist service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmrExtraction {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub medications: Vec<RecordMedication>,
    #[serde(default)]
    pub conditions: Vec<String>,
}

/// A patient as seen from the clinic dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClinicPatientInfo {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub conditions: Vec<String>,
    #[serde(default)]
    pub medications: Vec<String>,
    #[serde(default)]
    pub allergies: Vec<String>,
}

impl ClinicPatientInfo {
    /// Fixed demo profile shown when the clinic patient lookup fails. Only
    /// the id varies; every other field is a stable demo fixture.
    pub fn demo(patient_id: &str) -> Self {
        Self {
            id: patient_id.to_string(),
            name: "Demo Patient".to_string(),
            age: Some(54),
            conditions: vec!["Hypertension".to_string(), "Type 2 Diabetes".to_string()],
            medications: vec!["Lisinopril 10mg".to_string(), "Metformin 500mg".to_string()],
            allergies: vec!["Penicillin".to_string()],
        }
    }
}

/// Input for recording a clinical encounter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewEncounter {
    pub patient_id: String,
    /// Free-text clinical note
    pub note: String,
}

/// A recorded encounter, with interactions flagged by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Encounter {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub patient_id: String,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub interactions: Vec<DrugInteraction>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_profile_is_deterministic() {
        let a = ClinicPatientInfo::demo("p1");
        let b = ClinicPatientInfo::demo("p1");
        assert_eq!(a, b);
        assert_eq!(a.id, "p1");
        assert_eq!(a.conditions.len(), 2);
        assert_eq!(a.allergies, vec!["Penicillin".to_string()]);
    }

    #[test]
    fn test_profile_tolerates_sparse_payloads() {
        let profile: PatientProfile =
            serde_json::from_str(r#"{"_id":"p1","name":"Ada","email":"ada@example.com"}"#).unwrap();
        assert!(profile.conditions.is_empty());
        assert!(profile.date_of_birth.is_none());
    }

    #[test]
    fn test_record_accepts_plain_id_alias() {
        let record: MedicalRecord = serde_json::from_str(r#"{"id":"r1"}"#).unwrap();
        assert_eq!(record.id, "r1");
        assert!(record.medications.is_empty());
    }
}
