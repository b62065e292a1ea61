//! Fallback store integration tests.

use dosewise_core::models::{NewPrescription, Prescription, Role};
use dosewise_core::store::Database;

fn make_prescription(patient_id: &str, medication: &str) -> Prescription {
    Prescription::from_new(&NewPrescription {
        patient_id: patient_id.to_string(),
        patient_name: "Alex Rivera".to_string(),
        medication: medication.to_string(),
        dosage: "10mg".to_string(),
        frequency: Some("Daily".to_string()),
        duration: None,
        instructions: None,
        prescribed_by: "Dr. Lee".to_string(),
    })
}

#[test]
fn test_token_lifecycle_both_roles() {
    let db = Database::open_in_memory().unwrap();

    db.store_token(Role::Patient, "patient-token").unwrap();
    db.store_token(Role::Clinic, "clinic-token").unwrap();
    assert!(db.stored_token().unwrap().is_some());

    db.clear_tokens().unwrap();
    assert!(db.stored_token().unwrap().is_none());
    assert!(db.token_for_role(Role::Patient).unwrap().is_none());
    assert!(db.token_for_role(Role::Clinic).unwrap().is_none());
}

#[test]
fn test_query_is_idempotent_between_appends() {
    let db = Database::open_in_memory().unwrap();
    db.append_fallback_prescription(&make_prescription("p1", "Lisinopril 10mg"))
        .unwrap();
    db.append_fallback_prescription(&make_prescription("p1", "Metformin 500mg"))
        .unwrap();

    let first = db.fallback_prescriptions_for_patient("p1").unwrap();
    let second = db.fallback_prescriptions_for_patient("p1").unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

#[test]
fn test_seeding_unseen_patient() {
    let db = Database::open_in_memory().unwrap();

    db.seed_default_prescriptions_if_empty("unseen").unwrap();
    let seeded = db.fallback_prescriptions_for_patient("unseen").unwrap();
    assert_eq!(seeded.len(), 2);
    assert_eq!(seeded[0].medication, "Lisinopril 10mg");
    assert_eq!(seeded[1].medication, "Metformin 500mg");

    // Re-seeding never duplicates
    db.seed_default_prescriptions_if_empty("unseen").unwrap();
    let again = db.fallback_prescriptions_for_patient("unseen").unwrap();
    assert_eq!(again, seeded);
}

#[test]
fn test_seeding_skipped_when_records_exist() {
    let db = Database::open_in_memory().unwrap();
    db.append_fallback_prescription(&make_prescription("p1", "Atorvastatin 20mg"))
        .unwrap();

    assert!(!db.seed_default_prescriptions_if_empty("p1").unwrap());
    let found = db.fallback_prescriptions_for_patient("p1").unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].medication, "Atorvastatin 20mg");
}

#[test]
fn test_records_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("portal.db");

    {
        let db = Database::open(&path).unwrap();
        db.store_token(Role::Patient, "tok").unwrap();
        db.append_fallback_prescription(&make_prescription("p1", "Lisinopril 10mg"))
            .unwrap();
    }

    let db = Database::open(&path).unwrap();
    assert_eq!(db.stored_token().unwrap().as_deref(), Some("tok"));
    let found = db.fallback_prescriptions_for_patient("p1").unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].medication, "Lisinopril 10mg");
}

#[test]
fn test_each_append_grows_store_by_one() {
    let db = Database::open_in_memory().unwrap();
    for i in 0..4 {
        db.append_fallback_prescription(&make_prescription("p1", &format!("Med {i}")))
            .unwrap();
        assert_eq!(db.fallback_prescription_count().unwrap(), i + 1);
    }
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Queries partition appends: every record lands in exactly the
        /// query result for its own patient, in insertion order.
        #[test]
        fn prop_query_matches_appends(appends in prop::collection::vec((0u8..3, "[A-Za-z ]{1,12}"), 0..20)) {
            let db = Database::open_in_memory().unwrap();
            let mut expected: Vec<Vec<String>> = vec![Vec::new(); 3];

            for (patient, medication) in &appends {
                let pid = format!("p{patient}");
                let px = make_prescription(&pid, medication);
                db.append_fallback_prescription(&px).unwrap();
                expected[*patient as usize].push(px.id);
            }

            for patient in 0..3u8 {
                let pid = format!("p{patient}");
                let ids: Vec<String> = db
                    .fallback_prescriptions_for_patient(&pid)
                    .unwrap()
                    .into_iter()
                    .map(|px| px.id)
                    .collect();
                prop_assert_eq!(&ids, &expected[patient as usize]);
            }
        }
    }
}
