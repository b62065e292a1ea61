//! Fallback prescription operations.

use rusqlite::params;

use super::{Database, StoreResult};
use crate::models::Prescription;

/// Maximum records kept in the fallback table. Appending past this evicts
/// the oldest rows first.
pub const FALLBACK_CAPACITY: usize = 200;

impl Database {
    /// Append a synthesized prescription, evicting the oldest rows beyond
    /// [`FALLBACK_CAPACITY`].
    pub fn append_fallback_prescription(&self, prescription: &Prescription) -> StoreResult<()> {
        self.append_fallback_prescription_bounded(prescription, FALLBACK_CAPACITY)
    }

    /// Append with an explicit capacity.
    pub fn append_fallback_prescription_bounded(
        &self,
        prescription: &Prescription,
        capacity: usize,
    ) -> StoreResult<()> {
        self.conn.execute(
            r#"
            INSERT INTO fallback_prescriptions (
                id, patient_id, patient_name, medication, dosage, frequency,
                duration, instructions, prescribed_by, prescribed_date,
                status, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)
            "#,
            params![
                prescription.id,
                prescription.patient_id,
                prescription.patient_name,
                prescription.medication,
                prescription.dosage,
                prescription.frequency,
                prescription.duration,
                prescription.instructions,
                prescription.prescribed_by,
                prescription.prescribed_date,
                prescription.status,
                prescription.created_at,
                prescription.updated_at,
            ],
        )?;
        self.conn.execute(
            r#"
            DELETE FROM fallback_prescriptions
            WHERE rowid NOT IN (
                SELECT rowid FROM fallback_prescriptions
                ORDER BY rowid DESC LIMIT ?1
            )
            "#,
            [capacity],
        )?;
        Ok(())
    }

    /// All fallback prescriptions for a patient, in insertion order. Empty
    /// vec (not an error) when none match.
    pub fn fallback_prescriptions_for_patient(
        &self,
        patient_id: &str,
    ) -> StoreResult<Vec<Prescription>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, patient_id, patient_name, medication, dosage, frequency,
                   duration, instructions, prescribed_by, prescribed_date,
                   status, created_at, updated_at
            FROM fallback_prescriptions
            WHERE patient_id = ?
            ORDER BY rowid
            "#,
        )?;
        let rows = stmt.query_map([patient_id], |row| {
            Ok(Prescription {
                id: row.get(0)?,
                patient_id: row.get(1)?,
                patient_name: row.get(2)?,
                medication: row.get(3)?,
                dosage: row.get(4)?,
                frequency: row.get(5)?,
                duration: row.get(6)?,
                instructions: row.get(7)?,
                prescribed_by: row.get(8)?,
                prescribed_date: row.get(9)?,
                status: row.get(10)?,
                created_at: row.get(11)?,
                updated_at: row.get(12)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Persist the two demo prescriptions for a patient that has no fallback
    /// records, so later queries are stable. Returns true when seeds were
    /// written. Never duplicates.
    pub fn seed_default_prescriptions_if_empty(&self, patient_id: &str) -> StoreResult<bool> {
        if !self.fallback_prescriptions_for_patient(patient_id)?.is_empty() {
            return Ok(false);
        }
        for seed in Prescription::default_seeds(patient_id) {
            self.append_fallback_prescription(&seed)?;
        }
        Ok(true)
    }

    /// Total records in the fallback table.
    pub fn fallback_prescription_count(&self) -> StoreResult<usize> {
        let count: i64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM fallback_prescriptions", [], |row| {
                    row.get(0)
                })?;
        Ok(count as usize)
    }
}
