//! Dosewise Core Library
//!
//! Local-first support layer for the dosewise patient/clinic portal client.
//!
//! # Architecture
//!
//! ```text
//! UI layer ──► dosewise-client (domain access functions)
//!                      │
//!              live REST call fails?
//!                      │
//!              ┌───────▼───────────────────────┐
//!              │   deterministic fallback      │
//!              │  synthesizers (this crate)    │
//!              └───────┬───────────────────────┘
//!                      │
//!              ┌───────▼───────────────────────┐
//!              │   SQLite-backed store         │
//!              │  session tokens + fallback    │
//!              │  prescription table           │
//!              └───────────────────────────────┘
//! ```
//!
//! # Core Principle
//!
//! **Fallback data is deterministic.** Every synthesized payload is produced
//! by a constructor in this crate so the client layer never invents data
//! inline and every fallback path is unit-testable without a network.
//!
//! # Modules
//!
//! - [`store`]: SQLite store for session tokens and fallback prescriptions
//! - [`models`]: Domain types (Prescription, SymptomEntry, QrAccess, etc.)

pub mod models;
pub mod store;

// Re-export commonly used types
pub use models::{
    AccessGrant, AuthSession, ClinicPatientInfo, DrugInteraction, Encounter, InteractionReport,
    MedicalRecord, NewEncounter, NewPrescription, NewSymptom, PatientProfile, PatientRegistration,
    Prescription, QrAccess, RevokeReceipt, Role, SymptomEntry,
};
pub use store::{Database, StoreError, StoreResult};
