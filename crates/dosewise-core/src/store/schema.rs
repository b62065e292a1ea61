//! SQLite schema definition.

/// Complete store schema for the dosewise portal client.
pub const SCHEMA: &str = r#"
-- ============================================================================
-- Session Tokens
-- ============================================================================
-- One row per role ("patient" / "clinic"); at most one token per role.

CREATE TABLE IF NOT EXISTS session_tokens (
    role TEXT PRIMARY KEY,
    token TEXT NOT NULL,
    stored_at TEXT NOT NULL DEFAULT (datetime('now'))
);

-- ============================================================================
-- Fallback Prescriptions
-- ============================================================================
-- Prescriptions synthesized while the backend was unreachable. Append-only
-- from the API's point of view; rowid order is insertion order.

CREATE TABLE IF NOT EXISTS fallback_prescriptions (
    id TEXT PRIMARY KEY,
    patient_id TEXT NOT NULL,
    patient_name TEXT NOT NULL,
    medication TEXT NOT NULL,
    dosage TEXT NOT NULL,
    frequency TEXT NOT NULL,
    duration TEXT NOT NULL,
    instructions TEXT NOT NULL,
    prescribed_by TEXT NOT NULL,
    prescribed_date TEXT NOT NULL,
    status TEXT NOT NULL DEFAULT 'active',
    created_at TEXT NOT NULL DEFAULT (datetime('now')),
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_fallback_prescriptions_patient
    ON fallback_prescriptions(patient_id);
"#;
