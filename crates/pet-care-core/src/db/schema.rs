//! SQLite schema definition.

/// Complete database schema for the consultation outbox.
pub const SCHEMA: &str = r#"
-- ============================================================================
-- Consultation Requests
-- ============================================================================

CREATE TABLE IF NOT EXISTS consultations (
    request_id TEXT PRIMARY KEY,
    owner_name TEXT NOT NULL,
    email TEXT NOT NULL,
    phone TEXT NOT NULL,
    pet_type TEXT NOT NULL,                       -- select option label
    pet_age TEXT NOT NULL,
    symptoms TEXT NOT NULL,
    urgency TEXT NOT NULL,                        -- select option label
    submitted_at TEXT NOT NULL,
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_consultations_submitted
    ON consultations(submitted_at);
"#;
