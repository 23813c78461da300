// src/domain/auditing.rs
use chrono::{DateTime, Utc};

/// Upper bound for `created_by` / `modified_by`, matching the column width.
pub const AUDITOR_MAX_LEN: usize = 100;

/// Created/modified metadata carried by value inside every persisted entity.
///
/// The persistence layer stamps these fields: the created pair once on insert,
/// the modified pair on every write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditingFields {
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub modified_at: DateTime<Utc>,
    pub modified_by: String,
}

impl AuditingFields {
    pub fn created(at: DateTime<Utc>, by: impl Into<String>) -> Self {
        let by = by.into();
        Self {
            created_at: at,
            created_by: by.clone(),
            modified_at: at,
            modified_by: by,
        }
    }

    pub fn touch(&mut self, at: DateTime<Utc>, by: impl Into<String>) {
        self.modified_at = at;
        self.modified_by = by.into();
    }
}
