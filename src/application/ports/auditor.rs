// src/application/ports/auditor.rs

/// Supplies the name written into `created_by` / `modified_by`.
pub trait AuditorProvider: Send + Sync {
    fn current_auditor(&self) -> String;
}
