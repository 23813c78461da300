// src/infrastructure/auditor.rs
use crate::application::ports::auditor::AuditorProvider;
use crate::domain::auditing::AUDITOR_MAX_LEN;
use crate::domain::errors::{DomainError, DomainResult};

/// Stamps every write with one fixed name taken from configuration.
/// Stands in until requests carry an authenticated principal.
#[derive(Debug, Clone)]
pub struct ConfiguredAuditor {
    name: String,
}

impl ConfiguredAuditor {
    pub fn new(name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(DomainError::validation("auditor name cannot be empty"));
        }
        if name.chars().count() > AUDITOR_MAX_LEN {
            return Err(DomainError::validation(format!(
                "auditor name must be at most {AUDITOR_MAX_LEN} characters"
            )));
        }
        Ok(Self { name })
    }
}

impl AuditorProvider for ConfiguredAuditor {
    fn current_auditor(&self) -> String {
        self.name.clone()
    }
}
