// src/domain/user/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserAccountId(pub i64);

impl UserAccountId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::validation("user account id must be positive"))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<UserAccountId> for i64 {
    fn from(value: UserAccountId) -> Self {
        value.0
    }
}

/// The login name of an account (`user_id` column), distinct from its surrogate id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LoginId(String);

impl LoginId {
    pub const MAX_LEN: usize = 50;

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("user id cannot be empty"));
        }
        if trimmed.chars().count() > Self::MAX_LEN {
            return Err(DomainError::validation(format!(
                "user id must be at most {} characters",
                Self::MAX_LEN
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub(crate) fn from_stored(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for LoginId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
