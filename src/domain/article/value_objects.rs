// src/domain/article/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArticleId(pub i64);

impl ArticleId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::validation("article id must be positive"))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ArticleId> for i64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn non_blank(value: String, field: &str, max_len: usize) -> DomainResult<String> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(format!("{field} cannot be empty")));
    }
    if value.chars().count() > max_len {
        return Err(DomainError::validation(format!(
            "{field} must be at most {max_len} characters"
        )));
    }
    Ok(value)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleTitle(String);

impl ArticleTitle {
    pub const MAX_LEN: usize = 255;

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        non_blank(value.into(), "title", Self::MAX_LEN).map(Self)
    }

    /// Wraps a value read back from the database, which already enforced its own checks.
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

impl fmt::Display for ArticleTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleContent(String);

impl ArticleContent {
    pub const MAX_LEN: usize = 10_000;

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        non_blank(value.into(), "content", Self::MAX_LEN).map(Self)
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

impl fmt::Display for ArticleContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Free-text label used as an alternate search key. `#`-prefixed by convention only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hashtag(String);

impl Hashtag {
    pub const MAX_LEN: usize = 255;

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        non_blank(value.trim().to_string(), "hashtag", Self::MAX_LEN).map(Self)
    }

    /// Blank input means "no hashtag" rather than an error.
    pub fn parse_optional(value: Option<String>) -> DomainResult<Option<Self>> {
        match value {
            Some(raw) if !raw.trim().is_empty() => Self::new(raw).map(Some),
            _ => Ok(None),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Hashtag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
