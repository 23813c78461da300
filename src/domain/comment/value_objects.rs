// src/domain/comment/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArticleCommentId(pub i64);

impl ArticleCommentId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::validation("comment id must be positive"))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ArticleCommentId> for i64 {
    fn from(value: ArticleCommentId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentContent(String);

impl CommentContent {
    pub const MAX_LEN: usize = 500;

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::validation("comment content cannot be empty"));
        }
        if value.chars().count() > Self::MAX_LEN {
            return Err(DomainError::validation(format!(
                "comment content must be at most {} characters",
                Self::MAX_LEN
            )));
        }
        Ok(Self(value))
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

impl fmt::Display for CommentContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
