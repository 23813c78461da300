// src/application/error.rs
use crate::domain::article::ArticleId;
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("resource not found: {0}")]
    NotFound(String),
}

impl ApplicationError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn article_not_found(id: ArticleId) -> Self {
        Self::not_found(format!("article not found - articleId: {id}"))
    }

    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound(_) => true,
            Self::Domain(err) => err.is_not_found(),
        }
    }
}
