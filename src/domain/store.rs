// src/domain/store.rs
use crate::domain::article::ArticleRepository;
use crate::domain::comment::ArticleCommentRepository;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionMode {
    ReadOnly,
    ReadWrite,
}

/// Opens one transaction per service call.
#[async_trait]
pub trait BoardStore: Send + Sync {
    async fn begin(&self, mode: TransactionMode) -> DomainResult<Box<dyn BoardSession>>;
}

/// An open transaction. Nothing is visible to other sessions until `commit`.
/// Dropping a session without committing discards its writes.
#[async_trait]
pub trait BoardSession: Send {
    fn articles(&mut self) -> &mut dyn ArticleRepository;
    fn comments(&mut self) -> &mut dyn ArticleCommentRepository;
    async fn commit(self: Box<Self>) -> DomainResult<()>;
    async fn rollback(self: Box<Self>) -> DomainResult<()>;
}
