// src/domain/comment/repository.rs
use crate::domain::article::ArticleId;
use crate::domain::comment::entity::{ArticleComment, NewArticleComment};
use crate::domain::comment::value_objects::ArticleCommentId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleCommentRepository: Send {
    /// Oldest first, ties broken by id.
    async fn find_by_article_id(&mut self, article_id: ArticleId)
    -> DomainResult<Vec<ArticleComment>>;
    async fn insert(&mut self, comment: NewArticleComment) -> DomainResult<ArticleComment>;
    async fn delete_by_id(&mut self, id: ArticleCommentId) -> DomainResult<()>;
}
