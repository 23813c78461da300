// src/domain/comment/entity.rs
use crate::domain::article::ArticleId;
use crate::domain::auditing::AuditingFields;
use crate::domain::comment::value_objects::{ArticleCommentId, CommentContent};

/// A comment holds the id of its article, never the article itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleComment {
    pub id: ArticleCommentId,
    pub article_id: ArticleId,
    pub content: CommentContent,
    pub auditing: AuditingFields,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArticleComment {
    pub article_id: ArticleId,
    pub content: CommentContent,
}
