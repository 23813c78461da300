// src/application/dto/comments.rs
use crate::domain::article::ArticleId;
use crate::domain::comment::{ArticleComment, CommentContent, NewArticleComment};
use crate::domain::errors::DomainResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleCommentDto {
    #[serde(default)]
    pub id: Option<i64>,
    pub article_id: i64,
    pub content: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub modified_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub modified_by: Option<String>,
}

impl ArticleCommentDto {
    pub fn new(article_id: i64, content: impl Into<String>) -> Self {
        Self {
            id: None,
            article_id,
            content: content.into(),
            created_at: None,
            created_by: None,
            modified_at: None,
            modified_by: None,
        }
    }

    pub fn into_new_comment(self) -> DomainResult<NewArticleComment> {
        Ok(NewArticleComment {
            article_id: ArticleId::new(self.article_id)?,
            content: CommentContent::new(self.content)?,
        })
    }
}

impl From<ArticleComment> for ArticleCommentDto {
    fn from(comment: ArticleComment) -> Self {
        Self {
            id: Some(comment.id.into()),
            article_id: comment.article_id.into(),
            content: comment.content.into_inner(),
            created_at: Some(comment.auditing.created_at),
            created_by: Some(comment.auditing.created_by),
            modified_at: Some(comment.auditing.modified_at),
            modified_by: Some(comment.auditing.modified_by),
        }
    }
}
