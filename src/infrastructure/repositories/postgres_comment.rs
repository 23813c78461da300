// src/infrastructure/repositories/postgres_comment.rs
use super::{map_sqlx, postgres_store::PostgresSession};
use crate::domain::article::ArticleId;
use crate::domain::auditing::AuditingFields;
use crate::domain::comment::{
    ArticleComment, ArticleCommentId, ArticleCommentRepository, CommentContent, NewArticleComment,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

const COMMENT_COLUMNS: &str =
    "id, article_id, content, created_at, created_by, modified_at, modified_by";

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    article_id: i64,
    content: String,
    created_at: DateTime<Utc>,
    created_by: String,
    modified_at: DateTime<Utc>,
    modified_by: String,
}

impl TryFrom<CommentRow> for ArticleComment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(ArticleComment {
            id: ArticleCommentId::new(row.id)?,
            article_id: ArticleId::new(row.article_id)?,
            content: CommentContent::from_stored(row.content),
            auditing: AuditingFields {
                created_at: row.created_at,
                created_by: row.created_by,
                modified_at: row.modified_at,
                modified_by: row.modified_by,
            },
        })
    }
}

#[async_trait]
impl ArticleCommentRepository for PostgresSession {
    async fn find_by_article_id(
        &mut self,
        article_id: ArticleId,
    ) -> DomainResult<Vec<ArticleComment>> {
        let sql = format!(
            "SELECT {COMMENT_COLUMNS} FROM article_comment \
             WHERE article_id = $1 ORDER BY created_at ASC, id ASC"
        );
        let rows = sqlx::query_as::<_, CommentRow>(&sql)
            .bind(i64::from(article_id))
            .fetch_all(&mut *self.tx)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(ArticleComment::try_from).collect()
    }

    async fn insert(&mut self, comment: NewArticleComment) -> DomainResult<ArticleComment> {
        let (now, auditor) = self.audit_stamp();
        let sql = format!(
            "INSERT INTO article_comment \
                (article_id, content, created_at, created_by, modified_at, modified_by) \
             VALUES ($1, $2, $3, $4, $3, $4) \
             RETURNING {COMMENT_COLUMNS}"
        );
        let row = sqlx::query_as::<_, CommentRow>(&sql)
            .bind(i64::from(comment.article_id))
            .bind(comment.content.as_str())
            .bind(now)
            .bind(auditor)
            .fetch_one(&mut *self.tx)
            .await
            .map_err(map_sqlx)?;

        ArticleComment::try_from(row)
    }

    async fn delete_by_id(&mut self, id: ArticleCommentId) -> DomainResult<()> {
        sqlx::query("DELETE FROM article_comment WHERE id = $1")
            .bind(i64::from(id))
            .execute(&mut *self.tx)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }
}
