// src/application/commands/comments/delete.rs
use super::ArticleCommentCommandService;
use crate::{
    application::{error::ApplicationResult, transaction::finish},
    domain::{comment::ArticleCommentId, store::TransactionMode},
};

impl ArticleCommentCommandService {
    pub async fn delete_article_comment(&self, comment_id: i64) -> ApplicationResult<()> {
        let mut session = self.store.begin(TransactionMode::ReadWrite).await?;
        let result = session
            .comments()
            .delete_by_id(ArticleCommentId(comment_id))
            .await
            .map_err(Into::into);
        finish(session, result).await
    }
}
