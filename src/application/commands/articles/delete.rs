// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::{error::ApplicationResult, transaction::finish},
    domain::{article::ArticleId, store::TransactionMode},
};

impl ArticleCommandService {
    /// Removes the article and, through the foreign key, its comments.
    pub async fn delete_article(&self, article_id: i64) -> ApplicationResult<()> {
        let mut session = self.store.begin(TransactionMode::ReadWrite).await?;
        let result = session
            .articles()
            .delete_by_id(ArticleId(article_id))
            .await
            .map_err(Into::into);
        finish(session, result).await
    }
}
