// src/application/queries/articles/stats.rs
use super::ArticleQueryService;
use crate::{
    application::{error::ApplicationResult, transaction::finish},
    domain::store::TransactionMode,
};

impl ArticleQueryService {
    pub async fn get_article_count(&self) -> ApplicationResult<u64> {
        let mut session = self.store.begin(TransactionMode::ReadOnly).await?;
        let result = session.articles().count().await.map_err(Into::into);
        finish(session, result).await
    }

    /// Distinct hashtags in use, in the order the store reports them.
    pub async fn get_hashtags(&self) -> ApplicationResult<Vec<String>> {
        let mut session = self.store.begin(TransactionMode::ReadOnly).await?;
        let result = session
            .articles()
            .find_all_distinct_hashtags()
            .await
            .map_err(Into::into);
        finish(session, result).await
    }
}
