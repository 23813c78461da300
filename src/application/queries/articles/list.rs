// src/application/queries/articles/list.rs
use super::ArticleQueryService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult, transaction::finish},
    domain::{
        pagination::{Page, PageRequest},
        store::TransactionMode,
    },
};

impl ArticleQueryService {
    pub async fn list_articles(
        &self,
        pageable: &PageRequest,
    ) -> ApplicationResult<Page<ArticleDto>> {
        let mut session = self.store.begin(TransactionMode::ReadOnly).await?;
        let result = session
            .articles()
            .find_all(pageable)
            .await
            .map(|page| page.map(ArticleDto::from))
            .map_err(Into::into);
        finish(session, result).await
    }
}
