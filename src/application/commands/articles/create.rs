// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult, transaction::finish},
    domain::store::TransactionMode,
};

impl ArticleCommandService {
    /// Persists a new article built from `dto`. `dto.id` and its audit fields are ignored.
    pub async fn save_article(&self, dto: ArticleDto) -> ApplicationResult<ArticleDto> {
        let new_article = dto.into_new_article()?;

        let mut session = self.store.begin(TransactionMode::ReadWrite).await?;
        let result = session
            .articles()
            .insert(new_article)
            .await
            .map(ArticleDto::from)
            .map_err(Into::into);
        let saved = finish(session, result).await?;

        tracing::debug!(article_id = ?saved.id, "article saved");
        Ok(saved)
    }
}
