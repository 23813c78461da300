// src/application/queries/comments/list.rs
use super::ArticleCommentQueryService;
use crate::{
    application::{dto::ArticleCommentDto, error::ApplicationResult, transaction::finish},
    domain::{article::ArticleId, store::TransactionMode},
};

impl ArticleCommentQueryService {
    pub async fn search_article_comments(
        &self,
        article_id: i64,
    ) -> ApplicationResult<Vec<ArticleCommentDto>> {
        let mut session = self.store.begin(TransactionMode::ReadOnly).await?;
        let result = session
            .comments()
            .find_by_article_id(ArticleId(article_id))
            .await
            .map(|comments| comments.into_iter().map(ArticleCommentDto::from).collect())
            .map_err(Into::into);
        finish(session, result).await
    }
}
