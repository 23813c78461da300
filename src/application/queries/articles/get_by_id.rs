// src/application/queries/articles/get_by_id.rs
use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleCommentDto, ArticleDto, ArticleWithCommentsDto},
        error::{ApplicationError, ApplicationResult},
        transaction::finish,
    },
    domain::{
        article::{Article, ArticleId, ArticleRepository},
        store::{BoardSession, TransactionMode},
    },
};

impl ArticleQueryService {
    /// Fetches one article together with its comments.
    pub async fn get_article(&self, article_id: i64) -> ApplicationResult<ArticleWithCommentsDto> {
        tracing::debug!(article_id, "loading article with comments");
        let mut session = self.store.begin(TransactionMode::ReadOnly).await?;
        let result = load_with_comments(session.as_mut(), ArticleId(article_id)).await;
        finish(session, result).await
    }

    /// Fetches one article without its comments.
    pub async fn search_article(&self, article_id: i64) -> ApplicationResult<ArticleDto> {
        let mut session = self.store.begin(TransactionMode::ReadOnly).await?;
        let result = load(session.articles(), ArticleId(article_id))
            .await
            .map(ArticleDto::from);
        finish(session, result).await
    }
}

async fn load(repo: &mut dyn ArticleRepository, id: ArticleId) -> ApplicationResult<Article> {
    repo.find_by_id(id)
        .await?
        .ok_or_else(|| ApplicationError::article_not_found(id))
}

async fn load_with_comments(
    session: &mut dyn BoardSession,
    id: ArticleId,
) -> ApplicationResult<ArticleWithCommentsDto> {
    let article = load(session.articles(), id).await?;
    let comments = session
        .comments()
        .find_by_article_id(id)
        .await?
        .into_iter()
        .map(ArticleCommentDto::from)
        .collect();
    Ok(ArticleWithCommentsDto::from_parts(article, comments))
}
