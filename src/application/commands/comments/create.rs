// src/application/commands/comments/create.rs
use super::ArticleCommentCommandService;
use crate::{
    application::{dto::ArticleCommentDto, error::ApplicationResult, transaction::finish},
    domain::{
        comment::NewArticleComment,
        store::{BoardSession, TransactionMode},
    },
};

impl ArticleCommentCommandService {
    /// Looks the owning article up by the id carried in `dto`, then stores the comment.
    ///
    /// Returns `None` when the article does not exist; nothing is written in that case.
    pub async fn save_article_comment(
        &self,
        dto: ArticleCommentDto,
    ) -> ApplicationResult<Option<ArticleCommentDto>> {
        let new_comment = dto.into_new_comment()?;

        let mut session = self.store.begin(TransactionMode::ReadWrite).await?;
        let result = insert_for_existing_article(session.as_mut(), new_comment).await;
        finish(session, result).await
    }
}

async fn insert_for_existing_article(
    session: &mut dyn BoardSession,
    new_comment: NewArticleComment,
) -> ApplicationResult<Option<ArticleCommentDto>> {
    let article_id = new_comment.article_id;
    if session.articles().find_by_id(article_id).await?.is_none() {
        tracing::warn!(%article_id, "comment save failed: article not found");
        return Ok(None);
    }

    let saved = session.comments().insert(new_comment).await?;
    Ok(Some(saved.into()))
}
