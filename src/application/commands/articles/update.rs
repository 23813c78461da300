// src/application/commands/articles/update.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleUpdateDto, error::ApplicationResult, transaction::finish},
    domain::{
        article::{ArticleContent, ArticleId, ArticleRepository, ArticleTitle, Hashtag},
        store::TransactionMode,
    },
};

struct Revision {
    title: Option<ArticleTitle>,
    content: Option<ArticleContent>,
    hashtag: Option<Hashtag>,
}

impl ArticleCommandService {
    /// Best-effort update: an unknown `article_id` is logged and otherwise ignored.
    pub async fn update_article(
        &self,
        article_id: i64,
        dto: ArticleUpdateDto,
    ) -> ApplicationResult<()> {
        let revision = Revision {
            title: dto.title.map(ArticleTitle::new).transpose()?,
            content: dto.content.map(ArticleContent::new).transpose()?,
            hashtag: Hashtag::parse_optional(dto.hashtag)?,
        };

        let mut session = self.store.begin(TransactionMode::ReadWrite).await?;
        let result = apply_revision(session.articles(), ArticleId(article_id), revision).await;
        finish(session, result).await
    }
}

async fn apply_revision(
    repo: &mut dyn ArticleRepository,
    id: ArticleId,
    revision: Revision,
) -> ApplicationResult<()> {
    let Some(mut article) = repo.find_by_id(id).await? else {
        tracing::warn!(article_id = %id, "article update failed: article not found");
        return Ok(());
    };

    article.revise(revision.title, revision.content, revision.hashtag);
    repo.update(&article).await?;
    tracing::debug!(article_id = %id, "article updated");
    Ok(())
}
