// src/application/queries/articles/search.rs
use super::ArticleQueryService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult, transaction::finish},
    domain::{
        article::{ArticleRepository, SearchType},
        pagination::{Page, PageRequest},
        store::TransactionMode,
    },
};

fn has_text(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

impl ArticleQueryService {
    /// Keyword search on the field picked by `search_type`.
    ///
    /// A missing or blank keyword yields an empty page without opening a session.
    pub async fn search_articles(
        &self,
        search_type: SearchType,
        search_keyword: Option<&str>,
        pageable: &PageRequest,
    ) -> ApplicationResult<Page<ArticleDto>> {
        let Some(keyword) = has_text(search_keyword) else {
            tracing::debug!(%search_type, "blank search keyword, returning empty page");
            return Ok(Page::empty(pageable));
        };

        let mut session = self.store.begin(TransactionMode::ReadOnly).await?;
        let result = find_by_keyword(session.articles(), search_type, keyword, pageable).await;
        finish(session, result).await
    }

    /// Exact-match hashtag search. A missing or blank hashtag yields an empty
    /// page without opening a session.
    pub async fn search_articles_via_hashtag(
        &self,
        hashtag: Option<&str>,
        pageable: &PageRequest,
    ) -> ApplicationResult<Page<ArticleDto>> {
        let Some(hashtag) = has_text(hashtag) else {
            tracing::debug!("blank hashtag, returning empty page");
            return Ok(Page::empty(pageable));
        };

        let mut session = self.store.begin(TransactionMode::ReadOnly).await?;
        let result = session
            .articles()
            .find_by_hashtag(hashtag, pageable)
            .await
            .map(|page| page.map(ArticleDto::from))
            .map_err(Into::into);
        finish(session, result).await
    }
}

async fn find_by_keyword(
    repo: &mut dyn ArticleRepository,
    search_type: SearchType,
    keyword: &str,
    pageable: &PageRequest,
) -> ApplicationResult<Page<ArticleDto>> {
    let page = match search_type {
        SearchType::Title => repo.find_by_title_containing(keyword, pageable).await?,
        SearchType::Content => repo.find_by_content_containing(keyword, pageable).await?,
        SearchType::Id => repo.find_by_user_id_containing(keyword, pageable).await?,
        SearchType::Nickname => repo.find_by_nickname_containing(keyword, pageable).await?,
        SearchType::Hashtag => repo.find_by_hashtag(keyword, pageable).await?,
    };
    Ok(page.map(ArticleDto::from))
}
