// src/domain/article/repository.rs
use crate::domain::article::entity::{Article, NewArticle};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use crate::domain::pagination::{Page, PageRequest};
use async_trait::async_trait;

/// Article queries available inside an open [`BoardSession`](crate::domain::store::BoardSession).
///
/// Substring lookups are case-sensitive `contains` matches; the hashtag lookup is exact.
#[async_trait]
pub trait ArticleRepository: Send {
    async fn find_all(&mut self, pageable: &PageRequest) -> DomainResult<Page<Article>>;
    async fn find_by_title_containing(
        &mut self,
        title: &str,
        pageable: &PageRequest,
    ) -> DomainResult<Page<Article>>;
    async fn find_by_content_containing(
        &mut self,
        content: &str,
        pageable: &PageRequest,
    ) -> DomainResult<Page<Article>>;
    async fn find_by_user_id_containing(
        &mut self,
        user_id: &str,
        pageable: &PageRequest,
    ) -> DomainResult<Page<Article>>;
    async fn find_by_nickname_containing(
        &mut self,
        nickname: &str,
        pageable: &PageRequest,
    ) -> DomainResult<Page<Article>>;
    async fn find_by_hashtag(
        &mut self,
        hashtag: &str,
        pageable: &PageRequest,
    ) -> DomainResult<Page<Article>>;
    async fn find_by_id(&mut self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn find_all_distinct_hashtags(&mut self) -> DomainResult<Vec<String>>;
    async fn count(&mut self) -> DomainResult<u64>;
    async fn insert(&mut self, article: NewArticle) -> DomainResult<Article>;
    /// Writes title, content and hashtag back; the store refreshes the modified audit pair.
    async fn update(&mut self, article: &Article) -> DomainResult<Article>;
    /// Deleting an id that does not exist is not an error.
    async fn delete_by_id(&mut self, id: ArticleId) -> DomainResult<()>;
}
