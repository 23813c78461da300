// src/application/dto/articles.rs
use crate::domain::article::{Article, ArticleContent, ArticleTitle, Hashtag, NewArticle};
use crate::domain::errors::DomainResult;
use crate::domain::user::UserAccountId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ArticleCommentDto, UserAccountDto};

/// Flat article record crossing the service boundary. `id` and the audit
/// fields are empty for an article that has not been saved yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleDto {
    #[serde(default)]
    pub id: Option<i64>,
    pub user_account: UserAccountDto,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub hashtag: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub modified_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub modified_by: Option<String>,
}

impl ArticleDto {
    pub fn new(
        user_account: UserAccountDto,
        title: impl Into<String>,
        content: impl Into<String>,
        hashtag: Option<String>,
    ) -> Self {
        Self {
            id: None,
            user_account,
            title: title.into(),
            content: content.into(),
            hashtag,
            created_at: None,
            created_by: None,
            modified_at: None,
            modified_by: None,
        }
    }

    pub fn into_new_article(self) -> DomainResult<NewArticle> {
        Ok(NewArticle {
            user_account_id: UserAccountId::new(self.user_account.id)?,
            title: ArticleTitle::new(self.title)?,
            content: ArticleContent::new(self.content)?,
            hashtag: Hashtag::parse_optional(self.hashtag)?,
        })
    }
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: Some(article.id.into()),
            user_account: article.user_account.into(),
            title: article.title.into_inner(),
            content: article.content.into_inner(),
            hashtag: article.hashtag.map(Hashtag::into_inner),
            created_at: Some(article.auditing.created_at),
            created_by: Some(article.auditing.created_by),
            modified_at: Some(article.auditing.modified_at),
            modified_by: Some(article.auditing.modified_by),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleWithCommentsDto {
    pub id: i64,
    pub user_account: UserAccountDto,
    pub article_comments: Vec<ArticleCommentDto>,
    pub title: String,
    pub content: String,
    pub hashtag: Option<String>,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub modified_at: DateTime<Utc>,
    pub modified_by: String,
}

impl ArticleWithCommentsDto {
    pub fn from_parts(article: Article, article_comments: Vec<ArticleCommentDto>) -> Self {
        Self {
            id: article.id.into(),
            user_account: article.user_account.into(),
            article_comments,
            title: article.title.into_inner(),
            content: article.content.into_inner(),
            hashtag: article.hashtag.map(Hashtag::into_inner),
            created_at: article.auditing.created_at,
            created_by: article.auditing.created_by,
            modified_at: article.auditing.modified_at,
            modified_by: article.auditing.modified_by,
        }
    }
}

/// New values for an existing article. Missing title or content keeps the
/// current value; `hashtag` always replaces it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleUpdateDto {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub hashtag: Option<String>,
}

impl ArticleUpdateDto {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        hashtag: Option<String>,
    ) -> Self {
        Self {
            title: Some(title.into()),
            content: Some(content.into()),
            hashtag,
        }
    }
}
