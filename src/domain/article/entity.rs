// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleContent, ArticleId, ArticleTitle, Hashtag};
use crate::domain::auditing::AuditingFields;
use crate::domain::user::{UserAccount, UserAccountId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    pub user_account: UserAccount,
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub hashtag: Option<Hashtag>,
    pub auditing: AuditingFields,
}

impl Article {
    /// Assigns new values in place. Title and content are kept when not given;
    /// the hashtag is always replaced, so `None` clears it.
    pub fn revise(
        &mut self,
        title: Option<ArticleTitle>,
        content: Option<ArticleContent>,
        hashtag: Option<Hashtag>,
    ) {
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(content) = content {
            self.content = content;
        }
        self.hashtag = hashtag;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArticle {
    pub user_account_id: UserAccountId,
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub hashtag: Option<Hashtag>,
}
