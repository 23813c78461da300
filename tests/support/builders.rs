// tests/support/builders.rs
use chrono::{DateTime, Duration, Utc};

use project_board::application::dto::{ArticleDto, UserAccountDto};
use project_board::domain::article::*;
use project_board::domain::auditing::AuditingFields;
use project_board::domain::comment::{ArticleComment, ArticleCommentId, CommentContent};
use project_board::domain::user::{LoginId, UserAccount, UserAccountId};

use super::mocks::{TEST_AUDITOR, fixed_now};

pub fn user_account(id: i64, login: &str) -> UserAccount {
    UserAccount {
        id: UserAccountId::new(id).unwrap(),
        user_id: LoginId::new(login).unwrap(),
        user_password: "password".into(),
        email: Some(format!("{login}@mail.com")),
        nickname: Some(login.to_uppercase()),
        memo: Some("memo".into()),
        auditing: AuditingFields::created(fixed_now(), login),
    }
}

pub fn user_account_dto() -> UserAccountDto {
    user_account(1, TEST_AUDITOR).into()
}

pub fn article_dto(title: &str, content: &str, hashtag: Option<&str>) -> ArticleDto {
    ArticleDto::new(
        user_account_dto(),
        title,
        content,
        hashtag.map(Into::into),
    )
}

pub struct ArticleBuilder {
    id: i64,
    account: UserAccount,
    title: String,
    content: String,
    hashtag: Option<String>,
    created_at: DateTime<Utc>,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            account: user_account(1, TEST_AUDITOR),
            title: "title".into(),
            content: "content".into(),
            hashtag: Some("#java".into()),
            created_at: fixed_now(),
        }
    }

    /// `fixed_now()` からの経過分で作成日時を決める
    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self.created_at = fixed_now() + Duration::minutes(id);
        self
    }

    pub fn account(mut self, account: UserAccount) -> Self {
        self.account = account;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn hashtag(mut self, hashtag: Option<&str>) -> Self {
        self.hashtag = hashtag.map(Into::into);
        self
    }

    pub fn build(self) -> Article {
        Article {
            id: ArticleId::new(self.id).unwrap(),
            user_account: self.account,
            title: ArticleTitle::new(self.title).unwrap(),
            content: ArticleContent::new(self.content).unwrap(),
            hashtag: Hashtag::parse_optional(self.hashtag).unwrap(),
            auditing: AuditingFields::created(self.created_at, TEST_AUDITOR),
        }
    }
}

pub fn comment(id: i64, article_id: i64, content: &str, minutes: i64) -> ArticleComment {
    ArticleComment {
        id: ArticleCommentId::new(id).unwrap(),
        article_id: ArticleId::new(article_id).unwrap(),
        content: CommentContent::new(content).unwrap(),
        auditing: AuditingFields::created(fixed_now() + Duration::minutes(minutes), TEST_AUDITOR),
    }
}
