// src/infrastructure/repositories/error.rs
use crate::domain::errors::DomainError;

const CNT_USER_ACCOUNT_USER_ID: &str = "user_account_user_id_key";
const CNT_ARTICLE_USER_ACCOUNT: &str = "article_user_account_id_fkey";
const CNT_COMMENT_ARTICLE: &str = "article_comment_article_id_fkey";
const CNT_ARTICLE_TITLE_CHECK: &str = "article_title_not_blank_chk";
const CNT_ARTICLE_CONTENT_CHECK: &str = "article_content_not_blank_chk";
const CNT_COMMENT_CONTENT_CHECK: &str = "article_comment_content_not_blank_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_USER_ACCOUNT_USER_ID => {
                        DomainError::Conflict("user id already exists".into())
                    }
                    CNT_ARTICLE_USER_ACCOUNT => {
                        DomainError::NotFound("user account not found".into())
                    }
                    CNT_COMMENT_ARTICLE => DomainError::NotFound("article not found".into()),
                    CNT_ARTICLE_TITLE_CHECK => {
                        DomainError::Validation("title cannot be empty".into())
                    }
                    CNT_ARTICLE_CONTENT_CHECK | CNT_COMMENT_CONTENT_CHECK => {
                        DomainError::Validation("content cannot be empty".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    "22001" => {
                        return DomainError::Validation("value too long for column".into());
                    }
                    "25006" => {
                        return DomainError::Persistence(
                            "write attempted in a read-only transaction".into(),
                        );
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
