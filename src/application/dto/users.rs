// src/application/dto/users.rs
use crate::domain::user::UserAccount;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccountDto {
    pub id: i64,
    pub user_id: String,
    #[serde(default, skip_serializing)]
    pub user_password: String,
    pub email: Option<String>,
    pub nickname: Option<String>,
    pub memo: Option<String>,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub modified_at: DateTime<Utc>,
    pub modified_by: String,
}

impl UserAccountDto {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        user_id: impl Into<String>,
        user_password: impl Into<String>,
        email: Option<String>,
        nickname: Option<String>,
        memo: Option<String>,
        created_at: DateTime<Utc>,
        created_by: impl Into<String>,
        modified_at: DateTime<Utc>,
        modified_by: impl Into<String>,
    ) -> Self {
        Self {
            id,
            user_id: user_id.into(),
            user_password: user_password.into(),
            email,
            nickname,
            memo,
            created_at,
            created_by: created_by.into(),
            modified_at,
            modified_by: modified_by.into(),
        }
    }
}

impl From<UserAccount> for UserAccountDto {
    fn from(account: UserAccount) -> Self {
        Self {
            id: account.id.into(),
            user_id: account.user_id.into_inner(),
            user_password: account.user_password,
            email: account.email,
            nickname: account.nickname,
            memo: account.memo,
            created_at: account.auditing.created_at,
            created_by: account.auditing.created_by,
            modified_at: account.auditing.modified_at,
            modified_by: account.auditing.modified_by,
        }
    }
}
