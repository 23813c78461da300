// src/domain/user/entity.rs
use crate::domain::auditing::AuditingFields;
use crate::domain::user::value_objects::{LoginId, UserAccountId};

/// The account an article is written under. Loaded together with the article row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAccount {
    pub id: UserAccountId,
    pub user_id: LoginId,
    pub user_password: String,
    pub email: Option<String>,
    pub nickname: Option<String>,
    pub memo: Option<String>,
    pub auditing: AuditingFields,
}
