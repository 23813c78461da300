// src/domain/user/mod.rs
pub mod entity;
pub mod value_objects;

pub use entity::UserAccount;
pub use value_objects::{LoginId, UserAccountId};
