// src/application/dto/mod.rs
pub mod articles;
pub mod comments;
pub mod users;

pub use articles::{ArticleDto, ArticleUpdateDto, ArticleWithCommentsDto};
pub use comments::ArticleCommentDto;
pub use users::UserAccountDto;
