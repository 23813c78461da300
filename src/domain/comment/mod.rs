// src/domain/comment/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{ArticleComment, NewArticleComment};
pub use repository::ArticleCommentRepository;
pub use value_objects::{ArticleCommentId, CommentContent};
