// src/domain/article/mod.rs
pub mod entity;
pub mod repository;
pub mod search;
pub mod value_objects;

pub use entity::{Article, NewArticle};
pub use repository::ArticleRepository;
pub use search::SearchType;
pub use value_objects::{ArticleContent, ArticleId, ArticleTitle, Hashtag};
