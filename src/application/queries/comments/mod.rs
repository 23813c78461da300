// src/application/queries/comments/mod.rs
mod list;
mod service;

pub use service::ArticleCommentQueryService;
