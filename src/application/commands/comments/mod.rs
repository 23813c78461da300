// src/application/commands/comments/mod.rs
mod create;
mod delete;
mod service;

pub use service::ArticleCommentCommandService;
