// src/application/queries/articles/mod.rs
mod get_by_id;
mod list;
mod search;
mod service;
mod stats;

pub use service::ArticleQueryService;
