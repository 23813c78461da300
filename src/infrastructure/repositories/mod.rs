// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_article;
mod postgres_comment;
mod postgres_store;

pub use error::map_sqlx;
pub use postgres_store::{PostgresBoardStore, PostgresSession};
