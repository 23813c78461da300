// src/domain/mod.rs
pub mod article;
pub mod auditing;
pub mod comment;
pub mod errors;
pub mod pagination;
pub mod store;
pub mod user;
