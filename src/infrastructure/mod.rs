// src/infrastructure/mod.rs
pub mod auditor;
pub mod database;
pub mod repositories;
pub mod time;
