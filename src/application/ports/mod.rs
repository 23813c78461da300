// src/application/ports/mod.rs
pub mod auditor;
pub mod time;
