// src/application/mod.rs
pub mod commands;
pub mod dto;
pub mod error;
pub mod ports;
pub mod queries;
pub mod services;
mod transaction;

pub use error::{ApplicationError, ApplicationResult};
