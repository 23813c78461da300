// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::domain::store::BoardStore;

/// Write side of the article service. Every call runs in its own read-write session.
pub struct ArticleCommandService {
    pub(super) store: Arc<dyn BoardStore>,
}

impl ArticleCommandService {
    pub fn new(store: Arc<dyn BoardStore>) -> Self {
        Self { store }
    }
}
