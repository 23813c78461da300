// src/application/queries/articles/service.rs
use std::sync::Arc;

use crate::domain::store::BoardStore;

/// Read side of the article service. Every call runs in its own read-only session.
pub struct ArticleQueryService {
    pub(super) store: Arc<dyn BoardStore>,
}

impl ArticleQueryService {
    pub fn new(store: Arc<dyn BoardStore>) -> Self {
        Self { store }
    }
}
