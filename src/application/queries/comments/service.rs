// src/application/queries/comments/service.rs
use std::sync::Arc;

use crate::domain::store::BoardStore;

pub struct ArticleCommentQueryService {
    pub(super) store: Arc<dyn BoardStore>,
}

impl ArticleCommentQueryService {
    pub fn new(store: Arc<dyn BoardStore>) -> Self {
        Self { store }
    }
}
