// src/application/commands/comments/service.rs
use std::sync::Arc;

use crate::domain::store::BoardStore;

pub struct ArticleCommentCommandService {
    pub(super) store: Arc<dyn BoardStore>,
}

impl ArticleCommentCommandService {
    pub fn new(store: Arc<dyn BoardStore>) -> Self {
        Self { store }
    }
}
