// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{articles::ArticleCommandService, comments::ArticleCommentCommandService},
        queries::{articles::ArticleQueryService, comments::ArticleCommentQueryService},
    },
    domain::store::BoardStore,
};

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub comment_commands: Arc<ArticleCommentCommandService>,
    pub comment_queries: Arc<ArticleCommentQueryService>,
}

impl ApplicationServices {
    pub fn new(store: Arc<dyn BoardStore>) -> Self {
        Self {
            article_commands: Arc::new(ArticleCommandService::new(Arc::clone(&store))),
            article_queries: Arc::new(ArticleQueryService::new(Arc::clone(&store))),
            comment_commands: Arc::new(ArticleCommentCommandService::new(Arc::clone(&store))),
            comment_queries: Arc::new(ArticleCommentQueryService::new(store)),
        }
    }
}
