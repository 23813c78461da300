// src/infrastructure/repositories/postgres_store.rs
use super::map_sqlx;
use crate::application::ports::{auditor::AuditorProvider, time::Clock};
use crate::domain::article::ArticleRepository;
use crate::domain::comment::ArticleCommentRepository;
use crate::domain::errors::DomainResult;
use crate::domain::store::{BoardSession, BoardStore, TransactionMode};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, Transaction};
use std::sync::Arc;

/// Opens Postgres transactions and hands them out as [`BoardSession`]s.
#[derive(Clone)]
pub struct PostgresBoardStore {
    pool: PgPool,
    clock: Arc<dyn Clock>,
    auditor: Arc<dyn AuditorProvider>,
}

impl PostgresBoardStore {
    pub fn new(pool: PgPool, clock: Arc<dyn Clock>, auditor: Arc<dyn AuditorProvider>) -> Self {
        Self {
            pool,
            clock,
            auditor,
        }
    }
}

#[async_trait]
impl BoardStore for PostgresBoardStore {
    async fn begin(&self, mode: TransactionMode) -> DomainResult<Box<dyn BoardSession>> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        if mode == TransactionMode::ReadOnly {
            sqlx::query("SET TRANSACTION READ ONLY")
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx)?;
        }

        Ok(Box::new(PostgresSession {
            tx,
            clock: Arc::clone(&self.clock),
            auditor: Arc::clone(&self.auditor),
        }))
    }
}

/// One open transaction. Implements both repositories so the session can
/// hand itself out from `articles()` and `comments()`.
pub struct PostgresSession {
    pub(super) tx: Transaction<'static, Postgres>,
    clock: Arc<dyn Clock>,
    auditor: Arc<dyn AuditorProvider>,
}

impl PostgresSession {
    /// Timestamp and auditor name for the audit columns of the current write.
    pub(super) fn audit_stamp(&self) -> (DateTime<Utc>, String) {
        (self.clock.now(), self.auditor.current_auditor())
    }
}

#[async_trait]
impl BoardSession for PostgresSession {
    fn articles(&mut self) -> &mut dyn ArticleRepository {
        self
    }

    fn comments(&mut self) -> &mut dyn ArticleCommentRepository {
        self
    }

    async fn commit(self: Box<Self>) -> DomainResult<()> {
        let PostgresSession { tx, .. } = *self;
        tx.commit().await.map_err(map_sqlx)
    }

    async fn rollback(self: Box<Self>) -> DomainResult<()> {
        let PostgresSession { tx, .. } = *self;
        tx.rollback().await.map_err(map_sqlx)
    }
}
