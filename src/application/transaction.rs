// src/application/transaction.rs
use crate::application::error::ApplicationResult;
use crate::domain::store::BoardSession;

/// Ends a session at the service boundary: commit on success, roll back on error.
///
/// A failed rollback is logged and the original error is returned.
pub(crate) async fn finish<T>(
    session: Box<dyn BoardSession>,
    result: ApplicationResult<T>,
) -> ApplicationResult<T> {
    match result {
        Ok(value) => {
            session.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = session.rollback().await {
                tracing::warn!(error = %rollback_err, "rollback failed");
            }
            Err(err)
        }
    }
}
