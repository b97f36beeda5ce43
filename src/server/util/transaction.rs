use sea_orm::DatabaseTransaction;

use crate::server::error::AppError;

/// Commits `txn` if `result` is `Ok`, otherwise rolls it back and returns the error.
///
/// A failed rollback is logged; the operation's error is still returned since the
/// transaction is discarded when the connection drops it.
///
/// # Arguments
/// - `txn` - Open transaction the work in `result` ran on
/// - `result` - Outcome of that work
///
/// # Returns
/// - `Ok(T)` - Work succeeded and the commit went through
/// - `Err(AppError)` - Work or commit failed; nothing was persisted
pub async fn finish<T>(
    txn: DatabaseTransaction,
    result: Result<T, AppError>,
) -> Result<T, AppError> {
    match result {
        Ok(value) => {
            txn.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = txn.rollback().await {
                tracing::error!("Failed to roll back transaction: {}", rollback_err);
            }
            Err(err)
        }
    }
}
