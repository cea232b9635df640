use sea_orm::DatabaseTransaction;

use crate::server::error::AppError;

/// Commits `txn` when `result` is `Ok`, otherwise rolls it back.
///
/// Store errors raised while the batch was open are reported as
/// `AppError::TransactionErr`. Domain errors pass through unchanged.
///
/// # Arguments
/// - `txn` - The open transaction the batch ran in
/// - `result` - Outcome of the batch
///
/// # Returns
/// - `Ok(T)` - The batch succeeded and was committed
/// - `Err(AppError::TransactionErr)` - Commit failed, or a store error aborted the batch
/// - `Err(AppError)` - The batch was rejected and rolled back
pub async fn finish<T>(
    txn: DatabaseTransaction,
    result: Result<T, AppError>,
) -> Result<T, AppError> {
    match result {
        Ok(value) => {
            txn.commit().await.map_err(AppError::TransactionErr)?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = txn.rollback().await {
                tracing::warn!("Failed to roll back transaction: {}", rollback_err);
            }

            Err(match err {
                AppError::DbErr(db_err) => AppError::TransactionErr(db_err),
                other => other,
            })
        }
    }
}
