//! Time-bounded repository calls.

use std::future::Future;
use std::time::Duration;

use crate::ports::StorageError;

/// Runs a storage operation, failing with `StorageError::Timeout` once
/// `limit` elapses. The operation is dropped at that point.
pub(crate) async fn with_timeout<T, F>(limit: Duration, op: F) -> Result<T, StorageError>
where
    F: Future<Output = Result<T, StorageError>>,
{
    tokio::time::timeout(limit, op)
        .await
        .unwrap_or_else(|_| Err(StorageError::Timeout(limit)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn completed_operation_passes_through() {
        let result = with_timeout(Duration::from_secs(1), async { Ok::<_, StorageError>(7) }).await;
        assert_eq!(result, Ok(7));
    }

    #[tokio::test]
    async fn operation_error_passes_through() {
        let result: Result<(), _> = with_timeout(Duration::from_secs(1), async {
            Err(StorageError::Database("locked".to_string()))
        })
        .await;
        assert_eq!(result, Err(StorageError::Database("locked".to_string())));
    }

    #[tokio::test]
    async fn stalled_operation_times_out() {
        let limit = Duration::from_millis(20);
        let result: Result<(), _> = with_timeout(limit, async {
            tokio::time::sleep(Duration::from_secs(10)).await;
            Ok(())
        })
        .await;
        assert_eq!(result, Err(StorageError::Timeout(limit)));
    }
}
