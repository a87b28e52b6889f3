use std::{future::Future, time::Duration};

use crate::error::{AppError, AppResult};

pub mod order_repository;
pub mod product_repository;

pub use order_repository::OrderRepository;
pub use product_repository::ProductRepository;

/// Runs a store operation under a deadline. When the deadline passes the
/// future is dropped, which also drops (and rolls back) any open transaction.
pub(crate) async fn with_deadline<T, F>(
    deadline: Duration,
    operation: &'static str,
    fut: F,
) -> AppResult<T>
where
    F: Future<Output = AppResult<T>>,
{
    match tokio::time::timeout(deadline, fut).await {
        Ok(result) => result,
        Err(_) => Err(AppError::Timeout {
            operation,
            after: deadline,
        }),
    }
}
