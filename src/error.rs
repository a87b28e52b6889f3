use std::time::Duration;

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::{DbErr, SqlErr};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{entity} {id} not found: no rows in result set")]
    NotFound { entity: &'static str, id: i64 },

    #[error("constraint violation: {0}")]
    Constraint(String),

    #[error("{operation} timed out after {}ms", .after.as_millis())]
    Timeout {
        operation: &'static str,
        after: Duration,
    },

    #[error("store error: {0}")]
    Store(DbErr),
}

/// Coarse classification callers branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Store,
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(message.into())
    }

    pub fn not_found(entity: &'static str, id: i64) -> Self {
        AppError::NotFound { entity, id }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Validation(_) => ErrorKind::Validation,
            AppError::NotFound { .. } => ErrorKind::NotFound,
            AppError::Constraint(_) | AppError::Timeout { .. } | AppError::Store(_) => {
                ErrorKind::Store
            }
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Store => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => AppError::Constraint(format!(
                "referenced order or product does not exist ({msg})"
            )),
            Some(SqlErr::UniqueConstraintViolation(msg)) => {
                AppError::Constraint(format!("duplicate row ({msg})"))
            }
            _ => AppError::Store(err),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

/// JSON body of every error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self.kind() {
            ErrorKind::Store => tracing::warn!(error = ?self, "request failed"),
            _ => tracing::debug!(error = %self, "request rejected"),
        }

        (status, axum::Json(ErrorBody::new(self.to_string()))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_map_to_statuses() {
        assert_eq!(
            AppError::validation("name is required").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::not_found("product", 999).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Constraint("fk".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Timeout {
                operation: "list products",
                after: Duration::from_millis(10),
            }
            .kind(),
            ErrorKind::Store
        );
    }

    #[test]
    fn not_found_message_mentions_missing_rows() {
        let err = AppError::not_found("product", 999);
        assert_eq!(err.to_string(), "product 999 not found: no rows in result set");
    }

    #[test]
    fn store_side_errors_all_answer_500() {
        let errors = [
            AppError::Constraint("fk".into()),
            AppError::Timeout {
                operation: "create order",
                after: Duration::from_millis(300),
            },
            AppError::Store(DbErr::Custom("disk I/O error".into())),
        ];
        for err in errors {
            assert_eq!(err.kind(), ErrorKind::Store);
            assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn generic_db_errors_stay_store_errors() {
        let err: AppError = DbErr::Custom("disk I/O error".into()).into();
        assert!(matches!(err, AppError::Store(_)));
        assert_eq!(err.kind(), ErrorKind::Store);
    }
}
