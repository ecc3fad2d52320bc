use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::db::StorageError;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Client supplied data failed required-field or type checks
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    /// Uniqueness constraint violated; carries the fixed per-entity message
    #[error("{0}")]
    Conflict(String),

    /// Any other storage failure; carries the driver message verbatim
    #[error("{0}")]
    Storage(String),

    /// Begin/commit failure on the HR composite create
    #[error("{0}")]
    Transaction(String),

    #[error("Database connection is nil")]
    NoConnection,
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Storage(_) | AppError::Transaction(_) | AppError::NoConnection => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Classify a storage failure, replacing a uniqueness violation with `conflict`
    pub fn storage(err: impl Into<StorageError>, conflict: &str) -> Self {
        match err.into() {
            StorageError::UniqueViolation(detail) => {
                tracing::debug!("Unique constraint violated: {}", detail);
                AppError::Conflict(conflict.to_string())
            }
            other => other.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }

        let body = ErrorResponse {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Unavailable => AppError::NoConnection,
            StorageError::UniqueViolation(msg) => AppError::Conflict(msg),
            StorageError::Driver(msg) => AppError::Storage(msg),
        }
    }
}

impl From<sea_orm::DbErr> for AppError {
    fn from(err: sea_orm::DbErr) -> Self {
        StorageError::from(err).into()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(format!("Invalid input: {}", rejection.body_text()))
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Validation(format!("Invalid input: {}", rejection.body_text()))
    }
}

/// Result type alias for application
pub type AppResult<T> = Result<T, AppError>;

/// Helper trait for converting Option to AppError::NotFound
pub trait OptionExt<T> {
    fn ok_or_not_found(self, msg: impl Into<String>) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, msg: impl Into<String>) -> AppResult<T> {
        self.ok_or_else(|| AppError::NotFound(msg.into()))
    }
}

/// Helper trait replacing a uniqueness violation with a fixed conflict message
pub trait ConflictExt<T> {
    fn or_conflict(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ConflictExt<T> for Result<T, E>
where
    E: Into<StorageError>,
{
    fn or_conflict(self, msg: &str) -> AppResult<T> {
        self.map_err(|err| AppError::storage(err, msg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::DbErr;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_error_status() {
        assert_eq!(
            AppError::Validation("x".into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NotFound("Employee not found".into()).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Conflict("dup".into()).into_response().status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::Transaction("Failed to commit transaction: x".into())
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_error_body_shape() {
        let response = AppError::Storage("sql: connection is already closed".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "sql: connection is already closed"})
        );

        let response = AppError::NoConnection.into_response();
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "Database connection is nil"})
        );
    }

    #[test]
    fn test_option_ext() {
        let opt: Option<i32> = None;
        let result = opt.ok_or_not_found("Item not found");
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_conflict_ext() {
        let dup: Result<(), StorageError> =
            Err(StorageError::UniqueViolation("Duplicate entry 'HR' for key 'dept_name'".into()));
        match dup.or_conflict("Department name already exists") {
            Err(AppError::Conflict(msg)) => assert_eq!(msg, "Department name already exists"),
            other => panic!("unexpected: {:?}", other),
        }

        let down: Result<(), DbErr> = Err(DbErr::Custom("driver: bad connection".into()));
        match down.or_conflict("Department name already exists") {
            Err(AppError::Storage(msg)) => assert!(msg.contains("driver: bad connection")),
            other => panic!("unexpected: {:?}", other),
        }

        let gone: Result<(), StorageError> = Err(StorageError::Unavailable);
        assert!(matches!(
            gone.or_conflict("Department name already exists"),
            Err(AppError::NoConnection)
        ));
    }
}
