use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or malformed request input (body field or path parameter).
    #[error("{0}")]
    Validation(String),

    /// Read-path or connection failure. No structured recovery; the
    /// connection itself is returned to the pool by scope.
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// Write-path failure after rollback. `status` is the operation's
    /// failure message; the driver error text is surfaced to the caller.
    #[error("{status}")]
    WriteFailed {
        status: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

impl AppError {
    /// Tag a database failure with a write operation's failure message.
    /// Non-database errors pass through unchanged.
    pub fn on_write(self, status: &'static str) -> Self {
        match self {
            AppError::Database(source) => AppError::WriteFailed { status, source },
            other => other,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (code, body) = match self {
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                json!({ "status": "Invalid request", "error": msg }),
            ),
            AppError::Database(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": err.to_string() }),
            ),
            AppError::WriteFailed { status, source } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "status": status, "error": source.to_string() }),
            ),
        };
        (code, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn parts(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn validation_maps_to_400() {
        let (status, body) = parts(AppError::Validation("Item_Qty is required".to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], "Invalid request");
        assert_eq!(body["error"], "Item_Qty is required");
    }

    #[tokio::test]
    async fn read_failure_is_plain_500() {
        let (status, body) = parts(AppError::Database(sqlx::Error::PoolClosed)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.get("status").is_none());
        assert!(body["error"].as_str().is_some_and(|e| !e.is_empty()));
    }

    #[tokio::test]
    async fn write_failure_carries_operation_message_and_driver_text() {
        let err = AppError::Database(sqlx::Error::RowNotFound).on_write("Failed to add item");
        let (status, body) = parts(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["status"], "Failed to add item");
        assert!(body["error"].as_str().is_some_and(|e| !e.is_empty()));
    }

    #[test]
    fn on_write_leaves_validation_untouched() {
        let err = AppError::Validation("bad".to_string()).on_write("Failed to add item");
        assert!(matches!(err, AppError::Validation(_)));
    }
}
