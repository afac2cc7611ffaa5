use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] database::DbError),
    #[error("View error: {0}")]
    View(#[from] table_view::ViewError),
    #[error("{0}")]
    Core(#[from] core_types::CoreError),
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Converts our custom `AppError` into an HTTP response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Database(database::DbError::DataUnavailable(reason)) => {
                tracing::warn!(%reason, "Data source unavailable.");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Data is temporarily unavailable".to_string(),
                )
            }
            AppError::Database(db_err) => {
                tracing::error!(error = ?db_err, "Database error.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal database error occurred".to_string(),
                )
            }
            AppError::View(view_err) => (StatusCode::BAD_REQUEST, view_err.to_string()),
            AppError::Core(core_types::CoreError::UnknownQuarter(quarter)) => (
                StatusCode::NOT_FOUND,
                format!("Unknown quarter: {quarter}"),
            ),
            AppError::Core(core_err) => (StatusCode::BAD_REQUEST, core_err.to_string()),
            AppError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
