use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application-level errors
///
/// Note: an unmatched or empty recommendation query is NOT an error — the
/// recommender returns an empty list for those. Only artifact provisioning
/// problems and genuine server faults live here, and artifact failures are
/// fatal at startup rather than surfacing per request.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Artifact error: {0}")]
    Artifact(String),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Artifact(_) | AppError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::HttpClient(_) => StatusCode::BAD_GATEWAY,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
