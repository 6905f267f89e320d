use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Common application error variants shared by middleware and probes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("forbidden access")]
    Unauthorized,
    #[error("not found")]
    NotFound,
    #[error("service unavailable")]
    Unavailable,
}

impl AppError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",
            Self::NotFound => "NOT_FOUND",
            Self::Unavailable => "UNAVAILABLE",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
        };
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}

/// Fallback handler for unmatched routes.
pub async fn not_found() -> AppError {
    AppError::NotFound
}
