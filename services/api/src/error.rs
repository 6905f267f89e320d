use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// API service error variants.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid id")]
    InvalidId,
    #[error("invalid request body")]
    InvalidBody,
    #[error("User ID is required.")]
    MissingEmail,
    #[error("User has already applied for a job.")]
    AlreadyApplied,
    #[error("An error occurred. Please try again later.")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidId => "INVALID_ID",
            Self::InvalidBody => "INVALID_BODY",
            Self::MissingEmail => "MISSING_EMAIL",
            Self::AlreadyApplied => "ALREADY_APPLIED",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(reason = %rejection.body_text(), "rejected request body");
        Self::InvalidBody
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidId | Self::InvalidBody | Self::MissingEmail | Self::AlreadyApplied => {
                StatusCode::BAD_REQUEST
            }
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %format!("{e:#}"), kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
