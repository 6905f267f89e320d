use axum::http::StatusCode;

use crate::error::AppError;

/// Handler for `GET /healthz`: liveness check.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Map the outcome of a dependency probe onto a readiness response.
///
/// Services call this from their own `/readyz` handler after pinging whatever they depend on.
pub fn readiness<E: std::fmt::Display>(probe: Result<(), E>) -> Result<StatusCode, AppError> {
    probe.map(|()| StatusCode::OK).map_err(|e| {
        tracing::warn!(error = %e, "readiness probe failed");
        AppError::Unavailable
    })
}
