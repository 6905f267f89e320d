use axum::{extract::State, http::StatusCode};

use skyview_core::{error::AppError, health::readiness};

use crate::domain::repository::Store;
use crate::state::AppState;

/// Handler for `GET /`.
pub async fn root() -> &'static str {
    "Hello World!"
}

/// Handler for `GET /readyz`: ready once the store answers a ping.
pub async fn readyz<S: Store>(State(state): State<AppState<S>>) -> Result<StatusCode, AppError> {
    readiness(state.store.ping().await)
}
