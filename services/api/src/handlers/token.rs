use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::Serialize;
use serde_json::Value;

use crate::domain::repository::Store;
use crate::error::ApiError;
use crate::state::AppState;
use crate::usecase::token::IssueTokenUseCase;

// ── POST /jwt ────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

pub async fn create_token<S: Store>(
    State(state): State<AppState<S>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<TokenResponse>, ApiError> {
    let Json(payload) = payload?;
    let usecase = IssueTokenUseCase {
        jwt_secret: state.jwt_secret.as_str().to_owned(),
    };
    let token = usecase.execute(payload)?;
    Ok(Json(TokenResponse { token }))
}
