//! Bearer-token gate for protected routes.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use http::header::AUTHORIZATION;

use skyview_core::error::AppError;

use crate::token::validate_token;

/// HMAC secret used to verify bearer tokens. Cheap to clone into middleware state.
#[derive(Clone)]
pub struct TokenSecret(Arc<str>);

impl TokenSecret {
    pub fn new(secret: impl Into<Arc<str>>) -> Self {
        Self(secret.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for TokenSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("TokenSecret(..)")
    }
}

/// Second space-separated segment of an `Authorization` value. The scheme is not checked.
pub fn bearer_token(header_value: &str) -> Option<&str> {
    header_value.split(' ').nth(1)
}

/// Middleware: verify `Authorization: Bearer <token>` and stash the decoded
/// [`JwtClaims`](crate::token::JwtClaims) in request extensions.
///
/// Every failure (header absent, no token segment, bad signature, expired) is a 401
/// with the same body, so callers cannot tell the cases apart.
///
/// Wire with `axum::middleware::from_fn_with_state(secret, require_bearer)`.
pub async fn require_bearer(
    State(secret): State<TokenSecret>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .ok_or(AppError::Unauthorized)?;
    let token = header
        .to_str()
        .ok()
        .and_then(bearer_token)
        .ok_or(AppError::Unauthorized)?;

    let claims = validate_token(token, secret.as_str()).map_err(|e| {
        tracing::debug!(error = %e, "rejected bearer token");
        AppError::Unauthorized
    })?;

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}
