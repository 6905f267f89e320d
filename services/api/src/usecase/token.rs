use serde_json::Value;

use skyview_auth_types::token::{AuthError, issue_token};

use crate::error::ApiError;

/// Signs whatever identity object the caller presents. Nothing checks that it
/// belongs to a registered user.
pub struct IssueTokenUseCase {
    pub jwt_secret: String,
}

impl IssueTokenUseCase {
    pub fn execute(&self, payload: Value) -> Result<String, ApiError> {
        let (token, _exp) = issue_token(payload, &self.jwt_secret).map_err(|e| match e {
            AuthError::InvalidPayload => ApiError::InvalidBody,
            other => ApiError::Internal(other.into()),
        })?;
        Ok(token)
    }
}
