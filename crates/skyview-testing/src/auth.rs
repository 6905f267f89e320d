//! Bearer-token helpers for integration tests.
//!
//! `MockAuth` signs tokens with a known secret so tests can drive routes behind the
//! bearer gate without calling `POST /jwt` first.

use axum::http::{HeaderMap, HeaderValue, header::AUTHORIZATION};
use serde_json::Value;

use skyview_auth_types::token::{ACCESS_TOKEN_EXP, JwtClaims, encode_claims, issue_token};

/// Token minting for a fixed secret.
pub struct MockAuth {
    pub secret: String,
}

impl MockAuth {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// A fresh one-hour token for `payload`.
    pub fn token(&self, payload: Value) -> String {
        issue_token(payload, &self.secret).unwrap().0
    }

    /// A token for `payload` whose lifetime ended a minute ago.
    pub fn expired_token(&self, payload: Value) -> String {
        let issued = jsonwebtoken::get_current_timestamp() - ACCESS_TOKEN_EXP - 60;
        let claims = JwtClaims::new(payload, issued).unwrap();
        encode_claims(&claims, &self.secret).unwrap()
    }

    /// `Authorization: Bearer <token>` for a fresh token.
    pub fn headers(&self, payload: Value) -> HeaderMap {
        bearer_headers(&self.token(payload))
    }
}

/// Headers carrying `token` as a bearer credential.
pub fn bearer_headers(token: &str) -> HeaderMap {
    let mut map = HeaderMap::new();
    map.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
    );
    map
}
