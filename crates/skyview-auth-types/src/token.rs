//! JWT issuing and validation.
//!
//! Tokens carry whatever JSON object the caller handed to `POST /jwt` as their claims,
//! plus the registered `iat`/`exp` timestamps. The server never interprets the payload.

use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
    errors::ErrorKind, get_current_timestamp,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Token lifetime in seconds (1 hour).
pub const ACCESS_TOKEN_EXP: u64 = 3600;

/// Errors returned while issuing or validating tokens.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid signature")]
    InvalidSignature,
    #[error("token expired")]
    Expired,
    #[error("malformed token")]
    Malformed,
    #[error("token payload must be a JSON object")]
    InvalidPayload,
    #[error("failed to sign token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),
}

/// Claims payload: the caller's object flattened alongside `iat` and `exp`.
///
/// | Field | JWT claim | Meaning |
/// |-------|-----------|---------|
/// | `payload` | any other key | caller-supplied identity, e.g. `{"email": ...}` |
/// | `iat` | `iat` | issued-at, seconds since epoch |
/// | `exp` | `exp` | expiry, seconds since epoch |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JwtClaims {
    #[serde(flatten)]
    pub payload: Map<String, Value>,
    pub iat: u64,
    pub exp: u64,
}

impl JwtClaims {
    /// Build claims issued at `now` that expire [`ACCESS_TOKEN_EXP`] seconds later.
    ///
    /// Any `iat`/`exp` keys in the payload are dropped in favour of the computed ones.
    pub fn new(payload: Value, now: u64) -> Result<Self, AuthError> {
        let Value::Object(mut payload) = payload else {
            return Err(AuthError::InvalidPayload);
        };
        payload.remove("iat");
        payload.remove("exp");
        Ok(Self {
            payload,
            iat: now,
            exp: now + ACCESS_TOKEN_EXP,
        })
    }

    /// Look up a string field in the caller payload.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.payload.get(key).and_then(Value::as_str)
    }
}

/// Sign an already-built set of claims with HS256.
pub fn encode_claims(claims: &JwtClaims, secret: &str) -> Result<String, AuthError> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(AuthError::Signing)
}

/// Sign `payload` into a token valid for one hour from now. Returns the token and its `exp`.
pub fn issue_token(payload: Value, secret: &str) -> Result<(String, u64), AuthError> {
    let claims = JwtClaims::new(payload, get_current_timestamp())?;
    let token = encode_claims(&claims, secret)?;
    Ok((token, claims.exp))
}

/// Decode and validate a token, returning its claims.
///
/// Validation: HS256, `exp` required and checked with zero leeway.
pub fn validate_token(token: &str, secret: &str) -> Result<JwtClaims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    validation.leeway = 0;
    validation.required_spec_claims.clear();
    validation.set_required_spec_claims(&["exp"]);

    let data = decode::<JwtClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => AuthError::Expired,
        ErrorKind::InvalidSignature => AuthError::InvalidSignature,
        _ => AuthError::Malformed,
    })?;

    Ok(data.claims)
}
