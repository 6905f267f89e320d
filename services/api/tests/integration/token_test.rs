use serde_json::json;

use skyview_api::error::ApiError;
use skyview_api::usecase::token::IssueTokenUseCase;
use skyview_auth_types::token::{ACCESS_TOKEN_EXP, AuthError, validate_token};
use skyview_testing::auth::MockAuth;

use crate::helpers::TEST_JWT_SECRET;

fn usecase() -> IssueTokenUseCase {
    IssueTokenUseCase {
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    }
}

#[tokio::test]
async fn should_issue_token_that_decodes_to_payload() {
    let token = usecase().execute(json!({"email": "a@b.com"})).unwrap();

    let claims = validate_token(&token, TEST_JWT_SECRET).unwrap();
    assert_eq!(claims.payload, *json!({"email": "a@b.com"}).as_object().unwrap());
    assert_eq!(claims.exp - claims.iat, ACCESS_TOKEN_EXP);
}

#[tokio::test]
async fn should_not_validate_with_other_secret() {
    let token = usecase().execute(json!({"email": "a@b.com"})).unwrap();
    let result = validate_token(&token, "wrong-secret");
    assert!(
        matches!(result, Err(AuthError::InvalidSignature)),
        "expected InvalidSignature, got {result:?}"
    );
}

#[tokio::test]
async fn should_not_validate_after_lifetime() {
    let token = MockAuth::new(TEST_JWT_SECRET).expired_token(json!({"email": "a@b.com"}));
    let result = validate_token(&token, TEST_JWT_SECRET);
    assert!(
        matches!(result, Err(AuthError::Expired)),
        "expected Expired, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_scalar_payload() {
    let result = usecase().execute(json!(42));
    assert!(matches!(result, Err(ApiError::InvalidBody)));
}
