use axum::{
    Extension, Json,
    extract::{Path, State, rejection::JsonRejection},
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use skyview_auth_types::token::JwtClaims;

use crate::domain::repository::Store;
use crate::domain::types::{DeleteAck, InsertAck, UpdateAck, User, parse_object_id};
use crate::error::ApiError;
use crate::handlers::{document_to_json, hex_id, json_to_document};
use crate::state::AppState;
use crate::usecase::user::{
    CreateUserInput, CreateUserOutput, CreateUserUseCase, DeleteUserUseCase, ListUsersUseCase,
    PromoteAdminUseCase,
};

#[derive(Debug, Serialize)]
pub struct UserResponse {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: hex_id(user.id),
            fields: document_to_json(user.fields),
        }
    }
}

// ── GET /users ───────────────────────────────────────────────────────────────

pub async fn list_users<S: Store>(
    Extension(claims): Extension<JwtClaims>,
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    tracing::debug!(caller = ?claims.get_str("email"), "listing users");
    let usecase = ListUsersUseCase {
        repo: state.user_repo(),
    };
    let users = usecase.execute().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

// ── POST /users ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    #[serde(flatten)]
    pub profile: Map<String, Value>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum CreateUserResponse {
    AlreadyExists {
        message: &'static str,
        #[serde(rename = "insertedId")]
        inserted_id: Option<String>,
    },
    Created(InsertAck),
}

impl From<CreateUserOutput> for CreateUserResponse {
    fn from(output: CreateUserOutput) -> Self {
        match output {
            CreateUserOutput::AlreadyExists => Self::AlreadyExists {
                message: "user already exists",
                inserted_id: None,
            },
            CreateUserOutput::Created(ack) => Self::Created(ack),
        }
    }
}

pub async fn create_user<S: Store>(
    State(state): State<AppState<S>>,
    body: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<Json<CreateUserResponse>, ApiError> {
    let Json(body) = body?;
    let usecase = CreateUserUseCase {
        repo: state.user_repo(),
    };
    let output = usecase
        .execute(CreateUserInput {
            email: body.email,
            profile: json_to_document(&body.profile)?,
        })
        .await?;
    Ok(Json(output.into()))
}

// ── DELETE /users/{id} ───────────────────────────────────────────────────────

pub async fn delete_user<S: Store>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteAck>, ApiError> {
    let id = parse_object_id(&id)?;
    let usecase = DeleteUserUseCase {
        repo: state.user_repo(),
    };
    Ok(Json(usecase.execute(id).await?))
}

// ── PATCH /users/admin/{id} ──────────────────────────────────────────────────

pub async fn make_admin<S: Store>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<Json<UpdateAck>, ApiError> {
    let id = parse_object_id(&id)?;
    let usecase = PromoteAdminUseCase {
        repo: state.user_repo(),
    };
    Ok(Json(usecase.execute(id).await?))
}
