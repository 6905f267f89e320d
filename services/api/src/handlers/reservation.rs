use axum::{
    Json,
    extract::{Path, RawQuery, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::repository::Store;
use crate::domain::types::{DeleteAck, InsertAck, Reservation, parse_object_id};
use crate::error::ApiError;
use crate::handlers::{document_to_json, hex_id, json_to_document};
use crate::state::AppState;
use crate::usecase::reservation::{
    CreateReservationInput, CreateReservationUseCase, DeleteReservationUseCase,
    ListReservationsUseCase,
};

#[derive(Debug, Serialize)]
pub struct ReservationResponse {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl From<Reservation> for ReservationResponse {
    fn from(reservation: Reservation) -> Self {
        Self {
            id: hex_id(reservation.id),
            fields: document_to_json(reservation.fields),
        }
    }
}

// ── POST /reservation ────────────────────────────────────────────────────────

/// `email` may be any JSON value; the use case decides whether it counts as present.
#[derive(Deserialize)]
pub struct CreateReservationRequest {
    #[serde(default)]
    pub email: Option<Value>,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

pub async fn create_reservation<S: Store>(
    State(state): State<AppState<S>>,
    body: Result<Json<CreateReservationRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<InsertAck>), ApiError> {
    let Json(body) = body?;
    let email = body
        .email
        .map(|v| mongodb::bson::to_bson(&v))
        .transpose()
        .map_err(|_| ApiError::InvalidBody)?;

    let usecase = CreateReservationUseCase {
        repo: state.reservation_repo(),
    };
    let ack = usecase
        .execute(CreateReservationInput {
            email,
            details: json_to_document(&body.details)?,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(ack)))
}

// ── GET /reservation ─────────────────────────────────────────────────────────

/// Lists every reservation. The query string (`email=` included) is read but never
/// applied as a filter, so repeated or odd parameters cannot fail the request.
pub async fn list_reservations<S: Store>(
    State(state): State<AppState<S>>,
    RawQuery(query): RawQuery,
) -> Result<Json<Vec<ReservationResponse>>, ApiError> {
    if let Some(query) = &query {
        tracing::debug!(query = %query, "query ignored; listing all reservations");
    }
    let usecase = ListReservationsUseCase {
        repo: state.reservation_repo(),
    };
    let reservations = usecase.execute().await?;
    Ok(Json(
        reservations
            .into_iter()
            .map(ReservationResponse::from)
            .collect(),
    ))
}

// ── DELETE /reservation/{id} ─────────────────────────────────────────────────

pub async fn delete_reservation<S: Store>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteAck>, ApiError> {
    let id = parse_object_id(&id)?;
    let usecase = DeleteReservationUseCase {
        repo: state.reservation_repo(),
    };
    Ok(Json(usecase.execute(id).await?))
}
