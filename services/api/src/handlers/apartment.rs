use axum::{Json, extract::State};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::repository::Store;
use crate::domain::types::Apartment;
use crate::error::ApiError;
use crate::handlers::{document_to_json, hex_id};
use crate::state::AppState;
use crate::usecase::apartment::ListApartmentsUseCase;

#[derive(Debug, Serialize)]
pub struct ApartmentResponse {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub listing: Map<String, Value>,
}

impl From<Apartment> for ApartmentResponse {
    fn from(apartment: Apartment) -> Self {
        Self {
            id: hex_id(apartment.id),
            listing: document_to_json(apartment.listing),
        }
    }
}

// ── GET /apartments ──────────────────────────────────────────────────────────

pub async fn list_apartments<S: Store>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<ApartmentResponse>>, ApiError> {
    let usecase = ListApartmentsUseCase {
        repo: state.apartment_repo(),
    };
    let apartments = usecase.execute().await?;
    Ok(Json(
        apartments.into_iter().map(ApartmentResponse::from).collect(),
    ))
}
