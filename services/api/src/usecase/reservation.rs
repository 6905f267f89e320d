use mongodb::bson::{Bson, Document, oid::ObjectId};

use crate::domain::repository::ReservationRepository;
use crate::domain::types::{DeleteAck, InsertAck, Reservation};
use crate::error::ApiError;

// ── CreateReservation ────────────────────────────────────────────────────────

pub struct CreateReservationInput {
    pub email: Option<Bson>,
    pub details: Document,
}

pub struct CreateReservationUseCase<R: ReservationRepository> {
    pub repo: R,
}

impl<R: ReservationRepository> CreateReservationUseCase<R> {
    /// One reservation per email. Check-then-insert, not atomic.
    pub async fn execute(&self, input: CreateReservationInput) -> Result<InsertAck, ApiError> {
        let email = input
            .email
            .filter(is_present)
            .ok_or(ApiError::MissingEmail)?;

        if self.repo.find_by_email(&email).await?.is_some() {
            return Err(ApiError::AlreadyApplied);
        }

        self.repo
            .insert(&Reservation::new(email, input.details))
            .await
    }
}

/// Missing means null, `false`, `""`, zero or NaN. Anything else is kept as given.
fn is_present(email: &Bson) -> bool {
    match email {
        Bson::Null | Bson::Undefined => false,
        Bson::Boolean(b) => *b,
        Bson::String(s) => !s.is_empty(),
        Bson::Int32(n) => *n != 0,
        Bson::Int64(n) => *n != 0,
        Bson::Double(n) => *n != 0.0 && !n.is_nan(),
        _ => true,
    }
}

// ── ListReservations ─────────────────────────────────────────────────────────

pub struct ListReservationsUseCase<R: ReservationRepository> {
    pub repo: R,
}

impl<R: ReservationRepository> ListReservationsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Reservation>, ApiError> {
        self.repo.list().await
    }
}

// ── DeleteReservation ────────────────────────────────────────────────────────

pub struct DeleteReservationUseCase<R: ReservationRepository> {
    pub repo: R,
}

impl<R: ReservationRepository> DeleteReservationUseCase<R> {
    pub async fn execute(&self, id: ObjectId) -> Result<DeleteAck, ApiError> {
        self.repo.delete(id).await
    }
}
