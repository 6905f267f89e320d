use std::future::Future;

use mongodb::bson::{Bson, oid::ObjectId};

use crate::domain::types::{
    Apartment, DeleteAck, InsertAck, Reservation, UpdateAck, User, UserRole,
};
use crate::error::ApiError;

/// Repository for the `users` collection.
pub trait UserRepository: Send + Sync {
    fn list(&self) -> impl Future<Output = Result<Vec<User>, ApiError>> + Send;
    fn find_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Option<User>, ApiError>> + Send;
    fn insert(&self, user: &User) -> impl Future<Output = Result<InsertAck, ApiError>> + Send;
    /// Delete by id. A missing id yields `deleted_count == 0`, not an error.
    fn delete(&self, id: ObjectId) -> impl Future<Output = Result<DeleteAck, ApiError>> + Send;
    fn set_role(
        &self,
        id: ObjectId,
        role: UserRole,
    ) -> impl Future<Output = Result<UpdateAck, ApiError>> + Send;
}

/// Repository for the `apartments` collection (read-only).
pub trait ApartmentRepository: Send + Sync {
    fn list(&self) -> impl Future<Output = Result<Vec<Apartment>, ApiError>> + Send;
}

/// Repository for the `reservation` collection.
pub trait ReservationRepository: Send + Sync {
    fn list(&self) -> impl Future<Output = Result<Vec<Reservation>, ApiError>> + Send;
    /// Exact match on the stored `email` value, whatever its BSON type.
    fn find_by_email(
        &self,
        email: &Bson,
    ) -> impl Future<Output = Result<Option<Reservation>, ApiError>> + Send;
    fn insert(
        &self,
        reservation: &Reservation,
    ) -> impl Future<Output = Result<InsertAck, ApiError>> + Send;
    fn delete(&self, id: ObjectId) -> impl Future<Output = Result<DeleteAck, ApiError>> + Send;
}

/// Backing store handed to the router: hands out repositories and answers readiness pings.
pub trait Store: Clone + Send + Sync + 'static {
    type Users: UserRepository + 'static;
    type Apartments: ApartmentRepository + 'static;
    type Reservations: ReservationRepository + 'static;

    fn users(&self) -> Self::Users;
    fn apartments(&self) -> Self::Apartments;
    fn reservations(&self) -> Self::Reservations;
    fn ping(&self) -> impl Future<Output = anyhow::Result<()>> + Send;
}
