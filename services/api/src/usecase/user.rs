use mongodb::bson::{Document, oid::ObjectId};

use crate::domain::repository::UserRepository;
use crate::domain::types::{DeleteAck, InsertAck, UpdateAck, User, UserRole};
use crate::error::ApiError;

// ── ListUsers ────────────────────────────────────────────────────────────────

pub struct ListUsersUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> ListUsersUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<User>, ApiError> {
        self.repo.list().await
    }
}

// ── CreateUser ───────────────────────────────────────────────────────────────

pub struct CreateUserInput {
    pub email: String,
    pub profile: Document,
}

#[derive(Debug, PartialEq)]
pub enum CreateUserOutput {
    Created(InsertAck),
    AlreadyExists,
}

pub struct CreateUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> CreateUserUseCase<R> {
    /// Insert unless a user with the same email exists. The check and the insert are
    /// separate round trips, so two concurrent registrations can both succeed.
    pub async fn execute(&self, input: CreateUserInput) -> Result<CreateUserOutput, ApiError> {
        if self.repo.find_by_email(&input.email).await?.is_some() {
            return Ok(CreateUserOutput::AlreadyExists);
        }
        let user = User::register(input.email, input.profile);
        let ack = self.repo.insert(&user).await?;
        Ok(CreateUserOutput::Created(ack))
    }
}

// ── DeleteUser ───────────────────────────────────────────────────────────────

pub struct DeleteUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> DeleteUserUseCase<R> {
    pub async fn execute(&self, id: ObjectId) -> Result<DeleteAck, ApiError> {
        self.repo.delete(id).await
    }
}

// ── PromoteAdmin ─────────────────────────────────────────────────────────────

pub struct PromoteAdminUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> PromoteAdminUseCase<R> {
    pub async fn execute(&self, id: ObjectId) -> Result<UpdateAck, ApiError> {
        self.repo.set_role(id, UserRole::Admin).await
    }
}
