use crate::domain::repository::ApartmentRepository;
use crate::domain::types::Apartment;
use crate::error::ApiError;

pub struct ListApartmentsUseCase<R: ApartmentRepository> {
    pub repo: R,
}

impl<R: ApartmentRepository> ListApartmentsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Apartment>, ApiError> {
        self.repo.list().await
    }
}
