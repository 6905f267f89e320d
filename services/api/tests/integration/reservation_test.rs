use mongodb::bson::Bson;

use skyview_api::error::ApiError;
use skyview_api::usecase::apartment::ListApartmentsUseCase;
use skyview_api::usecase::reservation::{
    CreateReservationInput, CreateReservationUseCase, ListReservationsUseCase,
};

use crate::helpers::{
    MockApartmentRepo, MockReservationRepo, test_apartment, test_reservation_details,
};

fn application(email: Option<&str>) -> CreateReservationInput {
    CreateReservationInput {
        email: email.map(Bson::from),
        details: test_reservation_details(),
    }
}

#[tokio::test]
async fn should_reject_reservation_without_email() {
    let repo = MockReservationRepo::default();
    let result = CreateReservationUseCase { repo: repo.clone() }
        .execute(application(None))
        .await;
    assert!(matches!(result, Err(ApiError::MissingEmail)));
    assert_eq!(repo.count(), 0);
}

#[tokio::test]
async fn should_accept_first_and_reject_second_application() {
    let repo = MockReservationRepo::default();
    let usecase = CreateReservationUseCase { repo: repo.clone() };

    let first = usecase.execute(application(Some("a@b.com"))).await.unwrap();
    assert!(first.acknowledged);

    let second = usecase.execute(application(Some("a@b.com"))).await;
    let err = second.unwrap_err();
    assert!(matches!(err, ApiError::AlreadyApplied));
    assert_eq!(err.to_string(), "User has already applied for a job.");
    assert_eq!(repo.count(), 1);
}

#[tokio::test]
async fn should_keep_reservation_details() {
    let repo = MockReservationRepo::default();
    CreateReservationUseCase { repo: repo.clone() }
        .execute(application(Some("a@b.com")))
        .await
        .unwrap();

    let rows = ListReservationsUseCase { repo }.execute().await.unwrap();
    assert_eq!(rows[0].fields.get_str("email").unwrap(), "a@b.com");
    assert_eq!(rows[0].fields.get_str("apartment_no").unwrap(), "B-304");
}

#[tokio::test]
async fn should_list_every_reservation() {
    let repo = MockReservationRepo::default();
    let create = CreateReservationUseCase { repo: repo.clone() };
    create.execute(application(Some("a@b.com"))).await.unwrap();
    create.execute(application(Some("c@d.com"))).await.unwrap();

    let rows = ListReservationsUseCase { repo }.execute().await.unwrap();
    assert_eq!(rows.len(), 2);
}

#[tokio::test]
async fn should_list_all_apartments() {
    let repo = MockApartmentRepo {
        apartments: vec![test_apartment(), test_apartment()],
    };
    let apartments = ListApartmentsUseCase { repo }.execute().await.unwrap();
    assert_eq!(apartments.len(), 2);
}
