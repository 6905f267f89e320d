use std::sync::{Arc, Mutex};

use mongodb::bson::{Bson, Document, doc, oid::ObjectId};

use skyview_api::domain::repository::{
    ApartmentRepository, ReservationRepository, Store, UserRepository,
};
use skyview_api::domain::types::{
    Apartment, DeleteAck, InsertAck, Reservation, UpdateAck, User, UserRole,
};
use skyview_api::error::ApiError;
use skyview_api::state::AppState;
use skyview_auth_types::bearer::TokenSecret;

pub const TEST_JWT_SECRET: &str = "test-jwt-secret-for-integration-tests";

// ── MockUserRepo ─────────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockUserRepo {
    pub users: Arc<Mutex<Vec<User>>>,
}

impl MockUserRepo {
    pub fn count(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

impl UserRepository for MockUserRepo {
    async fn list(&self) -> Result<Vec<User>, ApiError> {
        Ok(self.users.lock().unwrap().clone())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.fields.get_str("email").ok() == Some(email))
            .cloned())
    }

    async fn insert(&self, user: &User) -> Result<InsertAck, ApiError> {
        let id = ObjectId::new();
        let mut stored = user.clone();
        stored.id = Some(id);
        self.users.lock().unwrap().push(stored);
        Ok(InsertAck {
            acknowledged: true,
            inserted_id: Some(id.to_hex()),
        })
    }

    async fn delete(&self, id: ObjectId) -> Result<DeleteAck, ApiError> {
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.id != Some(id));
        Ok(DeleteAck {
            acknowledged: true,
            deleted_count: (before - users.len()) as u64,
        })
    }

    async fn set_role(&self, id: ObjectId, role: UserRole) -> Result<UpdateAck, ApiError> {
        let mut users = self.users.lock().unwrap();
        let (matched, modified) = match users.iter_mut().find(|u| u.id == Some(id)) {
            Some(u) if u.fields.get_str("role").ok() == Some(role.as_str()) => (1, 0),
            Some(u) => {
                u.fields.insert("role", role.as_str());
                (1, 1)
            }
            None => (0, 0),
        };
        Ok(UpdateAck {
            acknowledged: true,
            matched_count: matched,
            modified_count: modified,
            upserted_count: 0,
            upserted_id: None,
        })
    }
}

// ── MockApartmentRepo ────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockApartmentRepo {
    pub apartments: Vec<Apartment>,
}

impl ApartmentRepository for MockApartmentRepo {
    async fn list(&self) -> Result<Vec<Apartment>, ApiError> {
        Ok(self.apartments.clone())
    }
}

// ── MockReservationRepo ──────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockReservationRepo {
    pub rows: Arc<Mutex<Vec<Reservation>>>,
}

impl MockReservationRepo {
    pub fn count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

impl ReservationRepository for MockReservationRepo {
    async fn list(&self) -> Result<Vec<Reservation>, ApiError> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn find_by_email(&self, email: &Bson) -> Result<Option<Reservation>, ApiError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.fields.get("email") == Some(email))
            .cloned())
    }

    async fn insert(&self, reservation: &Reservation) -> Result<InsertAck, ApiError> {
        let id = ObjectId::new();
        let mut stored = reservation.clone();
        stored.id = Some(id);
        self.rows.lock().unwrap().push(stored);
        Ok(InsertAck {
            acknowledged: true,
            inserted_id: Some(id.to_hex()),
        })
    }

    async fn delete(&self, id: ObjectId) -> Result<DeleteAck, ApiError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| r.id != Some(id));
        Ok(DeleteAck {
            acknowledged: true,
            deleted_count: (before - rows.len()) as u64,
        })
    }
}

// ── MockStore ────────────────────────────────────────────────────────────────

/// In-memory store. Clones share rows, so a test can keep a handle and inspect
/// what the router wrote.
#[derive(Clone, Default)]
pub struct MockStore {
    pub users: MockUserRepo,
    pub apartments: MockApartmentRepo,
    pub reservations: MockReservationRepo,
    pub unreachable: bool,
}

impl Store for MockStore {
    type Users = MockUserRepo;
    type Apartments = MockApartmentRepo;
    type Reservations = MockReservationRepo;

    fn users(&self) -> MockUserRepo {
        self.users.clone()
    }

    fn apartments(&self) -> MockApartmentRepo {
        self.apartments.clone()
    }

    fn reservations(&self) -> MockReservationRepo {
        self.reservations.clone()
    }

    async fn ping(&self) -> anyhow::Result<()> {
        if self.unreachable {
            anyhow::bail!("server selection timeout");
        }
        Ok(())
    }
}

pub fn mock_state(store: MockStore) -> AppState<MockStore> {
    AppState {
        store,
        jwt_secret: TokenSecret::new(TEST_JWT_SECRET),
    }
}

// ── Test fixture helpers ─────────────────────────────────────────────────────

pub fn test_profile() -> Document {
    doc! { "name": "Alice", "photo": "https://img.example/alice.png" }
}

pub fn test_reservation_details() -> Document {
    doc! {
        "floor_no": 3,
        "block_name": "B",
        "apartment_no": "B-304",
        "rent": 1450,
        "status": "pending",
    }
}

pub fn test_apartment() -> Apartment {
    Apartment {
        id: Some(ObjectId::new()),
        listing: doc! { "apartment_no": "B-304", "rent": 1450 },
    }
}
