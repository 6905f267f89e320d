use skyview_auth_types::bearer::TokenSecret;

use crate::domain::repository::Store;
use crate::infra::db::MongoStore;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState<S = MongoStore> {
    pub store: S,
    pub jwt_secret: TokenSecret,
}

impl<S: Store> AppState<S> {
    pub fn user_repo(&self) -> S::Users {
        self.store.users()
    }

    pub fn apartment_repo(&self) -> S::Apartments {
        self.store.apartments()
    }

    pub fn reservation_repo(&self) -> S::Reservations {
        self.store.reservations()
    }
}
