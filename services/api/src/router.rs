use axum::{
    Router, middleware,
    routing::{delete, get, patch, post},
};

use skyview_auth_types::bearer::require_bearer;
use skyview_core::{error::not_found, health::healthz, middleware::with_http_layers};

use crate::domain::repository::Store;
use crate::handlers::{
    apartment::list_apartments,
    health::{readyz, root},
    reservation::{create_reservation, delete_reservation, list_reservations},
    token::create_token,
    user::{create_user, delete_user, list_users, make_admin},
};
use crate::state::AppState;

pub fn build_router<S: Store>(state: AppState<S>) -> Router {
    let bearer = middleware::from_fn_with_state(state.jwt_secret.clone(), require_bearer);

    Router::new()
        .route("/", get(root))
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz::<S>))
        // Users
        .route("/users", get(list_users::<S>).route_layer(bearer))
        .route("/users", post(create_user::<S>))
        .route("/users/{id}", delete(delete_user::<S>))
        // TODO: gate behind bearer + admin role once clients send tokens on this call.
        .route("/users/admin/{id}", patch(make_admin::<S>))
        // Apartments
        .route("/apartments", get(list_apartments::<S>))
        // Reservations
        .route("/reservation", post(create_reservation::<S>))
        .route("/reservation", get(list_reservations::<S>))
        .route("/reservation/{id}", delete(delete_reservation::<S>))
        // Token
        .route("/jwt", post(create_token::<S>))
        .fallback(not_found)
        .with_state(state)
}

/// Router wrapped with request-id, trace and CORS layers, ready to serve.
pub fn build_app<S: Store>(state: AppState<S>, cors_origins: &[String]) -> Router {
    with_http_layers(build_router(state), cors_origins)
}
