use axum::{
    routing::{get, post},
    Router,
};

pub mod auth;
pub mod contacts;
pub mod network;
pub mod system;

/// Router for the unauthenticated surface (banner, health, auth placeholders).
pub fn public_router() -> Router {
    Router::new()
        .route("/", get(system::root))
        .route("/api/health", get(system::health))
        .route("/api/health/database", get(system::database_health))
        .nest("/api/auth", auth::router())
}

/// Router for endpoints that act on behalf of an identity.
pub fn protected_router() -> Router {
    Router::new()
        .route("/api/contacts", get(contacts::list_contacts).post(contacts::create_contact))
        .route("/api/network/graph", get(network::graph))
        .route("/api/network/path", post(network::find_path))
}
