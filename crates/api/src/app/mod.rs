//! HTTP API application wiring (Axum router + shared state).
//!
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: response envelopes
//! - `errors.rs`: consistent error responses
//! - `docs.rs`: OpenAPI document + Swagger UI

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use networksync_auth::{IdentityResolver, JwtIdentityResolver, StaticIdentityResolver};

use crate::config::{AppConfig, CorsConfig, IdentityMode};
use crate::middleware;
use crate::probe::{DatabaseProbe, HttpDatabaseProbe};

pub mod docs;
pub mod dto;
pub mod errors;
pub mod routes;

/// Collaborators shared by every request. Nothing in here is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub identity: Arc<dyn IdentityResolver>,
    /// `None` when database credentials were not configured.
    pub database_probe: Option<Arc<dyn DatabaseProbe>>,
}

impl AppState {
    /// Select the collaborators described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error when the outbound HTTP client cannot be constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, reqwest::Error> {
        let identity: Arc<dyn IdentityResolver> = match &config.identity {
            IdentityMode::Static => Arc::new(StaticIdentityResolver::default()),
            IdentityMode::Jwt { secret } => Arc::new(JwtIdentityResolver::with_hs256(secret.as_bytes())),
        };

        let database_probe = match &config.database {
            Some(db) => {
                let probe = HttpDatabaseProbe::new(db, config.probe_timeout)?;
                tracing::debug!(endpoint = %probe.endpoint(), "database probe ready");
                Some(Arc::new(probe) as Arc<dyn DatabaseProbe>)
            }
            None => None,
        };

        Ok(Self {
            identity,
            database_probe,
        })
    }
}

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// # Errors
///
/// Returns an error when the outbound HTTP client cannot be constructed.
pub fn build_app(config: &AppConfig) -> Result<Router, reqwest::Error> {
    let state = AppState::from_config(config)?;
    Ok(build_router(state, &config.cors))
}

/// Assemble routes and layers around already-built collaborators.
pub fn build_router(state: AppState, cors: &CorsConfig) -> Router {
    let auth_state = middleware::AuthState {
        resolver: state.identity.clone(),
    };

    // Protected routes: require a bearer credential resolved to an identity.
    let protected = routes::protected_router().route_layer(axum::middleware::from_fn_with_state(
        auth_state,
        middleware::auth_middleware,
    ));

    Router::new()
        .merge(routes::public_router())
        .merge(protected)
        .merge(docs::router())
        .layer(Extension(Arc::new(state)))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(cors)),
        )
}

fn cors_layer(cors: &CorsConfig) -> CorsLayer {
    let origin = if cors.allowed_origins.is_empty() {
        // Credentials forbid a literal `*`, so echo the caller's origin instead.
        AllowOrigin::mirror_request()
    } else {
        AllowOrigin::list(cors.allowed_origins.clone())
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
