//! OpenAPI document, with Swagger UI under `/api/docs` and ReDoc under `/api/redoc`.

use axum::Router;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

use networksync_core::{
    ContactDraft, ContactId, ContactPath, ContactRecord, GraphEdge, GraphNode, NetworkGraph,
    NewUser, PathQuery, UserId, UserProfile,
};

use crate::app::dto;
use crate::app::errors::ErrorBody;
use crate::app::routes;

pub const DOCS_PATH: &str = "/api/docs";
pub const REDOC_PATH: &str = "/api/redoc";
pub const OPENAPI_PATH: &str = "/api/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "NetworkSync API",
        version = "1.0.0",
        description = "Professional relationship intelligence platform"
    ),
    paths(
        routes::system::root,
        routes::system::health,
        routes::system::database_health,
        routes::auth::register,
        routes::auth::login,
        routes::contacts::list_contacts,
        routes::contacts::create_contact,
        routes::network::graph,
        routes::network::find_path,
    ),
    components(schemas(
        dto::ServiceBanner,
        dto::HealthResponse,
        dto::DatabaseHealthResponse,
        dto::MessageResponse,
        dto::RegisterResponse,
        dto::ContactListResponse,
        dto::ContactCreatedResponse,
        dto::NetworkGraphResponse,
        dto::PathResponse,
        ErrorBody,
        NewUser,
        UserProfile,
        UserId,
        ContactId,
        ContactDraft,
        ContactRecord,
        GraphNode,
        GraphEdge,
        NetworkGraph,
        ContactPath,
        PathQuery,
    )),
    modifiers(&BearerAuth),
    tags(
        (name = "system"),
        (name = "health", description = "Liveness and dependency checks"),
        (name = "auth", description = "Account placeholders"),
        (name = "contacts", description = "Contact management"),
        (name = "network", description = "Contact network graph"),
    )
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
            );
        }
    }
}

pub fn router() -> Router {
    Router::new()
        .merge(SwaggerUi::new(DOCS_PATH).url(OPENAPI_PATH, ApiDoc::openapi()))
        .merge(Redoc::with_url(REDOC_PATH, ApiDoc::openapi()))
}
