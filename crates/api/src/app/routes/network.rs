use axum::{extract::Extension, Json};

use networksync_core::{ContactPath, NetworkGraph, PathQuery};

use crate::app::dto::{NetworkGraphResponse, PathResponse};
use crate::context::IdentityContext;

#[utoipa::path(
    get,
    path = "/api/network/graph",
    tag = "network",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Caller's contact graph", body = NetworkGraphResponse),
        (status = 401, description = "Missing or invalid bearer credential", body = crate::app::errors::ErrorBody)
    )
)]
pub async fn graph(Extension(identity): Extension<IdentityContext>) -> Json<NetworkGraphResponse> {
    Json(NetworkGraphResponse {
        message: "Network graph - to be implemented",
        user_id: identity.user_id().clone(),
        graph: NetworkGraph::empty(),
    })
}

/// Body is optional; endpoints are accepted but not searched yet.
#[utoipa::path(
    post,
    path = "/api/network/path",
    tag = "network",
    security(("bearer" = [])),
    request_body(content = PathQuery, description = "Optional path endpoints"),
    responses(
        (status = 200, description = "Path between contacts", body = PathResponse),
        (status = 401, description = "Missing or invalid bearer credential", body = crate::app::errors::ErrorBody)
    )
)]
pub async fn find_path(
    Extension(identity): Extension<IdentityContext>,
    query: Option<Json<PathQuery>>,
) -> Json<PathResponse> {
    if let Some(Json(q)) = query {
        tracing::debug!(from = ?q.from, to = ?q.to, "path query received");
    }

    Json(PathResponse {
        message: "Path finding - to be implemented",
        user_id: identity.user_id().clone(),
        path: ContactPath::empty(),
    })
}
