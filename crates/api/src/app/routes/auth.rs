use axum::{routing::post, Json, Router};

use networksync_core::NewUser;

use crate::app::dto::{MessageResponse, RegisterResponse};

pub fn router() -> Router {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Accepts a registration and echoes it without the password. No account is created.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = NewUser,
    responses((status = 200, description = "Registration echoed", body = RegisterResponse))
)]
pub async fn register(Json(body): Json<NewUser>) -> Json<RegisterResponse> {
    tracing::info!(email = %body.email, "registration received (not persisted)");

    Json(RegisterResponse {
        message: "Registration endpoint - to be implemented",
        user: body.into_profile(),
    })
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    responses((status = 200, description = "Placeholder", body = MessageResponse))
)]
pub async fn login() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Login endpoint - to be implemented",
    })
}
