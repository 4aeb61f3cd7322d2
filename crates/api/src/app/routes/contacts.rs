use axum::{extract::Extension, Json};

use networksync_core::ContactDraft;

use crate::app::dto::{ContactCreatedResponse, ContactListResponse};
use crate::context::IdentityContext;

#[utoipa::path(
    get,
    path = "/api/contacts",
    tag = "contacts",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Caller's contacts", body = ContactListResponse),
        (status = 401, description = "Missing or invalid bearer credential", body = crate::app::errors::ErrorBody)
    )
)]
pub async fn list_contacts(
    Extension(identity): Extension<IdentityContext>,
) -> Json<ContactListResponse> {
    Json(ContactListResponse {
        message: "Contacts list - to be implemented",
        user_id: identity.user_id().clone(),
        contacts: Vec::new(),
    })
}

#[utoipa::path(
    post,
    path = "/api/contacts",
    tag = "contacts",
    security(("bearer" = [])),
    request_body = ContactDraft,
    responses(
        (status = 200, description = "Contact echoed", body = ContactCreatedResponse),
        (status = 401, description = "Missing or invalid bearer credential", body = crate::app::errors::ErrorBody)
    )
)]
pub async fn create_contact(
    Extension(identity): Extension<IdentityContext>,
    Json(body): Json<ContactDraft>,
) -> Json<ContactCreatedResponse> {
    tracing::debug!(user_id = %identity.user_id(), "contact received (not persisted)");

    Json(ContactCreatedResponse {
        message: "Contact created - to be implemented",
        contact: body,
        user_id: identity.user_id().clone(),
    })
}
