//! Response DTOs.
//!
//! Request bodies are the domain shapes from `networksync-core` (`NewUser`,
//! `ContactDraft`, `PathQuery`); only the envelopes live here.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use networksync_core::{ContactDraft, ContactPath, ContactRecord, NetworkGraph, UserId, UserProfile};

pub const API_NAME: &str = "NetworkSync API";
pub const API_VERSION: &str = "1.0.0";

// -------------------------
// System
// -------------------------

#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceBanner {
    pub message: &'static str,
    pub version: &'static str,
    pub docs: &'static str,
    pub health: &'static str,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub timestamp: DateTime<Utc>,
    pub version: &'static str,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DatabaseHealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub timestamp: DateTime<Utc>,
}

// -------------------------
// Auth
// -------------------------

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterResponse {
    pub message: &'static str,
    pub user: UserProfile,
}

// -------------------------
// Contacts
// -------------------------

#[derive(Debug, Serialize, ToSchema)]
pub struct ContactListResponse {
    pub message: &'static str,
    pub user_id: UserId,
    pub contacts: Vec<ContactRecord>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ContactCreatedResponse {
    pub message: &'static str,
    pub contact: ContactDraft,
    pub user_id: UserId,
}

// -------------------------
// Network
// -------------------------

#[derive(Debug, Serialize, ToSchema)]
pub struct NetworkGraphResponse {
    pub message: &'static str,
    pub user_id: UserId,
    #[serde(flatten)]
    pub graph: NetworkGraph,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PathResponse {
    pub message: &'static str,
    pub user_id: UserId,
    pub path: ContactPath,
}
