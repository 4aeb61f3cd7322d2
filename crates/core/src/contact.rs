//! Contact shapes: the create payload and the stored-record view.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::id::{ContactId, UserId};

/// Contact fields supplied by a caller.
///
/// Only `name` is required; absent optional fields serialize as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ContactDraft {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl ContactDraft {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: None,
            phone: None,
            company: None,
            title: None,
            notes: None,
        }
    }
}

/// A contact as it will be returned once storage exists.
///
/// The draft fields are flattened next to the owner and bookkeeping fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ContactRecord {
    pub id: ContactId,
    pub user_id: UserId,
    #[serde(flatten)]
    pub contact: ContactDraft,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ContactRecord {
    /// Stamp a draft for `owner`; a fresh record has equal creation/update times.
    pub fn new(owner: UserId, contact: ContactDraft, now: DateTime<Utc>) -> Self {
        Self {
            id: ContactId::new(),
            user_id: owner,
            contact,
            created_at: now,
            updated_at: now,
        }
    }
}
