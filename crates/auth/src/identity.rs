use serde::{Deserialize, Serialize};

use networksync_core::UserId;

const MOCK_USER_ID: &str = "mock-user-id";
const MOCK_USER_EMAIL: &str = "test@example.com";

/// The caller a request acts on behalf of.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: UserId,
    pub email: Option<String>,
}

impl Identity {
    pub fn new(id: UserId, email: Option<String>) -> Self {
        Self { id, email }
    }

    /// Fixed development identity handed out by the static resolver.
    pub fn mock() -> Self {
        Self {
            id: UserId::new(MOCK_USER_ID),
            email: Some(MOCK_USER_EMAIL.to_string()),
        }
    }
}
