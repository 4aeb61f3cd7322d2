//! User account shapes.
//!
//! No account is created anywhere yet: registration input is validated only by
//! deserialization and echoed back without the password.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Registration input.
///
/// The password is write-only: it is accepted on input and never serialized or
/// printed.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NewUser {
    pub email: String,
    #[serde(skip_serializing)]
    #[schema(write_only)]
    pub password: String,
    pub name: String,
}

impl NewUser {
    /// Drop the credential, keeping the public profile fields.
    pub fn into_profile(self) -> UserProfile {
        UserProfile {
            email: self.email,
            name: self.name,
        }
    }
}

impl core::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NewUser")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .finish()
    }
}

/// Public view of a user (registration echo).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserProfile {
    pub email: String,
    pub name: String,
}
