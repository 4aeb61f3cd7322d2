use networksync_auth::Identity;
use networksync_core::UserId;

/// Identity context for a request (resolved from the bearer credential).
///
/// This is immutable and present on every protected route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityContext {
    identity: Identity,
}

impl IdentityContext {
    pub fn new(identity: Identity) -> Self {
        Self { identity }
    }

    pub fn user_id(&self) -> &UserId {
        &self.identity.id
    }

    pub fn email(&self) -> Option<&str> {
        self.identity.email.as_deref()
    }
}
