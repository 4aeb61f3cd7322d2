//! Identity resolvers: map a bearer credential to the calling [`Identity`].
//!
//! Two variants exist so the API can be developed before an identity provider
//! is wired in: a constant resolver and a verifying one. Which one runs is a
//! configuration decision made at startup.

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode, errors::ErrorKind};
use thiserror::Error;

use networksync_core::UserId;

use crate::claims::{TokenClaims, TokenValidationError, validate_claims};
use crate::identity::Identity;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdentityError {
    #[error("malformed token")]
    Malformed,

    #[error("invalid token signature")]
    InvalidSignature,

    #[error(transparent)]
    Claims(#[from] TokenValidationError),

    #[error("token subject is not a valid user id")]
    InvalidSubject,
}

/// Resolves a bearer credential into an identity.
pub trait IdentityResolver: Send + Sync {
    fn resolve(&self, token: &str, now: DateTime<Utc>) -> Result<Identity, IdentityError>;
}

/// Development resolver: every credential maps to the same identity.
#[derive(Debug, Clone)]
pub struct StaticIdentityResolver {
    identity: Identity,
}

impl StaticIdentityResolver {
    pub fn new(identity: Identity) -> Self {
        Self { identity }
    }
}

impl Default for StaticIdentityResolver {
    fn default() -> Self {
        Self::new(Identity::mock())
    }
}

impl IdentityResolver for StaticIdentityResolver {
    fn resolve(&self, _token: &str, _now: DateTime<Utc>) -> Result<Identity, IdentityError> {
        Ok(self.identity.clone())
    }
}

/// Verifying resolver for HS256-signed tokens.
pub struct JwtIdentityResolver {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtIdentityResolver {
    pub fn with_hs256(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Time checks run in `validate_claims` against the caller-supplied clock.
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;

        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }
}

impl IdentityResolver for JwtIdentityResolver {
    fn resolve(&self, token: &str, now: DateTime<Utc>) -> Result<Identity, IdentityError> {
        let data = decode::<TokenClaims>(token, &self.decoding_key, &self.validation).map_err(
            |e| match e.kind() {
                ErrorKind::InvalidSignature => IdentityError::InvalidSignature,
                _ => IdentityError::Malformed,
            },
        )?;
        let claims = data.claims;

        validate_claims(&claims, now)?;

        let id = UserId::parse(&claims.sub).map_err(|_| IdentityError::InvalidSubject)?;
        tracing::debug!(user_id = %id, "bearer token verified");

        Ok(Identity::new(id, claims.email))
    }
}
