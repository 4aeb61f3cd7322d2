//! `networksync-auth`: identity resolution boundary.
//!
//! This crate is intentionally decoupled from HTTP: the API layer extracts the
//! bearer credential and hands it to an [`IdentityResolver`].

pub mod claims;
pub mod identity;
pub mod resolver;

pub use claims::{TokenClaims, TokenValidationError, validate_claims};
pub use identity::Identity;
pub use resolver::{IdentityError, IdentityResolver, JwtIdentityResolver, StaticIdentityResolver};
