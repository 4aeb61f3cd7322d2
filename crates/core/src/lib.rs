//! `networksync-core`: domain schemas for users, contacts and the contact network.
//!
//! This crate contains **pure data shapes** (no HTTP, no storage). Nothing here is
//! persisted yet; the types describe request/response payloads the API exchanges.

pub mod contact;
pub mod error;
pub mod id;
pub mod network;
pub mod user;

pub use contact::{ContactDraft, ContactRecord};
pub use error::{DomainError, DomainResult};
pub use id::{ContactId, UserId};
pub use network::{ContactPath, GraphEdge, GraphNode, NetworkGraph, PathQuery};
pub use user::{NewUser, UserProfile};
