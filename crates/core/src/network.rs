//! Contact network shapes (graph view and path results).
//!
//! No graph is built yet; handlers return the empty forms.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::id::ContactId;

/// A contact placed in the network graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GraphNode {
    pub id: ContactId,
    pub label: String,
}

/// An undirected relationship between two contacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GraphEdge {
    pub source: ContactId,
    pub target: ContactId,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NetworkGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl NetworkGraph {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}

/// Ordered hops from one contact to another.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct ContactPath(Vec<ContactId>);

impl ContactPath {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn hops(&self) -> &[ContactId] {
        &self.0
    }
}

/// Optional endpoints for a path search. Accepted but not used yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PathQuery {
    #[serde(default)]
    pub from: Option<ContactId>,
    #[serde(default)]
    pub to: Option<ContactId>,
}
