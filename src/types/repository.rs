//! Repository search result types
//!
//! A `RepositoryResult` is immutable once fetched; the controller only
//! ever appends them to its accumulated list.

use serde::{Deserialize, Serialize};

use crate::github::graphql::graphql_types::repository::RepositoryNode;

/// Opaque GraphQL node id of a repository (e.g. `MDEwOlJlcG9zaXRvcnkxMDI3MDI1MA==`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepositoryNodeId(pub String);

impl RepositoryNodeId {
    pub fn new<T: Into<String>>(id: T) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RepositoryNodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single repository row in the search results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryResult {
    pub id: RepositoryNodeId,
    pub name: String,
    pub watcher_count: u64,
    pub star_count: u64,
}

impl RepositoryResult {
    pub fn new<T: Into<String>>(
        id: RepositoryNodeId,
        name: T,
        watcher_count: u64,
        star_count: u64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            watcher_count,
            star_count,
        }
    }
}

impl From<RepositoryNode> for RepositoryResult {
    fn from(node: RepositoryNode) -> Self {
        Self {
            id: RepositoryNodeId(node.id),
            name: node.name,
            watcher_count: node.watchers.total_count,
            star_count: node.stargazers.total_count,
        }
    }
}
