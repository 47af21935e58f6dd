use serde::{Deserialize, Serialize};

use crate::github::graphql::graphql_types::{PageInfo, RepositoryNode};

/// GraphQL response structures for the repository search query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub search: SearchConnection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConnection {
    pub nodes: Vec<Option<SearchNode>>,
    #[serde(rename = "pageInfo")]
    pub page_info: PageInfo,
}

/// A search node. Non-repository results come back as empty objects
/// because the query only selects fields on `Repository`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SearchNode {
    Repository(RepositoryNode),
    Other(serde_json::Value),
}

impl SearchConnection {
    /// Repository nodes in response order, skipping nulls and other node types
    pub fn repositories(self) -> impl Iterator<Item = RepositoryNode> {
        self.nodes.into_iter().flatten().filter_map(|node| match node {
            SearchNode::Repository(repository) => Some(repository),
            SearchNode::Other(value) => {
                tracing::debug!("Skipping non-repository search node: {}", value);
                None
            }
        })
    }
}
