use serde::{Deserialize, Serialize};

use super::TotalCount;

/// `... on Repository` fragment of a search node
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryNode {
    pub id: String,
    pub name: String,
    pub watchers: TotalCount,
    pub stargazers: TotalCount,
}
