pub mod pager;
pub mod repository;
mod search;

use serde::{Deserialize, Serialize};

pub use pager::*;
pub use repository::*;
pub use search::*;

#[derive(Debug, Clone, Serialize)]
pub struct GraphQLQuery(pub String);

#[derive(Debug, Clone, Serialize)]
pub struct GraphQLPayload<T: serde::Serialize> {
    pub query: GraphQLQuery,
    pub variables: Option<T>,
}

/// Envelope of every GraphQL response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQLResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQLError>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQLError {
    pub message: String,
    #[serde(default)]
    pub locations: Vec<serde_json::Value>,
    #[serde(default)]
    pub path: Vec<serde_json::Value>,
}

/// Connection counter such as `watchers { totalCount }`
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TotalCount {
    #[serde(rename = "totalCount")]
    pub total_count: u64,
}
