pub mod client;
pub mod error;
pub mod graphql;

pub use client::{GitHubClient, QueryExecutor};
pub use error::SearchError;
pub use graphql::graphql_types;
