use crate::config::SearchConfig;
use crate::github::error::SearchError;
use crate::types::{RepositoryResult, ResultPage, SearchCursor, SearchTerm};

use super::graphql::error::classify_graphql_errors;
use super::graphql::graphql_types::{
    GraphQLPayload, GraphQLQuery, GraphQLResponse, SearchResponse,
};
use super::graphql::search::{SearchVariable, repository_search_query};

use anyhow::{Context, Result};
use octocrab::Octocrab;
use octocrab::service::middleware::retry::RetryConfig;
use serde::{Deserialize, Serialize};
use tokio::time::Duration;
use tracing::{error, info};

/// Runs one paginated repository search.
///
/// This is the seam between the pagination controller and the network:
/// the production implementation is [`GitHubClient`], tests substitute a
/// scripted fake.
pub trait QueryExecutor {
    #[allow(async_fn_in_trait)]
    async fn execute(
        &self,
        search_term: &SearchTerm,
        cursor: Option<&SearchCursor>,
    ) -> std::result::Result<ResultPage, SearchError>;
}

#[derive(Clone)]
pub struct GitHubClient {
    pub(crate) client: octocrab::Octocrab,
}

impl GitHubClient {
    pub fn new(config: &SearchConfig) -> Result<Self> {
        // Requests are never retried; one failed attempt is reported as is
        let mut builder = Octocrab::builder()
            .personal_token(config.api_token.clone())
            .add_retry_config(RetryConfig::None);

        if let Some(base_uri) = &config.api_base_uri {
            builder = builder
                .base_uri(base_uri.as_str())
                .with_context(|| format!("Invalid API base URI: {}", base_uri))?;
        }

        if let Some(timeout_duration) = config.request_timeout {
            let connection_timeout = std::cmp::min(timeout_duration, Duration::from_secs(10));
            let read_write_timeout = std::cmp::max(timeout_duration, Duration::from_secs(1));

            builder = builder
                .set_connect_timeout(Some(connection_timeout))
                .set_read_timeout(Some(read_write_timeout))
                .set_write_timeout(Some(read_write_timeout));
        }

        let client = builder.build().context("Failed to build GitHub client")?;

        Ok(Self { client })
    }

    async fn execute_graphql<T: Serialize, R: for<'de> Deserialize<'de>>(
        &self,
        query_name: &str,
        payload: GraphQLPayload<T>,
    ) -> std::result::Result<R, SearchError> {
        info!(
            "Starting GraphQL request {} with variables: {}",
            query_name,
            serde_json::to_string(&payload.variables).unwrap_or_else(|_| "Invalid JSON".to_string())
        );

        let start_time = std::time::Instant::now();

        let response: GraphQLResponse<R> = self
            .client
            .graphql(&payload)
            .await
            .map_err(SearchError::from_octocrab_error)?;

        info!(
            "GraphQL request {} completed in {:?}",
            query_name,
            start_time.elapsed()
        );

        if let Some(errors) = &response.errors {
            if !errors.is_empty() {
                return Err(classify_graphql_errors(errors));
            }
        }

        response.data.ok_or_else(|| {
            error!("No data in GraphQL {} response", query_name);
            SearchError::Api(format!("No data in GraphQL {} response", query_name))
        })
    }
}

impl QueryExecutor for GitHubClient {
    /// Searches repositories whose name matches the term, most starred first.
    ///
    /// Fetches one page of [`SEARCH_PAGE_SIZE`](super::graphql::search::SEARCH_PAGE_SIZE)
    /// repositories starting after `cursor`, or from the first result when no
    /// cursor is given.
    async fn execute(
        &self,
        search_term: &SearchTerm,
        cursor: Option<&SearchCursor>,
    ) -> std::result::Result<ResultPage, SearchError> {
        let payload = GraphQLPayload {
            query: GraphQLQuery(repository_search_query()),
            variables: Some(SearchVariable::new(search_term, cursor)),
        };

        let data: SearchResponse = self.execute_graphql("repository_search", payload).await?;

        let page_info = data.search.page_info.clone();
        let items: Vec<RepositoryResult> = data
            .search
            .repositories()
            .map(RepositoryResult::from)
            .collect();

        Ok(ResultPage {
            items,
            has_next_page: page_info.has_next_page,
            end_cursor: page_info.next_cursor(),
        })
    }
}
