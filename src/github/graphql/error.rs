use crate::github::error::SearchError;
use crate::github::graphql::graphql_types::GraphQLError;

/// Converts the `errors` array of a GraphQL response into an API error.
///
/// GitHub answers 200 OK for query-level failures (rate limits, invalid
/// search syntax), so these never reach the HTTP error path.
pub fn classify_graphql_errors(errors: &[GraphQLError]) -> SearchError {
    let error_msg = errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    if error_msg.contains("rate limit") || error_msg.contains("API rate limit") {
        tracing::warn!("GraphQL rate limit error: {}", error_msg);
        SearchError::Api(format!("GraphQL rate limit error: {}", error_msg))
    } else {
        tracing::warn!("GraphQL error: {}", error_msg);
        SearchError::Api(format!("GraphQL error: {}", error_msg))
    }
}
