use thiserror::Error;

/// Failure of a single search request.
///
/// Both variants propagate unchanged from the executor to the pagination
/// controller, which stores them in its state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Transport failure: connection, TLS, timeout, HTTP layer
    #[error("Network error: {0}")]
    Network(String),
    /// Non-2xx status, GraphQL error payload or malformed response
    #[error("API error: {0}")]
    Api(String),
}

impl SearchError {
    /// Convert octocrab error to the network/API split
    pub fn from_octocrab_error(error: octocrab::Error) -> Self {
        tracing::debug!("Raw octocrab error: {:?}", error);

        let result = match &error {
            octocrab::Error::GitHub { source, .. } => {
                let status = source.status_code.as_u16();
                let detailed_error = format!(
                    "GitHub API error - Status: {}, Message: {:?}, Documentation: {:?}",
                    status, source.message, source.documentation_url
                );
                tracing::error!("GitHub API error details: {}", detailed_error);
                Self::Api(detailed_error)
            }
            octocrab::Error::Json { .. } | octocrab::Error::Serde { .. } => {
                let error_msg = format!("Malformed response: {}", error);
                tracing::error!("{}", error_msg);
                Self::Api(error_msg)
            }
            octocrab::Error::Http { .. } => Self::Network(format!("HTTP layer error: {}", error)),
            octocrab::Error::Hyper { .. } => Self::Network(format!("Hyper HTTP error: {}", error)),
            octocrab::Error::Service { .. } => Self::Network(format!("Service error: {}", error)),
            _ => Self::Network(format!("Request failed: {}", error)),
        };

        tracing::debug!("Error classification result: {:?}", result);
        result
    }

    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}
