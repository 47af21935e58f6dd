//! Search term, cursor and page types
//!
//! This module provides the values that flow between the query executor
//! and the pagination controller.

use serde::{Deserialize, Serialize};

use super::RepositoryResult;

/// Represents the user-entered search text.
///
/// An empty term means no search has been performed yet, which is
/// distinct from a search that matched nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchTerm(pub String);

impl SearchTerm {
    pub fn new<T: Into<String>>(term: T) -> Self {
        Self(term.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SearchTerm {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for SearchTerm {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Opaque continuation token returned by the API's `pageInfo.endCursor`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCursor(pub String);

impl SearchCursor {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SearchCursor {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// One bounded batch of repositories returned by a single search request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultPage {
    pub items: Vec<RepositoryResult>,
    pub has_next_page: bool,
    pub end_cursor: Option<SearchCursor>,
}

impl ResultPage {
    pub fn new(
        items: Vec<RepositoryResult>,
        has_next_page: bool,
        end_cursor: Option<SearchCursor>,
    ) -> Self {
        Self {
            items,
            has_next_page,
            end_cursor,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
