use serde::Serialize;

use crate::types::{SearchCursor, SearchTerm};

/// Number of repositories requested per page
pub const SEARCH_PAGE_SIZE: u32 = 25;

/// Qualifiers appended to every raw search term: match on repository
/// name only, most starred first.
const SEARCH_QUALIFIERS: &str = "in:name sort:stars-desc";

#[derive(Debug, Clone, Serialize)]
pub struct SearchVariable {
    pub search: String,
    pub cursor: Option<String>,
}

impl SearchVariable {
    pub fn new(term: &SearchTerm, cursor: Option<&SearchCursor>) -> Self {
        Self {
            search: qualified_search_query(term),
            cursor: cursor.map(|c| c.0.clone()),
        }
    }
}

pub fn qualified_search_query(term: &SearchTerm) -> String {
    format!("{} {}", term.as_str(), SEARCH_QUALIFIERS)
}

pub fn repository_search_query() -> String {
    format!(
        r#"
        query($search: String!, $cursor: String) {{
            search(query: $search, type: REPOSITORY, first: {}, after: $cursor) {{
                nodes {{
                    ... on Repository {{
                        id
                        name
                        watchers {{
                            totalCount
                        }}
                        stargazers {{
                            totalCount
                        }}
                    }}
                }}
                pageInfo {{
                    hasNextPage
                    endCursor
                }}
            }}
        }}"#,
        SEARCH_PAGE_SIZE
    )
}
