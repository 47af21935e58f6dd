use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageInfo {
    #[serde(rename = "hasNextPage")]
    pub has_next_page: bool,
    #[serde(rename = "endCursor")]
    pub end_cursor: Option<String>,
}

impl PageInfo {
    pub fn next_cursor(&self) -> Option<crate::types::SearchCursor> {
        self.end_cursor.clone().map(crate::types::SearchCursor)
    }
}
