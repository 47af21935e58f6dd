pub mod search_input;
pub mod search_results;

use serde::{Deserialize, Serialize};

pub use search_input::*;
pub use search_results::*;

use crate::services::ControllerState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkdownContent(pub String);

impl MarkdownContent {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MarkdownContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Renders the whole search page: heading, input, and results
pub fn search_page_markdown(input: &SearchInput, state: &ControllerState) -> MarkdownContent {
    let mut content = String::new();

    content.push_str("# Repository Search\n\n");
    content.push_str(search_input_markdown(input).as_str());
    content.push('\n');
    content.push_str("## Results\n\n");
    content.push_str(search_results_markdown(&ResultsView::from_state(state)).as_str());

    MarkdownContent(content)
}
