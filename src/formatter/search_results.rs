use serde::Serialize;

use crate::formatter::MarkdownContent;
use crate::services::ControllerState;
use crate::types::RepositoryResult;

pub const ERROR_MESSAGE: &str = "Error fetching repositories";
pub const LOADING_MESSAGE: &str = "Searching repositories...";
pub const EMPTY_MESSAGE: &str = "No results to display";
pub const END_OF_RESULTS_MESSAGE: &str = "End of results";
pub const FETCHING_MORE_MESSAGE: &str = "Fetching more results...";
pub const LOAD_MORE_LABEL: &str = "Load more results";

/// What the results area shows for a given controller state
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum ResultsView<'a> {
    Error,
    Loading,
    Empty,
    Items {
        items: &'a [RepositoryResult],
        footer: ResultsFooter,
    },
}

/// Line shown under a non-empty result list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultsFooter {
    EndOfResults,
    FetchingMore,
    LoadMore,
}

impl<'a> ResultsView<'a> {
    pub fn from_state(state: &'a ControllerState) -> Self {
        if state.error.is_some() {
            return ResultsView::Error;
        }
        if state.loading && state.items.is_empty() {
            return ResultsView::Loading;
        }
        if state.items.is_empty() {
            return ResultsView::Empty;
        }

        let footer = if !state.has_more {
            ResultsFooter::EndOfResults
        } else if state.loading {
            ResultsFooter::FetchingMore
        } else {
            ResultsFooter::LoadMore
        };

        ResultsView::Items {
            items: &state.items,
            footer,
        }
    }

    /// Whether the "load more" trigger is offered
    pub fn can_load_more(&self) -> bool {
        matches!(
            self,
            ResultsView::Items {
                footer: ResultsFooter::LoadMore,
                ..
            }
        )
    }
}

pub fn repository_counts_line(repository: &RepositoryResult) -> String {
    format!(
        "{} watchers - {} stars",
        repository.watcher_count, repository.star_count
    )
}

pub fn repository_result_markdown(repository: &RepositoryResult) -> MarkdownContent {
    let mut content = String::new();
    content.push_str(&format!("### {}\n", repository.name));
    content.push_str(&format!("#### {}\n", repository.id));
    content.push_str(&format!("{}\n", repository_counts_line(repository)));
    MarkdownContent(content)
}

pub fn search_results_markdown(view: &ResultsView<'_>) -> MarkdownContent {
    let content = match view {
        ResultsView::Error => format!("{}\n", ERROR_MESSAGE),
        ResultsView::Loading => format!("{}\n", LOADING_MESSAGE),
        ResultsView::Empty => format!("{}\n", EMPTY_MESSAGE),
        ResultsView::Items { items, footer } => {
            let mut content = String::new();
            for repository in items.iter() {
                content.push_str(repository_result_markdown(repository).as_str());
                content.push('\n');
            }
            match footer {
                ResultsFooter::EndOfResults => {
                    content.push_str(&format!("*{}*\n", END_OF_RESULTS_MESSAGE))
                }
                ResultsFooter::FetchingMore => {
                    content.push_str(&format!("*{}*\n", FETCHING_MORE_MESSAGE))
                }
                ResultsFooter::LoadMore => content.push_str(&format!("[{}]\n", LOAD_MORE_LABEL)),
            }
            content
        }
    };

    MarkdownContent(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::SearchError;
    use crate::types::{RepositoryNodeId, SearchCursor};

    fn repository(id: &str, watchers: u64, stars: u64) -> RepositoryResult {
        RepositoryResult::new(RepositoryNodeId::new(id), format!("name-{}", id), watchers, stars)
    }

    fn state_with(items: Vec<RepositoryResult>, loading: bool, has_more: bool) -> ControllerState {
        ControllerState {
            items,
            loading,
            error: None,
            has_more,
            cursor: Some(SearchCursor::from("c")),
        }
    }

    #[test]
    fn test_counts_line() {
        let rendered = repository_result_markdown(&repository("R_1", 42, 7));
        assert!(rendered.as_str().contains("42 watchers - 7 stars"));
        assert!(rendered.as_str().contains("### name-R_1"));
        assert!(rendered.as_str().contains("#### R_1"));
    }

    #[test]
    fn test_error_wins_over_items() {
        let mut state = state_with(vec![repository("R_1", 1, 1)], true, true);
        state.error = Some(SearchError::Network("down".to_string()));
        let view = ResultsView::from_state(&state);
        assert_eq!(view, ResultsView::Error);
        assert_eq!(search_results_markdown(&view).as_str(), "Error fetching repositories\n");
    }

    #[test]
    fn test_loading_without_items() {
        let state = state_with(Vec::new(), true, false);
        let view = ResultsView::from_state(&state);
        assert_eq!(view, ResultsView::Loading);
        assert!(search_results_markdown(&view).as_str().contains(LOADING_MESSAGE));
    }

    #[test]
    fn test_no_results() {
        let state = ControllerState::default();
        let view = ResultsView::from_state(&state);
        assert_eq!(view, ResultsView::Empty);
        assert!(search_results_markdown(&view).as_str().contains(EMPTY_MESSAGE));
    }

    #[test]
    fn test_footers() {
        let items = vec![repository("R_1", 1, 2)];

        let state = state_with(items.clone(), false, false);
        let view = ResultsView::from_state(&state);
        assert!(search_results_markdown(&view).as_str().contains(END_OF_RESULTS_MESSAGE));
        assert!(!view.can_load_more());

        let state = state_with(items.clone(), true, true);
        let view = ResultsView::from_state(&state);
        assert!(search_results_markdown(&view).as_str().contains(FETCHING_MORE_MESSAGE));
        assert!(!view.can_load_more());

        let state = state_with(items, false, true);
        let view = ResultsView::from_state(&state);
        assert!(search_results_markdown(&view).as_str().contains(LOAD_MORE_LABEL));
        assert!(view.can_load_more());
    }

    #[test]
    fn test_view_serializes_with_tag() {
        let state = state_with(vec![repository("R_9", 3, 4)], false, false);
        let json = serde_json::to_value(ResultsView::from_state(&state)).unwrap();
        assert_eq!(json["view"], "items");
        assert_eq!(json["footer"], "end_of_results");
        assert_eq!(json["items"][0]["watcher_count"], 3);

        let json = serde_json::to_value(ResultsView::Empty).unwrap();
        assert_eq!(json["view"], "empty");
    }
}
