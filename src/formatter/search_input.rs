use crate::formatter::MarkdownContent;
use crate::navigation::{Route, resolve, results_path};
use crate::types::SearchTerm;

/// Draft text of the search box, submitted by navigating to the results route
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchInput {
    value: String,
}

impl SearchInput {
    pub fn new<T: Into<String>>(value: T) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Seeds the draft from the term currently in the route
    pub fn from_route(route: &Route) -> Self {
        Self::new(route.search_term().as_str())
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value<T: Into<String>>(&mut self, value: T) {
        self.value = value.into();
    }

    /// Path to navigate to for the current draft
    pub fn submit_path(&self) -> String {
        results_path(&SearchTerm::new(self.value.as_str()))
    }

    /// Submits the draft, returning the route it navigates to
    pub fn submit(&self) -> anyhow::Result<Route> {
        resolve(&self.submit_path())
    }
}

pub fn search_input_markdown(input: &SearchInput) -> MarkdownContent {
    let mut content = String::new();
    content.push_str("Search:\n");
    content.push_str(&format!("> {}\n", input.value()));
    content.push_str(&format!("[Search]({})\n", input.submit_path()));
    MarkdownContent(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_navigates_with_encoded_term() {
        let mut input = SearchInput::default();
        input.set_value("rust web");
        assert_eq!(input.submit_path(), "/repositories?q=rust%20web");

        let route = input.submit().unwrap();
        assert_eq!(route.search_term().as_str(), "rust web");
    }

    #[test]
    fn test_input_seeded_from_route() {
        let route = resolve("/repositories?q=tokio").unwrap();
        let input = SearchInput::from_route(&route);
        assert_eq!(input.value(), "tokio");

        let rendered = search_input_markdown(&input);
        assert!(rendered.as_str().starts_with("Search:\n"));
        assert!(rendered.as_str().contains("> tokio"));
        assert!(rendered.as_str().contains("(/repositories?q=tokio)"));
    }
}
