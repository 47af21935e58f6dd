//! Route handling for the results view
//!
//! The only route is `/repositories`, whose `q` query parameter seeds the
//! search term. Nested paths below it (`/repositories/...`) render the same
//! view; every other path redirects there with an empty term.

use anyhow::{Context, Result};
use url::Url;

use crate::types::SearchTerm;

/// Path of the repository search view
pub const REPOSITORIES_PATH: &str = "/repositories";

/// Query parameter holding the search term
pub const SEARCH_PARAM: &str = "q";

// Only used to resolve relative routes; never contacted.
const ROUTE_BASE: &str = "http://localhost";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Repositories { search_term: SearchTerm },
}

impl Route {
    pub fn search_term(&self) -> &SearchTerm {
        match self {
            Route::Repositories { search_term } => search_term,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Repositories { search_term } => results_path(search_term),
        }
    }
}

/// Builds `/repositories?q=<term>` with the term percent-encoded
pub fn results_path(search_term: &SearchTerm) -> String {
    format!(
        "{}?{}={}",
        REPOSITORIES_PATH,
        SEARCH_PARAM,
        urlencoding::encode(search_term.as_str())
    )
}

/// Resolves a route given as a path (`/repositories?q=react`) or a full URL.
///
/// `/repositories` and any path nested below it show the search view.
/// Unknown paths redirect to the search view with no term.
pub fn resolve(route: &str) -> Result<Route> {
    let base = Url::parse(ROUTE_BASE).context("Failed to parse route base")?;
    let url = base
        .join(route.trim())
        .with_context(|| format!("Invalid route: {}", route))?;

    if !is_repositories_path(url.path()) {
        tracing::debug!("Redirecting {} to {}", url.path(), REPOSITORIES_PATH);
        return Ok(Route::Repositories {
            search_term: SearchTerm::default(),
        });
    }

    let search_term = url
        .query_pairs()
        .find(|(key, _)| key == SEARCH_PARAM)
        .map(|(_, value)| SearchTerm::new(value.into_owned()))
        .unwrap_or_default();

    Ok(Route::Repositories { search_term })
}

/// Prefix match on whole path segments: `/repositories/extra` matches,
/// `/repositoriesfoo` does not.
fn is_repositories_path(path: &str) -> bool {
    match path.strip_prefix(REPOSITORIES_PATH) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_results_path_encodes_term() {
        assert_eq!(
            results_path(&SearchTerm::new("react")),
            "/repositories?q=react"
        );
        assert_eq!(
            results_path(&SearchTerm::new("rust lang&co")),
            "/repositories?q=rust%20lang%26co"
        );
        assert_eq!(results_path(&SearchTerm::default()), "/repositories?q=");
    }

    #[test]
    fn test_resolve_round_trip() {
        for term in ["react", "rust lang", "c++ & friends", "日本語", ""] {
            let term = SearchTerm::new(term);
            let route = resolve(&results_path(&term)).unwrap();
            assert_eq!(route.search_term(), &term);
        }
    }

    #[test]
    fn test_resolve_full_url_and_missing_param() {
        let route = resolve("https://example.com/repositories?q=tokio&page=2").unwrap();
        assert_eq!(route.search_term().as_str(), "tokio");

        let route = resolve("/repositories").unwrap();
        assert!(route.search_term().is_empty());

        let route = resolve("/repositories/?q=serde").unwrap();
        assert_eq!(route.search_term().as_str(), "serde");

        // Form-encoded spaces
        let route = resolve("/repositories?q=rust+web").unwrap();
        assert_eq!(route.search_term().as_str(), "rust web");
    }

    #[test]
    fn test_nested_paths_keep_search_view() {
        let route = resolve("/repositories/extra?q=x").unwrap();
        assert_eq!(route.search_term().as_str(), "x");

        let route = resolve("/repositories/a/b/").unwrap();
        assert!(route.search_term().is_empty());
    }

    #[test]
    fn test_unknown_paths_redirect() {
        for path in ["/", "/issues?q=bug", "/repositoriesfoo?q=x", "/repo?q=x"] {
            let route = resolve(path).unwrap();
            assert_eq!(route.path(), "/repositories?q=");
        }
    }
}
