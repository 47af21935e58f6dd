//! Pagination controller for repository search
//!
//! The controller is a plain state machine. It never performs I/O itself:
//! term changes and `fetch_more` hand back a [`FetchRequest`], and the
//! caller feeds the outcome of that request back through [`PaginationController::apply`].
//! Every request is tagged with the generation of the search term it was
//! issued for, so a completion that arrives after the term changed is
//! dropped instead of being mixed into the new results.

use serde::Serialize;
use strum::Display;
use tracing::{debug, warn};

use crate::github::SearchError;
use crate::types::{RepositoryResult, ResultPage, SearchCursor, SearchTerm};

/// Accumulated results and fetch flags for the current search term
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ControllerState {
    pub items: Vec<RepositoryResult>,
    pub loading: bool,
    #[serde(serialize_with = "serialize_error")]
    pub error: Option<SearchError>,
    pub has_more: bool,
    pub cursor: Option<SearchCursor>,
}

fn serialize_error<S: serde::Serializer>(
    error: &Option<SearchError>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match error {
        Some(e) => serializer.serialize_some(&e.to_string()),
        None => serializer.serialize_none(),
    }
}

/// Lifecycle phase derived from [`ControllerState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Phase {
    /// No search term
    Idle,
    /// First page in flight
    FetchingFirstPage,
    /// Follow-up page in flight
    FetchingNextPage,
    Loaded { has_more: bool },
    Errored,
}

/// A single search request the caller must run against a query executor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub generation: u64,
    pub search_term: SearchTerm,
    pub cursor: Option<SearchCursor>,
}

/// Outcome of a [`FetchRequest`]
#[derive(Debug, Clone)]
pub struct FetchCompletion {
    pub generation: u64,
    pub result: Result<ResultPage, SearchError>,
}

impl FetchCompletion {
    pub fn new(request: &FetchRequest, result: Result<ResultPage, SearchError>) -> Self {
        Self {
            generation: request.generation,
            result,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied,
    /// The completion belonged to a superseded search term
    Stale,
}

#[derive(Debug, Default)]
pub struct PaginationController {
    search_term: SearchTerm,
    generation: u64,
    state: ControllerState,
}

impl PaginationController {
    /// Creates the controller for the initial term and returns the first
    /// request to run, if the term is non-empty.
    pub fn new(initial_term: SearchTerm) -> (Self, Option<FetchRequest>) {
        let mut controller = Self::default();
        let request = controller.on_search_term_change(initial_term);
        (controller, request)
    }

    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    pub fn search_term(&self) -> &SearchTerm {
        &self.search_term
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn phase(&self) -> Phase {
        if self.search_term.is_empty() {
            Phase::Idle
        } else if self.state.loading {
            if self.state.items.is_empty() && self.state.cursor.is_none() {
                Phase::FetchingFirstPage
            } else {
                Phase::FetchingNextPage
            }
        } else if self.state.error.is_some() {
            Phase::Errored
        } else {
            Phase::Loaded {
                has_more: self.state.has_more,
            }
        }
    }

    /// Resets all accumulated results for a new term.
    ///
    /// Returns the fetch-from-start request, or `None` for an empty term.
    pub fn on_search_term_change(&mut self, term: SearchTerm) -> Option<FetchRequest> {
        self.generation += 1;
        self.search_term = term;
        self.state = ControllerState::default();

        debug!(
            "Search term changed to {:?} (generation {})",
            self.search_term.as_str(),
            self.generation
        );

        if self.search_term.is_empty() {
            return None;
        }

        Some(self.begin_fetch())
    }

    /// Requests the next page using the current term and cursor.
    ///
    /// Returns `None` while a request is already in flight, when there is no
    /// search term, or when the last page has been reached. After a failed
    /// attempt this retries from the last known cursor.
    pub fn fetch_more(&mut self) -> Option<FetchRequest> {
        if self.state.loading {
            debug!("fetch_more ignored: request already in flight");
            return None;
        }
        if self.search_term.is_empty() {
            return None;
        }
        if !self.state.has_more && self.state.error.is_none() {
            debug!("fetch_more ignored: no more results");
            return None;
        }

        Some(self.begin_fetch())
    }

    fn begin_fetch(&mut self) -> FetchRequest {
        self.state.loading = true;
        self.state.error = None;

        FetchRequest {
            generation: self.generation,
            search_term: self.search_term.clone(),
            cursor: self.state.cursor.clone(),
        }
    }

    /// Applies the outcome of a request issued by this controller
    pub fn apply(&mut self, completion: FetchCompletion) -> ApplyOutcome {
        if completion.generation != self.generation {
            warn!(
                "Discarding stale search response (generation {}, current {})",
                completion.generation, self.generation
            );
            return ApplyOutcome::Stale;
        }

        match completion.result {
            Ok(page) => {
                debug!(
                    "Received {} repositories for {:?} (has_next_page: {})",
                    page.items.len(),
                    self.search_term.as_str(),
                    page.has_next_page
                );
                self.state.items.extend(page.items);
                self.state.has_more = page.has_next_page;
                self.state.cursor = page.end_cursor;
            }
            Err(e) => {
                warn!("Search for {:?} failed: {}", self.search_term.as_str(), e);
                self.state.error = Some(e);
            }
        }
        self.state.loading = false;

        debug!("Controller phase: {}", self.phase());
        ApplyOutcome::Applied
    }
}
