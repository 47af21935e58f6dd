use std::rc::Rc;

use futures::StreamExt;
use futures::future::{FutureExt, LocalBoxFuture};
use futures::stream::FuturesUnordered;

use crate::github::QueryExecutor;
use crate::services::pagination::{
    ApplyOutcome, ControllerState, FetchCompletion, FetchRequest, PaginationController, Phase,
};
use crate::types::SearchTerm;

/// Event loop around a [`PaginationController`].
///
/// Fetch requests become futures polled on the caller's task; their
/// completions are applied to the controller one at a time, so the state
/// is only ever mutated from a single place.
pub struct SearchSession<E: QueryExecutor + 'static> {
    executor: Rc<E>,
    controller: PaginationController,
    in_flight: FuturesUnordered<LocalBoxFuture<'static, FetchCompletion>>,
}

impl<E: QueryExecutor + 'static> SearchSession<E> {
    /// Creates the session and starts the first fetch for a non-empty term
    pub fn new(executor: E, initial_term: SearchTerm) -> Self {
        let (controller, request) = PaginationController::new(initial_term);
        let mut session = Self {
            executor: Rc::new(executor),
            controller,
            in_flight: FuturesUnordered::new(),
        };
        if let Some(request) = request {
            session.spawn(request);
        }
        session
    }

    pub fn state(&self) -> &ControllerState {
        self.controller.state()
    }

    pub fn phase(&self) -> Phase {
        self.controller.phase()
    }

    pub fn search_term(&self) -> &SearchTerm {
        self.controller.search_term()
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    /// Switches to a new search term.
    ///
    /// Setting the term that is already active does nothing. Requests still
    /// in flight for the previous term keep running but their results are
    /// discarded when they arrive.
    pub fn set_search_term(&mut self, term: SearchTerm) {
        if &term == self.controller.search_term() {
            tracing::debug!("Search term unchanged, not refetching");
            return;
        }
        if let Some(request) = self.controller.on_search_term_change(term) {
            self.spawn(request);
        }
    }

    /// Starts loading the next page. Returns `false` when the controller
    /// declined (already loading, no term, or no more results).
    pub fn fetch_more(&mut self) -> bool {
        match self.controller.fetch_more() {
            Some(request) => {
                self.spawn(request);
                true
            }
            None => false,
        }
    }

    fn spawn(&mut self, request: FetchRequest) {
        let executor = Rc::clone(&self.executor);
        let task = async move {
            let result = executor
                .execute(&request.search_term, request.cursor.as_ref())
                .await;
            FetchCompletion::new(&request, result)
        };
        self.in_flight.push(task.boxed_local());
    }

    /// Waits for the next in-flight request and applies its outcome.
    ///
    /// Returns `None` when nothing is in flight.
    pub async fn next_event(&mut self) -> Option<ApplyOutcome> {
        let completion = self.in_flight.next().await?;
        Some(self.controller.apply(completion))
    }

    /// Drains every in-flight request
    pub async fn settle(&mut self) {
        while self.next_event().await.is_some() {}
    }
}
