//! Shared fakes for driving the search session without the network

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use tokio::sync::oneshot;

use repo_search::github::{QueryExecutor, SearchError};
use repo_search::types::{RepositoryNodeId, RepositoryResult, ResultPage, SearchCursor, SearchTerm};

/// A recorded executor call: the term and the cursor it was issued with
pub type ExecutorCall = (String, Option<String>);

/// Builds a page of `count` repositories numbered from `start`
pub fn repository_page(
    start: usize,
    count: usize,
    has_next_page: bool,
    end_cursor: Option<&str>,
) -> ResultPage {
    let items = (start..start + count)
        .map(|i| {
            RepositoryResult::new(
                RepositoryNodeId::new(format!("R_{}", i)),
                format!("repository-{}", i),
                (i % 50) as u64,
                (1000 - i) as u64,
            )
        })
        .collect();
    ResultPage::new(items, has_next_page, end_cursor.map(SearchCursor::from))
}

/// Answers calls in order from a fixed script and records every call
pub struct ScriptedExecutor {
    responses: RefCell<VecDeque<Result<ResultPage, SearchError>>>,
    calls: Rc<RefCell<Vec<ExecutorCall>>>,
}

impl ScriptedExecutor {
    pub fn new(responses: Vec<Result<ResultPage, SearchError>>) -> Self {
        Self {
            responses: RefCell::new(responses.into()),
            calls: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Handle to inspect the calls after the executor moved into a session
    pub fn calls(&self) -> Rc<RefCell<Vec<ExecutorCall>>> {
        Rc::clone(&self.calls)
    }
}

impl QueryExecutor for ScriptedExecutor {
    async fn execute(
        &self,
        search_term: &SearchTerm,
        cursor: Option<&SearchCursor>,
    ) -> Result<ResultPage, SearchError> {
        self.calls.borrow_mut().push((
            search_term.as_str().to_string(),
            cursor.map(|c| c.as_str().to_string()),
        ));
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(SearchError::Api("no scripted response left".to_string())))
    }
}

/// Holds every request open until the test releases it, keyed by search term
pub struct GatedExecutor {
    gates: RefCell<HashMap<String, oneshot::Receiver<Result<ResultPage, SearchError>>>>,
}

impl GatedExecutor {
    pub fn new() -> Self {
        Self {
            gates: RefCell::new(HashMap::new()),
        }
    }

    /// Registers the gate for a term and returns the sender that releases it
    pub fn gate(&self, term: &str) -> oneshot::Sender<Result<ResultPage, SearchError>> {
        let (tx, rx) = oneshot::channel();
        self.gates.borrow_mut().insert(term.to_string(), rx);
        tx
    }
}

impl QueryExecutor for GatedExecutor {
    async fn execute(
        &self,
        search_term: &SearchTerm,
        _cursor: Option<&SearchCursor>,
    ) -> Result<ResultPage, SearchError> {
        let gate = self.gates.borrow_mut().remove(search_term.as_str());
        match gate {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(SearchError::Network("gate dropped".to_string()))),
            None => Err(SearchError::Api(format!("no gate for {}", search_term))),
        }
    }
}
