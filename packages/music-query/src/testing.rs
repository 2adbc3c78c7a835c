//! Testing utilities including mock collaborators.
//!
//! These are useful for exercising the assistant without making real
//! search or completion calls.

use std::collections::{HashMap, HashSet};
use std::sync::RwLock;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::{GenerationError, GenerationResult, SearchError, SearchResult};
use crate::traits::generator::{GenerationRequest, TextGenerator};
use crate::traits::searcher::{SearchRequest, Snippet, WebSearcher};

/// A mock web searcher.
///
/// Returns canned snippets per exact query string and records every call.
/// Queries with no canned results return an empty list.
#[derive(Default)]
pub struct MockWebSearcher {
    /// Predefined snippets by query
    results: RwLock<HashMap<String, Vec<Snippet>>>,

    /// Queries that fail with a 500
    failing: RwLock<HashSet<String>>,

    /// Every query fails with a 500
    fail_all: bool,

    /// Artificial latency per call
    delay: Option<Duration>,

    /// Call tracking for assertions
    calls: RwLock<Vec<SearchRequest>>,
}

impl MockWebSearcher {
    /// Create a new mock searcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add snippets for a query.
    pub fn with_results(self, query: impl Into<String>, snippets: Vec<Snippet>) -> Self {
        self.results.write().unwrap().insert(query.into(), snippets);
        self
    }

    /// Make one query fail.
    pub fn with_failure(self, query: impl Into<String>) -> Self {
        self.failing.write().unwrap().insert(query.into());
        self
    }

    /// Make every query fail.
    pub fn failing() -> Self {
        Self {
            fail_all: true,
            ..Default::default()
        }
    }

    /// Sleep before answering each call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// All recorded calls, in arrival order.
    pub fn calls(&self) -> Vec<SearchRequest> {
        self.calls.read().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }
}

#[async_trait]
impl WebSearcher for MockWebSearcher {
    async fn search(&self, request: &SearchRequest) -> SearchResult<Vec<Snippet>> {
        self.calls.write().unwrap().push(request.clone());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if self.fail_all || self.failing.read().unwrap().contains(&request.query) {
            return Err(SearchError::Api {
                status: 500,
                message: "mock search failure".to_string(),
            });
        }

        let mut snippets = self
            .results
            .read()
            .unwrap()
            .get(&request.query)
            .cloned()
            .unwrap_or_default();
        snippets.truncate(request.limit as usize);
        Ok(snippets)
    }
}

/// A mock text generator.
///
/// Answers every request with the same canned text (or error) and records
/// each request.
pub struct MockGenerator {
    outcome: GenerationResult<String>,
    delay: Option<Duration>,
    calls: RwLock<Vec<GenerationRequest>>,
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self {
            outcome: Ok("A generated response.".to_string()),
            delay: None,
            calls: RwLock::new(Vec::new()),
        }
    }
}

impl MockGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer with this text.
    pub fn with_response(mut self, text: impl Into<String>) -> Self {
        self.outcome = Ok(text.into());
        self
    }

    /// Fail every call with this error.
    pub fn with_error(mut self, error: GenerationError) -> Self {
        self.outcome = Err(error);
        self
    }

    /// Sleep before answering each call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> Vec<GenerationRequest> {
        self.calls.read().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, request: &GenerationRequest) -> GenerationResult<String> {
        self.calls.write().unwrap().push(request.clone());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.outcome.clone()
    }
}
