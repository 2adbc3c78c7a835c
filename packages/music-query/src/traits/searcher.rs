//! Web searcher trait for the info path.
//!
//! An info query fans out to several searches; each returns ranked
//! snippets that the field extractor scans. This trait abstracts over the
//! search provider (RapidAPI Google search in production, a mock in tests).

use async_trait::async_trait;

use crate::error::SearchResult;

/// One search-result item.
///
/// All three fields are optional in the provider's payload; an empty
/// string means absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snippet {
    pub title: String,
    pub description: String,
    pub url: String,
}

impl Snippet {
    /// Create a snippet from a title and description.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            url: String::new(),
        }
    }

    /// Create a snippet carrying only a URL.
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Add a URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Lower-cased `title + " " + description`, the text keyword anchors scan.
    pub fn text_lower(&self) -> String {
        self.text().to_lowercase()
    }

    /// `title + " " + description` with original casing.
    pub fn text(&self) -> String {
        format!("{} {}", self.title, self.description)
    }
}

/// A single search call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,

    /// Maximum number of results wanted
    pub limit: u32,

    /// Whether the provider should also match related keywords
    pub related_keywords: bool,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>, limit: u32, related_keywords: bool) -> Self {
        Self {
            query: query.into(),
            limit,
            related_keywords,
        }
    }
}

/// Web search collaborator.
///
/// # Implementations
///
/// - `RapidApiSearcher` - RapidAPI Google search
/// - `MockWebSearcher` - For testing
#[async_trait]
pub trait WebSearcher: Send + Sync {
    /// Run one search and return its snippets in rank order.
    async fn search(&self, request: &SearchRequest) -> SearchResult<Vec<Snippet>>;
}
