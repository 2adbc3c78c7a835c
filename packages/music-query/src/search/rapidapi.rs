//! RapidAPI Google search implementation of the `WebSearcher` trait.

use async_trait::async_trait;
use search_client::{GoogleSearchClient, SearchClientError, SearchHit, SearchParams};

use crate::error::{SearchError, SearchResult};
use crate::security::ServiceCredentials;
use crate::traits::searcher::{SearchRequest, Snippet, WebSearcher};

/// Web searcher backed by the `google-search74` RapidAPI endpoint.
pub struct RapidApiSearcher {
    client: GoogleSearchClient,
}

impl RapidApiSearcher {
    /// Create a searcher against the default host.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: GoogleSearchClient::new(api_key.into()),
        }
    }

    /// Create from injected credentials (key plus RapidAPI host).
    pub fn from_credentials(credentials: &ServiceCredentials) -> Self {
        Self {
            client: GoogleSearchClient::new(credentials.api_key.expose().to_string())
                .with_host(&credentials.endpoint),
        }
    }

    pub fn host(&self) -> &str {
        self.client.host()
    }
}

#[async_trait]
impl WebSearcher for RapidApiSearcher {
    async fn search(&self, request: &SearchRequest) -> SearchResult<Vec<Snippet>> {
        let params = SearchParams::new(&request.query, request.limit, request.related_keywords);
        let hits = self.client.search(&params).await.map_err(map_error)?;
        Ok(hits.into_iter().map(to_snippet).collect())
    }
}

fn to_snippet(hit: SearchHit) -> Snippet {
    Snippet {
        title: hit.title.unwrap_or_default(),
        description: hit.description.unwrap_or_default(),
        url: hit.url.unwrap_or_default(),
    }
}

fn map_error(error: SearchClientError) -> SearchError {
    match error {
        SearchClientError::Http(e) => SearchError::Http(Box::new(e)),
        SearchClientError::Api { status, message } => SearchError::Api { status, message },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_become_empty() {
        let snippet = to_snippet(SearchHit {
            title: Some("Tum Hi Ho".into()),
            description: None,
            url: None,
        });
        assert_eq!(snippet.title, "Tum Hi Ho");
        assert!(snippet.description.is_empty());
        assert!(snippet.url.is_empty());
    }

    #[test]
    fn test_api_error_mapping() {
        let err = map_error(SearchClientError::Api {
            status: 403,
            message: "not subscribed".into(),
        });
        assert!(matches!(err, SearchError::Api { status: 403, .. }));
    }

    #[test]
    fn test_host_from_credentials() {
        let creds = ServiceCredentials::rapidapi("key").with_endpoint("search.example.com");
        assert_eq!(
            RapidApiSearcher::from_credentials(&creds).host(),
            "search.example.com"
        );
        assert_eq!(
            RapidApiSearcher::new("key").host(),
            "google-search74.p.rapidapi.com"
        );
    }
}
