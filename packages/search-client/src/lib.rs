//! Pure RapidAPI Google search client.
//!
//! A minimal client for the `google-search74` RapidAPI endpoint: one GET
//! request per query, ranked `{title, description, url}` hits back.
//!
//! # Example
//!
//! ```rust,ignore
//! use search_client::{GoogleSearchClient, SearchParams};
//!
//! let client = GoogleSearchClient::new("your-rapidapi-key".into());
//!
//! let hits = client
//!     .search(&SearchParams::new("\"lag ja gale\" song", 10, true))
//!     .await?;
//! for hit in &hits {
//!     println!("{}", hit.title.as_deref().unwrap_or("(untitled)"));
//! }
//! ```

pub mod error;
pub mod types;

pub use error::{Result, SearchClientError};
pub use types::{SearchHit, SearchParams, SearchResponse};

pub const DEFAULT_HOST: &str = "google-search74.p.rapidapi.com";

pub struct GoogleSearchClient {
    client: reqwest::Client,
    api_key: String,
    host: String,
}

impl GoogleSearchClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            host: DEFAULT_HOST.to_string(),
        }
    }

    /// Point the client at a different RapidAPI host.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    fn endpoint(&self) -> String {
        format!("https://{}/", self.host)
    }

    /// Run one search and return its hits in rank order.
    pub async fn search(&self, params: &SearchParams) -> Result<Vec<SearchHit>> {
        let resp = self
            .client
            .get(self.endpoint())
            .header("x-rapidapi-key", &self.api_key)
            .header("x-rapidapi-host", &self.host)
            .query(params)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SearchClientError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body: SearchResponse = resp.json().await?;
        tracing::debug!(
            query = %params.query,
            count = body.results.len(),
            "Search completed"
        );
        Ok(body.results)
    }
}
