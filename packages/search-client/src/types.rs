use serde::{Deserialize, Serialize};

/// Query parameters for the `google-search74` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchParams {
    pub query: String,
    /// Sent as a string, the way the API documents it.
    pub limit: String,
    /// `"true"` or `"false"`.
    pub related_keywords: String,
}

impl SearchParams {
    pub fn new(query: impl Into<String>, limit: u32, related_keywords: bool) -> Self {
        Self {
            query: query.into(),
            limit: limit.to_string(),
            related_keywords: related_keywords.to_string(),
        }
    }
}

/// A single ranked result. Every field is optional in practice.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SearchHit {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Response envelope. A missing `results` key is an empty result set.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchHit>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_serialize_as_strings() {
        let params = SearchParams::new("\"tum hi ho\" song", 10, true);
        let json = serde_json::to_value(&params).unwrap();

        assert_eq!(json["limit"], "10");
        assert_eq!(json["related_keywords"], "true");
    }

    #[test]
    fn response_tolerates_missing_fields() {
        let response: SearchResponse = serde_json::from_str(
            r#"{"results":[{"title":"Tum Hi Ho - Aashiqui 2"},{"url":"https://gaana.com/song/tum-hi-ho"}]}"#,
        )
        .unwrap();

        assert_eq!(response.results.len(), 2);
        assert_eq!(response.results[0].description, None);
        assert_eq!(
            response.results[1].url.as_deref(),
            Some("https://gaana.com/song/tum-hi-ho")
        );
    }

    #[test]
    fn response_without_results_key() {
        let response: SearchResponse = serde_json::from_str(r#"{"status":"ok"}"#).unwrap();
        assert!(response.results.is_empty());
    }
}
