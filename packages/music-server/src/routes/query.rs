use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use music_query::{MusicAssistant, TextGenerator, WebSearcher};
use serde::Deserialize;
use serde_json::json;
use tracing::Instrument;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    #[serde(default)]
    pub query: String,
}

/// Answer one free-form song query.
///
/// Always 200 with a `MusicResponse`, failed or not; only a blank query is
/// rejected up front.
pub async fn query_handler<S, G>(
    State(assistant): State<Arc<MusicAssistant<S, G>>>,
    Json(request): Json<QueryRequest>,
) -> Response
where
    S: WebSearcher + 'static,
    G: TextGenerator + 'static,
{
    let query = request.query.trim();
    if query.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "query must not be empty" })),
        )
            .into_response();
    }

    let request_id = Uuid::new_v4();
    let response = assistant
        .handle_query(query)
        .instrument(tracing::info_span!("query", %request_id))
        .await;

    tracing::info!(
        %request_id,
        success = response.success,
        kind = ?response.kind,
        "Query answered"
    );

    Json(response).into_response()
}
