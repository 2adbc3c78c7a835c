use std::sync::Arc;

use axum::http::header::CONTENT_TYPE;
use axum::http::Method;
use axum::routing::{get, post};
use axum::Router;
use music_query::{MusicAssistant, TextGenerator, WebSearcher};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::routes::{health_handler, query_handler};

/// Build the HTTP router around a shared assistant.
pub fn build_app<S, G>(assistant: Arc<MusicAssistant<S, G>>) -> Router
where
    S: WebSearcher + 'static,
    G: TextGenerator + 'static,
{
    // CORS configuration - allow any origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/api/query", post(query_handler::<S, G>))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(assistant)
}
