//! Typed errors for the music query library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) so the orchestrator
//! can decide, per variant, which localized failure a caller sees.

use thiserror::Error;

/// Errors raised by the query pipeline.
///
/// None of these ever reach a caller of `handle_query`; they are mapped to a
/// failed `MusicResponse` at the entry point.
#[derive(Debug, Error)]
pub enum MusicError {
    /// Web search collaborator failed
    #[error("search failed: {0}")]
    Search(#[from] SearchError),

    /// Text generation collaborator failed
    #[error("generation failed: {0}")]
    Generation(#[from] GenerationError),

    /// Info lookup finished but found nothing usable under the active policy
    #[error("no information found for: {song}")]
    NoInformation { song: String },

    /// Operation was cancelled
    #[error("operation cancelled")]
    Cancelled,

    /// Configuration error
    #[error("config error: {0}")]
    Config(String),

    /// Anything else
    #[error("internal error: {0}")]
    Internal(String),
}

impl MusicError {
    /// Whether this failure gets the per-intent "could not find / create /
    /// generate" message rather than the generic processing-error message.
    ///
    /// Network failures, non-success statuses, timeouts and empty data are
    /// collaborator failures. Malformed payloads, cancellation and internal
    /// errors are not.
    pub fn is_collaborator_failure(&self) -> bool {
        match self {
            Self::Search(e) => !matches!(e, SearchError::Cancelled),
            Self::Generation(e) => matches!(
                e,
                GenerationError::Network(_)
                    | GenerationError::Api { .. }
                    | GenerationError::EmptyResponse
                    | GenerationError::Timeout
            ),
            Self::NoInformation { .. } => true,
            Self::Cancelled | Self::Config(_) | Self::Internal(_) => false,
        }
    }
}

/// Errors from a web search call.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Transport failure
    #[error("HTTP error: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Non-success status from the search API
    #[error("search API returned {status}: {message}")]
    Api { status: u16, message: String },

    /// Call exceeded its timeout
    #[error("search timed out")]
    Timeout,

    /// Call was cancelled
    #[error("search cancelled")]
    Cancelled,
}

/// Errors from a text generation call.
#[derive(Debug, Clone, Error)]
pub enum GenerationError {
    /// Transport failure
    #[error("network error: {0}")]
    Network(String),

    /// Non-success status (or a completion with no choices)
    #[error("generation API returned {status}: {message}")]
    Api { status: u16, message: String },

    /// Completion envelope could not be parsed
    #[error("malformed completion: {0}")]
    Parse(String),

    /// Completion text was empty
    #[error("empty completion")]
    EmptyResponse,

    /// Call exceeded its timeout
    #[error("generation timed out")]
    Timeout,

    /// Call was cancelled
    #[error("generation cancelled")]
    Cancelled,
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, MusicError>;

/// Result type alias for search calls.
pub type SearchResult<T> = std::result::Result<T, SearchError>;

/// Result type alias for generation calls.
pub type GenerationResult<T> = std::result::Result<T, GenerationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collaborator_failures() {
        assert!(MusicError::from(GenerationError::Api {
            status: 500,
            message: "boom".into()
        })
        .is_collaborator_failure());
        assert!(MusicError::from(GenerationError::EmptyResponse).is_collaborator_failure());
        assert!(MusicError::from(GenerationError::Timeout).is_collaborator_failure());
        assert!(MusicError::from(SearchError::Timeout).is_collaborator_failure());
        assert!(MusicError::NoInformation {
            song: "tum hi ho".into()
        }
        .is_collaborator_failure());
    }

    #[test]
    fn test_internal_failures() {
        assert!(!MusicError::from(GenerationError::Parse("bad json".into())).is_collaborator_failure());
        assert!(!MusicError::from(GenerationError::Cancelled).is_collaborator_failure());
        assert!(!MusicError::from(SearchError::Cancelled).is_collaborator_failure());
        assert!(!MusicError::Cancelled.is_collaborator_failure());
        assert!(!MusicError::Internal("panic".into()).is_collaborator_failure());
    }
}
