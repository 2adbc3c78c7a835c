use thiserror::Error;

pub type Result<T> = std::result::Result<T, SearchClientError>;

#[derive(Debug, Error)]
pub enum SearchClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("search API error (status {status}): {message}")]
    Api { status: u16, message: String },
}
