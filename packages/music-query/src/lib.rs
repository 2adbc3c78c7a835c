//! Bilingual Song Query Library
//!
//! Answers free-form questions about songs, written in Hindi (Devanagari),
//! English, or a mix of both.
//!
//! # Design
//!
//! - Heuristic classification, no model in the loop for intent
//! - Web snippets for facts, a chat model only for creative text
//! - Every failure becomes a localized, displayable response
//! - Collaborators sit behind traits so tests never touch the network
//!
//! # Usage
//!
//! ```rust,ignore
//! use music_query::{MusicAssistant, OpenAiGenerator, RapidApiSearcher};
//!
//! let assistant = MusicAssistant::new(
//!     RapidApiSearcher::new(rapidapi_key),
//!     OpenAiGenerator::new(groq_key),
//! );
//!
//! // Facts from the web
//! let info = assistant.handle_query("who sang tum hi ho").await;
//!
//! // A story summary in Hindi
//! let story = assistant.handle_query("लग जा गले गाने की कहानी बताओ").await;
//!
//! println!("{}", story.formatted_response);
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Collaborator abstractions (WebSearcher, TextGenerator)
//! - [`types`] - Query, song, response and config types
//! - [`pipeline`] - Detection, extraction, generation and formatting
//! - [`ai`] - OpenAI-compatible text generator
//! - [`search`] - RapidAPI web searcher
//! - [`testing`] - Mock collaborators

pub mod ai;
pub mod error;
pub mod pipeline;
pub mod search;
pub mod security;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use error::{GenerationError, MusicError, Result, SearchError};
pub use traits::{
    generator::{GenerationRequest, PromptMessage, Role, TextGenerator},
    searcher::{SearchRequest, Snippet, WebSearcher},
};
pub use types::{
    config::{AssistantConfig, InfoSuccessPolicy},
    lexicon::{Lexicon, SongField},
    query::{Intent, Language, QueryAnalysis, ResultKind, Script},
    response::{MusicPayload, MusicResponse},
    song::{ContinuationLyrics, SongInfo, StorySummary},
};

// Re-export the assistant and detection entry points
pub use pipeline::{classify, classify_with, format_payload, MusicAssistant};

// Re-export collaborator implementations
pub use ai::OpenAiGenerator;
pub use search::RapidApiSearcher;
pub use security::{SecretString, ServiceCredentials};

pub use testing::{MockGenerator, MockWebSearcher};
