//! OpenAI-compatible implementation of the `TextGenerator` trait.
//!
//! Pointed at Groq's endpoint by default.
//!
//! # Example
//!
//! ```rust,ignore
//! use music_query::ai::OpenAiGenerator;
//!
//! let generator = OpenAiGenerator::new("gsk-...");
//! let assistant = MusicAssistant::new(searcher, generator);
//! ```

use async_trait::async_trait;
use openai_client::{ChatRequest, Message, OpenAIClient, OpenAIError, GROQ_BASE_URL};
use tracing::debug;

use crate::error::{GenerationError, GenerationResult};
use crate::security::ServiceCredentials;
use crate::traits::generator::{GenerationRequest, Role, TextGenerator};

/// Chat-completion backed text generator.
#[derive(Clone)]
pub struct OpenAiGenerator {
    client: OpenAIClient,
}

impl OpenAiGenerator {
    /// Create a generator against Groq with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: OpenAIClient::new(api_key).with_base_url(GROQ_BASE_URL),
        }
    }

    /// Create from injected credentials (key plus base URL).
    pub fn from_credentials(credentials: &ServiceCredentials) -> Self {
        Self::from_client(
            OpenAIClient::new(credentials.api_key.expose()).with_base_url(&credentials.endpoint),
        )
    }

    /// Wrap an already configured client.
    pub fn from_client(client: OpenAIClient) -> Self {
        Self { client }
    }

    /// Get the base URL requests go to.
    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }
}

#[async_trait]
impl TextGenerator for OpenAiGenerator {
    async fn generate(&self, request: &GenerationRequest) -> GenerationResult<String> {
        let response = self
            .client
            .chat_completion(to_chat_request(request))
            .await
            .map_err(map_error)?;

        if response.content.trim().is_empty() {
            return Err(GenerationError::EmptyResponse);
        }

        if let Some(usage) = &response.usage {
            debug!(
                model = %request.model,
                total_tokens = usage.total_tokens,
                "Generation usage"
            );
        }

        Ok(response.content)
    }
}

fn to_chat_request(request: &GenerationRequest) -> ChatRequest {
    request
        .messages
        .iter()
        .fold(ChatRequest::new(&request.model), |chat, m| {
            chat.message(match m.role {
                Role::System => Message::system(&m.content),
                Role::User => Message::user(&m.content),
            })
        })
        .temperature(request.temperature)
        .max_tokens(request.max_tokens)
}

fn map_error(error: OpenAIError) -> GenerationError {
    match error {
        OpenAIError::Network(message) | OpenAIError::Config(message) => {
            GenerationError::Network(message)
        }
        OpenAIError::Api { status, message } => GenerationError::Api { status, message },
        OpenAIError::Parse(message) => GenerationError::Parse(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_mapping() {
        let request = GenerationRequest::new("llama3-70b-8192", "sys", "usr", 0.7, 1000);
        let chat = to_chat_request(&request);

        assert_eq!(chat.model, "llama3-70b-8192");
        assert_eq!(chat.messages, vec![Message::system("sys"), Message::user("usr")]);
        assert_eq!(chat.temperature, Some(0.7));
        assert_eq!(chat.max_tokens, Some(1000));
    }

    #[test]
    fn test_error_mapping() {
        assert!(matches!(
            map_error(OpenAIError::Api {
                status: 429,
                message: "rate limited".into()
            }),
            GenerationError::Api { status: 429, .. }
        ));
        assert!(matches!(
            map_error(OpenAIError::Parse("eof".into())),
            GenerationError::Parse(_)
        ));
        assert!(matches!(
            map_error(OpenAIError::Network("refused".into())),
            GenerationError::Network(_)
        ));
    }

    #[test]
    fn test_defaults_to_groq() {
        assert_eq!(OpenAiGenerator::new("gsk-test").base_url(), GROQ_BASE_URL);

        let creds = ServiceCredentials::groq("gsk-test").with_endpoint("http://localhost:8000/v1/");
        assert_eq!(
            OpenAiGenerator::from_credentials(&creds).base_url(),
            "http://localhost:8000/v1"
        );
    }
}
