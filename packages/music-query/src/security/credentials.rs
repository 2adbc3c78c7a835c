//! Service credentials.
//!
//! Keys live in a `secrecy` box and never reach logs.

use secrecy::{ExposeSecret, SecretBox};
use std::fmt;

use openai_client::GROQ_BASE_URL;
use search_client::DEFAULT_HOST;

const REDACTED: &str = "[REDACTED]";

/// An API key for the search or generation service.
///
/// Prints as `[REDACTED]` under both `{}` and `{:?}`.
pub struct SecretString(SecretBox<str>);

impl SecretString {
    pub fn new(value: impl Into<String>) -> Self {
        Self(SecretBox::new(value.into().into_boxed_str()))
    }

    /// The raw key, for building request headers.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl Clone for SecretString {
    fn clone(&self) -> Self {
        Self::new(self.expose())
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

/// Key and endpoint for one external service, injected at startup.
#[derive(Clone)]
pub struct ServiceCredentials {
    /// API key (secret)
    pub api_key: SecretString,

    /// Base URL (generation) or RapidAPI host (search)
    pub endpoint: String,
}

impl ServiceCredentials {
    pub fn new(api_key: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key),
            endpoint: endpoint.into(),
        }
    }

    /// Credentials for Groq's OpenAI-compatible endpoint.
    pub fn groq(api_key: impl Into<String>) -> Self {
        Self::new(api_key, GROQ_BASE_URL)
    }

    /// Credentials for the RapidAPI Google search host.
    pub fn rapidapi(api_key: impl Into<String>) -> Self {
        Self::new(api_key, DEFAULT_HOST)
    }

    /// Override the endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

impl fmt::Debug for ServiceCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceCredentials")
            .field("api_key", &self.api_key)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}
