//! Configuration for the query assistant.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// When an info lookup counts as a success.
///
/// The search fan-out tolerates every individual failure, so an info query
/// can finish with nothing but boilerplate. This decides what that means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InfoSuccessPolicy {
    /// A skeleton `SongInfo` (title, fallback popularity, templated
    /// description) is a degraded success.
    #[default]
    AlwaysSucceed,

    /// At least one factual field, award or legal link must have been
    /// extracted; otherwise the query fails with "could not find".
    RequireExtractedField,
}

impl std::str::FromStr for InfoSuccessPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "always" | "always-succeed" => Ok(Self::AlwaysSucceed),
            "require-field" | "require-extracted-field" => Ok(Self::RequireExtractedField),
            other => Err(format!("unknown info success policy: {}", other)),
        }
    }
}

/// Knobs for collaborator calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// Chat model identifier sent to the text generator.
    ///
    /// Default: "llama3-70b-8192".
    pub model: String,

    /// Sampling temperature for story summaries. Default: 0.7.
    pub story_temperature: f32,

    /// Output token cap for story summaries. Default: 1000.
    pub story_max_tokens: u32,

    /// Sampling temperature for verse generation. Default: 0.8.
    pub lyrics_temperature: f32,

    /// Output token cap for verse generation. Default: 800.
    pub lyrics_max_tokens: u32,

    /// Result limit for each of the four info searches. Default: 10.
    pub info_result_limit: u32,

    /// Result limit for the legal-link search. Default: 8.
    pub link_result_limit: u32,

    /// Per-call search timeout in milliseconds. Default: 10 000.
    pub search_timeout_ms: u64,

    /// Per-call generation timeout in milliseconds. Default: 60 000.
    pub generation_timeout_ms: u64,

    /// Success boundary for info lookups.
    #[serde(default)]
    pub info_policy: InfoSuccessPolicy,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            model: "llama3-70b-8192".to_string(),
            story_temperature: 0.7,
            story_max_tokens: 1000,
            lyrics_temperature: 0.8,
            lyrics_max_tokens: 800,
            info_result_limit: 10,
            link_result_limit: 8,
            search_timeout_ms: 10_000,
            generation_timeout_ms: 60_000,
            info_policy: InfoSuccessPolicy::AlwaysSucceed,
        }
    }
}

impl AssistantConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the chat model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the per-call search timeout.
    pub fn with_search_timeout(mut self, timeout: Duration) -> Self {
        self.search_timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set the per-call generation timeout.
    pub fn with_generation_timeout(mut self, timeout: Duration) -> Self {
        self.generation_timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set the info success policy.
    pub fn with_info_policy(mut self, policy: InfoSuccessPolicy) -> Self {
        self.info_policy = policy;
        self
    }

    pub fn search_timeout(&self) -> Duration {
        Duration::from_millis(self.search_timeout_ms)
    }

    pub fn generation_timeout(&self) -> Duration {
        Duration::from_millis(self.generation_timeout_ms)
    }
}
