use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use dotenvy::dotenv;
use music_query::{
    AssistantConfig, InfoSuccessPolicy, Lexicon, MusicAssistant, OpenAiGenerator,
    RapidApiSearcher, ServiceCredentials,
};

/// The production assistant wiring.
pub type LiveAssistant = MusicAssistant<RapidApiSearcher, OpenAiGenerator>;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub groq: ServiceCredentials,
    pub rapidapi: ServiceCredentials,
    pub assistant: AssistantConfig,
    pub lexicon_path: Option<PathBuf>,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let mut groq =
            ServiceCredentials::groq(env::var("GROQ_API_KEY").context("GROQ_API_KEY must be set")?);
        if let Ok(url) = env::var("GROQ_BASE_URL") {
            groq = groq.with_endpoint(url);
        }

        let mut rapidapi = ServiceCredentials::rapidapi(
            env::var("RAPIDAPI_KEY").context("RAPIDAPI_KEY must be set")?,
        );
        if let Ok(host) = env::var("RAPIDAPI_HOST") {
            rapidapi = rapidapi.with_endpoint(host);
        }

        let mut assistant = AssistantConfig::default();
        if let Ok(model) = env::var("MUSIC_MODEL") {
            assistant = assistant.with_model(model);
        }
        if let Some(ms) = parse_var::<u64>("SEARCH_TIMEOUT_MS")? {
            assistant = assistant.with_search_timeout(Duration::from_millis(ms));
        }
        if let Some(ms) = parse_var::<u64>("GENERATION_TIMEOUT_MS")? {
            assistant = assistant.with_generation_timeout(Duration::from_millis(ms));
        }
        if let Ok(policy) = env::var("INFO_SUCCESS_POLICY") {
            let policy = InfoSuccessPolicy::from_str(&policy)
                .map_err(|e| anyhow!(e))
                .context("INFO_SUCCESS_POLICY must be `always` or `require-field`")?;
            assistant = assistant.with_info_policy(policy);
        }

        Ok(Self {
            groq,
            rapidapi,
            assistant,
            lexicon_path: env::var("MUSIC_LEXICON_PATH").ok().map(PathBuf::from),
            port: parse_var("PORT")?.unwrap_or(8080),
        })
    }

    /// Built-in lexicon unless a JSON override is configured.
    pub fn load_lexicon(&self) -> Result<Lexicon> {
        match &self.lexicon_path {
            Some(path) => Lexicon::from_json_file(path)
                .with_context(|| format!("Failed to load lexicon from {}", path.display())),
            None => Ok(Lexicon::default()),
        }
    }

    /// Wire the live collaborators into an assistant.
    pub fn build_assistant(&self) -> Result<LiveAssistant> {
        let assistant = MusicAssistant::with_config(
            RapidApiSearcher::from_credentials(&self.rapidapi),
            OpenAiGenerator::from_credentials(&self.groq),
            self.assistant.clone(),
        )
        .with_lexicon(self.load_lexicon()?);

        Ok(assistant)
    }
}

fn parse_var<T>(name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{name} must be a valid number")),
        Err(_) => Ok(None),
    }
}
