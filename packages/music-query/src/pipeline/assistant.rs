//! The query assistant: classify, dispatch, assemble, format.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::future::join_all;
use futures::FutureExt;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use super::detect::classify_with;
use super::info::{build_song_info, info_search_queries, link_search_query, merge_tolerant};
use super::prompts::{lyrics_prompts, story_prompts};
use super::story::build_story;
use super::verses::build_lyrics;
use crate::error::{
    GenerationError, GenerationResult, MusicError, Result, SearchError, SearchResult,
};
use crate::traits::generator::{GenerationRequest, TextGenerator};
use crate::traits::searcher::{SearchRequest, Snippet, WebSearcher};
use crate::types::config::{AssistantConfig, InfoSuccessPolicy};
use crate::types::lexicon::Lexicon;
use crate::types::query::{Language, QueryAnalysis, ResultKind, Script};
use crate::types::response::{MusicPayload, MusicResponse};
use crate::types::song::{ContinuationLyrics, SongInfo, StorySummary};

/// Answers free-form song queries.
///
/// Owns its two collaborators and is safe to share across tasks; each
/// query is independent and nothing is cached between them.
///
/// # Example
///
/// ```rust,ignore
/// let assistant = MusicAssistant::new(searcher, generator);
///
/// let response = assistant.handle_query("who sang tum hi ho").await;
/// println!("{}", response.formatted_response);
/// ```
pub struct MusicAssistant<S: WebSearcher, G: TextGenerator> {
    searcher: S,
    generator: G,
    config: AssistantConfig,
    lexicon: Arc<Lexicon>,
}

impl<S: WebSearcher, G: TextGenerator> MusicAssistant<S, G> {
    /// Create an assistant with the default config and lexicon.
    pub fn new(searcher: S, generator: G) -> Self {
        Self::with_config(searcher, generator, AssistantConfig::default())
    }

    /// Create an assistant with a custom config.
    pub fn with_config(searcher: S, generator: G, config: AssistantConfig) -> Self {
        Self {
            searcher,
            generator,
            config,
            lexicon: Arc::new(Lexicon::default()),
        }
    }

    /// Replace the keyword tables.
    pub fn with_lexicon(mut self, lexicon: impl Into<Arc<Lexicon>>) -> Self {
        self.lexicon = lexicon.into();
        self
    }

    pub fn config(&self) -> &AssistantConfig {
        &self.config
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn searcher(&self) -> &S {
        &self.searcher
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Classify a query with this assistant's lexicon.
    pub fn analyze(&self, query: &str) -> QueryAnalysis {
        classify_with(query, &self.lexicon)
    }

    /// Answer one query.
    ///
    /// Never fails: every error, including a panic inside the pipeline,
    /// comes back as a failed `MusicResponse` with a localized message.
    pub async fn handle_query(&self, query: &str) -> MusicResponse {
        self.handle_query_with_cancel(query, CancellationToken::new())
            .await
    }

    /// Answer one query, abandoning collaborator calls when `cancel` fires.
    ///
    /// A cancelled query gets the generic processing-error message.
    pub async fn handle_query_with_cancel(
        &self,
        query: &str,
        cancel: CancellationToken,
    ) -> MusicResponse {
        match AssertUnwindSafe(self.respond(query, &cancel))
            .catch_unwind()
            .await
        {
            Ok(response) => response,
            Err(panic) => {
                error!(
                    panic = panic_message(&*panic),
                    "Query handling panicked"
                );
                let language = std::panic::catch_unwind(AssertUnwindSafe(|| {
                    self.analyze(query).preferred_language
                }))
                .unwrap_or_default();
                MusicResponse::internal_failure(language)
            }
        }
    }

    async fn respond(&self, query: &str, cancel: &CancellationToken) -> MusicResponse {
        let analysis = self.analyze(query);
        let language = analysis.preferred_language;

        let kind = match analysis.intent.result_kind() {
            Some(kind) if analysis.is_actionable() => kind,
            _ => {
                debug!(
                    intent = ?analysis.intent,
                    song = %analysis.song_name,
                    "Query not understood"
                );
                return MusicResponse::not_understood(language);
            }
        };

        let song = analysis.song_name.as_str();
        info!(
            intent = ?analysis.intent,
            script = ?analysis.script,
            language = ?language,
            song = %song,
            "Handling music query"
        );

        let result = match kind {
            ResultKind::Info => self
                .search_song_info(song, analysis.script, language, cancel)
                .await
                .map(MusicPayload::Info),
            ResultKind::Story => self
                .generate_story(song, language, cancel)
                .await
                .map(MusicPayload::Story),
            ResultKind::Lyrics => self
                .generate_verses(song, language, None, cancel)
                .await
                .map(MusicPayload::Lyrics),
        };

        match result {
            Ok(payload) => MusicResponse::success(payload),
            Err(e) if e.is_collaborator_failure() => {
                warn!(song = %song, kind = ?kind, error = %e, "Collaborator failed");
                MusicResponse::collaborator_failure(kind, song, language)
            }
            Err(e) => {
                error!(song = %song, kind = ?kind, error = %e, "Query failed");
                MusicResponse::internal_failure(language)
            }
        }
    }

    /// Gather facts about a song from the web.
    ///
    /// Runs the four info searches and the legal-link search concurrently
    /// and waits for all of them. Individual failures are tolerated; only
    /// cancellation (or the `RequireExtractedField` policy) fails the lookup.
    pub async fn search_song_info(
        &self,
        song: &str,
        script: Script,
        language: Language,
        cancel: &CancellationToken,
    ) -> Result<SongInfo> {
        let info_requests = info_search_queries(song)
            .map(|query| SearchRequest::new(query, self.config.info_result_limit, true));
        let link_request =
            SearchRequest::new(link_search_query(song), self.config.link_result_limit, false);

        let (info_results, link_result) = tokio::join!(
            join_all(
                info_requests
                    .iter()
                    .map(|request| self.bounded_search(request, cancel))
            ),
            self.bounded_search(&link_request, cancel),
        );

        if cancel.is_cancelled() {
            return Err(MusicError::Cancelled);
        }

        let snippets = merge_tolerant(info_results);
        let link_snippets = merge_tolerant(vec![link_result]);
        debug!(
            song = %song,
            snippets = snippets.len(),
            link_snippets = link_snippets.len(),
            "Info searches complete"
        );

        let info = build_song_info(
            song,
            script,
            language,
            &snippets,
            &link_snippets,
            &self.lexicon,
        );

        if self.config.info_policy == InfoSuccessPolicy::RequireExtractedField
            && !info.has_extracted_facts()
        {
            return Err(MusicError::NoInformation {
                song: song.to_string(),
            });
        }

        Ok(info)
    }

    /// Ask the generator for a story-style summary and tag it.
    pub async fn generate_story(
        &self,
        song: &str,
        language: Language,
        cancel: &CancellationToken,
    ) -> Result<StorySummary> {
        let prompts = story_prompts(song, language);
        let request = GenerationRequest::new(
            self.config.model.as_str(),
            prompts.system,
            prompts.user,
            self.config.story_temperature,
            self.config.story_max_tokens,
        );

        let summary = self.bounded_generate(&request, cancel).await?;
        Ok(build_story(song, language, summary, &self.lexicon))
    }

    /// Ask the generator for three new verses in the song's style.
    pub async fn generate_verses(
        &self,
        song: &str,
        language: Language,
        style: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<ContinuationLyrics> {
        let prompts = lyrics_prompts(song, language);
        let request = GenerationRequest::new(
            self.config.model.as_str(),
            prompts.system,
            prompts.user,
            self.config.lyrics_temperature,
            self.config.lyrics_max_tokens,
        );

        let generated = self.bounded_generate(&request, cancel).await?;
        Ok(build_lyrics(song, language, &generated, style, &self.lexicon))
    }

    async fn bounded_search(
        &self,
        request: &SearchRequest,
        cancel: &CancellationToken,
    ) -> SearchResult<Vec<Snippet>> {
        let call = tokio::time::timeout(self.config.search_timeout(), self.searcher.search(request));

        // Cancellation wins over a result that is ready in the same poll
        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(SearchError::Cancelled),
            result = call => match result {
                Ok(result) => result,
                Err(_) => Err(SearchError::Timeout),
            },
        }
    }

    async fn bounded_generate(
        &self,
        request: &GenerationRequest,
        cancel: &CancellationToken,
    ) -> GenerationResult<String> {
        let call = tokio::time::timeout(
            self.config.generation_timeout(),
            self.generator.generate(request),
        );

        let text = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(GenerationError::Cancelled),
            result = call => match result {
                Ok(result) => result?,
                Err(_) => return Err(GenerationError::Timeout),
            },
        };

        if text.trim().is_empty() {
            return Err(GenerationError::EmptyResponse);
        }
        Ok(text)
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> &str {
    panic
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| panic.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic")
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use async_trait::async_trait;

    use super::*;
    use crate::testing::{MockGenerator, MockWebSearcher};
    use crate::traits::generator::Role;

    fn info_query(song: &str, variant: usize) -> String {
        info_search_queries(song)[variant].clone()
    }

    #[tokio::test]
    async fn test_unknown_query_makes_no_calls() {
        let assistant = MusicAssistant::new(MockWebSearcher::new(), MockGenerator::new());

        let response = assistant.handle_query("hello there").await;

        assert!(!response.success);
        assert_eq!(response.kind, ResultKind::Info);
        assert_eq!(
            response.error.as_deref(),
            Some("Could not understand your music request. Please specify a song name.")
        );
        assert_eq!(assistant.searcher().call_count(), 0);
        assert_eq!(assistant.generator().call_count(), 0);
    }

    #[tokio::test]
    async fn test_info_fans_out_five_searches() {
        let searcher = MockWebSearcher::new().with_results(
            info_query("tum hi ho", 0),
            vec![Snippet::new(
                "Tum Hi Ho",
                "Singer: Arijit Singh, music by Mithoon. Released 2013.",
            )],
        );
        let assistant = MusicAssistant::new(searcher, MockGenerator::new());

        let response = assistant.handle_query("who sang tum hi ho").await;

        assert!(response.success);
        assert_eq!(response.kind, ResultKind::Info);
        let Some(MusicPayload::Info(info)) = response.data else {
            panic!("expected info payload");
        };
        assert_eq!(info.artist, "arijit singh");
        assert_eq!(info.year, "2013");

        let calls = assistant.searcher().calls();
        assert_eq!(calls.len(), 5);
        assert_eq!(calls.iter().filter(|c| c.limit == 10 && c.related_keywords).count(), 4);
        assert_eq!(calls.iter().filter(|c| c.limit == 8 && !c.related_keywords).count(), 1);
        assert_eq!(assistant.generator().call_count(), 0);
    }

    #[tokio::test]
    async fn test_info_tolerates_single_failure() {
        let searcher = MockWebSearcher::new()
            .with_failure(info_query("tum hi ho", 1))
            .with_results(
                info_query("tum hi ho", 2),
                vec![Snippet::new("", "composer: pritam")],
            );
        let assistant = MusicAssistant::new(searcher, MockGenerator::new());

        let response = assistant.handle_query("who sang tum hi ho").await;

        assert!(response.success);
        let Some(MusicPayload::Info(info)) = response.data else {
            panic!("expected info payload");
        };
        assert_eq!(info.composer, "pritam");
    }

    #[tokio::test]
    async fn test_all_searches_failing_degrades_by_default() {
        let assistant = MusicAssistant::new(MockWebSearcher::failing(), MockGenerator::new());

        let response = assistant.handle_query("who sang tum hi ho").await;

        assert!(response.success);
        let Some(MusicPayload::Info(info)) = response.data else {
            panic!("expected info payload");
        };
        assert!(!info.has_extracted_facts());
        assert_eq!(info.popularity_rating, "Well-known");
    }

    #[tokio::test]
    async fn test_all_searches_failing_under_strict_policy() {
        let config =
            AssistantConfig::default().with_info_policy(InfoSuccessPolicy::RequireExtractedField);
        let assistant =
            MusicAssistant::with_config(MockWebSearcher::failing(), MockGenerator::new(), config);

        let response = assistant.handle_query("who sang tum hi ho").await;

        assert!(!response.success);
        assert_eq!(response.kind, ResultKind::Info);
        assert_eq!(
            response.error.as_deref(),
            Some("Could not find information about \"tum hi ho\"")
        );
    }

    #[tokio::test]
    async fn test_story_uses_story_settings() {
        let generator = MockGenerator::new()
            .with_response("A tale of love and longing, a romantic promise between two hearts.");
        let assistant = MusicAssistant::new(MockWebSearcher::new(), generator);

        let response = assistant.handle_query("story of lag ja gale").await;

        assert!(response.success);
        assert_eq!(response.kind, ResultKind::Story);
        let Some(MusicPayload::Story(story)) = &response.data else {
            panic!("expected story payload");
        };
        assert_eq!(story.title, "lag ja gale");
        assert!(story.themes.contains(&"love".to_string()));

        let calls = assistant.generator().calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].temperature, 0.7);
        assert_eq!(calls[0].max_tokens, 1000);
        assert!(calls[0]
            .content_of(Role::User)
            .unwrap()
            .contains("\"lag ja gale\""));
        assert_eq!(assistant.searcher().call_count(), 0);
    }

    #[tokio::test]
    async fn test_lyrics_uses_lyrics_settings() {
        let generator = MockGenerator::new().with_response("one\ntwo\n\nthree\nfour");
        let assistant = MusicAssistant::new(MockWebSearcher::new(), generator);

        let response = assistant.handle_query("write new lyrics for tum hi ho").await;

        assert!(response.success);
        assert_eq!(response.kind, ResultKind::Lyrics);
        let Some(MusicPayload::Lyrics(lyrics)) = &response.data else {
            panic!("expected lyrics payload");
        };
        assert_eq!(lyrics.new_verses.len(), 2);

        let calls = assistant.generator().calls();
        assert_eq!(calls[0].temperature, 0.8);
        assert_eq!(calls[0].max_tokens, 800);
    }

    #[tokio::test]
    async fn test_generation_failure_gets_per_intent_message() {
        let generator = MockGenerator::new().with_error(GenerationError::Api {
            status: 503,
            message: "overloaded".into(),
        });
        let assistant = MusicAssistant::new(MockWebSearcher::new(), generator);

        let response = assistant.handle_query("story of lag ja gale").await;

        assert!(!response.success);
        assert_eq!(response.kind, ResultKind::Story);
        assert_eq!(
            response.error.as_deref(),
            Some("Could not create story for \"lag ja gale\"")
        );
    }

    #[tokio::test]
    async fn test_whitespace_completion_is_a_failure() {
        let generator = MockGenerator::new().with_response("   \n ");
        let assistant = MusicAssistant::new(MockWebSearcher::new(), generator);

        let response = assistant.handle_query("write new lyrics for tum hi ho").await;

        assert!(!response.success);
        assert_eq!(
            response.error.as_deref(),
            Some("Could not generate lyrics for \"tum hi ho\"")
        );
    }

    #[tokio::test]
    async fn test_malformed_completion_gets_generic_message() {
        let generator = MockGenerator::new().with_error(GenerationError::Parse("bad json".into()));
        let assistant = MusicAssistant::new(MockWebSearcher::new(), generator);

        let response = assistant.handle_query("story of lag ja gale").await;

        assert!(!response.success);
        assert_eq!(
            response.error.as_deref(),
            Some("An error occurred while processing your music request.")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_generation_timeout() {
        let generator = MockGenerator::new().with_delay(Duration::from_secs(120));
        let config = AssistantConfig::default().with_generation_timeout(Duration::from_secs(1));
        let assistant = MusicAssistant::with_config(MockWebSearcher::new(), generator, config);

        let response = assistant.handle_query("story of lag ja gale").await;

        assert!(!response.success);
        assert_eq!(response.kind, ResultKind::Story);
        assert!(response.error.as_deref().unwrap().starts_with("Could not create story"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_search_times_out_and_is_tolerated() {
        let searcher = MockWebSearcher::new().with_delay(Duration::from_secs(30));
        let config = AssistantConfig::default().with_search_timeout(Duration::from_secs(1));
        let assistant = MusicAssistant::with_config(searcher, MockGenerator::new(), config);

        let response = assistant.handle_query("who sang tum hi ho").await;

        assert!(response.success);
        assert_eq!(assistant.searcher().call_count(), 5);
    }

    #[tokio::test]
    async fn test_cancelled_query_gets_generic_message() {
        let assistant = MusicAssistant::new(
            MockWebSearcher::new().with_delay(Duration::from_secs(30)),
            MockGenerator::new(),
        );
        let cancel = CancellationToken::new();
        cancel.cancel();

        let response = assistant
            .handle_query_with_cancel("who sang tum hi ho", cancel)
            .await;

        assert!(!response.success);
        assert_eq!(
            response.error.as_deref(),
            Some("An error occurred while processing your music request.")
        );
    }

    #[tokio::test]
    async fn test_hindi_query_gets_hindi_failure() {
        let generator = MockGenerator::new().with_error(GenerationError::Timeout);
        let assistant = MusicAssistant::new(MockWebSearcher::new(), generator);

        let response = assistant.handle_query("\"लग जा गले\" गाने की कहानी बताओ").await;

        assert!(!response.success);
        assert_eq!(response.kind, ResultKind::Story);
        assert_eq!(
            response.error.as_deref(),
            Some("\"लग जा गले\" के लिए कहानी नहीं बना पाया")
        );
    }

    #[tokio::test]
    async fn test_pre_cancelled_token_beats_instant_collaborators() {
        let assistant = MusicAssistant::new(MockWebSearcher::new(), MockGenerator::new());

        for query in [
            "story of lag ja gale",
            "write new lyrics for tum hi ho",
            "who sang tum hi ho",
        ] {
            for _ in 0..50 {
                let cancel = CancellationToken::new();
                cancel.cancel();

                let response = assistant.handle_query_with_cancel(query, cancel).await;

                assert!(!response.success, "cancelled {query:?} succeeded");
                assert_eq!(
                    response.error.as_deref(),
                    Some("An error occurred while processing your music request.")
                );
            }
        }
    }

    struct PanickingSearcher;

    #[async_trait]
    impl WebSearcher for PanickingSearcher {
        async fn search(&self, _request: &SearchRequest) -> SearchResult<Vec<Snippet>> {
            panic!("searcher exploded");
        }
    }

    #[tokio::test]
    async fn test_panic_becomes_generic_failure() {
        let assistant = MusicAssistant::new(PanickingSearcher, MockGenerator::new());

        let response = assistant.handle_query("who sang tum hi ho").await;

        assert!(!response.success);
        assert_eq!(
            response.error.as_deref(),
            Some("An error occurred while processing your music request.")
        );
    }

    #[tokio::test]
    async fn test_panic_failure_honours_language_marker() {
        let assistant = MusicAssistant::new(PanickingSearcher, MockGenerator::new());

        let response = assistant.handle_query("who sang tum hi ho in hindi").await;

        assert!(!response.success);
        assert_eq!(
            response.error.as_deref(),
            Some("आपकी संगीत संबंधी अनुरोध को प्रोसेस करते समय त्रुटि हुई।")
        );
    }

    #[tokio::test]
    async fn test_explicit_style_is_kept() {
        let generator = MockGenerator::new().with_response("one\ntwo");
        let assistant = MusicAssistant::new(MockWebSearcher::new(), generator);

        let lyrics = assistant
            .generate_verses(
                "tum hi ho",
                Language::English,
                Some("Ghazal"),
                &CancellationToken::new(),
            )
            .await
            .unwrap();

        assert_eq!(lyrics.style, "Ghazal");
    }
}
