//! Query pipeline - the core of the library.
//!
//! The pipeline orchestrates:
//! - Detection (script, preferred language, intent, song name)
//! - Info lookup (concurrent web searches, keyword-anchored field extraction)
//! - Story and verse generation with local tagging
//! - Localized formatting of the final response

pub mod assistant;
pub mod detect;
pub mod fields;
pub mod format;
pub mod info;
pub mod messages;
pub mod prompts;
pub mod story;
pub mod verses;

pub use assistant::MusicAssistant;
pub use detect::{
    classify, classify_with, detect_intent, detect_preferred_language, detect_script,
    extract_song_name,
};
pub use fields::{
    extract_awards, extract_field, extract_legal_links, extract_popularity, extract_song_field,
    extract_year, is_trusted_link,
};
pub use format::format_payload;
pub use info::{build_song_info, info_search_queries, link_search_query, merge_tolerant};
pub use prompts::{lyrics_prompts, story_prompts, PromptPair};
pub use story::build_story;
pub use verses::{build_lyrics, split_verses};
