//! Result payloads: song facts, story summaries and new verses.
//!
//! Every optional text field uses the empty string for "not found".

use serde::Serialize;

use super::query::Language;

/// Facts about a song, scraped from search snippets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SongInfo {
    pub title: String,
    pub artist: String,
    pub composer: String,
    pub lyricist: String,
    pub director: String,
    pub movie: String,
    pub year: String,
    pub genre: String,
    pub language: Language,
    pub duration: String,
    pub album: String,
    pub record_label: String,
    pub playback_singer: String,

    /// At most 3, deduplicated, in discovery order
    pub awards: Vec<String>,

    pub popularity_rating: String,

    /// At most 5, deduplicated, trusted domains only
    pub legal_links: Vec<String>,

    pub description: String,
    pub detailed_info: String,
}

impl SongInfo {
    /// Create an empty record for a title.
    pub fn new(title: impl Into<String>, language: Language) -> Self {
        Self {
            title: title.into(),
            language,
            ..Default::default()
        }
    }

    /// Whether anything was actually extracted from search results.
    ///
    /// The popularity label, description and detailed info do not count:
    /// the first two always carry a fallback.
    pub fn has_extracted_facts(&self) -> bool {
        let fields = [
            &self.artist,
            &self.playback_singer,
            &self.composer,
            &self.lyricist,
            &self.director,
            &self.movie,
            &self.year,
            &self.genre,
            &self.album,
            &self.record_label,
            &self.duration,
        ];
        fields.iter().any(|f| !f.is_empty())
            || !self.awards.is_empty()
            || !self.legal_links.is_empty()
    }
}

/// Story-style summary of a song, written by the text generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StorySummary {
    pub title: String,
    pub language: Language,
    pub summary: String,

    /// At most 4
    pub themes: Vec<String>,

    pub mood: String,

    /// At most 3
    pub characters: Vec<String>,

    pub cultural_context: String,
    pub historical_background: String,
}

/// Original verses written in the style of an existing song.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContinuationLyrics {
    pub original_song: String,
    pub language: Language,

    /// At most 3, each trimmed and non-empty
    pub new_verses: Vec<String>,

    pub style: String,
    pub theme: String,
    pub rhythm_pattern: String,
    pub rhyme_scheme: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skeleton_has_no_facts() {
        let mut info = SongInfo::new("lag ja gale", Language::English);
        info.popularity_rating = "Well-known".into();
        info.description = "boilerplate".into();
        assert!(!info.has_extracted_facts());

        info.year = "1964".into();
        assert!(info.has_extracted_facts());
    }

    #[test]
    fn test_links_count_as_facts() {
        let mut info = SongInfo::new("tum hi ho", Language::English);
        info.legal_links.push("https://gaana.com/song/tum-hi-ho".into());
        assert!(info.has_extracted_facts());
    }

    #[test]
    fn test_camel_case_serialization() {
        let info = SongInfo::new("tum hi ho", Language::Hindi);
        let json = serde_json::to_value(&info).unwrap();
        assert!(json.get("recordLabel").is_some());
        assert!(json.get("legalLinks").is_some());
        assert_eq!(json["language"], "hindi");
    }
}
