//! Swappable keyword tables.
//!
//! Every allow-list and keyword set the heuristics consult lives here as
//! plain data. Tables that produce a language-dependent label are keyed by
//! [`Language`]; matching is always "first rule with a trigger contained in
//! the lower-cased text wins".

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::query::Language;
use crate::error::{MusicError, Result};

/// A value per response language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ByLanguage<T> {
    pub hindi: T,
    pub english: T,
}

impl<T> ByLanguage<T> {
    pub fn new(hindi: T, english: T) -> Self {
        Self { hindi, english }
    }

    pub fn get(&self, language: Language) -> &T {
        match language {
            Language::Hindi => &self.hindi,
            Language::English => &self.english,
        }
    }
}

/// One label and the words that trigger it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelRule {
    pub label: String,
    pub triggers: Vec<String>,
}

impl LabelRule {
    pub fn new(label: &str, triggers: &[&str]) -> Self {
        Self {
            label: label.to_string(),
            triggers: strings(triggers),
        }
    }
}

/// Ordered label rules with a fallback label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelTable {
    pub rules: Vec<LabelRule>,
    pub fallback: String,
}

impl LabelTable {
    /// Label of the first rule with any trigger in `text_lower`.
    pub fn first_match(&self, text_lower: &str) -> Option<&str> {
        self.rules
            .iter()
            .find(|rule| first_contained(&rule.triggers, text_lower).is_some())
            .map(|rule| rule.label.as_str())
    }

    /// Like [`first_match`](Self::first_match), falling back to the default label.
    pub fn classify(&self, text_lower: &str) -> &str {
        self.first_match(text_lower).unwrap_or(&self.fallback)
    }
}

/// Song fields the snippet extractor knows how to look for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SongField {
    Artist,
    PlaybackSinger,
    Composer,
    Lyricist,
    Director,
    Movie,
    Year,
    Genre,
    Album,
    RecordLabel,
    Duration,
}

/// Anchor keywords for one field, tried in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldKeywords {
    pub field: SongField,
    pub keywords: Vec<String>,
}

/// All heuristic tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lexicon {
    /// Phrases asking for a Hindi answer (checked first)
    pub hindi_markers: Vec<String>,

    /// Phrases asking for an English answer
    pub english_markers: Vec<String>,

    /// Titles and artist names recognized when nothing else names a song
    pub known_titles: Vec<String>,

    /// Hosts accepted as legal listening links
    pub trusted_domains: Vec<String>,

    pub field_keywords: Vec<FieldKeywords>,
    pub award_keywords: Vec<String>,
    pub popularity_indicators: Vec<String>,
    pub popularity_fallback: String,

    pub story_themes: ByLanguage<Vec<String>>,
    pub story_moods: ByLanguage<LabelTable>,
    pub character_indicators: Vec<String>,
    pub cultural_keywords: ByLanguage<Vec<String>>,
    pub era_keywords: ByLanguage<Vec<String>>,
    pub lyric_themes: ByLanguage<LabelTable>,
}

impl Lexicon {
    /// Load a lexicon from a JSON file. Missing keys keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| MusicError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&raw)
    }

    /// Parse a lexicon from JSON text. Missing keys keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| MusicError::Config(format!("invalid lexicon: {}", e)))
    }

    /// Keywords for a field (empty if the field has no entry).
    pub fn keywords_for(&self, field: SongField) -> &[String] {
        self.field_keywords
            .iter()
            .find(|entry| entry.field == field)
            .map(|entry| entry.keywords.as_slice())
            .unwrap_or(&[])
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            hindi_markers: strings(&[
                "hindi", "हिंदी", "हिन्दी", "देवनागरी", "में बताओ", "में दो", "में लिखो",
                "में समझाओ", "हिंदी में", "भारतीय", "बॉलीवुड",
            ]),
            english_markers: strings(&["english", "in english", "translate to english"]),
            known_titles: strings(&[
                "abhi na jao chhod kar",
                "अभी न जाओ छोड़ कर",
                "lag ja gale",
                "लग जा गले",
                "tere bina zindagi se",
                "तेरे बिना जिंदगी से",
                "tum hi ho",
                "तुम ही हो",
                "raag darbari",
                "राग दरबारी",
                "kabhi kabhi mere dil mein",
                "कभी कभी मेरे दिल में",
                "ye jo mohabbat hai",
                "ये जो मोहब्बत है",
                "chupke chupke",
                "चुपके चुपके",
                "tujhse naraz nahi zindagi",
                "तुझसे नाराज़ नहीं जिंदगी",
                "kishore kumar",
                "lata mangeshkar",
                "mohammad rafi",
            ]),
            trusted_domains: strings(&[
                "genius.com",
                "gaana.com",
                "jiosaavn.com",
                "youtube.com",
                "spotify.com",
                "apple.com",
                "amazon.com",
                "wynk.in",
                "hungama.com",
            ]),
            field_keywords: vec![
                field(SongField::Artist, &["singer", "sung by", "voice", "गायक", "आवाज़"]),
                field(SongField::PlaybackSinger, &["playback singer", "playback", "प्लेबैक"]),
                field(
                    SongField::Composer,
                    &["music director", "composer", "music by", "संगीतकार", "संगीत"],
                ),
                field(
                    SongField::Lyricist,
                    &["lyricist", "lyrics by", "written by", "गीतकार", "बोल"],
                ),
                field(SongField::Director, &["director", "directed by", "निर्देशक"]),
                field(SongField::Movie, &["movie", "film", "from", "फिल्म", "चित्र"]),
                field(SongField::Year, &["year", "released", "साल", "वर्ष"]),
                field(SongField::Genre, &["genre", "style", "type", "शैली"]),
                field(SongField::Album, &["album", "soundtrack", "एल्बम"]),
                field(
                    SongField::RecordLabel,
                    &["record label", "label", "production", "लेबल"],
                ),
                field(SongField::Duration, &["duration", "length", "minutes", "अवधि"]),
            ],
            award_keywords: strings(&[
                "award",
                "prize",
                "recognition",
                "filmfare",
                "national",
                "पुरस्कार",
            ]),
            popularity_indicators: strings(&[
                "popular", "hit", "famous", "classic", "evergreen", "प्रसिद्ध",
            ]),
            popularity_fallback: "Well-known".to_string(),
            story_themes: ByLanguage::new(
                strings(&[
                    "प्रेम", "विरह", "खुशी", "दुख", "याद", "उम्मीद", "सपने", "जीवन", "मोहब्बत",
                    "इश्क", "रिश्ते", "परिवार",
                ]),
                strings(&[
                    "love",
                    "separation",
                    "joy",
                    "sorrow",
                    "memory",
                    "hope",
                    "dreams",
                    "life",
                    "relationships",
                    "family",
                    "romance",
                    "longing",
                ]),
            ),
            story_moods: ByLanguage::new(
                LabelTable {
                    rules: vec![
                        LabelRule::new("प्रसन्नता", &["खुश", "प्रसन्न", "आनंद", "हर्ष"]),
                        LabelRule::new("दुखी", &["दुख", "गम", "विषाद", "उदास"]),
                        LabelRule::new("रोमांटिक", &["प्रेम", "मोहब्बत", "इश्क", "प्यार"]),
                        LabelRule::new("शांत", &["शांत", "मधुर", "कोमल", "सुकून"]),
                        LabelRule::new("उत्साहपूर्ण", &["उत्साह", "जोश", "उमंग", "उत्सव"]),
                    ],
                    fallback: "भावनात्मक".to_string(),
                },
                LabelTable {
                    rules: vec![
                        LabelRule::new("uplifting", &["happy", "joyful", "cheerful", "delighted"]),
                        LabelRule::new("melancholic", &["sad", "melancholy", "sorrowful", "gloomy"]),
                        LabelRule::new("romantic", &["love", "romantic", "tender", "passionate"]),
                        LabelRule::new("peaceful", &["peaceful", "calm", "serene", "tranquil"]),
                        LabelRule::new(
                            "energetic",
                            &["energetic", "vibrant", "enthusiastic", "lively"],
                        ),
                    ],
                    fallback: "emotional".to_string(),
                },
            ),
            character_indicators: strings(&[
                "hero",
                "heroine",
                "lover",
                "beloved",
                "protagonist",
                "नायक",
                "नायिका",
                "प्रेमी",
                "प्रेमिका",
            ]),
            cultural_keywords: ByLanguage::new(
                strings(&["भारतीय", "संस्कृति", "परंपरा", "रीति-रिवाज", "त्योहार", "पारिवारिक"]),
                strings(&["indian", "culture", "tradition", "festival", "family", "heritage"]),
            ),
            era_keywords: ByLanguage::new(
                strings(&["स्वर्ण युग", "क्लासिक", "पुराना", "आधुनिक"]),
                strings(&["golden age", "classic", "vintage", "modern", "contemporary"]),
            ),
            lyric_themes: ByLanguage::new(
                LabelTable {
                    rules: vec![
                        LabelRule::new("प्रेम गीत", &["प्रेम", "मोहब्बत", "इश्क", "प्यार"]),
                        LabelRule::new("विरह गीत", &["विरह", "बिछड़ना", "जुदाई", "याद"]),
                        LabelRule::new("उत्सव गीत", &["खुशी", "आनंद", "उत्सव", "मंगल"]),
                        LabelRule::new("दुख गीत", &["दुख", "गम", "आंसू", "दर्द"]),
                        LabelRule::new("पारिवारिक गीत", &["माँ", "मातृ", "परिवार", "रिश्ते"]),
                    ],
                    fallback: "भावनात्मक गीत".to_string(),
                },
                LabelTable {
                    rules: vec![
                        LabelRule::new("Love Song", &["love", "heart", "romance", "affection"]),
                        LabelRule::new(
                            "Separation Song",
                            &["separation", "goodbye", "apart", "missing"],
                        ),
                        LabelRule::new(
                            "Celebration Song",
                            &["joy", "happiness", "celebration", "festival"],
                        ),
                        LabelRule::new("Melancholic Song", &["sadness", "tears", "sorrow", "pain"]),
                        LabelRule::new("Family Song", &["mother", "family", "relationships", "bond"]),
                    ],
                    fallback: "Emotional Song".to_string(),
                },
            ),
        }
    }
}

/// First needle contained in `haystack_lower` (needles compared lower-cased).
pub fn first_contained<'a>(needles: &'a [String], haystack_lower: &str) -> Option<&'a str> {
    needles
        .iter()
        .find(|needle| !needle.is_empty() && haystack_lower.contains(&needle.to_lowercase()))
        .map(|needle| needle.as_str())
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn field(field: SongField, keywords: &[&str]) -> FieldKeywords {
    FieldKeywords {
        field,
        keywords: strings(keywords),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_table_first_rule_wins() {
        let lexicon = Lexicon::default();
        let moods = lexicon.story_moods.get(Language::English);

        // "sad" and "love" both present: the sad rule comes first
        assert_eq!(moods.classify("a sad tale of love"), "melancholic");
        assert_eq!(moods.classify("nothing matches here"), "emotional");
    }

    #[test]
    fn test_language_is_a_table_key() {
        let lexicon = Lexicon::default();
        assert_eq!(
            lexicon.lyric_themes.get(Language::Hindi).classify("यह प्यार की बात है"),
            "प्रेम गीत"
        );
        assert_eq!(
            lexicon.lyric_themes.get(Language::English).classify("a song of the heart"),
            "Love Song"
        );
    }

    #[test]
    fn test_keywords_for_every_field() {
        let lexicon = Lexicon::default();
        for field in [
            SongField::Artist,
            SongField::PlaybackSinger,
            SongField::Composer,
            SongField::Lyricist,
            SongField::Director,
            SongField::Movie,
            SongField::Year,
            SongField::Genre,
            SongField::Album,
            SongField::RecordLabel,
            SongField::Duration,
        ] {
            assert!(!lexicon.keywords_for(field).is_empty(), "{:?}", field);
        }
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let lexicon =
            Lexicon::from_json(r#"{"trusted_domains": ["soundcloud.com"]}"#).unwrap();

        assert_eq!(lexicon.trusted_domains, vec!["soundcloud.com".to_string()]);
        assert_eq!(lexicon.popularity_fallback, "Well-known");
        assert!(lexicon.known_titles.contains(&"tum hi ho".to_string()));
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let err = Lexicon::from_json("{not json").unwrap_err();
        assert!(matches!(err, MusicError::Config(_)));
    }

    #[test]
    fn test_first_contained_is_case_insensitive_on_needles() {
        let needles = strings(&["Filmfare", "award"]);
        assert_eq!(first_contained(&needles, "won the filmfare award"), Some("Filmfare"));
        assert_eq!(first_contained(&needles, "no prizes"), None);
    }
}
