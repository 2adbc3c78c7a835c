//! Story summary derivations.
//!
//! Tags are looked up in the generated summary text; nothing is asked of
//! the generator a second time.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::types::lexicon::{first_contained, Lexicon};
use crate::types::query::Language;
use crate::types::song::StorySummary;

const MAX_THEMES: usize = 4;
const MAX_CHARACTERS: usize = 3;

// Bounded by ASCII word characters only, so a year glued to Devanagari
// text still counts as standalone
static RE_STANDALONE_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^A-Za-z0-9_])((?:19|20)[0-9]{2})(?:$|[^A-Za-z0-9_])").unwrap()
});

/// Build a story summary from the generated text.
pub fn build_story(title: &str, language: Language, summary: String, lexicon: &Lexicon) -> StorySummary {
    let lower = summary.to_lowercase();

    StorySummary {
        title: title.to_string(),
        language,
        themes: themes(&lower, language, lexicon),
        mood: lexicon.story_moods.get(language).classify(&lower).to_string(),
        characters: characters(&lower, lexicon),
        cultural_context: cultural_context(&lower, language, lexicon).to_string(),
        historical_background: historical_background(&lower, language, lexicon).to_string(),
        summary,
    }
}

/// Theme keywords mentioned in the summary, in table order.
pub fn themes(lower: &str, language: Language, lexicon: &Lexicon) -> Vec<String> {
    lexicon
        .story_themes
        .get(language)
        .iter()
        .filter(|theme| lower.contains(&theme.to_lowercase()))
        .take(MAX_THEMES)
        .cloned()
        .collect()
}

/// Character indicators mentioned in the summary (either language).
pub fn characters(lower: &str, lexicon: &Lexicon) -> Vec<String> {
    let mut seen = HashSet::new();
    lexicon
        .character_indicators
        .iter()
        .filter(|indicator| lower.contains(&indicator.to_lowercase()))
        .filter(|indicator| seen.insert(indicator.as_str()))
        .take(MAX_CHARACTERS)
        .cloned()
        .collect()
}

pub fn cultural_context(lower: &str, language: Language, lexicon: &Lexicon) -> &'static str {
    let rooted = first_contained(lexicon.cultural_keywords.get(language), lower).is_some();
    match (language, rooted) {
        (Language::Hindi, true) => "भारतीय सांस्कृतिक संदर्भ में निहित",
        (Language::Hindi, false) => "सामान्य सांस्कृतिक संदर्भ",
        (Language::English, true) => "Rooted in Indian cultural context",
        (Language::English, false) => "General cultural context",
    }
}

/// Era label from the first standalone year, else era keywords.
pub fn historical_background(lower: &str, language: Language, lexicon: &Lexicon) -> &'static str {
    let year = RE_STANDALONE_YEAR
        .captures(lower)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok());

    let era = match year {
        Some(1950..=1970) => Era::Golden,
        Some(1980..=2000) => Era::Modern,
        _ if first_contained(lexicon.era_keywords.get(language), lower).is_some() => {
            Era::Historical
        }
        _ => Era::Contemporary,
    };

    era.label(language)
}

enum Era {
    Golden,
    Modern,
    Historical,
    Contemporary,
}

impl Era {
    fn label(&self, language: Language) -> &'static str {
        match (self, language) {
            (Self::Golden, Language::Hindi) => "बॉलीवुड का स्वर्ण युग",
            (Self::Golden, Language::English) => "Golden Age of Bollywood",
            (Self::Modern, Language::Hindi) => "आधुनिक बॉलीवुड युग",
            (Self::Modern, Language::English) => "Modern Bollywood Era",
            (Self::Historical, Language::Hindi) => "ऐतिहासिक महत्व के साथ",
            (Self::Historical, Language::English) => "With historical significance",
            (Self::Contemporary, Language::Hindi) => "समसामयिक संदर्भ",
            (Self::Contemporary, Language::English) => "Contemporary context",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_story() {
        let lexicon = Lexicon::default();
        let summary = "A tale of love and longing. The hero waits for his beloved through \
                       the monsoon of 1964, a song steeped in Indian tradition. Hope, \
                       memory and dreams remain."
            .to_string();

        let story = build_story("Lag Ja Gale", Language::English, summary.clone(), &lexicon);

        assert_eq!(story.summary, summary);
        assert_eq!(story.themes, vec!["love", "memory", "hope", "dreams"]);
        assert_eq!(story.mood, "romantic");
        assert_eq!(story.characters, vec!["hero", "beloved"]);
        assert_eq!(story.cultural_context, "Rooted in Indian cultural context");
        assert_eq!(story.historical_background, "Golden Age of Bollywood");
    }

    #[test]
    fn test_hindi_story_labels() {
        let lexicon = Lexicon::default();
        let summary = "यह गीत विरह और याद की कहानी है। नायिका उदास है।".to_string();

        let story = build_story("लग जा गले", Language::Hindi, summary, &lexicon);

        assert_eq!(story.themes, vec!["विरह", "याद"]);
        assert_eq!(story.mood, "दुखी");
        assert_eq!(story.characters, vec!["नायिका"]);
        assert_eq!(story.cultural_context, "सामान्य सांस्कृतिक संदर्भ");
        assert_eq!(story.historical_background, "समसामयिक संदर्भ");
    }

    #[test]
    fn test_fallback_mood() {
        let lexicon = Lexicon::default();
        let story = build_story("x", Language::English, "Nothing matches.".into(), &lexicon);
        assert_eq!(story.mood, "emotional");
        assert!(story.themes.is_empty());
        assert!(story.characters.is_empty());
    }

    #[test]
    fn test_historical_background() {
        let lexicon = Lexicon::default();
        let en = Language::English;

        assert_eq!(historical_background("released in 1991", en, &lexicon), "Modern Bollywood Era");
        assert_eq!(
            historical_background("released in 1975, a classic", en, &lexicon),
            "With historical significance"
        );
        assert_eq!(historical_background("a 2013 hit", en, &lexicon), "Contemporary context");
        // part of a longer number, not a standalone year
        assert_eq!(historical_background("id 119601", en, &lexicon), "Contemporary context");
        assert_eq!(historical_background("track1964", en, &lexicon), "Contemporary context");
    }

    #[test]
    fn test_year_glued_to_devanagari() {
        let lexicon = Lexicon::default();
        assert_eq!(
            historical_background("यह गीत सन्1964में आया", Language::Hindi, &lexicon),
            "बॉलीवुड का स्वर्ण युग"
        );
    }

    #[test]
    fn test_themes_capped() {
        let lexicon = Lexicon::default();
        let lower = "love separation joy sorrow memory hope";
        assert_eq!(themes(lower, Language::English, &lexicon).len(), MAX_THEMES);
    }
}
