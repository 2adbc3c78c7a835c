//! Language and intent detection.
//!
//! Classifies a raw query by script, preferred response language and intent,
//! and pulls out the song it is about. Never fails: the worst case is
//! `Intent::Unknown` with an empty song name.

use std::sync::LazyLock;

use regex::{Regex, RegexSet};

use crate::types::lexicon::{first_contained, Lexicon};
use crate::types::query::{Intent, Language, QueryAnalysis, Script};

/// Devanagari fraction of non-whitespace characters above which a query is Hindi.
const HINDI_SCRIPT_THRESHOLD: f64 = 0.3;

const STORY_PATTERNS: &[&str] = &[
    r"(?:story|कहानी|summary|सारांश|meaning|अर्थ|मतलब)",
    r"(?:explain|समझाएं|समझाओ|describe|वर्णन|what.*about|के बारे में)",
    r"(?:narrative|कथा|plot|कथानक|theme|विषय|संदेश)",
    r"(?:tell me about|बताओ|सुनाओ)",
];

const LYRICS_PATTERNS: &[&str] = &[
    r"(?:write|लिखें|लिखो|create|बनाएं|बनाओ|generate|उत्पन्न)",
    r"(?:new verse|नया श्लोक|नई पंक्ति|more lines|और पंक्तियां)",
    r"(?:extend|बढ़ाएं|बढ़ाओ|add|जोड़ें|जोड़ो|composition|रचना)",
    r"(?:continue|जारी|आगे|next|अगला)",
    r"(?:lyrics|बोल|गीत के बोल|पद)",
];

const INFO_PATTERNS: &[&str] = &[
    r"(?:information|info|details|जानकारी|विवरण|बताओ|बताइए)",
    r"(?:singer|गायक|artist|कलाकार|who sang|किसने गाया)",
    r"(?:composer|संगीतकार|music director|निर्देशक)",
    r"(?:movie|film|फिल्म|picture|चित्र|से है)",
    r"(?:year|साल|वर्ष|when|कब)",
    r"(?:about|के बारे में|विषय में)",
];

/// Intent pattern sets in priority order. First set with any match wins.
static INTENT_RULES: LazyLock<Vec<(Intent, RegexSet)>> = LazyLock::new(|| {
    [
        (Intent::Story, STORY_PATTERNS),
        (Intent::Lyrics, LYRICS_PATTERNS),
        (Intent::Info, INFO_PATTERNS),
    ]
    .into_iter()
    .map(|(intent, patterns)| {
        let set = RegexSet::new(patterns.iter().map(|p| format!("(?i){}", p))).unwrap();
        (intent, set)
    })
    .collect()
});

// Matching quote pairs, straight or curly
static RE_QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"]*)"|“([^”]*)”|'([^']*)'|‘([^’]*)’"#).unwrap());

static RE_MARKER_QUOTED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(?:song|geet|गीत|गाना)\s+["“”'‘’](.*?)["“”'‘’]"#).unwrap()
});

static RE_MARKER_PARTICLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:song|geet|गीत|गाना)\s+(\S.+?)\s+(?:ka|ke|ki|का|के|की|about|में|से)")
        .unwrap()
});

static RE_FOR_SONG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:for|के लिए)\s+(\S.+?)\s+(?:song|geet|गीत)").unwrap()
});

static DEFAULT_LEXICON: LazyLock<Lexicon> = LazyLock::new(Lexicon::default);

/// Classify a query against the built-in lexicon.
pub fn classify(query: &str) -> QueryAnalysis {
    classify_with(query, &DEFAULT_LEXICON)
}

/// Classify a query against the given lexicon.
pub fn classify_with(query: &str, lexicon: &Lexicon) -> QueryAnalysis {
    let normalized = query.to_lowercase();
    let script = detect_script(query);

    QueryAnalysis {
        intent: detect_intent(&normalized),
        script,
        song_name: extract_song_name(query, lexicon),
        preferred_language: detect_preferred_language(&normalized, script, lexicon),
        normalized,
    }
}

/// Classify the writing system of `text`.
pub fn detect_script(text: &str) -> Script {
    let (devanagari, total) = text
        .chars()
        .filter(|c| !c.is_whitespace())
        .fold((0usize, 0usize), |(dev, total), c| {
            (dev + usize::from(is_devanagari(c)), total + 1)
        });

    if devanagari as f64 > total as f64 * HINDI_SCRIPT_THRESHOLD {
        Script::Hindi
    } else if devanagari > 0 {
        Script::Mixed
    } else {
        Script::English
    }
}

fn is_devanagari(c: char) -> bool {
    ('\u{0900}'..='\u{097F}').contains(&c)
}

/// Language the answer should be given in.
///
/// Explicit markers win (Hindi before English); otherwise the script
/// decides, with mixed script answering in Hindi.
pub fn detect_preferred_language(normalized: &str, script: Script, lexicon: &Lexicon) -> Language {
    if first_contained(&lexicon.hindi_markers, normalized).is_some() {
        return Language::Hindi;
    }
    if first_contained(&lexicon.english_markers, normalized).is_some() {
        return Language::English;
    }
    script.response_language()
}

/// Intent of a lower-cased query (story > lyrics > info).
pub fn detect_intent(normalized: &str) -> Intent {
    INTENT_RULES
        .iter()
        .find(|(_, set)| set.is_match(normalized))
        .map(|(intent, _)| *intent)
        .unwrap_or(Intent::Unknown)
}

/// Song named in the query, or empty.
///
/// Each step is tried in order until one yields a non-empty trimmed name:
/// quoted text, a song marker followed by quoted text, a song marker
/// followed by text up to a particle, "for X song", then known titles.
pub fn extract_song_name(query: &str, lexicon: &Lexicon) -> String {
    let non_empty = |name: Option<String>| name.filter(|n| !n.is_empty());

    non_empty(quoted(query))
        .or_else(|| non_empty(first_capture(&RE_MARKER_QUOTED, query)))
        .or_else(|| non_empty(first_capture(&RE_MARKER_PARTICLE, query)))
        .or_else(|| non_empty(first_capture(&RE_FOR_SONG, query)))
        .or_else(|| non_empty(known_title(query, lexicon)))
        .unwrap_or_default()
}

fn quoted(query: &str) -> Option<String> {
    RE_QUOTED.captures_iter(query).find_map(|caps| {
        caps.iter()
            .skip(1)
            .flatten()
            .map(|m| m.as_str().trim())
            .find(|s| !s.is_empty())
            .map(str::to_string)
    })
}

fn first_capture(re: &Regex, query: &str) -> Option<String> {
    re.captures(query)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

fn known_title(query: &str, lexicon: &Lexicon) -> Option<String> {
    first_contained(&lexicon.known_titles, &query.to_lowercase()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_threshold_is_strict() {
        // 3 of 10 non-whitespace characters are Devanagari: exactly 30%
        assert_eq!(detect_script("अबक abcdefg"), Script::Mixed);
        // 4 of 10
        assert_eq!(detect_script("अबकड abcdef"), Script::Hindi);
        // whitespace is not counted
        assert_eq!(detect_script("अ ब क a b c d e f g"), Script::Mixed);
    }

    #[test]
    fn test_english_info_query() {
        let analysis = classify(r#"find information about "tum hi ho""#);

        assert_eq!(analysis.intent, Intent::Info);
        assert_eq!(analysis.song_name, "tum hi ho");
        assert_eq!(analysis.script, Script::English);
        assert_eq!(analysis.preferred_language, Language::English);
    }

    #[test]
    fn test_hindi_story_query() {
        let analysis = classify(r#""लग जा गले" की कहानी बताओ"#);

        assert_eq!(analysis.intent, Intent::Story);
        assert_eq!(analysis.song_name, "लग जा गले");
        assert_eq!(analysis.script, Script::Hindi);
        assert_eq!(analysis.preferred_language, Language::Hindi);
    }

    #[test]
    fn test_unclassifiable_query() {
        let analysis = classify("tell me something");

        assert_eq!(analysis.intent, Intent::Unknown);
        assert!(analysis.song_name.is_empty());
        assert!(!analysis.is_actionable());
    }

    #[test]
    fn test_story_beats_info() {
        // "meaning" is story vocabulary, "singer" is info vocabulary
        assert_eq!(detect_intent("meaning and singer of tum hi ho"), Intent::Story);
    }

    #[test]
    fn test_lyrics_beats_info() {
        assert_eq!(detect_intent("write new lines for the singer"), Intent::Lyrics);
    }

    #[test]
    fn test_script_detection() {
        assert_eq!(detect_script("lag ja gale"), Script::English);
        assert_eq!(detect_script("लग जा गले"), Script::Hindi);
        // 3 Devanagari out of 25 non-whitespace characters
        assert_eq!(
            detect_script("please tell me the story of गले"),
            Script::Mixed
        );
        assert_eq!(detect_script(""), Script::English);
    }

    #[test]
    fn test_marker_overrides_script() {
        let analysis = classify(r#"tell me the story of "tum hi ho" in hindi"#);
        assert_eq!(analysis.script, Script::English);
        assert_eq!(analysis.preferred_language, Language::Hindi);

        let analysis = classify(r#""लग जा गले" की कहानी english में"#);
        assert_eq!(analysis.preferred_language, Language::English);
    }

    #[test]
    fn test_hindi_markers_checked_first() {
        let lexicon = Lexicon::default();
        assert_eq!(
            detect_preferred_language("hindi or english", Script::English, &lexicon),
            Language::Hindi
        );
    }

    #[test]
    fn test_curly_quotes() {
        let lexicon = Lexicon::default();
        assert_eq!(
            extract_song_name("story of “Kal Ho Naa Ho” please", &lexicon),
            "Kal Ho Naa Ho"
        );
    }

    #[test]
    fn test_apostrophe_does_not_open_a_quote() {
        let lexicon = Lexicon::default();
        assert_eq!(
            extract_song_name(r#"what's the story of "tum hi ho""#, &lexicon),
            "tum hi ho"
        );
    }

    #[test]
    fn test_marker_with_particle() {
        let lexicon = Lexicon::default();
        assert_eq!(
            extract_song_name("song Kal Ho Naa Ho ka matlab", &lexicon),
            "Kal Ho Naa Ho"
        );
        assert_eq!(
            extract_song_name("गाना तुम ही हो के बारे में", &lexicon),
            "तुम ही हो"
        );
    }

    #[test]
    fn test_for_song_pattern() {
        let lexicon = Lexicon::default();
        assert_eq!(
            extract_song_name("write verses for Kal Ho Naa Ho song", &lexicon),
            "Kal Ho Naa Ho"
        );
    }

    #[test]
    fn test_empty_quotes_fall_through() {
        let lexicon = Lexicon::default();
        assert_eq!(
            extract_song_name(r#"details of "" lag ja gale"#, &lexicon),
            "lag ja gale"
        );
    }

    #[test]
    fn test_known_title_fallback() {
        let analysis = classify("Who is the singer of Lag Ja Gale");
        assert_eq!(analysis.intent, Intent::Info);
        assert_eq!(analysis.song_name, "lag ja gale");
    }

    #[test]
    fn test_custom_lexicon_titles() {
        let mut lexicon = Lexicon::default();
        lexicon.known_titles = vec!["kal ho naa ho".to_string()];

        let analysis = classify_with("details about kal ho naa ho", &lexicon);
        assert_eq!(analysis.song_name, "kal ho naa ho");

        let analysis = classify_with("details about lag ja gale", &lexicon);
        assert!(analysis.song_name.is_empty());
    }

    #[test]
    fn test_normalized_is_lowercase() {
        let analysis = classify(r#"Story of "Tum Hi Ho""#);
        assert_eq!(analysis.normalized, r#"story of "tum hi ho""#);
        assert_eq!(analysis.song_name, "Tum Hi Ho");
    }
}
