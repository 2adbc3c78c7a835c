//! Verse splitting and continuation-lyrics derivations.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::lexicon::Lexicon;
use crate::types::query::Language;
use crate::types::song::ContinuationLyrics;

const MAX_VERSES: usize = 3;

static RE_BLANK_LINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n+").unwrap());

/// Build continuation lyrics from the generated text.
pub fn build_lyrics(
    original_song: &str,
    language: Language,
    generated: &str,
    style: Option<&str>,
    lexicon: &Lexicon,
) -> ContinuationLyrics {
    let new_verses = split_verses(generated);

    ContinuationLyrics {
        original_song: original_song.to_string(),
        language,
        style: style
            .map(str::to_string)
            .unwrap_or_else(|| default_style(language).to_string()),
        theme: lexicon
            .lyric_themes
            .get(language)
            .classify(&generated.to_lowercase())
            .to_string(),
        rhythm_pattern: rhythm_pattern(language).to_string(),
        rhyme_scheme: rhyme_scheme(&new_verses, language).to_string(),
        new_verses,
    }
}

/// Split on blank lines; trimmed, non-empty, at most three.
pub fn split_verses(text: &str) -> Vec<String> {
    RE_BLANK_LINES
        .split(text)
        .map(str::trim)
        .filter(|verse| !verse.is_empty())
        .take(MAX_VERSES)
        .map(str::to_string)
        .collect()
}

/// Rhyme-scheme label from the first verse's non-empty line count.
pub fn rhyme_scheme(verses: &[String], language: Language) -> &'static str {
    let hindi = language.is_hindi();
    let Some(first) = verses.first() else {
        return if hindi { "मुक्त छंद" } else { "Free Verse" };
    };

    match first.lines().filter(|line| !line.trim().is_empty()).count() {
        n if n >= 4 => {
            if hindi {
                "ABAB तुकांत"
            } else {
                "ABAB Rhyme Scheme"
            }
        }
        n if n >= 2 => {
            if hindi {
                "AA तुकांत"
            } else {
                "AA Rhyme Scheme"
            }
        }
        _ => {
            if hindi {
                "मिश्रित छंद"
            } else {
                "Mixed Meter"
            }
        }
    }
}

pub fn rhythm_pattern(language: Language) -> &'static str {
    match language {
        Language::Hindi => "मात्रिक छंद",
        Language::English => "Melodic Meter",
    }
}

pub fn default_style(language: Language) -> &'static str {
    match language {
        Language::Hindi => "पारंपरिक बॉलीवुड",
        Language::English => "Traditional Bollywood",
    }
}
