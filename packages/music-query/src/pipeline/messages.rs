//! Localized failure texts.
//!
//! Each failure carries a short `error` string and a longer `display` text
//! for the presentation layer.

use crate::types::query::{Language, ResultKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureText {
    pub error: String,
    pub display: String,
}

impl FailureText {
    fn new(error: impl Into<String>, display: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            display: display.into(),
        }
    }
}

/// No intent or no song name could be resolved.
pub fn not_understood(language: Language) -> FailureText {
    match language {
        Language::Hindi => FailureText::new(
            "आपकी संगीत संबंधी अनुरोध समझ नहीं पाया। कृपया गीत का नाम बताएं।",
            "मैं आपकी संगीत संबंधी अनुरोध समझ नहीं पाया। कृपया गीत का नाम और आप क्या जानना चाहते हैं, यह स्पष्ट करें।",
        ),
        Language::English => FailureText::new(
            "Could not understand your music request. Please specify a song name.",
            "I couldn't understand your music request. Please specify a song name and what you'd like to know about it.",
        ),
    }
}

/// The collaborator behind `kind` produced nothing usable for `song`.
pub fn collaborator_failure(kind: ResultKind, song: &str, language: Language) -> FailureText {
    match (kind, language) {
        (ResultKind::Info, Language::Hindi) => FailureText::new(
            format!("\"{song}\" के बारे में जानकारी नहीं मिली"),
            format!("खुशी, मैं \"{song}\" के बारे में जानकारी नहीं ढूंढ पाया। कृपया किसी अन्य गीत का नाम या सही स्पेलिंग की जांच करें।"),
        ),
        (ResultKind::Info, Language::English) => FailureText::new(
            format!("Could not find information about \"{song}\""),
            format!("Sorry, I couldn't find information about \"{song}\". Please try a different song or check the spelling."),
        ),
        (ResultKind::Story, Language::Hindi) => FailureText::new(
            format!("\"{song}\" के लिए कहानी नहीं बना पाया"),
            format!("खुशी, मैं \"{song}\" के लिए कहानी नहीं बना पाया। कृपया किसी अन्य गीत का नाम आज़माएं।"),
        ),
        (ResultKind::Story, Language::English) => FailureText::new(
            format!("Could not create story for \"{song}\""),
            format!("Sorry, I couldn't create a story for \"{song}\". Please try a different song."),
        ),
        (ResultKind::Lyrics, Language::Hindi) => FailureText::new(
            format!("\"{song}\" के लिए नए बोल नहीं लिख पाया"),
            format!("खुशी, मैं \"{song}\" के लिए नए बोल नहीं लिख पाया। कृपया किसी अन्य गीत का नाम आज़माएं।"),
        ),
        (ResultKind::Lyrics, Language::English) => FailureText::new(
            format!("Could not generate lyrics for \"{song}\""),
            format!("Sorry, I couldn't generate lyrics for \"{song}\". Please try a different song."),
        ),
    }
}

/// Anything unexpected.
pub fn internal_failure(language: Language) -> FailureText {
    match language {
        Language::Hindi => FailureText::new(
            "आपकी संगीत संबंधी अनुरोध को प्रोसेस करते समय त्रुटि हुई।",
            "खुशी, आपकी संगीत संबंधी अनुरोध को प्रोसेस करते समय त्रुटि हुई। कृपया फिर से कोशिश करें।",
        ),
        Language::English => FailureText::new(
            "An error occurred while processing your music request.",
            "Sorry, there was an error processing your music request. Please try again.",
        ),
    }
}
