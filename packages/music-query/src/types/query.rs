//! Query classification types.

use serde::{Deserialize, Serialize};

/// The caller's classified goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    /// Factual lookup ("who sang ...", "details of ...")
    Info,

    /// Narrative summary ("story of ...", "meaning of ...")
    Story,

    /// Original verse generation ("write new lines for ...")
    Lyrics,

    /// Nothing recognizable
    Unknown,
}

impl Intent {
    /// The result shape produced for this intent, if any.
    pub fn result_kind(self) -> Option<ResultKind> {
        match self {
            Self::Info => Some(ResultKind::Info),
            Self::Story => Some(ResultKind::Story),
            Self::Lyrics => Some(ResultKind::Lyrics),
            Self::Unknown => None,
        }
    }
}

/// Result type tag carried by a `MusicResponse`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    Info,
    Story,
    Lyrics,
}

/// Writing system detected in the raw query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    /// More than 30% of non-whitespace characters are Devanagari
    Hindi,

    /// No Devanagari at all
    English,

    /// Some Devanagari, but not more than 30%
    Mixed,
}

impl Script {
    /// Collapse to a response language (`Mixed` answers in Hindi).
    pub fn response_language(self) -> Language {
        match self {
            Self::English => Language::English,
            Self::Hindi | Self::Mixed => Language::Hindi,
        }
    }
}

/// Language a response is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Hindi,
    #[default]
    English,
}

impl Language {
    pub fn is_hindi(self) -> bool {
        matches!(self, Self::Hindi)
    }
}

/// Result of classifying one raw query. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryAnalysis {
    /// Classified intent
    pub intent: Intent,

    /// Script the query was written in
    pub script: Script,

    /// Extracted song name (empty when none could be resolved)
    pub song_name: String,

    /// Language the answer should be given in
    pub preferred_language: Language,

    /// Lower-cased query text
    pub normalized: String,
}

impl QueryAnalysis {
    /// Whether the query can be dispatched to a collaborator at all.
    pub fn is_actionable(&self) -> bool {
        self.intent != Intent::Unknown && !self.song_name.trim().is_empty()
    }
}
