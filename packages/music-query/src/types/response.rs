//! The terminal artifact handed to the presentation layer.

use serde::Serialize;

use super::query::{Language, ResultKind};
use super::song::{ContinuationLyrics, SongInfo, StorySummary};
use crate::pipeline::{format, messages};

/// One of the three result shapes.
///
/// Serialized untagged: the `type` field of the enclosing response already
/// names the variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MusicPayload {
    Info(SongInfo),
    Story(StorySummary),
    Lyrics(ContinuationLyrics),
}

impl MusicPayload {
    pub fn kind(&self) -> ResultKind {
        match self {
            Self::Info(_) => ResultKind::Info,
            Self::Story(_) => ResultKind::Story,
            Self::Lyrics(_) => ResultKind::Lyrics,
        }
    }
}

/// Response to one query.
///
/// Built atomically: either `success` with `data` and a rendered
/// `formatted_response`, or a failure carrying only `error` and a localized
/// display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicResponse {
    pub success: bool,

    #[serde(rename = "type")]
    pub kind: ResultKind,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<MusicPayload>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    pub formatted_response: String,
}

impl MusicResponse {
    /// Successful response; the display text is rendered from the payload.
    pub fn success(payload: MusicPayload) -> Self {
        let formatted_response = format::format_payload(&payload);
        Self {
            success: true,
            kind: payload.kind(),
            data: Some(payload),
            error: None,
            formatted_response,
        }
    }

    /// Failed response with an explicit error and display text.
    pub fn failure(
        kind: ResultKind,
        error: impl Into<String>,
        formatted_response: impl Into<String>,
    ) -> Self {
        Self {
            success: false,
            kind,
            data: None,
            error: Some(error.into()),
            formatted_response: formatted_response.into(),
        }
    }

    /// The query had no recognizable intent or song name.
    pub fn not_understood(language: Language) -> Self {
        let text = messages::not_understood(language);
        Self::failure(ResultKind::Info, text.error, text.display)
    }

    /// The collaborator behind `kind` produced nothing usable.
    pub fn collaborator_failure(kind: ResultKind, song: &str, language: Language) -> Self {
        let text = messages::collaborator_failure(kind, song, language);
        Self::failure(kind, text.error, text.display)
    }

    /// Something unexpected went wrong.
    pub fn internal_failure(language: Language) -> Self {
        let text = messages::internal_failure(language);
        Self::failure(ResultKind::Info, text.error, text.display)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_renders_once_at_construction() {
        let payload = MusicPayload::Info(SongInfo::new("tum hi ho", Language::English));
        let response = MusicResponse::success(payload.clone());

        assert!(response.success);
        assert_eq!(response.kind, ResultKind::Info);
        assert!(response.error.is_none());
        assert_eq!(response.formatted_response, format::format_payload(&payload));
    }

    #[test]
    fn test_failure_has_no_data() {
        let response = MusicResponse::collaborator_failure(
            ResultKind::Lyrics,
            "lag ja gale",
            Language::English,
        );

        assert!(!response.success);
        assert!(response.data.is_none());
        assert_eq!(response.kind, ResultKind::Lyrics);
        assert!(response.error.as_deref().unwrap().contains("lag ja gale"));
    }

    #[test]
    fn test_serialized_shape() {
        let response = MusicResponse::not_understood(Language::English);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["success"], false);
        assert_eq!(json["type"], "info");
        assert!(json.get("data").is_none());
        assert!(json["formattedResponse"].as_str().unwrap().len() > 0);
    }
}
