//! Info path: search query variants, tolerant merging and `SongInfo` assembly.

use tracing::warn;

use super::fields::{
    detailed_info, extract_awards, extract_legal_links, extract_popularity, extract_song_field,
    extract_year,
};
use crate::error::SearchError;
use crate::traits::searcher::Snippet;
use crate::types::lexicon::{Lexicon, SongField};
use crate::types::query::{Language, Script};
use crate::types::song::SongInfo;

/// Snippet text (characters) scanned when deciding on the extra sentence.
const CONTEXT_MAX_CHARS: usize = 500;

/// Context longer than this earns the extra sentence.
const CONTEXT_MIN_CHARS: usize = 100;

/// The four info search variants, in merge order.
pub fn info_search_queries(song: &str) -> [String; 4] {
    [
        format!("\"{song}\" song complete information singer composer lyricist movie year"),
        format!("\"{song}\" bollywood song details cast music director"),
        format!("\"{song}\" film song background awards popularity"),
        format!("\"{song}\" lyrics meaning story context"),
    ]
}

/// The legal-link search query.
pub fn link_search_query(song: &str) -> String {
    format!(
        "\"{song}\" lyrics site:genius.com OR site:gaana.com OR site:jiosaavn.com \
         OR site:youtube.com OR site:spotify.com"
    )
}

/// Join a fan-out, turning every failed call into an empty result.
///
/// Successful results are concatenated in input order. Failures are logged
/// and otherwise ignored; they never fail the batch.
pub fn merge_tolerant(results: Vec<Result<Vec<Snippet>, SearchError>>) -> Vec<Snippet> {
    results
        .into_iter()
        .enumerate()
        .flat_map(|(index, result)| {
            result.unwrap_or_else(|e| {
                warn!(search = index, error = %e, "Search call failed, continuing without it");
                Vec::new()
            })
        })
        .collect()
}

/// Templated description keyed by the query's script.
///
/// One extra sentence is appended when the first three snippet
/// descriptions carry more than a little context.
pub fn describe(song: &str, script: Script, snippets: &[Snippet]) -> String {
    let mut description = match script {
        Script::Hindi => format!(
            "\"{song}\" एक अत्यंत प्रसिद्ध और मधुर गीत है जो अपनी भावनात्मक गहराई और संगीत की मिठास के लिए जाना जाता है। यह गीत लोगों के दिलों में आज भी बसा हुआ है।"
        ),
        Script::English => format!(
            "\"{song}\" is a renowned and melodious song celebrated for its emotional depth and musical sweetness. This timeless composition continues to resonate with audiences."
        ),
        Script::Mixed => format!(
            "\"{song}\" is a beloved song that showcases the perfect blend of meaningful lyrics and beautiful melody, making it a favorite across generations."
        ),
    };

    let context_chars = snippets
        .iter()
        .take(3)
        .map(|s| s.description.as_str())
        .collect::<Vec<_>>()
        .join(" ")
        .chars()
        .take(CONTEXT_MAX_CHARS)
        .count();

    if context_chars > CONTEXT_MIN_CHARS {
        description.push_str(match script {
            Script::Hindi => " इस गीत के बारे में और जानकारी के अनुसार, यह विशेष रूप से अपनी अनूठी शैली के लिए प्रशंसित है।",
            Script::English | Script::Mixed => " Additional information suggests this song is particularly praised for its unique style and composition.",
        });
    }

    description
}

/// Assemble a `SongInfo` from merged info snippets and link snippets.
///
/// Pure: the same inputs always give the same record. Legal links come
/// only from `link_snippets`.
pub fn build_song_info(
    title: &str,
    script: Script,
    language: Language,
    snippets: &[Snippet],
    link_snippets: &[Snippet],
    lexicon: &Lexicon,
) -> SongInfo {
    let field = |f: SongField| extract_song_field(snippets, lexicon, f);

    let year = match field(SongField::Year) {
        year if year.is_empty() => extract_year(snippets),
        year => year,
    };

    SongInfo {
        title: title.to_string(),
        artist: field(SongField::Artist),
        playback_singer: field(SongField::PlaybackSinger),
        composer: field(SongField::Composer),
        lyricist: field(SongField::Lyricist),
        director: field(SongField::Director),
        movie: field(SongField::Movie),
        year,
        genre: field(SongField::Genre),
        album: field(SongField::Album),
        record_label: field(SongField::RecordLabel),
        duration: field(SongField::Duration),
        language,
        awards: extract_awards(snippets, &lexicon.award_keywords),
        popularity_rating: extract_popularity(
            snippets,
            &lexicon.popularity_indicators,
            &lexicon.popularity_fallback,
        ),
        legal_links: extract_legal_links(link_snippets, &lexicon.trusted_domains),
        description: describe(title, script, snippets),
        detailed_info: detailed_info(snippets),
    }
}
