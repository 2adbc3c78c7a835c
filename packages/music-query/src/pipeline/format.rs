//! Display rendering for successful payloads.
//!
//! Pure template concatenation: an ordered list of "if present, append a
//! labelled line" rules per payload shape, with one label table per
//! language. Never fails; a link that does not parse is labelled with
//! itself.

use std::fmt::Write;

use url::Url;

use super::fields::capitalize;
use crate::types::query::Language;
use crate::types::response::MusicPayload;
use crate::types::song::{ContinuationLyrics, SongInfo, StorySummary};

/// Detailed info is shown only when longer than this (characters).
const DETAIL_SHOW_MIN: usize = 100;

/// Detailed info is truncated to this many characters.
const DETAIL_SHOW_MAX: usize = 200;

struct Labels {
    info_header: &'static str,
    artist: &'static str,
    playback_singer: &'static str,
    composer: &'static str,
    lyricist: &'static str,
    director: &'static str,
    movie: &'static str,
    year: &'static str,
    album: &'static str,
    genre: &'static str,
    duration: &'static str,
    record_label: &'static str,
    popularity: &'static str,
    awards: &'static str,
    description: &'static str,
    links: &'static str,
    detailed_info: &'static str,

    story_header: &'static str,
    themes: &'static str,
    mood: &'static str,
    characters: &'static str,
    cultural_context: &'static str,
    historical_background: &'static str,

    verses_notice: &'static str,
    verse: &'static str,
    technical_details: &'static str,
    style: &'static str,
    lyric_theme: &'static str,
    rhythm_pattern: &'static str,
    rhyme_scheme: &'static str,
}

static ENGLISH: Labels = Labels {
    info_header: "🎵 **Comprehensive Song Information: \"{}\"**",
    artist: "👤 **Main Artist:**",
    playback_singer: "🎤 **Playback Singer:**",
    composer: "🎼 **Music Director:**",
    lyricist: "✍️ **Lyricist:**",
    director: "🎬 **Film Director:**",
    movie: "🎭 **Movie:**",
    year: "📅 **Release Year:**",
    album: "💿 **Album:**",
    genre: "🎵 **Genre:**",
    duration: "⏱️ **Duration:**",
    record_label: "🏷️ **Record Label:**",
    popularity: "⭐ **Popularity:**",
    awards: "🏆 **Awards and Recognition:**",
    description: "📝 **Description:**",
    links: "🔗 **Listen to the song and find lyrics at:**",
    detailed_info: "📖 **Additional Information:**",

    story_header: "📖 **Song Story: \"{}\"**",
    themes: "🎭 **Main Themes:**",
    mood: "💫 **Emotional Tone:**",
    characters: "👥 **Main Characters:**",
    cultural_context: "🏛️ **Cultural Context:**",
    historical_background: "📚 **Historical Background:**",

    verses_notice: "*These are completely original compositions inspired by the original song*",
    verse: "Verse",
    technical_details: "📊 **Technical Details:**",
    style: "🎨 **Musical Style:**",
    lyric_theme: "🎯 **Main Theme:**",
    rhythm_pattern: "🎵 **Rhythm Pattern:**",
    rhyme_scheme: "🎼 **Rhyme Scheme:**",
};

static HINDI: Labels = Labels {
    info_header: "🎵 **गीत की विस्तृत जानकारी: \"{}\"**",
    artist: "👤 **मुख्य गायक/गायिका:**",
    playback_singer: "🎤 **प्लेबैक सिंगर:**",
    composer: "🎼 **संगीत निर्देशक:**",
    lyricist: "✍️ **गीतकार:**",
    director: "🎬 **फिल्म निर्देशक:**",
    movie: "🎭 **फिल्म:**",
    year: "📅 **रिलीज़ वर्ष:**",
    album: "💿 **एल्बम:**",
    genre: "🎵 **शैली:**",
    duration: "⏱️ **अवधि:**",
    record_label: "🏷️ **रिकॉर्ड लेबल:**",
    popularity: "⭐ **लोकप्रियता:**",
    awards: "🏆 **पुरस्कार और सम्मान:**",
    description: "📝 **विवरण:**",
    links: "🔗 **गीत सुनने और बोल देखने के लिए:**",
    detailed_info: "📖 **अतिरिक्त जानकारी:**",

    story_header: "📖 **गीत की कहानी: \"{}\"**",
    themes: "🎭 **मुख्य विषय:**",
    mood: "💫 **भावनात्मक रंग:**",
    characters: "👥 **मुख्य पात्र:**",
    cultural_context: "🏛️ **सांस्कृतिक संदर्भ:**",
    historical_background: "📚 **ऐतिहासिक पृष्ठभूमि:**",

    verses_notice: "*ये पूरी तरह से मौलिक रचनाएं हैं जो मूल गीत से प्रेरित हैं*",
    verse: "श्लोक",
    technical_details: "📊 **तकनीकी विवरण:**",
    style: "🎨 **संगीत शैली:**",
    lyric_theme: "🎯 **मुख्य विषय:**",
    rhythm_pattern: "🎵 **छंद पैटर्न:**",
    rhyme_scheme: "🎼 **तुकांत योजना:**",
};

fn labels(language: Language) -> &'static Labels {
    match language {
        Language::Hindi => &HINDI,
        Language::English => &ENGLISH,
    }
}

/// Render a payload in its own declared language.
pub fn format_payload(payload: &MusicPayload) -> String {
    match payload {
        MusicPayload::Info(info) => format_song_info(info),
        MusicPayload::Story(story) => format_story(story),
        MusicPayload::Lyrics(lyrics) => format_lyrics(lyrics),
    }
}

pub fn format_song_info(info: &SongInfo) -> String {
    let l = labels(info.language);
    let mut out = format!("{}\n\n", l.info_header.replace("{}", &info.title));

    let playback = if info.playback_singer != info.artist {
        info.playback_singer.as_str()
    } else {
        ""
    };

    for (label, value) in [
        (l.artist, info.artist.as_str()),
        (l.playback_singer, playback),
        (l.composer, info.composer.as_str()),
        (l.lyricist, info.lyricist.as_str()),
        (l.director, info.director.as_str()),
        (l.movie, info.movie.as_str()),
        (l.year, info.year.as_str()),
        (l.album, info.album.as_str()),
        (l.genre, info.genre.as_str()),
        (l.duration, info.duration.as_str()),
        (l.record_label, info.record_label.as_str()),
        (l.popularity, info.popularity_rating.as_str()),
    ] {
        line(&mut out, label, value);
    }

    if !info.awards.is_empty() {
        let _ = writeln!(out, "\n{}", l.awards);
        for award in &info.awards {
            let _ = writeln!(out, "• {award}");
        }
    }

    if !info.description.is_empty() {
        let _ = writeln!(out, "\n{}\n{}", l.description, info.description);
    }

    if !info.legal_links.is_empty() {
        let _ = writeln!(out, "\n{}", l.links);
        for link in &info.legal_links {
            let _ = writeln!(out, "• {}: {}", link_label(link), link);
        }
    }

    if info.detailed_info.chars().count() > DETAIL_SHOW_MIN {
        let shown: String = info.detailed_info.chars().take(DETAIL_SHOW_MAX).collect();
        let _ = writeln!(out, "\n{}\n{}...", l.detailed_info, shown);
    }

    out
}

pub fn format_story(story: &StorySummary) -> String {
    let l = labels(story.language);
    let mut out = format!(
        "{}\n\n{}\n\n",
        l.story_header.replace("{}", &story.title),
        story.summary
    );

    line(&mut out, l.themes, &story.themes.join(", "));
    let _ = writeln!(out, "{} {}", l.mood, story.mood);
    line(&mut out, l.characters, &story.characters.join(", "));
    line(&mut out, l.cultural_context, &story.cultural_context);
    line(&mut out, l.historical_background, &story.historical_background);

    out
}

pub fn format_lyrics(lyrics: &ContinuationLyrics) -> String {
    let l = labels(lyrics.language);
    let mut out = match lyrics.language {
        Language::Hindi => format!(
            "🎤 **\"{}\" की शैली में नए मौलिक श्लोक**\n\n",
            lyrics.original_song
        ),
        Language::English => format!(
            "🎤 **New Original Verses in the Style of \"{}\"**\n\n",
            lyrics.original_song
        ),
    };
    let _ = write!(out, "{}\n\n", l.verses_notice);

    for (i, verse) in lyrics.new_verses.iter().enumerate() {
        let _ = write!(out, "**{} {}:**\n\n{}\n\n---\n\n", l.verse, i + 1, verse);
    }

    let _ = writeln!(out, "{}", l.technical_details);
    let _ = writeln!(out, "{} {}", l.style, lyrics.style);
    let _ = writeln!(out, "{} {}", l.lyric_theme, lyrics.theme);
    line(&mut out, l.rhythm_pattern, &lyrics.rhythm_pattern);
    line(&mut out, l.rhyme_scheme, &lyrics.rhyme_scheme);

    out
}

/// Append `label value` when the value is non-empty.
fn line(out: &mut String, label: &str, value: &str) {
    if !value.is_empty() {
        let _ = writeln!(out, "{label} {value}");
    }
}

/// Capitalized host without its first `www.`; the raw link if it does not parse.
fn link_label(link: &str) -> String {
    match Url::parse(link).ok().as_ref().and_then(Url::host_str) {
        Some(host) => capitalize(&host.replacen("www.", "", 1)),
        None => link.to_string(),
    }
}
