//! Keyword-anchored field extraction from search snippets.
//!
//! Pure functions over snippets. Nothing here fails: "not found" is an
//! empty string or an empty list.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::traits::searcher::Snippet;
use crate::types::lexicon::{first_contained, Lexicon, SongField};

/// Maximum number of tokens kept from an accepted field value.
const MAX_FIELD_TOKENS: usize = 4;

pub const MAX_AWARDS: usize = 3;
pub const MAX_LEGAL_LINKS: usize = 5;

/// Snippets scanned for detailed info.
const DETAIL_SNIPPETS: usize = 3;

/// Minimum description length (exclusive) that counts as detail.
const DETAIL_MIN_CHARS: usize = 50;

static RE_YEAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?:19|20)[0-9]{2}").unwrap());

/// The three anchors tried for every keyword, in order.
fn anchor_patterns(keyword: &str) -> [String; 3] {
    let kw = regex::escape(keyword);
    [
        format!(r"(?i){kw}[:\s-]+([^,\n.;]+)"),
        format!(r"(?i){kw}\s+by\s+([^,\n.;]+)"),
        format!(r"(?i)([^,\n.;]+)\s+{kw}"),
    ]
}

/// First acceptable value for any of `keywords` across `snippets`.
///
/// Search order is snippet, then keyword, then anchor. A capture is
/// accepted when its trimmed length is strictly between 2 and 50
/// characters; the result keeps its first four whitespace-separated tokens.
pub fn extract_field(snippets: &[Snippet], keywords: &[String]) -> String {
    let anchors: Vec<Regex> = keywords
        .iter()
        .flat_map(|kw| anchor_patterns(kw))
        .filter_map(|pattern| Regex::new(&pattern).ok())
        .collect();

    for snippet in snippets {
        let text = snippet.text_lower();
        for anchor in &anchors {
            let Some(value) = anchor.captures(&text).and_then(|caps| caps.get(1)) else {
                continue;
            };
            let value = value.as_str().trim();
            let len = value.chars().count();
            if len > 2 && len < 50 {
                return value
                    .split_whitespace()
                    .take(MAX_FIELD_TOKENS)
                    .collect::<Vec<_>>()
                    .join(" ");
            }
        }
    }
    String::new()
}

/// `extract_field` with the lexicon's keywords for `field`.
pub fn extract_song_field(snippets: &[Snippet], lexicon: &Lexicon, field: SongField) -> String {
    extract_field(snippets, lexicon.keywords_for(field))
}

/// First 19xx/20xx token across all snippets.
pub fn extract_year(snippets: &[Snippet]) -> String {
    snippets
        .iter()
        .find_map(|s| RE_YEAR.find(&s.text()).map(|m| m.as_str().to_string()))
        .unwrap_or_default()
}

/// Sentences mentioning an award keyword. Deduplicated, at most three.
pub fn extract_awards(snippets: &[Snippet], keywords: &[String]) -> Vec<String> {
    let found = snippets.iter().flat_map(|snippet| {
        let text = snippet.text_lower();
        keywords
            .iter()
            .map(|kw| kw.to_lowercase())
            .filter(|kw| !kw.is_empty() && text.contains(kw.as_str()))
            .filter_map(|kw| {
                text.split(|c| matches!(c, '.' | '!' | '?'))
                    .find(|sentence| sentence.contains(kw.as_str()))
                    .map(|sentence| sentence.trim().to_string())
            })
            .collect::<Vec<_>>()
    });

    dedup_capped(found, MAX_AWARDS)
}

/// First popularity indicator mentioned, capitalized, else the fallback.
pub fn extract_popularity(snippets: &[Snippet], indicators: &[String], fallback: &str) -> String {
    snippets
        .iter()
        .find_map(|s| first_contained(indicators, &s.text_lower()))
        .map(capitalize)
        .unwrap_or_else(|| fallback.to_string())
}

/// Links whose host is a trusted domain or one of its subdomains.
/// Deduplicated, at most five.
pub fn extract_legal_links(snippets: &[Snippet], trusted_domains: &[String]) -> Vec<String> {
    let links = snippets
        .iter()
        .filter(|s| is_trusted_link(&s.url, trusted_domains))
        .map(|s| s.url.clone());

    dedup_capped(links, MAX_LEGAL_LINKS)
}

/// Whether `link` parses and its host is on the allow-list.
pub fn is_trusted_link(link: &str, trusted_domains: &[String]) -> bool {
    let Some(host) = Url::parse(link)
        .ok()
        .and_then(|url| url.host_str().map(str::to_lowercase))
    else {
        return false;
    };

    trusted_domains.iter().any(|domain| {
        let domain = domain.to_lowercase();
        host == domain || host.ends_with(&format!(".{domain}"))
    })
}

/// Longer descriptions from the first few snippets, space-joined.
pub fn detailed_info(snippets: &[Snippet]) -> String {
    snippets
        .iter()
        .take(DETAIL_SNIPPETS)
        .map(|s| s.description.as_str())
        .filter(|d| d.chars().count() > DETAIL_MIN_CHARS)
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

fn dedup_capped(items: impl Iterator<Item = String>, cap: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .filter(|item| seen.insert(item.clone()))
        .take(cap)
        .collect()
}

pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
