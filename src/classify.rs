use serde::Serialize;
use tracing::debug;

use crate::keywords::{is_strong_brand, STRONG_BRANDS};
use crate::normalize::{normalize, whole_word_match};

pub const UNKNOWN_PROVIDER: &str = "UnknownProvider";
pub const UNKNOWN_PURPOSE: &str = "UnknownPurpose";

/// Minimum partial-ratio score (0-100) for a fuzzy match to be accepted.
pub const FUZZY_THRESHOLD: f64 = 85.0;

/// Number of leading lines treated as the document header, the
/// highest-signal region for the issuer's identity.
const HEADER_LINES: usize = 5;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Classification {
    pub provider: String,
    pub purpose: String,
}

/// Assign provider and purpose labels from extracted text. Never fails:
/// when no tier of the cascade matches, the `Unknown*` sentinels are
/// returned. The keyword lists are read-only; list order is match priority.
pub fn classify(text: &str, providers: &[String], purposes: &[String]) -> Classification {
    let norm_text = normalize(text);
    let provider = resolve_provider(text, &norm_text, providers)
        .unwrap_or_else(|| UNKNOWN_PROVIDER.to_string());
    let purpose = resolve_purpose(&norm_text, purposes)
        .unwrap_or_else(|| UNKNOWN_PURPOSE.to_string());
    debug!(%provider, %purpose, "classified document");
    Classification { provider, purpose }
}

/// Provider cascade, one tier tried only when the previous found nothing:
/// 1. strong brands in the header window
/// 2. general keywords in the header window (length-filtered)
/// 3. strong brands in the full normalized text
/// 4. general keywords in the full normalized text (length-filtered)
/// 5. fuzzy partial-ratio fallback over the length-filtered keywords
fn resolve_provider(text: &str, norm_text: &str, providers: &[String]) -> Option<String> {
    let header = header_window(text);
    strong_brand_in(&header)
        .or_else(|| provider_keyword_in(&header, providers))
        .or_else(|| strong_brand_in(norm_text))
        .or_else(|| provider_keyword_in(norm_text, providers))
        .or_else(|| fuzzy_provider(norm_text, providers))
}

/// Purpose cascade: exact whole-word match over the full normalized text,
/// then the fuzzy fallback. No header tier and no length filter.
fn resolve_purpose(norm_text: &str, purposes: &[String]) -> Option<String> {
    purposes
        .iter()
        .find(|keyword| whole_word_match(keyword, norm_text))
        .cloned()
        .or_else(|| fuzzy_best(norm_text, purposes.iter()))
}

/// The first HEADER_LINES newline-delimited lines joined with spaces.
fn header_window(text: &str) -> String {
    text.lines().take(HEADER_LINES).collect::<Vec<_>>().join(" ")
}

/// General provider keywords shorter than 4 characters are too noisy to
/// trust unless they are themselves strong brands.
fn passes_length_filter(keyword: &str) -> bool {
    keyword.chars().count() >= 4 || is_strong_brand(keyword)
}

fn strong_brand_in(text: &str) -> Option<String> {
    STRONG_BRANDS
        .iter()
        .find(|brand| whole_word_match(brand, text))
        .map(|brand| brand.to_string())
}

fn provider_keyword_in(text: &str, providers: &[String]) -> Option<String> {
    providers
        .iter()
        .find(|keyword| passes_length_filter(keyword) && whole_word_match(keyword, text))
        .cloned()
}

fn fuzzy_provider(norm_text: &str, providers: &[String]) -> Option<String> {
    fuzzy_best(
        norm_text,
        providers.iter().filter(|k| passes_length_filter(k)),
    )
}

/// Best-scoring candidate by partial ratio against the normalized text,
/// accepted only at or above FUZZY_THRESHOLD. Candidates are normalized for
/// scoring but the original keyword is returned. First-listed wins ties.
fn fuzzy_best<'a, I>(norm_text: &str, candidates: I) -> Option<String>
where
    I: Iterator<Item = &'a String>,
{
    let mut best: Option<(f64, &'a String)> = None;
    for keyword in candidates {
        let score = partial_ratio(&normalize(keyword), norm_text);
        if best.map_or(true, |(top, _)| score > top) {
            best = Some((score, keyword));
        }
    }
    best.filter(|(score, _)| *score >= FUZZY_THRESHOLD)
        .map(|(_, keyword)| keyword.clone())
}

/// Partial-ratio similarity on a 0-100 scale: the best Levenshtein
/// similarity of the shorter string against every equal-length window of
/// the longer, so a keyword buried in surrounding text still scores high.
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    let a_len = a.chars().count();
    let b_len = b.chars().count();
    let (needle, hay, needle_len) = if a_len <= b_len {
        (a, b, a_len)
    } else {
        (b, a, b_len)
    };
    if needle_len == 0 {
        return if hay.is_empty() { 100.0 } else { 0.0 };
    }

    let hay_chars: Vec<char> = hay.chars().collect();
    let mut best = 0.0_f64;
    for window in hay_chars.windows(needle_len) {
        let window: String = window.iter().collect();
        let distance = strsim::levenshtein(needle, &window).min(needle_len);
        let score = 100.0 * (needle_len - distance) as f64 / needle_len as f64;
        if score > best {
            best = score;
        }
        if best >= 100.0 {
            break;
        }
    }
    best
}
