//! Derives canonical, filesystem-safe names for scanned documents from
//! their extracted text. Three fields are pulled out of noisy OCR or PDF
//! text — issuing date, provider identity, and document purpose — and
//! composed into a `{code}-{date}-{provider}-{purpose}{ext}` filename.
//!
//! The engine is stateless: every operation is a pure function of its
//! inputs plus the read-only [`keywords::KeywordCorpus`], so documents can
//! be classified concurrently without locking. Nothing here performs I/O
//! beyond diagnostic logging; text extraction and file management belong
//! to the caller (see [`extract`] and the CLI binary).

pub mod classify;
pub mod dates;
pub mod extract;
pub mod filename;
pub mod keywords;
pub mod normalize;

use serde::Serialize;
use tracing::debug;

pub use classify::{classify, Classification, UNKNOWN_PROVIDER, UNKNOWN_PURPOSE};
pub use dates::{extract_date, UNKNOWN_DATE};
pub use filename::synthesize;
pub use keywords::KeywordCorpus;

/// Characters of extracted text carried along for diagnostics.
pub const SNIPPET_LEN: usize = 500;

/// Everything a caller needs to file one document: the extracted fields,
/// the composed filename, and a text snippet for manual review.
#[derive(Debug, Clone, Serialize)]
pub struct RenamePlan {
    pub date: String,
    pub provider: String,
    pub purpose: String,
    pub filename: String,
    pub text_snippet: String,
}

/// Single entry point for front ends: classify already-extracted text and
/// compose the target filename. Total — empty or garbled text degrades to
/// the sentinel fields and a generic but valid filename.
pub fn classify_and_name(
    raw_text: &str,
    code: &str,
    extension: &str,
    corpus: &KeywordCorpus,
) -> RenamePlan {
    let date = dates::extract_date(raw_text);
    let fields = classify::classify(raw_text, &corpus.providers, &corpus.purposes);
    let filename = filename::synthesize(code, &date, &fields.provider, &fields.purpose, extension);
    let text_snippet: String = raw_text.chars().take(SNIPPET_LEN).collect();
    debug!(
        %date,
        provider = %fields.provider,
        purpose = %fields.purpose,
        %filename,
        "composed rename plan"
    );
    RenamePlan {
        date,
        provider: fields.provider,
        purpose: fields.purpose,
        filename,
        text_snippet,
    }
}
