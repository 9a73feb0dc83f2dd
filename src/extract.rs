use std::path::Path;

use anyhow::Result;
use lopdf::Document;
use tracing::{debug, warn};

/// Only the leading pages are scanned; statements and letters carry their
/// identifying fields up front.
pub const MAX_PAGES: usize = 3;

/// Best-effort plain text for a document. PDF text layers are read
/// page-by-page first, with a whole-document fallback for files lopdf
/// cannot walk. Non-PDF inputs need OCR, which is out of scope here, so
/// they yield empty text and the engine's sentinel fields take over.
/// Never fails: any extraction error degrades to an empty string.
pub fn extract_text(path: &Path) -> String {
    let is_pdf = path
        .extension()
        .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case("pdf"))
        .unwrap_or(false);
    if !is_pdf {
        warn!(
            "no text layer in {}; OCR is handled outside this tool",
            path.display()
        );
        return String::new();
    }

    let text = extract_with_lopdf(path)
        .ok()
        .filter(|text| !text.trim().is_empty())
        .or_else(|| {
            try_pdf_extract(path)
                .ok()
                .filter(|text| !text.trim().is_empty())
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        warn!("text extraction returned empty for {}", path.display());
    } else {
        let snippet: String = text.chars().take(500).collect();
        debug!("extracted text for {} starts: {}", path.display(), snippet);
    }
    text
}

/// Page-wise extraction, capped at MAX_PAGES. Pages are joined with
/// newlines so the classifier's header window sees real line structure.
fn extract_with_lopdf(path: &Path) -> Result<String> {
    let doc = Document::load(path)?;
    let page_count = doc.get_pages().len().min(MAX_PAGES);
    let mut pages = Vec::new();
    for page_number in 1..=page_count as u32 {
        match doc.extract_text(&[page_number]) {
            Ok(text) => pages.push(text),
            Err(e) => warn!(
                "could not extract text from page {} of {}: {}",
                page_number,
                path.display(),
                e
            ),
        }
    }
    Ok(pages.join("\n"))
}

/// Whole-document fallback via pdf-extract, for PDFs whose page tree
/// lopdf fails to traverse.
fn try_pdf_extract(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)?;
    let text = pdf_extract::extract_text_from_mem(&bytes)?;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn non_pdf_input_yields_empty_text() {
        assert_eq!(extract_text(Path::new("scan.jpg")), "");
        assert_eq!(extract_text(Path::new("no_extension")), "");
    }

    #[test]
    fn missing_pdf_yields_empty_text() {
        let path = PathBuf::from("/nonexistent/statement.pdf");
        assert_eq!(extract_text(&path), "");
    }
}
