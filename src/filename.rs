use once_cell::sync::Lazy;
use regex::Regex;

/// Characters that are unsafe in filenames on common filesystems.
static ILLEGAL_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r#"[<>:"/\\|?*]"#).unwrap());
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Hard cap on the composed filename, extension included.
pub const MAX_FILENAME_LEN: usize = 100;

const DEFAULT_CODE: &str = "DOC";

/// Compose `{code}-{date}-{provider}-{purpose}{extension}` and make it
/// filesystem-safe. Unsafe characters and whitespace runs become single
/// underscores; names over MAX_FILENAME_LEN characters have the stem
/// truncated so the total, extension preserved, is exactly the cap.
/// Deterministic; never touches the filesystem.
pub fn synthesize(code: &str, date: &str, provider: &str, purpose: &str, extension: &str) -> String {
    let code = if code.trim().is_empty() { DEFAULT_CODE } else { code };
    let stem = sanitize(&format!("{code}-{date}-{provider}-{purpose}"));
    let ext = sanitize(extension);

    let name = format!("{stem}{ext}");
    if name.chars().count() <= MAX_FILENAME_LEN {
        return name;
    }
    let keep = MAX_FILENAME_LEN.saturating_sub(ext.chars().count());
    let truncated: String = stem.chars().take(keep).collect();
    format!("{truncated}{ext}")
}

fn sanitize(part: &str) -> String {
    let replaced = ILLEGAL_CHARS.replace_all(part, "_");
    WHITESPACE_RUN.replace_all(&replaced, "_").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composes_template() {
        assert_eq!(
            synthesize("DOC", "01.05.2024", "Chase", "UnknownPurpose", ".pdf"),
            "DOC-01.05.2024-Chase-UnknownPurpose.pdf"
        );
    }

    #[test]
    fn empty_code_defaults_to_doc() {
        assert_eq!(
            synthesize("", "unknown", "UnknownProvider", "UnknownPurpose", ".pdf"),
            "DOC-unknown-UnknownProvider-UnknownPurpose.pdf"
        );
        assert_eq!(
            synthesize("  ", "unknown", "UnknownProvider", "UnknownPurpose", ".pdf"),
            "DOC-unknown-UnknownProvider-UnknownPurpose.pdf"
        );
    }

    #[test]
    fn replaces_unsafe_characters() {
        let name = synthesize("DOC", "unknown", "A/B:C", "Tax Form", ".pdf");
        assert_eq!(name, "DOC-unknown-A_B_C-Tax_Form.pdf");
    }

    #[test]
    fn truncates_to_exactly_max_len() {
        let provider = "P".repeat(120);
        let name = synthesize("DOC", "01.05.2024", &provider, "statement", ".pdf");
        assert_eq!(name.chars().count(), MAX_FILENAME_LEN);
        assert!(name.ends_with(".pdf"));
    }

    #[test]
    fn short_names_are_untouched() {
        let name = synthesize("X", "unknown", "Chase", "invoice", ".png");
        assert_eq!(name, "X-unknown-Chase-invoice.png");
        assert!(name.chars().count() <= MAX_FILENAME_LEN);
    }

    #[test]
    fn deterministic() {
        let a = synthesize("DOC", "01.05.2024", "Chase", "statement", ".pdf");
        let b = synthesize("DOC", "01.05.2024", "Chase", "statement", ".pdf");
        assert_eq!(a, b);
    }
}
