use regex::Regex;

/// Canonicalize text for keyword matching: lowercase, strip ASCII
/// punctuation, collapse whitespace runs to single spaces, trim.
/// Idempotent, so it is safe to normalize already-normalized text.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped: String = lowered
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Case-insensitive whole-word search for `keyword` inside `text`.
/// "Chase" must not match inside "Chaser".
pub fn whole_word_match(keyword: &str, text: &str) -> bool {
    let pattern = format!(r"(?i)\b{}\b", regex::escape(keyword));
    Regex::new(&pattern)
        .map(|re| re.is_match(text))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_punctuation_and_case() {
        assert_eq!(normalize("Chase Bank, N.A.!"), "chase bank na");
    }

    #[test]
    fn normalize_collapses_whitespace() {
        assert_eq!(normalize("  Statement\n\n  Date \t 2024  "), "statement date 2024");
    }

    #[test]
    fn normalize_is_idempotent() {
        let samples = [
            "Chase Bank\nStatement Date: January 5, 2024",
            "  MIXED   case,  with;  punctuation!!  ",
            "",
            "already normalized text",
        ];
        for s in &samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn whole_word_requires_boundaries() {
        assert!(whole_word_match("Chase", "Chase Bank"));
        assert!(!whole_word_match("Chase", "Chaser Inc"));
        assert!(whole_word_match("chase", "CHASE BANK"));
        assert!(whole_word_match("Chase", "Bank of Chase"));
    }

    #[test]
    fn whole_word_escapes_regex_metacharacters() {
        assert!(whole_word_match("AT&T", "Your AT&T bill is ready"));
        assert!(!whole_word_match("AT&T", "FLAT&TIRE"));
    }

    #[test]
    fn whole_word_on_empty_text() {
        assert!(!whole_word_match("Chase", ""));
    }
}
