use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

/// Sentinel returned when no date-shaped token in the text parses.
pub const UNKNOWN_DATE: &str = "unknown";

const MONTH_NAME: &str = "Jan(?:uary)?|Feb(?:ruary)?|Mar(?:ch)?|Apr(?:il)?|May|Jun(?:e)?|Jul(?:y)?|Aug(?:ust)?|Sep(?:tember)?|Oct(?:ober)?|Nov(?:ember)?|Dec(?:ember)?";

/// Date-shaped patterns in priority order. The first pattern that yields any
/// parseable match wins, regardless of where later patterns match in the
/// text. The bare year is a deliberate last resort.
static DATE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        // "January 5, 2024"
        Regex::new(&format!(r"(?i)\b(?:{MONTH_NAME})\s+\d{{1,2}},\s*\d{{4}}\b")).unwrap(),
        // "5 January 2024"
        Regex::new(&format!(r"(?i)\b\d{{1,2}}\s+(?:{MONTH_NAME}),?\s*\d{{4}}\b")).unwrap(),
        // "1/5/2024", "1-5-24"
        Regex::new(r"\b\d{1,2}[/-]\d{1,2}[/-]\d{2,4}\b").unwrap(),
        // "2024/01/05", "2024-01-05"
        Regex::new(r"\b\d{4}[/-]\d{1,2}[/-]\d{1,2}\b").unwrap(),
        // loose "5 Sept 2024" style, month token validated during parsing
        Regex::new(r"(?i)\b\d{1,2}\s+\w+\s+\d{4}\b").unwrap(),
        // bare year fallback
        Regex::new(r"\b\d{4}\b").unwrap(),
    ]
});

/// Scan text for the first parseable date and format it as MM.DD.YYYY.
/// Pattern priority comes first, document order second; unparseable matches
/// are skipped. Returns "unknown" when nothing parses.
pub fn extract_date(text: &str) -> String {
    extract_date_at(text, Local::now().date_naive())
}

/// Same as [`extract_date`] with an explicit "today" for the past-bias rule.
pub fn extract_date_at(text: &str, today: NaiveDate) -> String {
    for pattern in DATE_PATTERNS.iter() {
        for candidate in pattern.find_iter(text) {
            if let Some(date) = parse_candidate(candidate.as_str(), today) {
                return date.format("%m.%d.%Y").to_string();
            }
        }
    }
    UNKNOWN_DATE.to_string()
}

/// Parse one matched snippet into a calendar date. Handles the numeric
/// separator forms, the three-token month-name forms, and the bare year.
fn parse_candidate(snippet: &str, today: NaiveDate) -> Option<NaiveDate> {
    let cleaned = snippet.replace(',', " ");
    let tokens: Vec<&str> = cleaned.split_whitespace().collect();
    match tokens.as_slice() {
        [single] => parse_numeric(single, today).or_else(|| parse_bare_year(single)),
        [first, second, third] => {
            if let Some(month) = month_from_token(first) {
                // "January 5 2024"
                build_date(third, month, second)
            } else if let Some(month) = month_from_token(second) {
                // "5 January 2024"
                build_date(third, month, first)
            } else {
                None
            }
        }
        _ => None,
    }
}

fn build_date(year: &str, month: u32, day: &str) -> Option<NaiveDate> {
    let year: i32 = year.parse().ok()?;
    let day: u32 = day.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Slash- or dash-separated numeric date. Month-first is the preferred
/// reading; day-first is tried only when month-first is not a valid
/// calendar date. Two-digit years resolve to the current century unless
/// that lands in the future, in which case the previous century is used.
fn parse_numeric(snippet: &str, today: NaiveDate) -> Option<NaiveDate> {
    let parts: Vec<&str> = snippet.split(['/', '-']).collect();
    if parts.len() != 3 {
        return None;
    }
    if parts[0].len() == 4 {
        // year-first form
        let year: i32 = parts[0].parse().ok()?;
        let month: u32 = parts[1].parse().ok()?;
        let day: u32 = parts[2].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }
    let first: u32 = parts[0].parse().ok()?;
    let second: u32 = parts[1].parse().ok()?;
    let make = |year: i32| {
        NaiveDate::from_ymd_opt(year, first, second)
            .or_else(|| NaiveDate::from_ymd_opt(year, second, first))
    };
    match parts[2].len() {
        4 => make(parts[2].parse().ok()?),
        2 => {
            let short: i32 = parts[2].parse().ok()?;
            let candidate = make(2000 + short)?;
            if candidate > today {
                make(1900 + short)
            } else {
                Some(candidate)
            }
        }
        _ => None,
    }
}

/// Bare four-digit year, resolved to January 1. Bounded to a plausible
/// range so account numbers and amounts are not mistaken for years.
fn parse_bare_year(snippet: &str) -> Option<NaiveDate> {
    if snippet.len() != 4 {
        return None;
    }
    let year: i32 = snippet.parse().ok()?;
    if !(1900..=2099).contains(&year) {
        return None;
    }
    NaiveDate::from_ymd_opt(year, 1, 1)
}

/// Month number from a name token: full names and prefixes of at least
/// three letters ("jan", "sept") both resolve.
fn month_from_token(token: &str) -> Option<u32> {
    const MONTHS: [&str; 12] = [
        "january", "february", "march", "april", "may", "june",
        "july", "august", "september", "october", "november", "december",
    ];
    let token = token.to_lowercase();
    if token.len() < 3 {
        return None;
    }
    MONTHS
        .iter()
        .position(|name| *name == token || name.starts_with(token.as_str()))
        .map(|index| index as u32 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 30).unwrap()
    }

    #[test]
    fn month_name_first() {
        assert_eq!(extract_date_at("Statement Date: January 5, 2024", today()), "01.05.2024");
        assert_eq!(extract_date_at("Due by Mar 7, 2023 at noon", today()), "03.07.2023");
    }

    #[test]
    fn day_before_month_name() {
        assert_eq!(extract_date_at("Issued 5 January 2024", today()), "01.05.2024");
        assert_eq!(extract_date_at("dated 14 Sept 2021", today()), "09.14.2021");
    }

    #[test]
    fn numeric_forms() {
        assert_eq!(extract_date_at("paid on 1/5/2024 by card", today()), "01.05.2024");
        assert_eq!(extract_date_at("ref 2023-07-14 archive", today()), "07.14.2023");
        // month-first read is impossible, falls back to day-first
        assert_eq!(extract_date_at("shipped 25/12/2020", today()), "12.25.2020");
    }

    #[test]
    fn pattern_priority_beats_text_order() {
        // Year-only "2021" appears first in the text but the month-name
        // pattern has higher priority.
        let text = "Fiscal year 2021 summary. Prepared March 3, 2023.";
        assert_eq!(extract_date_at(text, today()), "03.03.2023");
    }

    #[test]
    fn past_bias_on_two_digit_years() {
        // 2030 would be in the future relative to "today"; prefer 1930.
        assert_eq!(extract_date_at("signed 12/05/30", today()), "12.05.1930");
        // 2024 is already in the past, keep the current century.
        assert_eq!(extract_date_at("signed 12/05/24", today()), "12.05.2024");
    }

    #[test]
    fn bare_year_fallback() {
        assert_eq!(extract_date_at("Annual Report 2021", today()), "01.01.2021");
        // out-of-range numbers are not years
        assert_eq!(extract_date_at("Account ending 1234", today()), UNKNOWN_DATE);
    }

    #[test]
    fn unparseable_matches_are_skipped() {
        // "99/99/2020" matches the numeric pattern but is not a calendar
        // date; the year inside it still satisfies the bare-year fallback.
        assert_eq!(extract_date_at("ref 99/99/2020", today()), "01.01.2020");
    }

    #[test]
    fn no_date_at_all() {
        assert_eq!(extract_date_at("", today()), UNKNOWN_DATE);
        assert_eq!(extract_date_at("no dates anywhere here", today()), UNKNOWN_DATE);
    }
}
