//! Field extraction from raw complaint text
//!
//! Extraction never fails: missing parties and amounts resolve to the
//! sentinel strings in `shared-types`, and a missing service date falls back
//! to five days before `today`. The fallback date is a heuristic carried
//! from the source product, not a guarantee of accuracy.

use chrono::{Duration, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;
use shared_types::{ExtractedFields, AMOUNT_NOT_SPECIFIED, UNKNOWN_DEFENDANT, UNKNOWN_PLAINTIFF};

/// Days before `today` assumed when no service date is found
pub const SERVICE_DATE_FALLBACK_DAYS: i64 = 5;

lazy_static! {
    static ref AMOUNT_RE: Regex = Regex::new(r"\$[\d,]+\.?\d*").unwrap();
    /// Ordered date patterns: service-date lines first, then "served", then
    /// any dated line. First parseable match wins.
    static ref SERVICE_DATE_RES: [Regex; 3] = [
        Regex::new(r"(?i)service.*?date.*?(\d{1,2}/\d{1,2}/\d{4})").unwrap(),
        Regex::new(r"(?i)served.*?(\d{1,2}/\d{1,2}/\d{4})").unwrap(),
        Regex::new(r"(?i)date.*?(\d{1,2}/\d{1,2}/\d{4})").unwrap(),
    ];
}

/// Extract party names, claimed amount, and service date from raw text
pub fn extract_fields(text: &str, today: NaiveDate) -> ExtractedFields {
    ExtractedFields {
        plaintiff: extract_party(text, "plaintiff", UNKNOWN_PLAINTIFF),
        defendant: extract_party(text, "defendant", UNKNOWN_DEFENDANT),
        amount: extract_amount(text),
        service_date: extract_service_date(text, today),
    }
}

/// Scan line by line for `<keyword>...: <name>`; first matching line wins.
/// A matching line with nothing after the colon yields the sentinel.
fn extract_party(text: &str, keyword: &str, fallback: &str) -> String {
    for line in text.lines() {
        if line.to_lowercase().contains(keyword) && line.contains(':') {
            let after_colon = line
                .splitn(2, ':')
                .nth(1)
                .map(str::trim)
                .unwrap_or_default();
            if after_colon.is_empty() {
                return fallback.to_string();
            }
            return after_colon.to_string();
        }
    }
    fallback.to_string()
}

/// First dollar-prefixed numeric token, or the "not specified" sentinel
fn extract_amount(text: &str) -> String {
    AMOUNT_RE
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| AMOUNT_NOT_SPECIFIED.to_string())
}

/// First date matched by the service-date patterns, else `today - 5 days`
pub fn extract_service_date(text: &str, today: NaiveDate) -> NaiveDate {
    for pattern in SERVICE_DATE_RES.iter() {
        if let Some(caps) = pattern.captures(text) {
            if let Some(date_str) = caps.get(1) {
                if let Ok(date) = NaiveDate::parse_from_str(date_str.as_str(), "%m/%d/%Y") {
                    return date;
                }
            }
        }
    }
    today - Duration::days(SERVICE_DATE_FALLBACK_DAYS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_extracts_parties_from_labelled_lines() {
        let text = "Case 23CV001\nPlaintiff: ABC Collection Agency\nDefendant: John Doe\n";
        let fields = extract_fields(text, today());
        assert_eq!(fields.plaintiff, "ABC Collection Agency");
        assert_eq!(fields.defendant, "John Doe");
        assert!(fields.plaintiff_known());
        assert!(fields.defendant_known());
    }

    #[test]
    fn test_first_matching_line_wins() {
        let text = "Plaintiff: First Corp\nPlaintiff: Second Corp\n";
        let fields = extract_fields(text, today());
        assert_eq!(fields.plaintiff, "First Corp");
    }

    #[test]
    fn test_missing_parties_yield_sentinels() {
        let fields = extract_fields("no labelled parties here", today());
        assert_eq!(fields.plaintiff, UNKNOWN_PLAINTIFF);
        assert_eq!(fields.defendant, UNKNOWN_DEFENDANT);
        assert!(!fields.plaintiff_known());
    }

    #[test]
    fn test_empty_value_after_colon_keeps_sentinel() {
        let fields = extract_fields("Plaintiff:   \n", today());
        assert_eq!(fields.plaintiff, UNKNOWN_PLAINTIFF);
    }

    #[test]
    fn test_extracts_amount() {
        let fields = extract_fields("judgment sought: $4,512.89 plus costs", today());
        assert_eq!(fields.amount, "$4,512.89");
        assert!(fields.amount_known());
    }

    #[test]
    fn test_missing_amount_yields_sentinel() {
        let fields = extract_fields("no money mentioned", today());
        assert_eq!(fields.amount, AMOUNT_NOT_SPECIFIED);
    }

    #[test]
    fn test_service_date_pattern() {
        let date = extract_service_date("Defendant was served on 3/12/2024.", today());
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 12).unwrap());
    }

    #[test]
    fn test_service_date_line_pattern() {
        let date = extract_service_date("Service of process date: 11/02/2023", today());
        assert_eq!(date, NaiveDate::from_ymd_opt(2023, 11, 2).unwrap());
    }

    #[test]
    fn test_service_date_fallback_is_five_days_ago() {
        let date = extract_service_date("no dates at all", today());
        assert_eq!(date, today() - Duration::days(SERVICE_DATE_FALLBACK_DAYS));
    }

    #[test]
    fn test_unparseable_date_falls_back() {
        // 13/45/2024 matches the pattern shape but is not a real date
        let date = extract_service_date("served on 13/45/2024", today());
        assert_eq!(date, today() - Duration::days(SERVICE_DATE_FALLBACK_DAYS));
    }

    proptest! {
        /// Extraction is total over arbitrary text
        #[test]
        fn extract_never_panics(text in "\\PC*") {
            let _ = extract_fields(&text, today());
        }
    }
}
