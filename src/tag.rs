//! Image tag splitting and the build-date heuristic.
//!
//! Tags in the charts this tool validates have the form `<version>-<date>`,
//! e.g. `r4.4.0-2024.11.18`. The catalog pins the `<version>` part only; the
//! trailing build date changes on every image rebuild.

use chrono::NaiveDate;
use regex::Regex;

/// A trailing build-date segment: `YYYY.MM.DD`. Dotted on purpose - a dashed
/// date would itself be split by [`base_tag`].
const DATE_SEGMENT_PATTERN: &str = r"^\d{4}\.\d{2}\.\d{2}$";

/// Everything before the last `-` in a tag. A tag without a `-` is returned
/// unchanged.
///
/// The split is purely syntactic: the trailing segment is assumed to be a
/// build date, so a dateless multi-part tag loses its last segment.
pub fn base_tag(tag: &str) -> &str {
    match tag.rsplit_once('-') {
        Some((base, _)) => base,
        None => tag,
    }
}

/// The trailing `-`-separated segment of a tag, if any.
pub fn date_segment(tag: &str) -> Option<&str> {
    tag.rsplit_once('-').map(|(_, segment)| segment)
}

/// Whether a trailing segment is a real `YYYY.MM.DD` calendar date.
pub fn looks_like_date(segment: &str) -> bool {
    let re = Regex::new(DATE_SEGMENT_PATTERN).expect("date segment pattern is valid");
    re.is_match(segment) && NaiveDate::parse_from_str(segment, "%Y.%m.%d").is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_tag_strips_trailing_segment() {
        assert_eq!(base_tag("r4.4.0-2024.11.18"), "r4.4.0");
        assert_eq!(base_tag("r4.4.0-py313-2024.11.18"), "r4.4.0-py313");
    }

    #[test]
    fn test_base_tag_without_separator_is_unchanged() {
        assert_eq!(base_tag("jd2.2.5"), "jd2.2.5");
    }

    #[test]
    fn test_base_tag_is_purely_syntactic() {
        // The last segment goes even when it is not a date.
        assert_eq!(base_tag("py313-spark3.5.3"), "py313");
    }

    #[test]
    fn test_date_segment() {
        assert_eq!(date_segment("r4.4.0-2024.11.18"), Some("2024.11.18"));
        assert_eq!(date_segment("py313-spark3.5.3-2024.10.01"), Some("2024.10.01"));
        assert_eq!(date_segment("jd2.2.5"), None);
    }

    #[test]
    fn test_looks_like_date_accepts_dotted_dates() {
        assert!(looks_like_date("2024.11.18"));
        assert!(looks_like_date("2026.01.02"));
    }

    #[test]
    fn test_looks_like_date_rejects_non_dates() {
        assert!(!looks_like_date("py313"));
        assert!(!looks_like_date("spark3.5.3"));
        assert!(!looks_like_date("2024-11-18"));
        // Matches the pattern but is not a calendar date
        assert!(!looks_like_date("2024.13.01"));
        assert!(!looks_like_date("2024.02.30"));
    }
}
