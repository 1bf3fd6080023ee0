use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use itertools::Itertools;
use serde::Serialize;

use super::question::Question;

const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%SZ", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Validation {
    pub sorted_descending: bool,
    pub all_tagged: bool,
}

pub fn validate(questions: &[Question], tag: &str) -> Validation {
    Validation {
        sorted_descending: is_sorted_descending(questions),
        all_tagged: all_tagged(questions, tag),
    }
}

/// Newest first. A pair with a missing or unreadable timestamp never breaks the order.
pub fn is_sorted_descending(questions: &[Question]) -> bool {
    questions
        .iter()
        .map(|q| q.timestamp.as_deref().and_then(parse_timestamp))
        .tuple_windows()
        .all(|(previous, current)| match (previous, current) {
            (Some(previous), Some(current)) => current <= previous,
            _ => true,
        })
}

pub fn all_tagged(questions: &[Question], tag: &str) -> bool {
    questions.iter().all(|q| q.has_tag(tag))
}

pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    if let Some(parsed) = NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
    {
        return Some(parsed.and_utc());
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
}

#[cfg(test)]
mod tests {
    use super::{all_tagged, is_sorted_descending, parse_timestamp, validate, Validation};
    use crate::domain::question::Question;

    fn stamped(timestamp: Option<&str>) -> Question {
        Question {
            title: "q".to_string(),
            tags: vec!["javascript".to_string()],
            votes: 0,
            timestamp: timestamp.map(|t| t.to_string()),
        }
    }

    fn tagged(tags: &[&str]) -> Question {
        Question {
            title: "q".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            votes: 0,
            timestamp: None,
        }
    }

    #[test]
    fn descending_dates_are_sorted() {
        let questions = vec![
            stamped(Some("2024-01-03")),
            stamped(Some("2024-01-02")),
            stamped(Some("2024-01-01")),
        ];

        assert!(is_sorted_descending(&questions));
    }

    #[test]
    fn ascending_pair_is_not_sorted() {
        let questions = vec![stamped(Some("2024-01-01")), stamped(Some("2024-01-03"))];

        assert!(!is_sorted_descending(&questions));
    }

    #[test]
    fn equal_timestamps_are_sorted() {
        let questions = vec![
            stamped(Some("2024-05-01 10:00:00Z")),
            stamped(Some("2024-05-01 10:00:00Z")),
        ];

        assert!(is_sorted_descending(&questions));
    }

    #[test]
    fn missing_or_unreadable_timestamps_never_break_order() {
        let questions = vec![
            stamped(Some("2024-01-03 08:00:00Z")),
            stamped(None),
            stamped(Some("yesterday")),
            stamped(Some("2024-01-02 08:00:00Z")),
        ];

        assert!(is_sorted_descending(&questions));
    }

    #[test]
    fn listing_title_format_is_compared_to_the_second() {
        let questions = vec![
            stamped(Some("2024-03-10 12:00:01Z")),
            stamped(Some("2024-03-10 12:00:02Z")),
        ];

        assert!(!is_sorted_descending(&questions));
    }

    #[test]
    fn all_tagged_requires_every_question() {
        let mut questions = vec![
            tagged(&["javascript", "react"]),
            tagged(&["node.js", "javascript"]),
        ];
        assert!(all_tagged(&questions, "javascript"));

        questions[1] = tagged(&["node.js"]);
        assert!(!all_tagged(&questions, "javascript"));
    }

    #[test]
    fn tag_match_is_case_sensitive() {
        let questions = vec![tagged(&["JavaScript"])];

        assert!(!all_tagged(&questions, "javascript"));
    }

    #[test]
    fn empty_input_passes_both_checks() {
        assert_eq!(
            validate(&[], "javascript"),
            Validation {
                sorted_descending: true,
                all_tagged: true,
            }
        );
    }

    #[test]
    fn validate_is_repeatable() {
        let questions = vec![stamped(Some("2024-01-01")), stamped(Some("2024-01-03"))];

        assert_eq!(
            validate(&questions, "javascript"),
            validate(&questions, "javascript")
        );
    }

    #[test]
    fn parse_timestamp_formats() {
        let expected = parse_timestamp("2024-02-29T13:45:00Z").unwrap();

        assert_eq!(parse_timestamp("2024-02-29 13:45:00Z"), Some(expected));
        assert_eq!(parse_timestamp("2024-02-29 13:45:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-02-29T13:45:00"), Some(expected));
        assert_eq!(parse_timestamp(" 2024-02-29T15:45:00+02:00 "), Some(expected));
        assert!(parse_timestamp("2024-02-29").unwrap() < expected);
        assert_eq!(parse_timestamp("asked 3 mins ago"), None);
    }
}
