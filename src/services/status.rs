// src/services/status.rs

//! Recency classification and latest-status extraction.

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{AppError, Result};
use crate::models::AffairRecord;

/// Sentinel status for affairs without any resolution.
pub const NO_STATUS: &str = "No status";

/// Decides whether an update falls within the recency window.
///
/// `now` is captured once per run and injected, so a long batch is judged
/// against a single reference point.
#[derive(Debug, Clone, Copy)]
pub struct RecencyClassifier {
    now: NaiveDateTime,
    window_days: i64,
}

impl RecencyClassifier {
    pub fn new(now: NaiveDateTime, window_days: i64) -> Self {
        Self { now, window_days }
    }

    pub fn window_days(&self) -> i64 {
        self.window_days
    }

    /// Parse the `updated` timestamp of a record.
    ///
    /// The final character is the timezone marker (`Z`) and is dropped; the
    /// remainder is read as a local date-time.
    pub fn parse_updated(&self, record: &AffairRecord, id: &str) -> Result<NaiveDateTime> {
        let malformed = || AppError::MalformedTimestamp {
            id: id.to_string(),
            value: record.updated.clone(),
        };

        let mut chars = record.updated.chars();
        chars.next_back().ok_or_else(malformed)?;
        let stripped = chars.as_str();

        stripped
            .parse::<NaiveDateTime>()
            .ok()
            .or_else(|| {
                stripped
                    .parse::<NaiveDate>()
                    .ok()
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
            })
            .ok_or_else(malformed)
    }

    /// Whether `updated` lies within the window (inclusive).
    ///
    /// Whole elapsed days are counted, so 7 days and 23 hours is still 7.
    pub fn is_recent(&self, updated: NaiveDateTime) -> bool {
        (self.now - updated).num_days() <= self.window_days
    }
}

/// Latest resolution of an affair as `"<text> (<YYYY-MM-DD>)"`, or `NO_STATUS`.
pub fn extract_status(record: &AffairRecord) -> String {
    match record.latest_resolution() {
        Some(resolution) => {
            let date: String = resolution.date.chars().take(10).collect();
            format!("{} ({})", resolution.text, date)
        }
        None => NO_STATUS.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Consultation, Draft, Resolution};
    use chrono::Duration;

    fn record(updated: &str) -> AffairRecord {
        AffairRecord::from_json(&format!(
            r#"{{"shortId": "21.2355", "title": "Test", "updated": "{updated}"}}"#
        ))
        .unwrap()
    }

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn stamp(dt: NaiveDateTime) -> String {
        format!("{}Z", dt.format("%Y-%m-%dT%H:%M:%S"))
    }

    #[test]
    fn test_parse_strips_timezone_marker() {
        let classifier = RecencyClassifier::new(now(), 7);
        let parsed = classifier
            .parse_updated(&record("2024-01-05T10:15:30Z"), "20212355")
            .unwrap();
        assert_eq!(parsed.format("%Y-%m-%d %H:%M:%S").to_string(), "2024-01-05 10:15:30");
    }

    #[test]
    fn test_parse_fractional_seconds() {
        let classifier = RecencyClassifier::new(now(), 7);
        assert!(classifier
            .parse_updated(&record("2024-01-05T10:15:30.123Z"), "20212355")
            .is_ok());
    }

    #[test]
    fn test_parse_malformed() {
        let classifier = RecencyClassifier::new(now(), 7);
        for bad in ["", "Z", "yesterday", "2024-13-45T00:00:00Z"] {
            match classifier.parse_updated(&record(bad), "20212355") {
                Err(AppError::MalformedTimestamp { id, value }) => {
                    assert_eq!(id, "20212355");
                    assert_eq!(value, bad);
                }
                other => panic!("expected MalformedTimestamp for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_window_boundary_is_inclusive() {
        let classifier = RecencyClassifier::new(now(), 7);
        assert!(classifier.is_recent(now() - Duration::days(7)));
        assert!(!classifier.is_recent(now() - Duration::days(8)));
    }

    #[test]
    fn test_partial_day_counts_as_elapsed_whole_days() {
        let classifier = RecencyClassifier::new(now(), 7);
        assert!(classifier.is_recent(now() - Duration::days(7) - Duration::hours(23)));
    }

    #[test]
    fn test_future_update_is_recent() {
        let classifier = RecencyClassifier::new(now(), 7);
        assert!(classifier.is_recent(now() + Duration::days(1)));
    }

    #[test]
    fn test_round_trip_through_record() {
        let classifier = RecencyClassifier::new(now(), 7);
        let rec = record(&stamp(now() - Duration::days(3)));
        let parsed = classifier.parse_updated(&rec, "20212355").unwrap();
        assert!(classifier.is_recent(parsed));
    }

    #[test]
    fn test_status_uses_last_resolution() {
        let mut rec = record("2024-01-05T00:00:00Z");
        rec.drafts = vec![Draft {
            consultation: Some(Consultation {
                resolutions: vec![
                    Resolution {
                        text: "Referred".into(),
                        date: "2023-12-01T00:00:00Z".into(),
                    },
                    Resolution {
                        text: "Accepted".into(),
                        date: "2024-01-05T08:00:00Z".into(),
                    },
                ],
            }),
        }];
        assert_eq!(extract_status(&rec), "Accepted (2024-01-05)");
    }

    #[test]
    fn test_status_sentinel_when_empty() {
        let mut rec = record("2024-01-05T00:00:00Z");
        assert_eq!(extract_status(&rec), NO_STATUS);

        rec.drafts = vec![Draft {
            consultation: Some(Consultation::default()),
        }];
        assert_eq!(extract_status(&rec), NO_STATUS);
    }

    #[test]
    fn test_status_ignores_later_drafts() {
        let mut rec = record("2024-01-05T00:00:00Z");
        rec.drafts = vec![
            Draft::default(),
            Draft {
                consultation: Some(Consultation {
                    resolutions: vec![Resolution {
                        text: "Accepted".into(),
                        date: "2024-01-05T00:00:00Z".into(),
                    }],
                }),
            },
        ];
        assert_eq!(extract_status(&rec), NO_STATUS);
    }
}
