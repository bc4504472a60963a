//! Pure list-filtering predicates shared by every list page.
//!
//! Pages combine these with logical AND: a free-text term matched against
//! one or more text fields, exact-match categorical selections and an
//! optional date-range bucket. Filtering always produces a new Vec and
//! never mutates the source collection.

use serde::{Deserialize, Serialize};

/// Case-insensitive substring match across several text fields, OR'd.
///
/// An empty or whitespace-only term matches every record.
pub fn text_matches(term: &str, fields: &[&str]) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&term))
}

/// Whole days elapsed between `ts` and `now`, floored.
pub fn days_ago(now: chrono::DateTime<chrono::Utc>, ts: chrono::DateTime<chrono::Utc>) -> i64 {
    (now - ts).num_seconds().div_euclid(86_400)
}

/// Named date-range buckets offered by list pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateRangeFilter {
    AllTime,
    Last7Days,
    Last30Days,
    Last90Days,
}

impl DateRangeFilter {
    pub fn code(&self) -> &'static str {
        match self {
            DateRangeFilter::AllTime => "all",
            DateRangeFilter::Last7Days => "last_7_days",
            DateRangeFilter::Last30Days => "last_30_days",
            DateRangeFilter::Last90Days => "last_90_days",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DateRangeFilter::AllTime => "All time",
            DateRangeFilter::Last7Days => "Last 7 days",
            DateRangeFilter::Last30Days => "Last 30 days",
            DateRangeFilter::Last90Days => "Last 90 days",
        }
    }

    pub fn all() -> Vec<DateRangeFilter> {
        vec![
            DateRangeFilter::AllTime,
            DateRangeFilter::Last7Days,
            DateRangeFilter::Last30Days,
            DateRangeFilter::Last90Days,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "all" => Some(DateRangeFilter::AllTime),
            "last_7_days" => Some(DateRangeFilter::Last7Days),
            "last_30_days" => Some(DateRangeFilter::Last30Days),
            "last_90_days" => Some(DateRangeFilter::Last90Days),
            _ => None,
        }
    }

    /// Bucket width in days; `None` for the unbounded bucket
    pub fn max_days(&self) -> Option<i64> {
        match self {
            DateRangeFilter::AllTime => None,
            DateRangeFilter::Last7Days => Some(7),
            DateRangeFilter::Last30Days => Some(30),
            DateRangeFilter::Last90Days => Some(90),
        }
    }

    /// Whether `ts` falls inside this bucket relative to `now`.
    ///
    /// A record dated exactly N days before `now` is inside the N-day
    /// bucket; N+1 days before is outside.
    pub fn contains(
        &self,
        now: chrono::DateTime<chrono::Utc>,
        ts: chrono::DateTime<chrono::Utc>,
    ) -> bool {
        match self.max_days() {
            None => true,
            Some(max) => days_ago(now, ts) <= max,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn now() -> chrono::DateTime<chrono::Utc> {
        Utc.with_ymd_and_hms(2025, 7, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_empty_term_matches_everything() {
        assert!(text_matches("", &["anything"]));
        assert!(text_matches("   ", &["anything"]));
        assert!(text_matches("", &[]));
    }

    #[test]
    fn test_text_match_is_case_insensitive_and_ors_fields() {
        assert!(text_matches("acme", &["ACME Industries", "QT-25-00267"]));
        assert!(text_matches("00267", &["ACME Industries", "QT-25-00267"]));
        assert!(!text_matches("globex", &["ACME Industries", "QT-25-00267"]));
    }

    #[test]
    fn test_seven_day_boundary() {
        let exactly_7 = now() - Duration::days(7);
        let eight_days = now() - Duration::days(8);
        assert!(DateRangeFilter::Last7Days.contains(now(), exactly_7));
        assert!(!DateRangeFilter::Last7Days.contains(now(), eight_days));
    }

    #[test]
    fn test_all_time_contains_everything() {
        let ancient = now() - Duration::days(10_000);
        assert!(DateRangeFilter::AllTime.contains(now(), ancient));
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let records = vec!["ACME order", "Globex order", "Initech invoice"];
        let once: Vec<&str> = records
            .iter()
            .copied()
            .filter(|r| text_matches("order", &[r]))
            .collect();
        let twice: Vec<&str> = once
            .iter()
            .copied()
            .filter(|r| text_matches("order", &[r]))
            .collect();
        assert_eq!(once, twice);
        assert!(once.iter().all(|r| records.contains(r)));
    }

    #[test]
    fn test_bucket_codes_round_trip() {
        for bucket in DateRangeFilter::all() {
            assert_eq!(DateRangeFilter::from_code(bucket.code()), Some(bucket));
        }
    }
}
