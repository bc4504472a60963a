/// Utilities for date and time formatting
///
/// Keeps date rendering consistent across the application.
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Format a `NaiveDate` as "15 Mar 2024"
pub fn format_date(date: chrono::NaiveDate) -> String {
    use chrono::Datelike;
    format!(
        "{:02} {} {}",
        date.day(),
        MONTHS[(date.month0()) as usize],
        date.year()
    )
}

/// Format a UTC timestamp as "15 Mar 2024 14:02"
pub fn format_datetime(dt: chrono::DateTime<chrono::Utc>) -> String {
    use chrono::{Datelike, Timelike};
    format!(
        "{:02} {} {} {:02}:{:02}",
        dt.day(),
        MONTHS[(dt.month0()) as usize],
        dt.year(),
        dt.hour(),
        dt.minute()
    )
}

/// Format an optional date, rendering a dash when absent
pub fn format_date_opt(date: Option<chrono::NaiveDate>) -> String {
    match date {
        Some(d) => format_date(d),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    #[test]
    fn test_format_date() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(format_date(d), "15 Mar 2024");
        let d = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();
        assert_eq!(format_date(d), "01 Dec 2025");
    }

    #[test]
    fn test_format_datetime() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_datetime(dt), "15 Mar 2024 14:02");
    }

    #[test]
    fn test_format_date_opt() {
        assert_eq!(format_date_opt(None), "-");
    }
}
