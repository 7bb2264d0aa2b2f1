//! Display formatting for timestamps coming from the API.

use chrono::{DateTime, Utc};

/// "2025-03-15 14:02" style display for table cells.
pub fn format_datetime(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}

/// Date-only display.
pub fn format_date(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d").to_string()
}

/// Optional timestamp, "-" when absent.
pub fn format_datetime_opt(ts: &Option<DateTime<Utc>>) -> String {
    ts.as_ref().map(format_datetime).unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_datetime() {
        let ts = Utc.with_ymd_and_hms(2025, 3, 15, 14, 2, 26).single().expect("ts");
        assert_eq!(format_datetime(&ts), "2025-03-15 14:02");
        assert_eq!(format_date(&ts), "2025-03-15");
    }

    #[test]
    fn test_format_optional() {
        assert_eq!(format_datetime_opt(&None), "-");
        let ts = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).single().expect("ts");
        assert_eq!(format_datetime_opt(&Some(ts)), "2025-01-01 00:00");
    }
}
