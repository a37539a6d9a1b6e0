use chrono::{DateTime, NaiveDate, Utc};

pub const INVALID_DATE: &str = "Invalid Date";

/// Formats an ISO-8601 timestamp as a short date, e.g. `Jan 5, 2024`.
/// Timestamps are converted to UTC first. Anything unparseable yields
/// [`INVALID_DATE`] instead of an error.
pub fn format_date(iso: &str) -> String {
    parse(iso)
        .map(|date| date.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| INVALID_DATE.to_owned())
}

fn parse(iso: &str) -> Option<NaiveDate> {
    let iso = iso.trim();

    DateTime::parse_from_rfc3339(iso)
        .map(|date_time| date_time.with_timezone(&Utc).date_naive())
        .ok()
        .or_else(|| NaiveDate::parse_from_str(iso, "%Y-%m-%d").ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_format_month_day_year() {
        let formatted = format_date("2024-01-05T00:00:00Z");

        assert!(formatted.contains("Jan"));
        assert!(formatted.contains('5'));
        assert!(formatted.contains("2024"));
        assert_eq!(formatted, "Jan 5, 2024");
    }

    #[test]
    fn should_not_pad_day() {
        assert_eq!(format_date("2023-11-09T18:22:01Z"), "Nov 9, 2023");
    }

    #[test]
    fn should_convert_offsets_to_utc() {
        assert_eq!(format_date("2024-01-05T23:30:00-02:00"), "Jan 6, 2024");
    }

    #[test]
    fn should_accept_bare_dates() {
        assert_eq!(format_date("2024-12-31"), "Dec 31, 2024");
    }

    #[test]
    fn should_degrade_to_invalid_date() {
        assert_eq!(format_date(""), "Invalid Date");
        assert_eq!(format_date("yesterday"), "Invalid Date");
        assert_eq!(format_date("2024-13-45T00:00:00Z"), "Invalid Date");
    }
}
