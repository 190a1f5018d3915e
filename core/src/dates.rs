use chrono::{DateTime, Locale};

/// The UI is hardcoded to Italian; all dates render through this locale.
const LOCALE: Locale = Locale::it_IT;

/// Shown when a feed timestamp is outside the representable range.
const INVALID_DATE: &str = "-";

/// Long-form Italian date and time for a Unix timestamp in seconds,
/// e.g. `14 novembre 2023, 22:13`. Rendered in UTC so the output is
/// independent of the host timezone.
pub fn format_date(timestamp: i64) -> String {
    match DateTime::from_timestamp(timestamp, 0) {
        Some(date) => date.format_localized("%-d %B %Y, %H:%M", LOCALE).to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// Compact numeric date (`d/m/yyyy`) used for the recurring update posts.
pub fn format_date_short(timestamp: i64) -> String {
    match DateTime::from_timestamp(timestamp, 0) {
        Some(date) => date.format("%-d/%-m/%Y").to_string(),
        None => INVALID_DATE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_the_long_italian_form() {
        // 2023-11-14 22:13:20 UTC
        assert_eq!(format_date(1700000000), "14 novembre 2023, 22:13");
    }

    #[test]
    fn formats_the_epoch() {
        assert_eq!(format_date(0), "1 gennaio 1970, 00:00");
        assert_eq!(format_date_short(0), "1/1/1970");
    }

    #[test]
    fn formats_the_short_numeric_form() {
        assert_eq!(format_date_short(1700000000), "14/11/2023");
    }

    #[test]
    fn is_deterministic_for_a_fixed_timestamp() {
        assert_eq!(format_date(1700000000), format_date(1700000000));
    }

    #[test]
    fn out_of_range_timestamps_render_a_placeholder() {
        assert_eq!(format_date(i64::MAX), "-");
        assert_eq!(format_date_short(i64::MIN), "-");
    }
}
