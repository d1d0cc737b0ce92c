//! Date helper functions

use chrono::NaiveDate;
use std::fmt::Write;

/// Format a date using a Moment.js-compatible format string
///
/// # Examples
/// ```ignore
/// format_date(&date, "MMMM D, YYYY") // -> "January 5, 2024"
/// ```
pub fn format_date(date: &NaiveDate, format: &str) -> String {
    let chrono_format = moment_to_chrono_format(format);
    let mut formatted = String::new();
    if write!(formatted, "{}", date.format(&chrono_format)).is_err() {
        tracing::warn!("Cannot format a date with {:?}, using ISO dates", format);
        return date.format("%Y-%m-%d").to_string();
    }
    formatted
}

/// Generate a `<time>` element with a machine-readable date
pub fn time_tag(date: &NaiveDate, format: &str) -> String {
    format!(
        r#"<time class="date" datetime="{}">{}</time>"#,
        date.format("%Y-%m-%d"),
        format_date(date, format)
    )
}

/// Convert Moment.js format to chrono format
fn moment_to_chrono_format(format: &str) -> String {
    // Longest tokens first within each letter
    let replacements = [
        // Year
        ("YYYY", "%Y"),
        ("YY", "%y"),
        // Month
        ("MMMM", "%B"),
        ("MMM", "%b"),
        ("MM", "%m"),
        // Day of month
        ("DDDD", "%j"),
        ("DD", "%d"),
        ("D", "%-d"),
        // Day of week, after %d has been emitted
        ("dddd", "%A"),
        ("ddd", "%a"),
    ];

    // Literal `%` must not start a chrono specifier
    let mut result = format.replace('%', "%%");

    for (from, to) in replacements {
        result = result.replace(from, to);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(&date(), "YYYY-MM-DD"), "2024-01-05");
        assert_eq!(format_date(&date(), "MMMM D, YYYY"), "January 5, 2024");
        assert_eq!(format_date(&date(), "dddd, MMM DD"), "Friday, Jan 05");
    }

    #[test]
    fn test_time_tag() {
        assert_eq!(
            time_tag(&date(), "MMMM D, YYYY"),
            r#"<time class="date" datetime="2024-01-05">January 5, 2024</time>"#
        );
    }

    #[test]
    fn test_moment_to_chrono() {
        assert_eq!(moment_to_chrono_format("YYYY-MM-DD"), "%Y-%m-%d");
        assert_eq!(moment_to_chrono_format("MMMM D, YYYY"), "%B %-d, %Y");
        assert_eq!(moment_to_chrono_format("D MMMM (100%)"), "%-d %B (100%%)");
    }

    #[test]
    fn test_percent_is_literal() {
        assert_eq!(
            format_date(&date(), "D MMMM YYYY (100%)"),
            "5 January 2024 (100%)"
        );
        assert_eq!(format_date(&date(), "%H:%M YYYY"), "%H:%M 2024");
    }
}
