//! Date formatting and arithmetic.

use chrono::{DateTime, Datelike, Local, TimeZone, Timelike};

const MILLIS_PER_DAY: f64 = 24.0 * 60.0 * 60.0 * 1000.0;

/// Formats a date by substituting placeholder tokens.
///
/// Supported tokens: `YYYY` (year), `MM` (month), `DD` (day), `HH` (hour,
/// 24h), `mm` (minute), `ss` (second). All but the year are zero-padded to two
/// digits. Each token is replaced once, at its first occurrence, in the order
/// listed; all other text is copied unchanged.
///
/// Works on anything with calendar and clock fields: `NaiveDateTime`, or a
/// `DateTime` in any time zone (its local fields are used).
///
/// # Examples
///
/// ```
/// use app_utils::utils::date::format_date;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2021, 1, 5)
///     .unwrap()
///     .and_hms_opt(3, 4, 5)
///     .unwrap();
/// assert_eq!(format_date(&date, "YYYY/MM/DD HH:mm:ss"), "2021/01/05 03:04:05");
/// assert_eq!(format_date(&date, "YYYY年MM月DD日"), "2021年01月05日");
/// ```
pub fn format_date<D>(date: &D, format: &str) -> String
where
    D: Datelike + Timelike,
{
    let replacements = [
        ("YYYY", date.year().to_string()),
        ("MM", format!("{:02}", date.month())),
        ("DD", format!("{:02}", date.day())),
        ("HH", format!("{:02}", date.hour())),
        ("mm", format!("{:02}", date.minute())),
        ("ss", format!("{:02}", date.second())),
    ];

    replacements
        .iter()
        .fold(format.to_string(), |acc, (token, value)| {
            acc.replacen(token, value, 1)
        })
}

/// Absolute difference between two instants, in whole days.
///
/// The millisecond distance is divided by one day and rounded to the nearest
/// integer, so 36 hours counts as 2 days and 11 hours as 0.
pub fn calculate_date_difference<Tz1, Tz2>(date1: &DateTime<Tz1>, date2: &DateTime<Tz2>) -> i64
where
    Tz1: TimeZone,
    Tz2: TimeZone,
{
    let diff_ms = (date2.timestamp_millis() - date1.timestamp_millis()).unsigned_abs();
    (diff_ms as f64 / MILLIS_PER_DAY).round() as i64
}

/// The current local time formatted with [`format_date`].
pub fn get_current_date(format: &str) -> String {
    format_date(&Local::now(), format)
}
