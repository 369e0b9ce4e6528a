use chrono::{Datelike, Local, NaiveDate};

/// Today's date in the server's local time zone
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Format a date as a long, human readable string
///
/// The output follows the `"%a %b %d %Y"` pattern, e.g. "Sun Oct 18 2026".
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use deen_dashboard::utils::gregorian_long_date;
///
/// let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
/// assert_eq!(gregorian_long_date(date), "Sun Oct 18 2026");
/// ```
#[must_use]
pub fn gregorian_long_date(date: NaiveDate) -> String {
    date.format("%a %b %d %Y").to_string()
}

/// Path segment the Hijri conversion endpoint expects: `day-month-year`
/// with no zero padding.
#[must_use]
pub fn hijri_path_segment(date: NaiveDate) -> String {
    format!("{}-{}-{}", date.day(), date.month(), date.year())
}
