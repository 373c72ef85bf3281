use chrono::{DateTime, Local, Locale};

/// Locale used for every date shown to the user.
pub const DISPLAY_LOCALE: Locale = Locale::de_DE;

/// Long form: weekday, day, full month name, year and the time with seconds,
/// e.g. "Sonntag, 1. Juni 2025 um 09:00:00".
const LONG_FORMAT: &str = "%A, %-d. %B %Y um %H:%M:%S";

pub fn now() -> DateTime<Local> {
    Local::now()
}

pub fn format_long(dt: &DateTime<Local>) -> String {
    dt.format_localized(LONG_FORMAT, DISPLAY_LOCALE).to_string()
}
