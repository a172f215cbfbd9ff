//! Date parsing and display formatting for fixture timestamps.
//!
//! Fixture dates are plain `YYYY-MM-DD` strings. Display formatting matches
//! the registry UI: short month names in cards and tables, long month names
//! in the details modal. Formatting falls back to the raw string when a
//! fixture date does not parse, so a bad value degrades instead of hiding
//! the row.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

const ISO_DATE: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");
const SHORT: &[BorrowedFormatItem<'_>] =
    format_description!("[month repr:short] [day padding:none], [year]");
const LONG: &[BorrowedFormatItem<'_>] =
    format_description!("[month repr:long] [day padding:none], [year]");

/// Parse a `YYYY-MM-DD` fixture date.
pub fn parse_iso_date(raw: &str) -> Option<Date> {
    Date::parse(raw.trim(), ISO_DATE).ok()
}

/// `"2024-01-10"` → `"Jan 10, 2024"`.
pub fn format_short(raw: &str) -> String {
    parse_iso_date(raw)
        .and_then(|date| date.format(SHORT).ok())
        .unwrap_or_else(|| raw.to_owned())
}

/// `"2024-01-10"` → `"January 10, 2024"`.
pub fn format_long(raw: &str) -> String {
    parse_iso_date(raw)
        .and_then(|date| date.format(LONG).ok())
        .unwrap_or_else(|| raw.to_owned())
}

/// Today's date in the browser's local time, when a browser is present.
pub fn today() -> Option<Date> {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        let year = i32::try_from(now.get_full_year()).ok()?;
        // get_month is zero-based.
        let month = time::Month::try_from(u8::try_from(now.get_month() + 1).ok()?).ok()?;
        let day = u8::try_from(now.get_date()).ok()?;
        Date::from_calendar_date(year, month, day).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
