use super::*;
use time::macros::date;

#[test]
fn parse_iso_date_accepts_fixture_dates() {
    assert_eq!(parse_iso_date("2024-01-10"), Some(date!(2024 - 01 - 10)));
    assert_eq!(parse_iso_date(" 2024-01-15 "), Some(date!(2024 - 01 - 15)));
}

#[test]
fn parse_iso_date_rejects_garbage() {
    assert_eq!(parse_iso_date(""), None);
    assert_eq!(parse_iso_date("10/01/2024"), None);
    assert_eq!(parse_iso_date("2024-13-01"), None);
}

#[test]
fn format_short_uses_abbreviated_month() {
    assert_eq!(format_short("2024-01-10"), "Jan 10, 2024");
    assert_eq!(format_short("2024-12-05"), "Dec 5, 2024");
}

#[test]
fn format_long_spells_month_out() {
    assert_eq!(format_long("2024-01-10"), "January 10, 2024");
}

#[test]
fn formatting_falls_back_to_raw_string() {
    assert_eq!(format_short("unknown"), "unknown");
    assert_eq!(format_long(""), "");
}

#[test]
fn today_is_none_outside_the_browser() {
    #[cfg(not(feature = "hydrate"))]
    assert_eq!(today(), None);
}
