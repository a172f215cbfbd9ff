use super::*;

#[test]
fn parse_amount_strips_thousands_separators() {
    assert_eq!(parse_amount("75,000,000"), Some(75_000_000));
    assert_eq!(parse_amount("45,000,000"), Some(45_000_000));
}

#[test]
fn parse_amount_ignores_trailing_currency_code() {
    assert_eq!(parse_amount("120,000,000 RWF"), Some(120_000_000));
    assert_eq!(parse_amount("0 RWF"), Some(0));
}

#[test]
fn parse_amount_rejects_non_numeric_input() {
    assert_eq!(parse_amount(""), None);
    assert_eq!(parse_amount("N/A"), None);
    assert_eq!(parse_amount("RWF"), None);
}

#[test]
fn separated_values_sum_correctly() {
    let total: i64 = ["75,000,000", "45,000,000"]
        .iter()
        .map(|v| parse_amount(v).unwrap_or(0))
        .sum();
    assert_eq!(total, 120_000_000);
}

#[test]
fn format_rwf_groups_thousands() {
    assert_eq!(format_rwf(75_000_000), "RWF 75,000,000");
    assert_eq!(format_rwf(0), "RWF 0");
    assert_eq!(format_rwf(1_234), "RWF 1,234");
}

#[test]
fn group_thousands_handles_short_and_negative_values() {
    assert_eq!(group_thousands(999), "999");
    assert_eq!(group_thousands(1_000), "1,000");
    assert_eq!(group_thousands(-50_000), "-50,000");
}
