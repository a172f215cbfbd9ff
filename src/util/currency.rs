//! Currency-string parsing and formatting for estimated values and amounts.
//!
//! Fixture values arrive as strings like `"75,000,000"` or
//! `"50,000 RWF"`. Thousands separators must be stripped before summation
//! and any trailing currency code ignored.

#[cfg(test)]
#[path = "currency_test.rs"]
mod currency_test;

/// Parse a currency string into whole francs.
///
/// Separators are removed first, then the leading digit run is taken so a
/// trailing currency code does not poison the parse. Returns `None` when no
/// digits are present; callers treat that as contributing zero.
pub fn parse_amount(raw: &str) -> Option<i64> {
    let no_separators = raw.trim().replace(',', "");
    let digits: String = no_separators
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Format whole francs as `"RWF 75,000,000"`.
pub fn format_rwf(amount: i64) -> String {
    format!("RWF {}", group_thousands(amount))
}

/// Insert thousands separators into an integer.
pub fn group_thousands(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if amount < 0 { format!("-{grouped}") } else { grouped }
}
