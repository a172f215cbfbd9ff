//! Password strength scoring for the registration form.
//!
//! Five independent checks, one point each: length, uppercase, lowercase,
//! digit, symbol. Registration requires at least [`MIN_STRENGTH`] of five.

#[cfg(test)]
#[path = "password_test.rs"]
mod password_test;

/// Minimum acceptable score out of five.
pub const MIN_STRENGTH: u8 = 3;

/// Score a password from 0 to 5.
pub fn strength(password: &str) -> u8 {
    let mut score = 0;
    if password.chars().count() >= 8 {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 1;
    }
    score
}

/// Human label for a score, as shown next to the strength meter.
pub fn label(score: u8) -> &'static str {
    match score {
        0 => "Very Weak",
        1 => "Weak",
        2 => "Fair",
        3 => "Good",
        4 => "Strong",
        _ => "Very Strong",
    }
}

pub fn meets_minimum(score: u8) -> bool {
    score >= MIN_STRENGTH
}
