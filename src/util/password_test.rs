use super::*;

#[test]
fn empty_password_scores_zero() {
    assert_eq!(strength(""), 0);
}

#[test]
fn each_check_contributes_one_point() {
    assert_eq!(strength("aaaaaaaa"), 2); // length + lowercase
    assert_eq!(strength("A"), 1);
    assert_eq!(strength("a"), 1);
    assert_eq!(strength("7"), 1);
    assert_eq!(strength("!"), 1);
}

#[test]
fn mixed_password_accumulates_points() {
    assert_eq!(strength("Abc1"), 3); // upper + lower + digit
    assert_eq!(strength("Abcdef1!"), 5);
}

#[test]
fn non_ascii_characters_count_as_symbols() {
    assert_eq!(strength("é"), 1);
}

#[test]
fn labels_cover_every_score() {
    assert_eq!(label(0), "Very Weak");
    assert_eq!(label(1), "Weak");
    assert_eq!(label(2), "Fair");
    assert_eq!(label(3), "Good");
    assert_eq!(label(4), "Strong");
    assert_eq!(label(5), "Very Strong");
}

#[test]
fn minimum_threshold_is_three_of_five() {
    assert!(!meets_minimum(2));
    assert!(meets_minimum(3));
    assert!(meets_minimum(5));
}
