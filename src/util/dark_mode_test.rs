#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn read_preference_is_false_outside_the_browser() {
    assert!(!read_preference());
}

#[test]
fn toggle_flips_the_value() {
    assert!(toggle(false));
    assert!(!toggle(true));
}

#[test]
fn apply_is_noop_but_callable() {
    apply(true);
    apply(false);
}
