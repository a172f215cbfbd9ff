#![cfg(not(feature = "hydrate"))]

use super::*;
use crate::net::types::Role;

fn demo_user() -> User {
    User {
        id: 1,
        name: "John Doe".to_owned(),
        email: "demo@rwanda.gov.rw".to_owned(),
        role: Role::Citizen,
    }
}

#[test]
fn default_session_is_loading_and_unauthenticated() {
    let state = SessionState::default();
    assert!(state.loading);
    assert!(state.user.is_none());
    assert!(state.token.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn establish_sets_user_token_and_stops_loading() {
    let mut state = SessionState::default();
    state.establish(demo_user(), "mock-jwt-token".to_owned());
    assert!(state.is_authenticated());
    assert_eq!(state.token.as_deref(), Some("mock-jwt-token"));
    assert!(!state.loading);
}

#[test]
fn clear_discards_user_and_token() {
    let mut state = SessionState::default();
    state.establish(demo_user(), "mock-jwt-token".to_owned());
    state.clear();
    assert!(!state.is_authenticated());
    assert!(state.token.is_none());
    assert!(!state.loading);
}

#[test]
fn restore_is_none_outside_the_browser() {
    assert_eq!(restore(), None);
    assert_eq!(stored_token(), None);
}
