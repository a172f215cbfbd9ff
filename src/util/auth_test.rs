use super::*;
use crate::net::types::{Role, User};

fn signed_in() -> SessionState {
    SessionState {
        user: Some(User {
            id: 1,
            name: "John Doe".to_owned(),
            email: "demo@rwanda.gov.rw".to_owned(),
            role: Role::Citizen,
        }),
        token: Some("mock-jwt-token".to_owned()),
        loading: false,
    }
}

#[test]
fn should_redirect_when_loaded_and_user_missing() {
    let state = SessionState { user: None, token: None, loading: false };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_restoring() {
    let state = SessionState { user: None, token: None, loading: true };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_when_signed_in() {
    assert!(!should_redirect_unauth(&signed_in()));
}

#[test]
fn login_url_preserves_requested_path() {
    assert_eq!(login_url("/upload"), "/login?from=/upload");
    assert_eq!(login_url("/transactions"), "/login?from=/transactions");
}

#[test]
fn login_url_omits_trivial_destinations() {
    assert_eq!(login_url(""), "/login");
    assert_eq!(login_url("/"), "/login");
    assert_eq!(login_url("/login"), "/login");
}

#[test]
fn redirect_target_round_trips_preserved_path() {
    assert_eq!(redirect_target(Some("/upload")), "/upload");
}

#[test]
fn redirect_target_defaults_to_dashboard() {
    assert_eq!(redirect_target(None), "/dashboard");
    assert_eq!(redirect_target(Some("")), "/dashboard");
}

#[test]
fn redirect_target_rejects_foreign_destinations() {
    assert_eq!(redirect_target(Some("https://example.com")), "/dashboard");
    assert_eq!(redirect_target(Some("//evil.example")), "/dashboard");
}
