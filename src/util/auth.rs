//! Shared auth UI helpers for session-gated routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected page applies identical unauthenticated redirect behavior:
//! once the stored session has been restored (or found absent), a missing
//! user sends the visitor to the login flow with the originally requested
//! path preserved for the post-login redirect.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;

/// Default landing route after login when no destination was preserved.
pub const DEFAULT_DESTINATION: &str = "/dashboard";

/// True when the session has loaded and no user is present.
pub fn should_redirect_unauth(state: &SessionState) -> bool {
    !state.loading && state.user.is_none()
}

/// Login URL carrying the originally requested path.
pub fn login_url(from: &str) -> String {
    if from.is_empty() || from == "/" || from == "/login" {
        "/login".to_owned()
    } else {
        format!("/login?from={from}")
    }
}

/// Resolve the post-login destination from the preserved `from` parameter.
///
/// Only same-origin absolute paths are honored; anything else falls back to
/// the dashboard.
pub fn redirect_target(from: Option<&str>) -> String {
    match from {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path.to_owned(),
        _ => DEFAULT_DESTINATION.to_owned(),
    }
}

/// Redirect to the login flow whenever auth has loaded and no user is
/// present, preserving the current path.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, pathname: Memo<String>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = session.get();
        if should_redirect_unauth(&state) {
            let from = pathname.get_untracked();
            navigate(&login_url(&from), NavigateOptions::default());
        }
    });
}
