//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as a Leptos context at the app root; route guards and
//! user-aware components read it to coordinate login redirects and
//! identity-dependent rendering. The session is established at login,
//! restored once from browser storage at mount, and discarded at logout;
//! there is no ambient global.
//!
//! No token verification or expiry check happens here: a valid-looking
//! session is sufficient for the client.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "land_registry_token";
#[cfg(feature = "hydrate")]
const USER_KEY: &str = "land_registry_user";

/// Authentication state tracking the current user, their access token, and
/// whether the stored session is still being restored.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub token: Option<String>,
    /// True until the one-time restore from browser storage has run.
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { user: None, token: None, loading: true }
    }
}

impl SessionState {
    /// Initialize the session after a successful login or restore.
    pub fn establish(&mut self, user: User, token: String) {
        persist(&user, &token);
        self.user = Some(user);
        self.token = Some(token);
        self.loading = false;
    }

    /// Tear the session down at logout.
    pub fn clear(&mut self) {
        discard();
        self.user = None;
        self.token = None;
        self.loading = false;
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Read a previously stored session back, if one exists.
///
/// Returns `None` outside the browser or when either half is missing or
/// fails to decode.
pub fn restore() -> Option<(User, String)> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        let token = storage.get_item(TOKEN_KEY).ok()??;
        let user_json = storage.get_item(USER_KEY).ok()??;
        let user: User = serde_json::from_str(&user_json).ok()?;
        Some((user, token))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// The stored access token, read directly for bearer-header injection.
pub fn stored_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(TOKEN_KEY).ok()?
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

fn persist(user: &User, token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
            let _ = storage.set_item(TOKEN_KEY, token);
            if let Ok(json) = serde_json::to_string(user) {
                let _ = storage.set_item(USER_KEY, &json);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (user, token);
    }
}

fn discard() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USER_KEY);
        }
    }
}
