//! Error type shared by the REST surface and the mock record source.
//!
//! ERROR HANDLING
//! ==============
//! Pages surface these as inline messages; nothing here aborts rendering.
//! The taxonomy stays deliberately small because the product only ever shows
//! an invalid-credentials message and one generic failure string.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Error returned by [`crate::net::api`] and [`crate::net::mock`] operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-OK HTTP status.
    #[error("request failed: {0}")]
    Status(u16),
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The response body could not be decoded.
    #[error("malformed response: {0}")]
    Decode(String),
    /// The credential pair was rejected.
    #[error("Invalid email or password. Please try again.")]
    InvalidCredentials,
    /// HTTP calls are only meaningful in the browser.
    #[error("not available on server")]
    Unavailable,
}
