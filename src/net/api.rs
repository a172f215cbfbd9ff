//! REST client for the registry HTTP surface.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the intended backend contract. No deployed server answers it yet;
//! the pages run against [`crate::net::mock`] until one does. Requests carry
//! a bearer token read from browser storage when a session has been
//! established.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{AuthSession, LandRecord, NewAccount, NewLandRecord, NewTransaction, Transaction, User};

#[cfg(any(test, feature = "hydrate"))]
fn land_endpoint(id: u32) -> String {
    format!("/api/lands/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn search_endpoint(query: &str) -> String {
    format!("/api/lands/search?q={query}")
}

#[cfg(any(test, feature = "hydrate"))]
fn authorization_value(token: &str) -> String {
    format!("Bearer {token}")
}

/// Map a login failure status: the API signals a bad pair with 401, which
/// the UI renders as the invalid-credentials message.
#[cfg(any(test, feature = "hydrate"))]
fn login_error_for_status(status: u16) -> ApiError {
    if status == 401 {
        ApiError::InvalidCredentials
    } else {
        ApiError::Status(status)
    }
}

#[cfg(feature = "hydrate")]
fn with_bearer(req: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match crate::state::session::stored_token() {
        Some(token) => req.header("Authorization", &authorization_value(&token)),
        None => req,
    }
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let resp = with_bearer(gloo_net::http::Request::get(url))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn post_json<B: serde::Serialize, T: serde::de::DeserializeOwned>(
    url: &str,
    body: &B,
) -> Result<T, ApiError> {
    let resp = with_bearer(gloo_net::http::Request::post(url))
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// `POST /api/auth/login`: credentials in, `{user, token}` out.
///
/// # Errors
///
/// [`ApiError::InvalidCredentials`] on a 401; transport and decode failures
/// otherwise.
pub async fn login(email: &str, password: &str) -> Result<AuthSession, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(&payload)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(login_error_for_status(resp.status()));
        }
        resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Unavailable)
    }
}

/// `POST /api/auth/register`: user fields in, created user out.
pub async fn register(account: &NewAccount) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/auth/register", account).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = account;
        Err(ApiError::Unavailable)
    }
}

/// `GET /api/lands`: the signed-in user's parcels.
pub async fn fetch_lands() -> Result<Vec<LandRecord>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/lands").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// `GET /api/lands/{id}`: one parcel by identifier.
pub async fn fetch_land(id: u32) -> Result<LandRecord, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&land_endpoint(id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}

/// `GET /api/lands/search?q=`: registry-wide search.
pub async fn search_lands(query: &str) -> Result<Vec<LandRecord>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&search_endpoint(query)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        Err(ApiError::Unavailable)
    }
}

/// `POST /api/lands`: register a new parcel.
pub async fn create_land(submission: &NewLandRecord) -> Result<LandRecord, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/lands", submission).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = submission;
        Err(ApiError::Unavailable)
    }
}

/// `GET /api/transactions`: the signed-in user's transaction history.
pub async fn fetch_transactions() -> Result<Vec<Transaction>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/transactions").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// `POST /api/transactions`: record a new transaction.
pub async fn create_transaction(submission: &NewTransaction) -> Result<Transaction, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/transactions", submission).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = submission;
        Err(ApiError::Unavailable)
    }
}
