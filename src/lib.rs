//! # land-registry-client
//!
//! Leptos + WASM front-end for a land-title registry: login/registration,
//! a parcel dashboard, registry search, a transaction-history table, and a
//! land-upload form.
//!
//! There is no live backend: `net::api` defines the intended REST contract,
//! while the pages run against `net::mock`, a fixture-backed record source
//! with simulated latency. Browser-only dependencies are gated behind the
//! `hydrate` feature so the library and its tests build with no default
//! features.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
