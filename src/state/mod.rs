//! Shared application state and pure derivations over it.
//!
//! DESIGN
//! ======
//! `session` and `ui` are provided as contexts at the app root; `lands` and
//! `transactions` hold the filter/stats pipelines that pages feed their
//! fetched record lists through.

pub mod lands;
pub mod session;
pub mod transactions;
pub mod ui;
