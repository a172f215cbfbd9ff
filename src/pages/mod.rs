//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (loading, validation, submit
//! flows) and delegates rendering details to `components`. Form logic is
//! extracted into pure helpers so the sibling test files can exercise it
//! without a DOM.

pub mod dashboard;
pub mod land_search;
pub mod login;
pub mod register;
pub mod transactions;
pub mod upload_land;
