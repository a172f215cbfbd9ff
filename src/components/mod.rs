//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render registry chrome and record presentation while reading
//! shared state from Leptos context providers.

pub mod land_card;
pub mod land_details_modal;
pub mod navbar;
pub mod notification_panel;
