//! Networking modules for the registry API boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` defines the intended REST contract, `mock` is the fixture-backed
//! record source the pages actually run against, `types` holds the shared
//! DTOs, and `error` the common failure type.

pub mod api;
pub mod error;
pub mod mock;
pub mod types;
