//! Local UI chrome state (navigation, notifications, dark mode).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state so the navbar
//! and panels can evolve independently of record data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Chrome state shared through context by the navbar and its panels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    /// Whether the notification dropdown is open.
    pub notifications_open: bool,
    /// Whether the mobile navigation menu is expanded.
    pub mobile_menu_open: bool,
}
