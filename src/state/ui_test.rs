use super::*;

#[test]
fn ui_state_defaults_to_everything_closed() {
    let state = UiState::default();
    assert!(!state.dark_mode);
    assert!(!state.notifications_open);
    assert!(!state.mobile_menu_open);
}
