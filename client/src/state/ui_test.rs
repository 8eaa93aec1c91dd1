use super::*;

#[test]
fn ui_state_default_dark_mode_off() {
    let state = UiState::default();
    assert!(!state.dark_mode);
    assert_eq!(state.theme(), "light");
}

#[test]
fn ui_state_dark_theme_name() {
    let state = UiState { dark_mode: true };
    assert_eq!(state.theme(), "dark");
}
