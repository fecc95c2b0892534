use super::*;

#[test]
fn language_codes_round_trip() {
    assert_eq!(Language::En.code(), "en");
    assert_eq!(Language::Ar.code(), "ar");
    assert_eq!(Language::from_code("ar"), Language::Ar);
    assert_eq!(Language::from_code("AR"), Language::Ar);
    assert_eq!(Language::from_code("en"), Language::En);
    assert_eq!(Language::from_code("fr"), Language::En);
}

#[test]
fn close_overlays_resets_every_flag() {
    let mut ui = UiState {
        filter_drawer_open: true,
        editing_lead_id: Some("l-1".to_owned()),
        creating_lead: true,
        confirm_delete_id: Some("l-2".to_owned()),
        ..UiState::default()
    };
    ui.close_overlays();
    assert!(!ui.filter_drawer_open);
    assert_eq!(ui.editing_lead_id, None);
    assert!(!ui.creating_lead);
    assert_eq!(ui.confirm_delete_id, None);
}

#[test]
fn close_overlays_preserves_theme_and_language() {
    let mut ui = UiState {
        dark_mode: true,
        language: Language::Ar,
        filter_drawer_open: true,
        ..UiState::default()
    };
    ui.close_overlays();
    assert!(ui.dark_mode);
    assert_eq!(ui.language, Language::Ar);
}
