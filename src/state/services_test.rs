use super::*;

fn item(id: &str, name: &str, category: Option<&str>, active: bool) -> ServiceItem {
    ServiceItem {
        id: id.to_owned(),
        name: name.to_owned(),
        category: category.map(str::to_owned),
        price: None,
        active,
    }
}

fn sample_state() -> ServicesState {
    ServicesState {
        items: vec![
            item("s-1", "Property valuation", Some("advisory"), true),
            item("s-2", "Legacy staging", Some("marketing"), false),
            item("s-3", "Photo shoot", Some("marketing"), true),
        ],
        ..ServicesState::default()
    }
}

#[test]
fn active_only_hides_inactive_entries() {
    let mut state = sample_state();
    state.filters.active_only = true;
    let ids: Vec<_> = state.filtered().into_iter().map(|s| s.id).collect();
    assert_eq!(ids, vec!["s-1", "s-3"]);
}

#[test]
fn category_and_search_combine() {
    let mut state = sample_state();
    state.filters.category = Some("marketing".to_owned());
    state.filters.search = "photo".to_owned();
    let ids: Vec<_> = state.filtered().into_iter().map(|s| s.id).collect();
    assert_eq!(ids, vec!["s-3"]);
}

#[test]
fn category_options_are_deduplicated() {
    let state = sample_state();
    assert_eq!(state.category_options(), vec!["advisory", "marketing"]);
}
