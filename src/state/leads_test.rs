use super::*;

fn lead(id: &str, name: &str, status: &str, source: Option<&str>, city: Option<&str>) -> Lead {
    Lead {
        id: id.to_owned(),
        name: name.to_owned(),
        phone: None,
        status: status.to_owned(),
        source: source.map(str::to_owned),
        city: city.map(str::to_owned),
        assigned_to: None,
    }
}

fn sample_state() -> LeadsState {
    LeadsState {
        items: vec![
            lead("l-1", "Aya Hassan", "new", Some("website"), Some("Cairo")),
            lead("l-2", "Bilal Omar", "contacted", Some("referral"), Some("Giza")),
            lead("l-3", "Carmen Diaz", "new", None, Some("Cairo")),
        ],
        ..LeadsState::default()
    }
}

#[test]
fn filtered_returns_everything_for_empty_filters() {
    let state = sample_state();
    assert!(state.filters.is_empty());
    assert_eq!(state.filtered().len(), 3);
}

#[test]
fn filters_with_any_selection_or_query_are_not_empty() {
    let selected = LeadFilters {
        city: Some("Cairo".to_owned()),
        ..LeadFilters::default()
    };
    assert!(!selected.is_empty());

    let searched = LeadFilters {
        search: "aya".to_owned(),
        ..LeadFilters::default()
    };
    assert!(!searched.is_empty());

    // Whitespace-only queries do not count as an active filter.
    let blank = LeadFilters {
        search: "   ".to_owned(),
        ..LeadFilters::default()
    };
    assert!(blank.is_empty());
}

#[test]
fn filtered_applies_status_selection() {
    let mut state = sample_state();
    state.filters.status = Some("new".to_owned());
    let ids: Vec<_> = state.filtered().into_iter().map(|l| l.id).collect();
    assert_eq!(ids, vec!["l-1", "l-3"]);
}

#[test]
fn filtered_combines_selections_and_search() {
    let mut state = sample_state();
    state.filters.city = Some("Cairo".to_owned());
    state.filters.search = "carmen".to_owned();
    let ids: Vec<_> = state.filtered().into_iter().map(|l| l.id).collect();
    assert_eq!(ids, vec!["l-3"]);
}

#[test]
fn filtered_excludes_rows_missing_a_selected_value() {
    let mut state = sample_state();
    state.filters.source = Some("website".to_owned());
    let ids: Vec<_> = state.filtered().into_iter().map(|l| l.id).collect();
    // l-3 has no source at all and must not match.
    assert_eq!(ids, vec!["l-1"]);
}

#[test]
fn option_lists_are_sorted_and_deduplicated() {
    let state = sample_state();
    assert_eq!(state.status_options(), vec!["contacted", "new"]);
    assert_eq!(state.source_options(), vec!["referral", "website"]);
    assert_eq!(state.city_options(), vec!["Cairo", "Giza"]);
}

#[test]
fn upsert_replaces_existing_and_appends_new() {
    let mut state = sample_state();
    let mut edited = lead("l-2", "Bilal O.", "qualified", Some("referral"), Some("Giza"));
    state.upsert(edited.clone());
    assert_eq!(state.items.len(), 3);
    assert_eq!(state.items[1].name, "Bilal O.");

    edited.id = "l-9".to_owned();
    state.upsert(edited);
    assert_eq!(state.items.len(), 4);
}

#[test]
fn remove_drops_only_the_named_lead() {
    let mut state = sample_state();
    state.remove("l-2");
    let ids: Vec<_> = state.items.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["l-1", "l-3"]);
}
