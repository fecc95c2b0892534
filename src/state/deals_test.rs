use super::*;

fn deal(id: &str, title: &str, stage: &str, value: Option<i64>) -> Deal {
    Deal {
        id: id.to_owned(),
        title: title.to_owned(),
        stage: stage.to_owned(),
        value,
        lead_id: None,
    }
}

fn sample_state() -> DealsState {
    DealsState {
        items: vec![
            deal("d-1", "Marina flat", "negotiation", Some(2_000_00)),
            deal("d-2", "Office lease", "won", Some(5_000_00)),
            deal("d-3", "Villa resale", "negotiation", None),
        ],
        ..DealsState::default()
    }
}

#[test]
fn filtered_applies_stage_and_search() {
    let mut state = sample_state();
    state.filters.stage = Some("negotiation".to_owned());
    assert_eq!(state.filtered().len(), 2);

    state.filters.search = "villa".to_owned();
    let ids: Vec<_> = state.filtered().into_iter().map(|d| d.id).collect();
    assert_eq!(ids, vec!["d-3"]);
}

#[test]
fn stage_options_are_deduplicated() {
    let state = sample_state();
    assert_eq!(state.stage_options(), vec!["negotiation", "won"]);
}

#[test]
fn filtered_value_total_ignores_unpriced_deals() {
    let mut state = sample_state();
    assert_eq!(state.filtered_value_total(), 7_000_00);
    state.filters.stage = Some("negotiation".to_owned());
    assert_eq!(state.filtered_value_total(), 2_000_00);
}
