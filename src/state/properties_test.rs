use super::*;

fn property(id: &str, title: &str, kind: &str, status: &str, city: Option<&str>) -> Property {
    Property {
        id: id.to_owned(),
        title: title.to_owned(),
        kind: kind.to_owned(),
        city: city.map(str::to_owned),
        status: status.to_owned(),
        price: None,
    }
}

fn sample_state() -> PropertiesState {
    PropertiesState {
        items: vec![
            property("p-1", "Nile view flat", "apartment", "available", Some("Cairo")),
            property("p-2", "Palm villa", "villa", "reserved", Some("Giza")),
            property("p-3", "Corner office", "office", "available", None),
        ],
        ..PropertiesState::default()
    }
}

#[test]
fn filtered_combines_kind_status_and_city() {
    let mut state = sample_state();
    state.filters.status = Some("available".to_owned());
    assert_eq!(state.filtered().len(), 2);

    state.filters.city = Some("Cairo".to_owned());
    let ids: Vec<_> = state.filtered().into_iter().map(|p| p.id).collect();
    assert_eq!(ids, vec!["p-1"]);
}

#[test]
fn option_lists_come_from_fetched_rows() {
    let state = sample_state();
    assert_eq!(state.kind_options(), vec!["apartment", "office", "villa"]);
    assert_eq!(state.status_options(), vec!["available", "reserved"]);
    assert_eq!(state.city_options(), vec!["Cairo", "Giza"]);
}
