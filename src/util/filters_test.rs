use super::*;

struct Row {
    city: Option<String>,
}

fn rows(cities: &[Option<&str>]) -> Vec<Row> {
    cities
        .iter()
        .map(|c| Row {
            city: c.map(str::to_owned),
        })
        .collect()
}

#[test]
fn unique_values_sorts_and_dedups() {
    let items = rows(&[Some("Cairo"), Some("Alexandria"), Some("Cairo"), Some("Giza")]);
    let values = unique_values(&items, |r| r.city.as_deref());
    assert_eq!(values, vec!["Alexandria", "Cairo", "Giza"]);
}

#[test]
fn unique_values_skips_missing_and_blank_entries() {
    let items = rows(&[Some("Cairo"), None, Some("   "), Some("")]);
    let values = unique_values(&items, |r| r.city.as_deref());
    assert_eq!(values, vec!["Cairo"]);
}

#[test]
fn unique_values_trims_before_comparing() {
    let items = rows(&[Some(" Cairo "), Some("Cairo")]);
    let values = unique_values(&items, |r| r.city.as_deref());
    assert_eq!(values, vec!["Cairo"]);
}

#[test]
fn matches_query_is_case_insensitive_substring() {
    assert!(matches_query("Sunset Villa", "villa"));
    assert!(matches_query("Sunset Villa", "SUN"));
    assert!(!matches_query("Sunset Villa", "tower"));
}

#[test]
fn matches_query_accepts_everything_for_blank_queries() {
    assert!(matches_query("anything", ""));
    assert!(matches_query("anything", "   "));
}

#[test]
fn matches_selection_treats_empty_as_no_filter() {
    assert!(matches_selection(Some("new"), None));
    assert!(matches_selection(Some("new"), Some("")));
    assert!(matches_selection(Some("new"), Some("new")));
    assert!(!matches_selection(Some("new"), Some("won")));
    assert!(!matches_selection(None, Some("won")));
}
