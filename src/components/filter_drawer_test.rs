use super::*;

#[test]
fn selection_from_value_maps_empty_to_no_filter() {
    assert_eq!(selection_from_value(""), None);
    assert_eq!(selection_from_value("new"), Some("new".to_owned()));
}
