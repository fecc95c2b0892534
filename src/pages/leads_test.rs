use super::*;

fn lead(phone: Option<&str>, source: Option<&str>, city: Option<&str>) -> Lead {
    Lead {
        id: "l-1".to_owned(),
        name: "Aya".to_owned(),
        phone: phone.map(str::to_owned),
        status: "new".to_owned(),
        source: source.map(str::to_owned),
        city: city.map(str::to_owned),
        assigned_to: None,
    }
}

#[test]
fn lead_row_detail_joins_present_fields() {
    assert_eq!(
        lead_row_detail(&lead(Some("0100"), Some("website"), Some("Cairo"))),
        "0100 · website · Cairo"
    );
}

#[test]
fn lead_row_detail_skips_missing_fields() {
    assert_eq!(lead_row_detail(&lead(None, Some("website"), None)), "website");
    assert_eq!(lead_row_detail(&lead(None, None, None)), "");
}

#[test]
fn find_lead_resolves_persisted_edit_id() {
    let items = vec![lead(None, None, None)];
    assert_eq!(find_lead(&items, "l-1").map(|l| l.name), Some("Aya".to_owned()));
}

#[test]
fn find_lead_ignores_stale_id() {
    let items = vec![lead(None, None, None)];
    assert_eq!(find_lead(&items, "l-gone"), None);
    assert_eq!(find_lead(&[], "l-1"), None);
}
