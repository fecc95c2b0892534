use super::*;

#[test]
fn draft_problem_requires_name_and_status() {
    let mut draft = normalized_draft("", "", "new", "", "");
    assert_eq!(draft_problem(&draft), Some("Name is required."));

    draft = normalized_draft("Aya", "", "   ", "", "");
    assert_eq!(draft_problem(&draft), Some("Status is required."));

    draft = normalized_draft("Aya", "", "new", "", "");
    assert_eq!(draft_problem(&draft), None);
}

#[test]
fn normalized_draft_trims_and_collapses_blanks() {
    let draft = normalized_draft("  Aya  ", "  ", "new", " website ", "");
    assert_eq!(draft.name, "Aya");
    assert_eq!(draft.phone, None);
    assert_eq!(draft.source.as_deref(), Some("website"));
    assert_eq!(draft.city, None);
}
