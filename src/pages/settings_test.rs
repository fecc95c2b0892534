use super::*;
use crate::util::storage::MemoryStore;

#[test]
fn language_round_trips_through_the_store() {
    let store = MemoryStore::new();
    assert_eq!(load_language(&store), Language::En);

    store_language(&store, Language::Ar);
    assert_eq!(load_language(&store), Language::Ar);
    assert_eq!(store.get(LANGUAGE_KEY).as_deref(), Some("ar"));
}

#[test]
fn language_key_is_not_a_session_key() {
    assert!(!crate::state::session::SESSION_KEYS.contains(&LANGUAGE_KEY));
}

#[test]
fn role_labels_are_human_readable() {
    assert_eq!(role_label(UserRole::Owner), "Owner");
    assert_eq!(role_label(UserRole::Employee), "Employee");
}
