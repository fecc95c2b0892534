#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn browser_store_is_absent_outside_the_browser() {
    let store = BrowserStore;
    store.set("k", "v");
    assert_eq!(store.get("k"), None);
    store.remove("k");
}

#[test]
fn memory_store_round_trips_values() {
    let store = MemoryStore::new();
    assert!(store.is_empty());
    store.set("a", "1");
    store.set("b", "2");
    assert_eq!(store.get("a").as_deref(), Some("1"));
    assert_eq!(store.len(), 2);
    store.remove("a");
    assert_eq!(store.get("a"), None);
    assert_eq!(store.len(), 1);
}

#[test]
fn memory_store_overwrites_existing_keys() {
    let store = MemoryStore::new();
    store.set("k", "old");
    store.set("k", "new");
    assert_eq!(store.get("k").as_deref(), Some("new"));
    assert_eq!(store.len(), 1);
}

#[test]
fn json_helpers_round_trip_through_store() {
    let store = MemoryStore::new();
    save_json(&store, "nums", &vec![1, 2, 3]);
    let back: Option<Vec<i32>> = load_json(&store, "nums");
    assert_eq!(back, Some(vec![1, 2, 3]));
}

#[test]
fn load_json_is_none_for_missing_or_malformed_values() {
    let store = MemoryStore::new();
    let missing: Option<Vec<i32>> = load_json(&store, "absent");
    assert_eq!(missing, None);
    store.set("broken", "{not json");
    let malformed: Option<Vec<i32>> = load_json(&store, "broken");
    assert_eq!(malformed, None);
}
