//! Store behaviour through the public library API, no transport involved.

use std::thread;

use flavor_api::{is_valid_name, FlavorInput, FlavorStore, ListQuery, StoreError};

fn letters(len: usize) -> String {
    (0..len).map(|i| (b'a' + (i % 26) as u8) as char).collect()
}

#[test]
fn every_letter_run_up_to_thirty_is_valid() {
    for len in 1..=30 {
        assert!(is_valid_name(&letters(len)), "len {}", len);
        assert!(is_valid_name(&letters(len).to_uppercase()), "len {}", len);
    }
    assert!(!is_valid_name(&letters(31)));
    assert!(!is_valid_name(""));
}

#[test]
fn any_non_letter_character_invalidates_a_name() {
    for bad in [' ', '\t', '\n', '0', '9', '-', '_', '.', '!', '\u{e9}', '\u{3b1}'] {
        let name = format!("mint{}chip", bad);
        assert!(!is_valid_name(&name), "{:?}", name);
    }
}

#[test]
fn create_yields_fresh_ids() {
    let store = FlavorStore::new();
    let mut seen = Vec::new();
    for name in ["chocolate", "vanilla", "strawberry"] {
        let record = store.create(FlavorInput::named(name)).unwrap();
        assert!(!seen.contains(&record.id));
        seen.push(record.id);
    }
}

#[test]
fn duplicate_create_is_a_conflict_without_side_effects() {
    let store = FlavorStore::new();
    store.create(FlavorInput::named("chocolate")).unwrap();
    let before = store.list(&ListQuery::all()).unwrap();

    let err = store.create(FlavorInput::named("chocolate")).unwrap_err();
    assert!(matches!(err, StoreError::Conflict(_)));
    assert_eq!(err.status_code(), 400);
    assert_eq!(store.list(&ListQuery::all()).unwrap(), before);
}

#[test]
fn delete_frees_the_name_but_not_the_id() {
    let store = FlavorStore::new();
    let first = store.create(FlavorInput::named("chocolate")).unwrap();
    store.delete(first.id).unwrap();

    let second = store.create(FlavorInput::named("chocolate")).unwrap();
    assert!(second.id > first.id);
}

#[test]
fn name_filter_returns_exact_matches_in_insertion_order() {
    let store = FlavorStore::new();
    for name in ["mint", "lemon", "mango", "MINT", "lime"] {
        store.create(FlavorInput::named(name)).unwrap();
    }
    store.update(3, FlavorInput::named("mint")).unwrap();
    store.update(5, FlavorInput::named("mint")).unwrap();

    let ids: Vec<u64> = store
        .list(&ListQuery::named("mint"))
        .unwrap()
        .iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, vec![1, 3, 5]);
}

#[test]
fn pagination_over_twenty_five_records() {
    let store = FlavorStore::new();
    for i in 0..25 {
        store.create(FlavorInput::named(letters(i + 1))).unwrap();
    }

    let first = store.list(&ListQuery::all().page(1).limit(10)).unwrap();
    assert_eq!(first.len(), 10);
    assert_eq!(first[0].id, 1);
    assert_eq!(first[9].id, 10);

    let third = store.list(&ListQuery::all().page(3).limit(10)).unwrap();
    let ids: Vec<u64> = third.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![21, 22, 23, 24, 25]);

    let err = store.list(&ListQuery::all().page(4).limit(10)).unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));
    assert_eq!(err.status_code(), 404);
}

#[test]
fn scenario_create_conflict_update_delete_get() {
    let store = FlavorStore::new();

    let created = store.create(FlavorInput::named("chocolate")).unwrap();
    assert_eq!((created.id, created.name.as_str()), (1, "chocolate"));

    assert!(matches!(
        store.create(FlavorInput::named("chocolate")),
        Err(StoreError::Conflict(_))
    ));

    let updated = store.update(1, FlavorInput::named("mocha")).unwrap();
    assert_eq!((updated.id, updated.name.as_str()), (1, "mocha"));

    store.delete(1).unwrap();
    assert!(matches!(store.get(1), Err(StoreError::NotFound(_))));
}

#[test]
fn scenario_invalid_payloads() {
    let store = FlavorStore::new();
    let err = store.create(FlavorInput::named("a".repeat(151))).unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));

    let err = store.create(FlavorInput::default()).unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
    assert!(store.is_empty().unwrap());
}

#[test]
fn concurrent_creates_of_one_name_admit_exactly_one() {
    let store = FlavorStore::new();
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store = store.clone();
            thread::spawn(move || store.create(FlavorInput::named("vanilla")).is_ok())
        })
        .collect();

    let wins = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|ok| *ok)
        .count();
    assert_eq!(wins, 1);
    assert_eq!(store.len().unwrap(), 1);
}

#[test]
fn concurrent_creates_get_distinct_ids() {
    let store = FlavorStore::new();
    let handles: Vec<_> = (0..10)
        .map(|i| {
            let store = store.clone();
            thread::spawn(move || store.create(FlavorInput::named(letters(i + 1))).unwrap().id)
        })
        .collect();

    let mut ids: Vec<u64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    ids.sort_unstable();
    assert_eq!(ids, (1..=10).collect::<Vec<u64>>());
}
