mod common;

use std::thread;

use common::store;
use licensor_core::{LicenseDraft, LicensePatch};
use licensor_store::StoreError;

#[test]
fn concurrent_creates_of_same_key_have_one_winner() {
    let store = store();
    let results: Vec<_> = thread::scope(|s| {
        let handles: Vec<_> = (0..16)
            .map(|i| {
                let store = store.clone();
                s.spawn(move || {
                    let mut draft = LicenseDraft::new("RACE", "2030-01-01");
                    draft.notes = Some(format!("writer {i}"));
                    store.create(&draft)
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let winners = results.iter().filter(|r| r.is_ok()).count();
    let conflicts = results
        .iter()
        .filter(|r| matches!(r, Err(StoreError::DuplicateKey(_))))
        .count();
    assert_eq!(winners, 1);
    assert_eq!(conflicts, 15);
    assert_eq!(store.count().unwrap(), 1);
}

#[test]
fn concurrent_distinct_creates_all_land() {
    let store = store();
    thread::scope(|s| {
        for i in 0..8 {
            let store = store.clone();
            s.spawn(move || {
                store
                    .create(&LicenseDraft::new(format!("KEY-{i}"), "2030-01-01"))
                    .unwrap();
            });
        }
    });
    assert_eq!(store.count().unwrap(), 8);
    let mut ids: Vec<i64> = store.list().unwrap().iter().map(|l| l.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 8);
}

#[test]
fn readers_and_writers_interleave() {
    let store = store();
    let license = store.create(&LicenseDraft::new("SHARED", "2030-01-01")).unwrap();
    thread::scope(|s| {
        for _ in 0..4 {
            let store = store.clone();
            s.spawn(move || {
                for _ in 0..50 {
                    assert!(store.find_by_key("SHARED").unwrap().is_some());
                }
            });
        }
        let writer = store.clone();
        s.spawn(move || {
            for i in 0..50 {
                let patch = LicensePatch {
                    active: Some(i % 2 == 0),
                    ..LicensePatch::default()
                };
                assert_eq!(writer.update(license.id, &patch).unwrap(), 1);
            }
        });
    });
}
