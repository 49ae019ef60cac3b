// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

mod common;

use common::{cycling_form, running_form, test_coords};
use waymark_tracker::error::AppError;
use waymark_tracker::services::intake::build_workout;
use waymark_tracker::storage::{decode_snapshot, encode_snapshot, parse_snapshot};
use waymark_tracker::store::WorkoutStore;

fn seeded_store() -> WorkoutStore {
    let mut store = WorkoutStore::new();
    store.append(build_workout(&running_form(), test_coords()).expect("valid submission"));
    store.append(build_workout(&cycling_form(), test_coords()).expect("valid submission"));
    store
}

#[test]
fn test_round_trip_reproduces_every_field_in_order() {
    let store = seeded_store();
    let blob = encode_snapshot(store.all()).expect("encode");
    let records = parse_snapshot(&blob).expect("parse");

    assert_eq!(records.len(), store.len());
    for (entry, record) in store.all().iter().zip(&records) {
        assert_eq!(record.id, entry.id());
        assert_eq!(record.created_at, entry.created_at());
        assert_eq!(record.coords, entry.coords());
        assert_eq!(record.distance_km, entry.distance_km());
        assert_eq!(record.duration_min, entry.duration_min());
        assert_eq!(record.description, entry.description());
        assert_eq!(record.discipline, entry.discipline());
        assert!(record.is_rehydrated);
    }
}

#[test]
fn test_second_round_trip_is_stable() {
    // Re-encoding restored records reproduces the same workout data
    let store = seeded_store();
    let blob = encode_snapshot(store.all()).expect("encode");
    let records = parse_snapshot(&blob).expect("parse");

    let mut restored = WorkoutStore::new();
    restored.replace_all(records);
    let blob_again = encode_snapshot(restored.all()).expect("re-encode");
    let records_again = parse_snapshot(&blob_again).expect("re-parse");

    assert_eq!(records_again.len(), store.len());
    for (entry, record) in store.all().iter().zip(&records_again) {
        assert_eq!(record.id, entry.id());
        assert_eq!(record.discipline, entry.discipline());
    }
}

#[test]
fn test_missing_blob_is_no_data() {
    assert!(decode_snapshot(None).is_none());
}

#[test]
fn test_garbage_blob_is_no_data() {
    assert!(decode_snapshot(Some("")).is_none());
    assert!(decode_snapshot(Some("not json at all {{{")).is_none());
    assert!(decode_snapshot(Some("42")).is_none());
}

#[test]
fn test_unversioned_legacy_blob_is_rejected() {
    // The legacy format was a bare array with no version field
    let legacy = r#"[{"id":"1234567890"}]"#;
    assert!(matches!(
        parse_snapshot(legacy),
        Err(AppError::CorruptSnapshot(_))
    ));
    assert!(decode_snapshot(Some(legacy)).is_none());
}

#[test]
fn test_empty_store_round_trips() {
    let store = WorkoutStore::new();
    let blob = encode_snapshot(store.all()).expect("encode");
    let records = parse_snapshot(&blob).expect("parse");
    assert!(records.is_empty());
}
