// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

mod common;

use common::{cycling_form, running_form, test_coords};
use waymark_tracker::services::intake::build_workout;
use waymark_tracker::services::projection::{build_card, build_marker};
use waymark_tracker::storage::{encode_snapshot, parse_snapshot};
use waymark_tracker::store::{SessionWorkout, WorkoutStore};

#[test]
fn test_running_card_units_and_formatting() {
    let workout = build_workout(&running_form(), test_coords()).expect("valid submission");
    let card = build_card(&SessionWorkout::Live(workout));

    assert_eq!(card.kind, "running");
    assert_eq!(card.icon, "🏃");
    assert_eq!(card.distance, "5");
    assert_eq!(card.distance_unit, "km");
    assert_eq!(card.duration, "30");
    assert_eq!(card.duration_unit, "min");
    assert_eq!(card.metric, "6.0");
    assert_eq!(card.metric_unit, "min/km");
    assert_eq!(card.extra, "80");
    assert_eq!(card.extra_unit, "spm");
}

#[test]
fn test_cycling_card_units_and_formatting() {
    let workout = build_workout(&cycling_form(), test_coords()).expect("valid submission");
    let card = build_card(&SessionWorkout::Live(workout));

    assert_eq!(card.kind, "cycling");
    assert_eq!(card.icon, "🚴‍♀️");
    assert_eq!(card.metric, "17.1");
    assert_eq!(card.metric_unit, "km/h");
    assert_eq!(card.extra, "523");
    assert_eq!(card.extra_unit, "m");
}

#[test]
fn test_marker_popup_and_css_class() {
    let workout = build_workout(&running_form(), test_coords()).expect("valid submission");
    let entry = SessionWorkout::Live(workout);
    let marker = build_marker(&entry);

    assert_eq!(marker.lat, 10.0);
    assert_eq!(marker.lng, 20.0);
    assert_eq!(marker.css_class, "running-popup");
    assert_eq!(marker.popup_text, format!("🏃 {}", entry.description()));
}

#[test]
fn test_rehydrated_entry_projects_like_live() {
    let mut store = WorkoutStore::new();
    store.append(build_workout(&cycling_form(), test_coords()).expect("valid submission"));
    let live_card = build_card(&store.all()[0]);

    let blob = encode_snapshot(store.all()).expect("encode");
    let mut restored = WorkoutStore::new();
    restored.replace_all(parse_snapshot(&blob).expect("parse"));
    let restored_card = build_card(&restored.all()[0]);

    assert_eq!(restored_card.id, live_card.id);
    assert_eq!(restored_card.title, live_card.title);
    assert_eq!(restored_card.metric, live_card.metric);
    assert_eq!(restored_card.extra, live_card.extra);
    assert_eq!(restored_card.icon, live_card.icon);
}

#[test]
fn test_projection_is_deterministic() {
    let workout = build_workout(&running_form(), test_coords()).expect("valid submission");
    let entry = SessionWorkout::Live(workout);

    let first = build_card(&entry);
    let second = build_card(&entry);
    assert_eq!(first.title, second.title);
    assert_eq!(first.metric, second.metric);
    assert_eq!(first.distance, second.distance);
}
