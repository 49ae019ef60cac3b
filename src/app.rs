// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application context: wires the store, codec, and blob storage together.
//!
//! Handles the core workflow:
//! 1. Restore the stored snapshot at startup
//! 2. Validate form submissions into workouts
//! 3. Append to the session list and persist
//! 4. Resolve list activations back to map coordinates

use crate::error::Result;
use crate::models::Coordinates;
use crate::services::intake::{self, WorkoutForm};
use crate::storage::{self, keys, BlobStore};
use crate::store::{SessionWorkout, WorkoutStore};

/// The single state object behind every UI event.
///
/// Each operation runs to completion before the next event arrives; nothing
/// here is shared across threads.
pub struct App<B: BlobStore> {
    store: WorkoutStore,
    blob: B,
}

impl<B: BlobStore> App<B> {
    /// Start a session: restore whatever the blob holds.
    ///
    /// A missing or unreadable snapshot starts the session empty.
    pub fn bootstrap(blob: B) -> Self {
        let mut store = WorkoutStore::new();
        match storage::decode_snapshot(blob.get(keys::WORKOUTS).as_deref()) {
            Some(records) => {
                tracing::info!(count = records.len(), "Restored workouts from storage");
                store.replace_all(records);
            }
            None => {
                tracing::info!("No stored workouts, starting fresh");
            }
        }
        Self { store, blob }
    }

    /// Handle a form submission at the given map pin.
    ///
    /// Returns the new workout's id. On validation failure nothing is
    /// appended and nothing is persisted.
    pub fn submit_workout(&mut self, form: &WorkoutForm, coords: Coordinates) -> Result<String> {
        // 1. Validate and build
        let workout = intake::build_workout(form, coords)?;
        let id = workout.id().to_string();
        tracing::info!(kind = %workout.kind(), id = %id, "Workout recorded");

        // 2. Append to the session list
        self.store.append(workout);

        // 3. Persist, fire-and-forget
        self.save();

        Ok(id)
    }

    /// Handle a click on a list item: resolve the workout and hand back its
    /// coordinates for map re-centering.
    ///
    /// Unknown ids are stale UI references and are ignored. Live workouts
    /// also count the interaction; restored records cannot, so for them the
    /// attempt is logged and skipped.
    pub fn activate_workout(&mut self, id: &str) -> Option<Coordinates> {
        let entry = self.store.find_by_id_mut(id)?;
        let coords = entry.coords();
        if let Err(e) = entry.record_interaction() {
            tracing::debug!(id, error = %e, "Interaction not counted");
        }
        Some(coords)
    }

    /// Look up one entry by id.
    pub fn find_workout(&self, id: &str) -> Option<&SessionWorkout> {
        self.store.find_by_id(id)
    }

    /// All entries in insertion order.
    pub fn workouts(&self) -> &[SessionWorkout] {
        self.store.all()
    }

    /// Drop the stored snapshot and empty the session list.
    ///
    /// This leaves the app in the state a reload would come up with; the
    /// hosting shell decides whether to actually restart.
    pub fn reset(&mut self) {
        self.blob.remove(keys::WORKOUTS);
        self.store.clear();
        tracing::info!("Workout storage reset");
    }

    /// Write the current list to the blob.
    ///
    /// Encode failures are logged and swallowed; the storage layer does the
    /// same for write failures. The caller never sees either.
    fn save(&mut self) {
        match storage::encode_snapshot(self.store.all()) {
            Ok(blob) => {
                self.blob.set(keys::WORKOUTS, &blob);
                tracing::debug!(count = self.store.len(), "Snapshot persisted");
            }
            Err(e) => {
                tracing::warn!(error = %e, "Snapshot encode failed, workouts not persisted")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryBlobStore;

    fn test_coords() -> Coordinates {
        Coordinates::new(10.0, 20.0).unwrap()
    }

    fn running_form() -> WorkoutForm {
        WorkoutForm {
            kind: "running".to_string(),
            distance: "5".to_string(),
            duration: "30".to_string(),
            extra: "80".to_string(),
        }
    }

    #[test]
    fn test_bootstrap_with_empty_blob_starts_fresh() {
        let app = App::bootstrap(MemoryBlobStore::new());
        assert!(app.workouts().is_empty());
    }

    #[test]
    fn test_bootstrap_with_corrupt_blob_starts_fresh() {
        let mut blob = MemoryBlobStore::new();
        blob.set(keys::WORKOUTS, "corrupted beyond repair");
        let app = App::bootstrap(blob);
        assert!(app.workouts().is_empty());
    }

    #[test]
    fn test_submit_appends_and_persists() {
        let blob = MemoryBlobStore::new();
        let mut app = App::bootstrap(blob.clone());

        let id = app.submit_workout(&running_form(), test_coords()).unwrap();

        assert_eq!(app.workouts().len(), 1);
        assert_eq!(app.find_workout(&id).unwrap().id(), id);
        assert!(blob.get(keys::WORKOUTS).is_some());
    }

    #[test]
    fn test_activate_unknown_id_is_ignored() {
        let mut app = App::bootstrap(MemoryBlobStore::new());
        assert!(app.activate_workout("9999999999").is_none());
    }

    #[test]
    fn test_reset_clears_store_and_blob() {
        let blob = MemoryBlobStore::new();
        let mut app = App::bootstrap(blob.clone());
        app.submit_workout(&running_form(), test_coords()).unwrap();

        app.reset();

        assert!(app.workouts().is_empty());
        assert!(blob.get(keys::WORKOUTS).is_none());
    }
}
