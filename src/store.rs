// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory workout list for the active session.

use chrono::{DateTime, Utc};

use crate::error::{AppError, Result};
use crate::models::{Coordinates, Discipline, Workout, WorkoutKind, WorkoutRecord};

/// One entry in the session list: either a workout recorded during this
/// session or a record restored from storage.
#[derive(Debug, Clone)]
pub enum SessionWorkout {
    Live(Workout),
    Rehydrated(WorkoutRecord),
}

impl SessionWorkout {
    pub fn id(&self) -> &str {
        match self {
            SessionWorkout::Live(w) => w.id(),
            SessionWorkout::Rehydrated(r) => &r.id,
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        match self {
            SessionWorkout::Live(w) => w.created_at(),
            SessionWorkout::Rehydrated(r) => r.created_at,
        }
    }

    pub fn kind(&self) -> WorkoutKind {
        match self {
            SessionWorkout::Live(w) => w.kind(),
            SessionWorkout::Rehydrated(r) => r.kind(),
        }
    }

    pub fn coords(&self) -> Coordinates {
        match self {
            SessionWorkout::Live(w) => w.coords(),
            SessionWorkout::Rehydrated(r) => r.coords,
        }
    }

    pub fn distance_km(&self) -> f64 {
        match self {
            SessionWorkout::Live(w) => w.distance_km(),
            SessionWorkout::Rehydrated(r) => r.distance_km,
        }
    }

    pub fn duration_min(&self) -> f64 {
        match self {
            SessionWorkout::Live(w) => w.duration_min(),
            SessionWorkout::Rehydrated(r) => r.duration_min,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            SessionWorkout::Live(w) => w.description(),
            SessionWorkout::Rehydrated(r) => &r.description,
        }
    }

    pub fn discipline(&self) -> Discipline {
        match self {
            SessionWorkout::Live(w) => w.discipline(),
            SessionWorkout::Rehydrated(r) => r.discipline,
        }
    }

    /// True for entries restored from a snapshot.
    pub fn is_rehydrated(&self) -> bool {
        matches!(self, SessionWorkout::Rehydrated(_))
    }

    /// Interaction count. Restored records do not carry one.
    pub fn interaction_count(&self) -> Option<u32> {
        match self {
            SessionWorkout::Live(w) => Some(w.interaction_count()),
            SessionWorkout::Rehydrated(_) => None,
        }
    }

    /// Count a user interaction.
    ///
    /// Restored records refuse: that capability does not survive the
    /// snapshot round-trip.
    pub fn record_interaction(&mut self) -> Result<u32> {
        match self {
            SessionWorkout::Live(w) => Ok(w.record_interaction()),
            SessionWorkout::Rehydrated(r) => Err(AppError::RehydratedRecord(r.id.clone())),
        }
    }

    /// Reduce to the plain record shape for persistence.
    pub fn to_record(&self) -> WorkoutRecord {
        match self {
            SessionWorkout::Live(w) => w.to_record(),
            SessionWorkout::Rehydrated(r) => r.clone(),
        }
    }
}

/// Ordered collection of workouts for the active session.
///
/// Append-only while the session runs. `replace_all` exists for the restore
/// path and `clear` for reset; there is no per-entry deletion or update.
#[derive(Debug, Default)]
pub struct WorkoutStore {
    entries: Vec<SessionWorkout>,
}

impl WorkoutStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a newly recorded workout. Insertion order is preserved and
    /// nothing is deduplicated.
    pub fn append(&mut self, workout: Workout) {
        self.entries.push(SessionWorkout::Live(workout));
    }

    /// All entries, oldest first.
    pub fn all(&self) -> &[SessionWorkout] {
        &self.entries
    }

    /// Linear scan by id. A missing id is a normal outcome.
    pub fn find_by_id(&self, id: &str) -> Option<&SessionWorkout> {
        self.entries.iter().find(|w| w.id() == id)
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut SessionWorkout> {
        self.entries.iter_mut().find(|w| w.id() == id)
    }

    /// Replace the whole list with restored records. Restore path only.
    pub fn replace_all(&mut self, records: Vec<WorkoutRecord>) {
        self.entries = records
            .into_iter()
            .map(SessionWorkout::Rehydrated)
            .collect();
    }

    /// Drop every entry. Used by reset.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
