// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Workout domain model: running and cycling sessions.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::coords::Coordinates;
use crate::models::record::WorkoutRecord;
use crate::time_utils;

/// Workout kind discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutKind {
    Running,
    Cycling,
}

impl WorkoutKind {
    /// Wire/storage name ("running" / "cycling").
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "running",
            WorkoutKind::Cycling => "cycling",
        }
    }

    /// Capitalized name for descriptions ("Running" / "Cycling").
    pub fn label(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::Cycling => "Cycling",
        }
    }

    /// Parse a form value. Unknown kinds yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "running" => Some(WorkoutKind::Running),
            "cycling" => Some(WorkoutKind::Cycling),
            _ => None,
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind-specific measurements, tagged by workout kind on the wire.
///
/// The derived metric (pace or speed) is computed once at construction and
/// carried as stored data from then on. It is never recomputed, not even
/// after a snapshot restore.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Discipline {
    Running {
        /// Steps per minute
        cadence_spm: f64,
        /// Minutes per kilometer: duration / distance
        pace_min_per_km: f64,
    },
    Cycling {
        /// Total climb in meters; zero or negative on net-downhill rides
        elevation_gain_m: f64,
        /// Kilometers per hour: distance / (duration / 60)
        speed_km_per_h: f64,
    },
}

impl Discipline {
    pub fn kind(&self) -> WorkoutKind {
        match self {
            Discipline::Running { .. } => WorkoutKind::Running,
            Discipline::Cycling { .. } => WorkoutKind::Cycling,
        }
    }
}

/// A workout recorded during the current session.
///
/// Every field except the interaction counter is immutable after
/// construction. A `Workout` is never persisted directly: it reduces to a
/// [`WorkoutRecord`] at snapshot time, and that conversion is one-way.
#[derive(Debug, Clone)]
pub struct Workout {
    id: String,
    created_at: DateTime<Utc>,
    coords: Coordinates,
    distance_km: f64,
    duration_min: f64,
    description: String,
    discipline: Discipline,
    interaction_count: u32,
}

impl Workout {
    /// Record a running workout. Pace is derived here, once.
    pub fn running(
        coords: Coordinates,
        distance_km: f64,
        duration_min: f64,
        cadence_spm: f64,
    ) -> Self {
        let discipline = Discipline::Running {
            cadence_spm,
            pace_min_per_km: duration_min / distance_km,
        };
        Self::build(coords, distance_km, duration_min, discipline)
    }

    /// Record a cycling workout. Speed is derived here, once.
    pub fn cycling(
        coords: Coordinates,
        distance_km: f64,
        duration_min: f64,
        elevation_gain_m: f64,
    ) -> Self {
        let discipline = Discipline::Cycling {
            elevation_gain_m,
            speed_km_per_h: distance_km / (duration_min / 60.0),
        };
        Self::build(coords, distance_km, duration_min, discipline)
    }

    fn build(
        coords: Coordinates,
        distance_km: f64,
        duration_min: f64,
        discipline: Discipline,
    ) -> Self {
        let created_at = Utc::now();
        Self {
            id: next_id(created_at),
            description: describe(discipline.kind(), created_at),
            created_at,
            coords,
            distance_km,
            duration_min,
            discipline,
            interaction_count: 0,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn coords(&self) -> Coordinates {
        self.coords
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn duration_min(&self) -> f64 {
        self.duration_min
    }

    pub fn kind(&self) -> WorkoutKind {
        self.discipline.kind()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn discipline(&self) -> Discipline {
        self.discipline
    }

    pub fn interaction_count(&self) -> u32 {
        self.interaction_count
    }

    /// Count a user interaction with this workout.
    ///
    /// Returns the updated count.
    pub fn record_interaction(&mut self) -> u32 {
        self.interaction_count += 1;
        self.interaction_count
    }

    /// Reduce to the plain record shape used for persistence.
    ///
    /// The interaction counter is dropped here: it does not survive a
    /// snapshot round-trip.
    pub fn to_record(&self) -> WorkoutRecord {
        WorkoutRecord {
            id: self.id.clone(),
            created_at: self.created_at,
            coords: self.coords,
            distance_km: self.distance_km,
            duration_min: self.duration_min,
            description: self.description.clone(),
            discipline: self.discipline,
            is_rehydrated: false,
        }
    }
}

/// Build the display description, e.g. "Running on April 14".
fn describe(kind: WorkoutKind, created_at: DateTime<Utc>) -> String {
    format!(
        "{} on {}",
        kind.label(),
        time_utils::month_day_label(created_at)
    )
}

/// High-water mark keeping same-millisecond ids distinct within a process.
static LAST_ID_MS: AtomicU64 = AtomicU64::new(0);

/// Creation-time id: the last 10 digits of the Unix-millisecond clock,
/// zero-padded.
///
/// Two workouts created in the same millisecond would collide on the raw
/// clock value, so the high-water mark nudges repeats forward. Ids are
/// unique within one store; uniqueness across sessions is not guaranteed.
fn next_id(created_at: DateTime<Utc>) -> String {
    let now_ms = created_at.timestamp_millis().max(0) as u64;
    // fetch_update hands back the previous mark; the stored value is
    // recomputed from it with the same expression the closure used.
    let claimed = LAST_ID_MS
        .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |last| {
            Some(now_ms.max(last + 1))
        })
        .map_or(now_ms, |last| now_ms.max(last + 1));
    format!("{:010}", claimed % 10_000_000_000)
}
