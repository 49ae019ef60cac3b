// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod coords;
pub mod record;
pub mod workout;

pub use coords::Coordinates;
pub use record::WorkoutRecord;
pub use workout::{Discipline, Workout, WorkoutKind};
