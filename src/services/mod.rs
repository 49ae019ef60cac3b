// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - workout intake and display projection.

pub mod intake;
pub mod projection;

pub use intake::{build_workout, WorkoutForm};
pub use projection::{build_card, build_marker, MapMarker, WorkoutCard};
