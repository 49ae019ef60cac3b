// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use waymark_tracker::models::Coordinates;
use waymark_tracker::services::intake::WorkoutForm;

/// Coordinates used throughout the integration tests.
#[allow(dead_code)]
pub fn test_coords() -> Coordinates {
    Coordinates::new(10.0, 20.0).expect("test coordinates are valid")
}

/// A well-formed running submission: 5 km in 30 min at cadence 80.
#[allow(dead_code)]
pub fn running_form() -> WorkoutForm {
    WorkoutForm {
        kind: "running".to_string(),
        distance: "5".to_string(),
        duration: "30".to_string(),
        extra: "80".to_string(),
    }
}

/// A well-formed cycling submission: 27 km in 95 min, 523 m of climb.
#[allow(dead_code)]
pub fn cycling_form() -> WorkoutForm {
    WorkoutForm {
        kind: "cycling".to_string(),
        distance: "27".to_string(),
        duration: "95".to_string(),
        extra: "523".to_string(),
    }
}
