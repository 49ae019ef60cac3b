// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Form intake: raw field values to a validated workout.

use serde::Deserialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::error::{AppError, Result};
use crate::models::{Coordinates, Workout, WorkoutKind};

/// Rejection message for the numeric checks below.
const VALIDATION_MESSAGE: &str = "Inputs have to be positive numbers";

/// Raw values as the form UI submits them.
///
/// `extra` is the kind-specific field: cadence for running, elevation gain
/// for cycling.
#[derive(Debug, Clone, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WorkoutForm {
    pub kind: String,
    pub distance: String,
    pub duration: String,
    pub extra: String,
}

/// Validate a form submission and build the workout.
///
/// Nothing is appended or persisted here. On rejection the caller sees the
/// error synchronously and no state has changed anywhere.
///
/// Distance, duration, and cadence must be positive; a zero distance would
/// push an infinite pace into the snapshot. Elevation gain only has to be
/// finite.
pub fn build_workout(form: &WorkoutForm, coords: Coordinates) -> Result<Workout> {
    let kind = WorkoutKind::parse(form.kind.trim())
        .ok_or_else(|| AppError::InvalidInput(format!("Unknown workout kind: {}", form.kind)))?;

    let distance = coerce_finite(&form.distance)
        .ok_or_else(|| AppError::InvalidInput(VALIDATION_MESSAGE.to_string()))?;
    let duration = coerce_finite(&form.duration)
        .ok_or_else(|| AppError::InvalidInput(VALIDATION_MESSAGE.to_string()))?;
    let extra = coerce_finite(&form.extra)
        .ok_or_else(|| AppError::InvalidInput(VALIDATION_MESSAGE.to_string()))?;

    let all_positive = match kind {
        WorkoutKind::Running => distance > 0.0 && duration > 0.0 && extra > 0.0,
        WorkoutKind::Cycling => distance > 0.0 && duration > 0.0,
    };
    if !all_positive {
        return Err(AppError::InvalidInput(VALIDATION_MESSAGE.to_string()));
    }

    Ok(match kind {
        WorkoutKind::Running => Workout::running(coords, distance, duration, extra),
        WorkoutKind::Cycling => Workout::cycling(coords, distance, duration, extra),
    })
}

/// Read a form field as a finite number.
///
/// Empty fields coerce to zero, the way an untouched numeric input submits.
/// Anything that does not parse to a finite f64 is rejected.
fn coerce_finite(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => None,
    }
}
