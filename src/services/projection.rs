//! Display projections for list items and map markers.
//!
//! Pure mappings from a session entry to the strings the UI shows. The same
//! entry always projects to the same fields, with no side effects. Derived
//! metrics display with one decimal place; values the user entered display
//! as entered.

use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::{Discipline, WorkoutKind};
use crate::store::SessionWorkout;

/// Display fields for one workout list item.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WorkoutCard {
    pub id: String,
    pub kind: String,
    pub icon: String,
    /// The workout description, e.g. "Running on April 14"
    pub title: String,
    pub distance: String,
    pub distance_unit: String,
    pub duration: String,
    pub duration_unit: String,
    /// Derived metric: pace for running, speed for cycling
    pub metric: String,
    pub metric_unit: String,
    /// Kind-specific field as entered: cadence or elevation gain
    pub extra: String,
    pub extra_unit: String,
}

/// Display fields for one map marker and its popup.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct MapMarker {
    pub lat: f64,
    pub lng: f64,
    pub kind: String,
    /// Popup body: "<icon> <description>"
    pub popup_text: String,
    /// Popup style hook: "<kind>-popup"
    pub css_class: String,
}

/// Icon glyph for a workout kind.
fn icon_for(kind: WorkoutKind) -> &'static str {
    match kind {
        WorkoutKind::Running => "🏃",
        WorkoutKind::Cycling => "🚴‍♀️",
    }
}

/// Project a session entry to its list card.
pub fn build_card(entry: &SessionWorkout) -> WorkoutCard {
    let kind = entry.kind();
    let (metric, metric_unit, extra, extra_unit) = match entry.discipline() {
        Discipline::Running {
            cadence_spm,
            pace_min_per_km,
        } => (
            format!("{:.1}", pace_min_per_km),
            "min/km",
            cadence_spm.to_string(),
            "spm",
        ),
        Discipline::Cycling {
            elevation_gain_m,
            speed_km_per_h,
        } => (
            format!("{:.1}", speed_km_per_h),
            "km/h",
            elevation_gain_m.to_string(),
            "m",
        ),
    };

    WorkoutCard {
        id: entry.id().to_string(),
        kind: kind.to_string(),
        icon: icon_for(kind).to_string(),
        title: entry.description().to_string(),
        distance: entry.distance_km().to_string(),
        distance_unit: "km".to_string(),
        duration: entry.duration_min().to_string(),
        duration_unit: "min".to_string(),
        metric,
        metric_unit: metric_unit.to_string(),
        extra,
        extra_unit: extra_unit.to_string(),
    }
}

/// Project a session entry to its map marker.
pub fn build_marker(entry: &SessionWorkout) -> MapMarker {
    let kind = entry.kind();
    let coords = entry.coords();
    MapMarker {
        lat: coords.lat(),
        lng: coords.lng(),
        kind: kind.to_string(),
        popup_text: format!("{} {}", icon_for(kind), entry.description()),
        css_class: format!("{}-popup", kind),
    }
}
