//! Plain persisted workout shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::coords::Coordinates;
use crate::models::workout::{Discipline, WorkoutKind};

/// A workout as it exists in a stored snapshot: data fields only.
///
/// Restoring a snapshot yields these, not [`Workout`](crate::models::Workout)
/// values. A record carries no interaction counter, and its derived metric
/// is whatever the snapshot holds; nothing is recomputed on the way back in.
/// Records are never upgraded to live workouts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutRecord {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub coords: Coordinates,
    pub distance_km: f64,
    pub duration_min: f64,
    pub description: String,
    /// Kind tag plus the kind-specific fields, flattened into the record
    #[serde(flatten)]
    pub discipline: Discipline,
    /// True when this record came back from storage rather than from a
    /// live workout. Never written to the snapshot.
    #[serde(skip, default = "rehydrated")]
    pub is_rehydrated: bool,
}

fn rehydrated() -> bool {
    true
}

impl WorkoutRecord {
    pub fn kind(&self) -> WorkoutKind {
        self.discipline.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_json_shape() {
        let record = WorkoutRecord {
            id: "0000000001".to_string(),
            created_at: "2026-04-14T09:00:00Z".parse().unwrap(),
            coords: Coordinates::new(10.0, 20.0).unwrap(),
            distance_km: 5.0,
            duration_min: 30.0,
            description: "Running on April 14".to_string(),
            discipline: Discipline::Running {
                cadence_spm: 80.0,
                pace_min_per_km: 6.0,
            },
            is_rehydrated: false,
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["kind"], "running");
        assert_eq!(json["cadence_spm"], 80.0);
        assert_eq!(json["pace_min_per_km"], 6.0);
        assert_eq!(json["coords"]["lat"], 10.0);
        // The rehydration flag is in-memory state, not snapshot data
        assert!(json.get("is_rehydrated").is_none());
    }

    #[test]
    fn test_deserialized_record_is_rehydrated() {
        let json = r#"{
            "id": "0000000001",
            "created_at": "2026-04-14T09:00:00Z",
            "coords": {"lat": 10.0, "lng": 20.0},
            "distance_km": 5.0,
            "duration_min": 30.0,
            "description": "Running on April 14",
            "kind": "running",
            "cadence_spm": 80.0,
            "pace_min_per_km": 6.0
        }"#;

        let record: WorkoutRecord = serde_json::from_str(json).unwrap();
        assert!(record.is_rehydrated);
        assert_eq!(record.kind(), WorkoutKind::Running);
        assert_eq!(record.distance_km, 5.0);
    }
}
