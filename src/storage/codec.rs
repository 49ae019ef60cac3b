// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Snapshot codec: the session list to one string blob and back.
//!
//! Restores are fail-soft. A missing or unreadable snapshot means a fresh
//! start, never an error the user sees. Derived metrics come back exactly
//! as stored; the decoder does not recompute them.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::WorkoutRecord;
use crate::store::SessionWorkout;
use crate::time_utils;

/// Current snapshot format version.
///
/// The predecessor format was a bare record array with no version field.
/// Unversioned or mismatched blobs are treated as unreadable, not migrated.
pub const SNAPSHOT_VERSION: u32 = 1;

/// On-disk snapshot shape.
#[derive(Debug, Serialize, Deserialize)]
pub struct SnapshotEnvelope {
    pub version: u32,
    /// When the snapshot was written. Diagnostic only; ignored on restore.
    pub saved_at: String,
    pub workouts: Vec<WorkoutRecord>,
}

/// Encode the session list as a snapshot blob.
///
/// Live workouts reduce to plain records here; the interaction counter does
/// not make it into the blob.
pub fn encode_snapshot(entries: &[SessionWorkout]) -> Result<String> {
    let envelope = SnapshotEnvelope {
        version: SNAPSHOT_VERSION,
        saved_at: time_utils::format_utc_rfc3339(chrono::Utc::now()),
        workouts: entries.iter().map(SessionWorkout::to_record).collect(),
    };
    Ok(serde_json::to_string(&envelope)?)
}

/// Strict decode of a snapshot blob.
pub fn parse_snapshot(blob: &str) -> Result<Vec<WorkoutRecord>> {
    let envelope: SnapshotEnvelope =
        serde_json::from_str(blob).map_err(|e| AppError::CorruptSnapshot(e.to_string()))?;
    if envelope.version != SNAPSHOT_VERSION {
        return Err(AppError::CorruptSnapshot(format!(
            "Unsupported snapshot version {}",
            envelope.version
        )));
    }
    Ok(envelope.workouts)
}

/// Fail-soft decode used by the restore path.
///
/// `None` for an absent blob is simply "nothing saved yet". A present but
/// unreadable blob is logged and also yields `None`; the caller starts
/// fresh either way.
pub fn decode_snapshot(blob: Option<&str>) -> Option<Vec<WorkoutRecord>> {
    let blob = blob?;
    match parse_snapshot(blob) {
        Ok(records) => Some(records),
        Err(e) => {
            tracing::warn!(error = %e, "Discarding unreadable workout snapshot");
            None
        }
    }
}
