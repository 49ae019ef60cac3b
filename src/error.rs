// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types.

/// Application error type.
///
/// Store lookups are not represented here: a missing id is a normal
/// outcome and comes back as `None` from the store.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Workout {0} was restored from storage and cannot record interactions")]
    RehydratedRecord(String),

    #[error("Stored snapshot is unreadable: {0}")]
    CorruptSnapshot(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Result type alias for fallible operations.
pub type Result<T> = std::result::Result<T, AppError>;
