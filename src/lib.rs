// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Waymark-Tracker: log workouts against points on a map
//!
//! This crate is the domain core of a map-pinned workout log: the workout
//! model, form validation, the session store, the snapshot codec, and the
//! display projections. The map widget, geolocation, and form UI are
//! external collaborators.

pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod store;
pub mod time_utils;

pub use app::App;
pub use error::{AppError, Result};
