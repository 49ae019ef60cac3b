// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Geographic coordinates for workout locations.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// A latitude/longitude pair marking where a workout happened.
///
/// Construction validates range. Values read back from a stored snapshot
/// bypass the constructor and are trusted verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    lat: f64,
    lng: f64,
}

impl Coordinates {
    /// Build a validated coordinate pair.
    ///
    /// Rejects non-finite values and out-of-range latitude or longitude.
    pub fn new(lat: f64, lng: f64) -> Result<Self> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(AppError::InvalidInput(
                "Coordinates must be finite numbers".to_string(),
            ));
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(AppError::InvalidInput(format!(
                "Latitude out of range: {}",
                lat
            )));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(AppError::InvalidInput(format!(
                "Longitude out of range: {}",
                lng
            )));
        }
        Ok(Self { lat, lng })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_valid_coordinates() {
        let coords = Coordinates::new(37.33, -122.11).unwrap();
        assert_eq!(coords.lat(), 37.33);
        assert_eq!(coords.lng(), -122.11);
    }

    #[test]
    fn test_accepts_boundary_values() {
        assert!(Coordinates::new(90.0, 180.0).is_ok());
        assert!(Coordinates::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn test_rejects_out_of_range_latitude() {
        assert!(Coordinates::new(90.1, 0.0).is_err());
        assert!(Coordinates::new(-91.0, 0.0).is_err());
    }

    #[test]
    fn test_rejects_out_of_range_longitude() {
        assert!(Coordinates::new(0.0, 180.5).is_err());
    }

    #[test]
    fn test_rejects_non_finite_values() {
        assert!(Coordinates::new(f64::NAN, 0.0).is_err());
        assert!(Coordinates::new(0.0, f64::INFINITY).is_err());
    }
}
