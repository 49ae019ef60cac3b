//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory where the blob store keeps its files
    pub data_dir: PathBuf,
    /// Zoom level used when re-centering the map on a workout
    pub map_zoom: u8,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            map_zoom: 13,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every setting has a default, so loading never fails; malformed
    /// numeric values fall back to the default.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self {
            data_dir: env::var("WAYMARK_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data")),
            map_zoom: env::var("WAYMARK_MAP_ZOOM")
                .unwrap_or_else(|_| "13".to_string())
                .parse()
                .unwrap_or(13),
        }
    }
}
