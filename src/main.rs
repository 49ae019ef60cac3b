// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Waymark-Tracker shell
//!
//! A line-oriented stand-in for the browser page: map clicks, form
//! submissions, and list clicks arrive as commands on stdin, one event at
//! a time.

use std::io::{self, BufRead, Write};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use waymark_tracker::{
    config::Config,
    models::Coordinates,
    services::{intake::WorkoutForm, projection},
    storage::FileBlobStore,
    App, AppError,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    // Load configuration from environment
    let config = Config::from_env();
    tracing::info!(
        data_dir = %config.data_dir.display(),
        zoom = config.map_zoom,
        "Starting Waymark-Tracker"
    );

    // Open the blob store and restore the previous session
    let blob = FileBlobStore::open(&config.data_dir).expect("Failed to open blob storage");
    let mut app = App::bootstrap(blob);
    if !app.workouts().is_empty() {
        print_list(&app);
    }

    // The last map click; workouts are logged against it
    let mut pending_pin: Option<Coordinates> = None;

    print_help();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else { break };
        let line = line?;
        let parts: Vec<&str> = line.split_whitespace().collect();

        match parts.as_slice() {
            [] => {}
            ["mark", lat, lng] => match parse_pin(lat, lng) {
                Ok(coords) => {
                    println!("Pin set at {:.4}, {:.4}", coords.lat(), coords.lng());
                    pending_pin = Some(coords);
                }
                Err(e) => println!("{}", e),
            },
            ["add", kind, distance, duration, extra] => {
                add_workout(&mut app, pending_pin, kind, distance, duration, extra);
            }
            ["add", kind, distance, duration] => {
                // Omitted extra submits like an untouched form field
                add_workout(&mut app, pending_pin, kind, distance, duration, "");
            }
            ["list"] => print_list(&app),
            ["open", id] => match app.activate_workout(id) {
                Some(coords) => println!(
                    "Centering map on {:.4}, {:.4} (zoom {})",
                    coords.lat(),
                    coords.lng(),
                    config.map_zoom
                ),
                None => println!("No workout with id {}", id),
            },
            ["reset"] => {
                app.reset();
                println!("All workouts cleared");
            }
            ["help"] => print_help(),
            ["quit"] | ["exit"] => break,
            _ => println!("Unrecognized command, try 'help'"),
        }
    }

    Ok(())
}

/// Parse a map click into validated coordinates.
fn parse_pin(lat: &str, lng: &str) -> waymark_tracker::Result<Coordinates> {
    let lat: f64 = lat
        .parse()
        .map_err(|_| AppError::InvalidInput("Latitude must be a number".to_string()))?;
    let lng: f64 = lng
        .parse()
        .map_err(|_| AppError::InvalidInput("Longitude must be a number".to_string()))?;
    Coordinates::new(lat, lng)
}

/// Submit a workout at the pending pin.
fn add_workout(
    app: &mut App<FileBlobStore>,
    pin: Option<Coordinates>,
    kind: &str,
    distance: &str,
    duration: &str,
    extra: &str,
) {
    let Some(coords) = pin else {
        println!("Mark a point first: mark <lat> <lng>");
        return;
    };

    let form = WorkoutForm {
        kind: kind.to_string(),
        distance: distance.to_string(),
        duration: duration.to_string(),
        extra: extra.to_string(),
    };

    match app.submit_workout(&form, coords) {
        Ok(id) => {
            if let Some(entry) = app.find_workout(&id) {
                println!("{}", projection::build_marker(entry).popup_text);
            }
        }
        Err(e) => println!("{}", e),
    }
}

/// Render the workout list through the display projection.
fn print_list(app: &App<FileBlobStore>) {
    if app.workouts().is_empty() {
        println!("No workouts yet");
        return;
    }
    for entry in app.workouts() {
        let card = projection::build_card(entry);
        let restored = if entry.is_rehydrated() {
            " (restored)"
        } else {
            ""
        };
        println!("[{}] {} {}{}", card.id, card.icon, card.title, restored);
        println!(
            "      {} {}  {} {}  {} {}  {} {}",
            card.distance,
            card.distance_unit,
            card.duration,
            card.duration_unit,
            card.metric,
            card.metric_unit,
            card.extra,
            card.extra_unit
        );
    }
}

fn print_help() {
    println!("Commands:");
    println!("  mark <lat> <lng>                     drop a pin at a map point");
    println!("  add <kind> <distance> <duration> [extra]");
    println!("                                       log a workout at the pin");
    println!("                                       running: extra is cadence (spm)");
    println!("                                       cycling: extra is elevation gain (m)");
    println!("  list                                 show all workouts");
    println!("  open <id>                            center the map on a workout");
    println!("  reset                                wipe stored workouts");
    println!("  quit");
}

/// Initialize compact terminal logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .compact()
        .with_target(false)
        .with_writer(io::stderr);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("waymark_tracker=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
