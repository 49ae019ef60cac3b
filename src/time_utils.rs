// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting.

use chrono::{DateTime, Datelike, SecondsFormat, Utc};

/// Month names used in workout descriptions.
///
/// A fixed English table keeps descriptions bit-exact regardless of locale.
pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Format a timestamp as `"<Month name> <day>"`, e.g. `"April 14"`.
///
/// The day is not zero-padded.
pub fn month_day_label(date: DateTime<Utc>) -> String {
    format!("{} {}", MONTHS[date.month0() as usize], date.day())
}
