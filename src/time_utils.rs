// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting.

use chrono::{DateTime, Local, Timelike, Utc};

/// Time-of-day greeting for the given hour (0-23).
pub fn greeting_for_hour(hour: u32) -> &'static str {
    match hour {
        0..=11 => "Good morning",
        12..=17 => "Good afternoon",
        _ => "Good evening",
    }
}

/// Greeting for the server's current local time.
pub fn current_greeting() -> &'static str {
    greeting_for_hour(Local::now().hour())
}

/// Format a registration date as e.g. `April 2023`.
pub fn format_member_since(date: DateTime<Utc>) -> String {
    date.format("%B %Y").to_string()
}
