//! Relative timestamps for message headers.

use std::fmt::Display;

use chrono::{DateTime, TimeZone};

/// Format `created_at` relative to `now`.
///
/// Under a minute (or in the future) reads "Just now"; then minutes, hours,
/// and days up to a week; older messages show the calendar date, e.g.
/// "Mar 5, 2025".
pub fn format_relative<Tz>(created_at: &DateTime<Tz>, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let minutes = now.clone().signed_duration_since(created_at.clone()).num_minutes();
    let hours = minutes / 60;
    let days = hours / 24;

    if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        format!("{minutes}m ago")
    } else if hours < 24 {
        format!("{hours}h ago")
    } else if days < 7 {
        format!("{days}d ago")
    } else {
        created_at.format("%b %-d, %Y").to_string()
    }
}
