//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::EventSource;
use ratatui::prelude::Color;

/// Get a ratatui color for an event based on its source
pub fn get_source_color(source: &EventSource) -> Color {
    match source {
        EventSource::Loader => Color::Cyan,
        EventSource::Account => Color::Yellow,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some(date_part) = timestamp.split(' ').next() {
        if let Some(time_part) = timestamp.split(' ').nth(1) {
            if let Some(month_day) = date_part.get(5..10) {
                if let Some(hour_min) = time_part.get(0..5) {
                    return format!("{} {}", month_day, hour_min);
                }
            }
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}

const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

/// Spinner frame for the current animation tick
pub fn spinner_frame(tick: usize) -> &'static str {
    SPINNER_FRAMES[tick % SPINNER_FRAMES.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_timestamp_strips_year_and_seconds() {
        assert_eq!(
            format_compact_timestamp("2026-08-28 14:03:59"),
            "08-28 14:03"
        );
    }

    #[test]
    fn malformed_timestamp_passes_through() {
        assert_eq!(format_compact_timestamp("garbage"), "garbage");
    }
}
