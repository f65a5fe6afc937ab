//! Human readable distances

use crate::types::DistanceReading;

/// Distances at or above this many meters are shown in kilometers
const KILOMETER_THRESHOLD_METERS: f64 = 1000.0;

/// Formats a distance for display.
///
/// At or above one kilometer the value is shown in kilometers with two
/// decimals, otherwise the meter value is printed as is.
pub fn format_distance(meters: f64) -> String {
    if meters >= KILOMETER_THRESHOLD_METERS {
        return format!("{:.2} kilometers", meters / 1000.0);
    }

    format!("{meters} meters")
}

/// Text of the floating banner for a reading, rounded to whole meters.
pub fn banner_text(reading: &DistanceReading) -> String {
    format!(
        "🚛 Garbage truck is {} away",
        format_distance(reading.meters.round())
    )
}
