//! Struct definitions and implementations for [`DistanceReading`].

use super::GeoPoint;
use crate::distance::haversine;
use chrono::{DateTime, Utc};

/// A distance between the user and the truck, computed at a given time.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DistanceReading {
    /// Great-circle distance in meters.
    pub meters: f64,

    /// When the reading was taken.
    pub computed_at: DateTime<Utc>,
}

impl DistanceReading {
    /// Computes a fresh reading between two points.
    pub fn between(user: &GeoPoint, truck: &GeoPoint) -> Self {
        Self {
            meters: haversine::distance(user, truck),
            computed_at: Utc::now(),
        }
    }
}
