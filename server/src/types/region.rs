//! Struct definitions and implementations for [`ViewportRegion`].

use super::GeoPoint;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Reasons a viewport region is rejected
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RegionError {
    /// Latitude span must be finite and strictly positive
    InvalidLatitudeDelta(f64),

    /// Longitude span must be finite and strictly positive
    InvalidLongitudeDelta(f64),
}

impl Display for RegionError {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            RegionError::InvalidLatitudeDelta(value) => {
                write!(f, "Invalid latitude delta: {value}.")
            }
            RegionError::InvalidLongitudeDelta(value) => {
                write!(f, "Invalid longitude delta: {value}.")
            }
        }
    }
}

impl std::error::Error for RegionError {}

/// The geographic center and zoom extent a map renders.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewportRegion {
    center: GeoPoint,
    latitude_delta: f64,
    longitude_delta: f64,
}

fn valid_delta(delta: f64) -> bool {
    delta.is_finite() && delta > 0.0
}

impl ViewportRegion {
    /// Creates a region around `center`, spanning the given deltas (degrees).
    pub fn new(
        center: GeoPoint,
        latitude_delta: f64,
        longitude_delta: f64,
    ) -> Result<Self, RegionError> {
        if !valid_delta(latitude_delta) {
            return Err(RegionError::InvalidLatitudeDelta(latitude_delta));
        }

        if !valid_delta(longitude_delta) {
            return Err(RegionError::InvalidLongitudeDelta(longitude_delta));
        }

        Ok(Self {
            center,
            latitude_delta,
            longitude_delta,
        })
    }

    /// Builds a region from deltas known to be positive, for constants.
    pub(crate) const fn new_unchecked(
        center: GeoPoint,
        latitude_delta: f64,
        longitude_delta: f64,
    ) -> Self {
        Self {
            center,
            latitude_delta,
            longitude_delta,
        }
    }

    /// Same zoom, new center.
    pub fn centered_on(&self, center: GeoPoint) -> Self {
        Self { center, ..*self }
    }

    pub fn center(&self) -> GeoPoint {
        self.center
    }

    pub fn latitude_delta(&self) -> f64 {
        self.latitude_delta
    }

    pub fn longitude_delta(&self) -> f64 {
        self.longitude_delta
    }
}

impl Display for ViewportRegion {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(
            f,
            "{} +/- ({}, {})",
            self.center, self.latitude_delta, self.longitude_delta
        )
    }
}
