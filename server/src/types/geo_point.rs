//! Struct definitions and implementations for [`GeoPoint`].
//!
//! A [`GeoPoint`] can only be built through [`GeoPoint::new`], which
//! rejects coordinates outside of the WGS84 ranges.

use std::fmt::{Display, Formatter, Result as FmtResult};

/// Southern bound for latitudes, in degrees
pub const MIN_LATITUDE: f64 = -90.0;
/// Northern bound for latitudes, in degrees
pub const MAX_LATITUDE: f64 = 90.0;
/// Western bound for longitudes, in degrees
pub const MIN_LONGITUDE: f64 = -180.0;
/// Eastern bound for longitudes, in degrees
pub const MAX_LONGITUDE: f64 = 180.0;

/// Reasons a coordinate pair is rejected
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum CoordinateError {
    /// Latitude is not finite or outside [-90, 90]
    InvalidLatitude(f64),

    /// Longitude is not finite or outside [-180, 180]
    InvalidLongitude(f64),
}

impl Display for CoordinateError {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            CoordinateError::InvalidLatitude(value) => {
                write!(f, "Invalid latitude: {value}.")
            }
            CoordinateError::InvalidLongitude(value) => {
                write!(f, "Invalid longitude: {value}.")
            }
        }
    }
}

impl std::error::Error for CoordinateError {}

/// A geographic position in decimal degrees.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

impl GeoPoint {
    /// Creates a new point, validating both coordinates.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        if !latitude.is_finite() || !(MIN_LATITUDE..=MAX_LATITUDE).contains(&latitude) {
            return Err(CoordinateError::InvalidLatitude(latitude));
        }

        if !longitude.is_finite() || !(MIN_LONGITUDE..=MAX_LONGITUDE).contains(&longitude) {
            return Err(CoordinateError::InvalidLongitude(longitude));
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Builds a point from coordinates known to be in range, for constants.
    pub(crate) const fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// The latitude, in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// The longitude, in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns a copy of this point moved east by `degrees` (west when
    /// negative). Latitude is untouched; the longitude is wrapped back into
    /// range when it crosses the antimeridian.
    pub fn with_longitude_offset(&self, degrees: f64) -> Self {
        Self {
            latitude: self.latitude,
            longitude: wrap_longitude(self.longitude + degrees),
        }
    }
}

/// Wraps a longitude into [-180, 180).
///
/// Values already in [-180, 180] are returned as is.
pub fn wrap_longitude(longitude: f64) -> f64 {
    if (MIN_LONGITUDE..=MAX_LONGITUDE).contains(&longitude) {
        return longitude;
    }

    (longitude - MIN_LONGITUDE).rem_euclid(MAX_LONGITUDE - MIN_LONGITUDE) + MIN_LONGITUDE
}

impl Display for GeoPoint {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

impl From<GeoPoint> for geo::Point<f64> {
    fn from(point: GeoPoint) -> Self {
        geo::Point::new(point.longitude, point.latitude)
    }
}

impl TryFrom<geo::Point<f64>> for GeoPoint {
    type Error = CoordinateError;

    fn try_from(point: geo::Point<f64>) -> Result<Self, Self::Error> {
        GeoPoint::new(point.y(), point.x())
    }
}
