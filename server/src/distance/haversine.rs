//! Implementation of the Haversine formula for calculating the distance
//! between two points on a sphere.
//!
//! See [Wikipedia](https://en.wikipedia.org/wiki/Haversine_formula) for
//! more.
//!
//! **Distance is returned in meters**.

use crate::types::GeoPoint;

/// Mean radius of the Earth, in meters.
pub const EARTH_MEAN_RADIUS_METERS: f64 = 6_371_000.0;

/// Calculate the distance between two points on a sphere.
///
/// # Notes
/// Altitude is not taken into account.
///
/// The haversine term is clamped into [0, 1] so rounding near antipodal
/// points can't push `sqrt(1 - a)` into NaN. Longitude differences only
/// appear through `sin²(Δλ/2)`, so pairs on both sides of the antimeridian
/// need no special handling.
pub fn distance(start: &GeoPoint, end: &GeoPoint) -> f64 {
    let d_lat: f64 = (end.latitude() - start.latitude()).to_radians();
    let d_lon: f64 = (end.longitude() - start.longitude()).to_radians();
    let lat1: f64 = start.latitude().to_radians();
    let lat2: f64 = end.latitude().to_radians();

    let a: f64 = (d_lat / 2.0).sin().powi(2)
        + (d_lon / 2.0).sin().powi(2) * (lat1.cos() * lat2.cos());
    let a = a.clamp(0.0, 1.0);
    let c: f64 = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_MEAN_RADIUS_METERS * c
}
