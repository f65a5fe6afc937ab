//! Location acquisition
//!
//! The device geolocation API is consumed through the [`LocationProvider`]
//! trait. [`acquire_location`] runs the one-shot permission and position
//! sequence the screen performs on activation.

#[macro_use]
pub mod macros;
pub mod fixed;
#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use fixed::FixedLocationProvider;

use crate::types::GeoPoint;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::sync::Arc;

/// Message shown in place of the map when permission is refused
pub const PERMISSION_DENIED_MESSAGE: &str = "Permission to access location was denied";

/// Answer of the provider to a foreground permission request
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PermissionStatus {
    /// Access granted
    Granted,

    /// Access refused
    Denied,

    /// The user dismissed the prompt without answering
    Undetermined,
}

/// A raw position fix, as reported by the device.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PositionFix {
    /// Latitude in degrees
    pub latitude: f64,

    /// Longitude in degrees
    pub longitude: f64,

    /// Horizontal accuracy radius, when the device reports one
    pub accuracy_meters: Option<f64>,

    /// When the fix was taken
    pub timestamp: DateTime<Utc>,
}

impl PositionFix {
    /// A fix taken now, without accuracy information.
    pub fn now(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            accuracy_meters: None,
            timestamp: Utc::now(),
        }
    }
}

impl From<GeoPoint> for PositionFix {
    fn from(point: GeoPoint) -> Self {
        PositionFix::now(point.latitude(), point.longitude())
    }
}

/// Errors a provider can report on a position read
#[derive(Debug, Clone, PartialEq)]
pub enum LocationError {
    /// Location services are switched off on the device
    ServicesDisabled,

    /// The read failed for another reason
    PositionUnavailable(String),
}

impl Display for LocationError {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            LocationError::ServicesDisabled => write!(f, "location services are disabled"),
            LocationError::PositionUnavailable(reason) => {
                write!(f, "position unavailable: {reason}")
            }
        }
    }
}

impl std::error::Error for LocationError {}

/// Errors surfaced to the user in place of the map
#[derive(Debug, Clone, PartialEq)]
pub enum ProximityError {
    /// Foreground location permission was not granted
    PermissionDenied,

    /// Permission was granted but no usable position could be read
    LocationUnavailable(String),
}

impl Display for ProximityError {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            ProximityError::PermissionDenied => write!(f, "{PERMISSION_DENIED_MESSAGE}"),
            ProximityError::LocationUnavailable(reason) => {
                write!(f, "Could not determine your location: {reason}")
            }
        }
    }
}

impl std::error::Error for ProximityError {}

/// A source of the device's position.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Asks for foreground location permission.
    async fn request_permission(&self) -> PermissionStatus;

    /// Reads the current position once.
    async fn current_position(&self) -> Result<PositionFix, LocationError>;
}

#[async_trait]
impl<T: LocationProvider + ?Sized> LocationProvider for Arc<T> {
    async fn request_permission(&self) -> PermissionStatus {
        (**self).request_permission().await
    }

    async fn current_position(&self) -> Result<PositionFix, LocationError> {
        (**self).current_position().await
    }
}

/// Requests permission then reads the position exactly once.
///
/// Anything but [`PermissionStatus::Granted`] ends the sequence with
/// [`ProximityError::PermissionDenied`] and no position read. A failed
/// read, or a fix outside the valid coordinate ranges, is reported as
/// [`ProximityError::LocationUnavailable`]. Nothing is retried.
pub async fn acquire_location<P: LocationProvider + ?Sized>(
    provider: &P,
) -> Result<GeoPoint, ProximityError> {
    location_info!("(acquire_location) requesting foreground permission.");
    let status = provider.request_permission().await;
    if status != PermissionStatus::Granted {
        location_warn!("(acquire_location) permission not granted: {:?}.", status);
        return Err(ProximityError::PermissionDenied);
    }

    location_debug!("(acquire_location) permission granted, reading position.");
    let fix = provider.current_position().await.map_err(|e| {
        location_error!("(acquire_location) position read failed: {}", e);
        ProximityError::LocationUnavailable(e.to_string())
    })?;

    let point = GeoPoint::new(fix.latitude, fix.longitude).map_err(|e| {
        location_error!("(acquire_location) provider returned a bad fix: {}", e);
        ProximityError::LocationUnavailable(e.to_string())
    })?;

    location_info!(
        "(acquire_location) user located at {} (accuracy: {:?} m).",
        point,
        fix.accuracy_meters
    );
    Ok(point)
}
