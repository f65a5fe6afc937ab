//! Settings of the proximity display

use crate::scene::MarkerGlyph;
use crate::truck::TruckMotion;
use crate::types::{GeoPoint, ViewportRegion};
use serde::Deserialize;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Where the user is assumed to be until a position is read
pub const DEFAULT_USER_LOCATION: GeoPoint = GeoPoint::new_unchecked(-26.0331, 28.0386);

/// Initial region around [`DEFAULT_USER_LOCATION`]
pub const DEFAULT_USER_REGION: ViewportRegion =
    ViewportRegion::new_unchecked(DEFAULT_USER_LOCATION, 0.0922, 0.0421);

/// Where the simulated truck starts
pub const DEFAULT_TRUCK_LOCATION: GeoPoint = GeoPoint::new_unchecked(-26.0347, 28.0561);

/// Zoom used when the viewport follows the truck, in degrees
pub const DEFAULT_VIEWPORT_DELTA: f64 = 0.01;

/// Which party the viewport is centered on
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewportFocus {
    /// Follow the user's region
    User,

    /// Follow the truck, at [`ScreenSettings::viewport_delta`] zoom
    #[default]
    Truck,
}

/// Everything the screen needs to know up front.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenSettings {
    /// Region shown around the user before and after the position read
    pub user_region: ViewportRegion,

    /// How the truck moves
    pub truck_motion: TruckMotion,

    /// Which party the viewport follows
    pub focus: ViewportFocus,

    /// Zoom, in degrees, when following the truck
    pub viewport_delta: f64,

    /// Glyph of the user marker
    pub user_glyph: MarkerGlyph,

    /// Glyph of the truck marker
    pub truck_glyph: MarkerGlyph,
}

/// Reasons settings are rejected
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SettingsError {
    /// The truck viewport zoom must be finite and strictly positive
    InvalidViewportDelta(f64),

    /// A drifting truck needs a non-zero interval
    ZeroTickInterval,

    /// The drift step must be finite and not negative
    InvalidStep(f64),
}

impl Display for SettingsError {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            SettingsError::InvalidViewportDelta(value) => {
                write!(f, "Invalid viewport delta: {value}.")
            }
            SettingsError::ZeroTickInterval => write!(f, "Tick interval must not be zero."),
            SettingsError::InvalidStep(value) => write!(f, "Invalid drift step: {value}."),
        }
    }
}

impl std::error::Error for SettingsError {}

impl ScreenSettings {
    /// Checks the values the types themselves can't guarantee.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !self.viewport_delta.is_finite() || self.viewport_delta <= 0.0 {
            return Err(SettingsError::InvalidViewportDelta(self.viewport_delta));
        }

        if let TruckMotion::Drift {
            interval,
            step_degrees,
            ..
        } = self.truck_motion
        {
            if interval.is_zero() {
                return Err(SettingsError::ZeroTickInterval);
            }

            if !step_degrees.is_finite() || step_degrees < 0.0 {
                return Err(SettingsError::InvalidStep(step_degrees));
            }
        }

        Ok(())
    }
}

impl Default for ScreenSettings {
    fn default() -> Self {
        Self {
            user_region: DEFAULT_USER_REGION,
            truck_motion: TruckMotion::drift(DEFAULT_TRUCK_LOCATION),
            focus: ViewportFocus::Truck,
            viewport_delta: DEFAULT_VIEWPORT_DELTA,
            user_glyph: MarkerGlyph::Pin,
            truck_glyph: MarkerGlyph::Emoji(String::from("🚛")),
        }
    }
}
