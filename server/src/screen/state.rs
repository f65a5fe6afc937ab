//! State of the proximity display, and the scene it maps to

use super::settings::{ScreenSettings, ViewportFocus};
use crate::distance::banner_text;
use crate::location::ProximityError;
use crate::scene::{Marker, Scene};
use crate::truck::TruckPosition;
use crate::types::{DistanceReading, GeoPoint, PermissionState, ViewportRegion};

/// Title of the user marker
pub const USER_MARKER_TITLE: &str = "Your Location";
/// Subtitle of the user marker
pub const USER_MARKER_DESCRIPTION: &str = "This is where you are";
/// Callout label of the truck marker
pub const TRUCK_CALLOUT: &str = "Garbage Truck";

/// What the screen currently knows.
///
/// The distance is recomputed on every position change of either party,
/// as long as the user position has been read.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenState {
    /// Permission outcome
    pub permission: PermissionState,

    /// Region around the user; its center is the user marker
    pub user_region: ViewportRegion,

    /// The position read from the provider, once read
    pub user_position: Option<GeoPoint>,

    /// Latest truck position
    pub truck: TruckPosition,

    /// Latest reading; absent until the user position is known
    pub distance: Option<DistanceReading>,
}

impl ScreenState {
    /// State on activation.
    pub fn new(settings: &ScreenSettings, truck: TruckPosition) -> Self {
        Self {
            permission: PermissionState::Unknown,
            user_region: settings.user_region,
            user_position: None,
            truck,
            distance: None,
        }
    }

    /// Applies the outcome of the location sequence.
    pub fn apply_location(&mut self, result: Result<GeoPoint, ProximityError>) {
        match result {
            Ok(point) => {
                self.permission = PermissionState::Granted;
                self.user_position = Some(point);
                self.user_region = self.user_region.centered_on(point);
                self.recompute();
            }
            Err(e) => {
                self.permission = PermissionState::Denied(e.to_string());
                self.user_position = None;
                self.distance = None;
            }
        }
    }

    /// Applies a truck move.
    pub fn apply_truck(&mut self, truck: TruckPosition) {
        self.truck = truck;
        self.recompute();
    }

    fn recompute(&mut self) {
        if self.permission.is_denied() {
            return;
        }

        if let Some(user) = self.user_position {
            self.distance = Some(DistanceReading::between(&user, &self.truck.point));
        }
    }

    /// The scene for this state.
    pub fn scene(&self, settings: &ScreenSettings) -> Scene {
        if let Some(message) = self.permission.denial_message() {
            return Scene::Error {
                message: message.to_owned(),
            };
        }

        let region = match settings.focus {
            ViewportFocus::User => self.user_region,
            ViewportFocus::Truck => ViewportRegion::new(
                self.truck.point,
                settings.viewport_delta,
                settings.viewport_delta,
            )
            .unwrap_or_else(|e| {
                screen_warn!("(scene) {} Keeping the user region zoom.", e);
                self.user_region.centered_on(self.truck.point)
            }),
        };

        let markers = vec![
            Marker {
                coordinate: self.user_region.center(),
                glyph: settings.user_glyph.clone(),
                title: Some(String::from(USER_MARKER_TITLE)),
                description: Some(String::from(USER_MARKER_DESCRIPTION)),
                callout: None,
            },
            Marker {
                coordinate: self.truck.point,
                glyph: settings.truck_glyph.clone(),
                title: None,
                description: None,
                callout: Some(String::from(TRUCK_CALLOUT)),
            },
        ];

        Scene::Map {
            region,
            markers,
            shows_user_location: true,
            banner: self.distance.as_ref().map(banner_text),
        }
    }
}
