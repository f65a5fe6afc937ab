//! A provider answering with a preset position.
//!
//! Used by the service binary, where no device geolocation API exists; the
//! answer comes from configuration.

use super::{LocationError, LocationProvider, PermissionStatus, PositionFix};
use crate::types::GeoPoint;
use async_trait::async_trait;

/// Always answers with the same permission and position.
#[derive(Debug, Copy, Clone)]
pub struct FixedLocationProvider {
    position: GeoPoint,
    permission_granted: bool,
}

impl FixedLocationProvider {
    /// A provider that grants permission and reports `position`.
    pub fn new(position: GeoPoint) -> Self {
        Self {
            position,
            permission_granted: true,
        }
    }

    /// Same provider, with the permission answer overridden.
    pub fn with_permission(self, granted: bool) -> Self {
        Self {
            permission_granted: granted,
            ..self
        }
    }
}

#[async_trait]
impl LocationProvider for FixedLocationProvider {
    async fn request_permission(&self) -> PermissionStatus {
        if self.permission_granted {
            PermissionStatus::Granted
        } else {
            PermissionStatus::Denied
        }
    }

    async fn current_position(&self) -> Result<PositionFix, LocationError> {
        Ok(self.position.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::{acquire_location, ProximityError};

    #[tokio::test]
    async fn ut_fixed_provider() {
        let position = GeoPoint::new(-26.0331, 28.0386).unwrap();

        let provider = FixedLocationProvider::new(position);
        assert_eq!(acquire_location(&provider).await, Ok(position));

        let provider = provider.with_permission(false);
        assert_eq!(
            acquire_location(&provider).await,
            Err(ProximityError::PermissionDenied)
        );
    }
}
