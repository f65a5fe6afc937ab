//! Scripted location providers for tests

use super::{LocationError, LocationProvider, PermissionStatus, PositionFix};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// A provider answering from a script, counting how often it is called.
#[derive(Debug)]
pub struct MockLocationProvider {
    permission: PermissionStatus,
    position: Result<PositionFix, LocationError>,
    delay: Option<Duration>,
    permission_requests: AtomicUsize,
    position_reads: AtomicUsize,
}

impl MockLocationProvider {
    fn new(permission: PermissionStatus, position: Result<PositionFix, LocationError>) -> Self {
        Self {
            permission,
            position,
            delay: None,
            permission_requests: AtomicUsize::new(0),
            position_reads: AtomicUsize::new(0),
        }
    }

    /// Grants permission and reports the given position, unvalidated.
    pub fn granted(latitude: f64, longitude: f64) -> Self {
        Self::new(
            PermissionStatus::Granted,
            Ok(PositionFix::now(latitude, longitude)),
        )
    }

    /// Refuses permission.
    pub fn denied() -> Self {
        Self::with_permission(PermissionStatus::Denied)
    }

    /// Answers the permission request with `permission`; a read, if any,
    /// reports (0, 0).
    pub fn with_permission(permission: PermissionStatus) -> Self {
        Self::new(permission, Ok(PositionFix::now(0.0, 0.0)))
    }

    /// Grants permission, then fails the position read.
    pub fn failing(error: LocationError) -> Self {
        Self::new(PermissionStatus::Granted, Err(error))
    }

    /// Makes both calls take `delay` to answer.
    pub fn with_delay(self, delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..self
        }
    }

    pub fn permission_requests(&self) -> usize {
        self.permission_requests.load(Ordering::SeqCst)
    }

    pub fn position_reads(&self) -> usize {
        self.position_reads.load(Ordering::SeqCst)
    }

    async fn wait(&self) {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl LocationProvider for MockLocationProvider {
    async fn request_permission(&self) -> PermissionStatus {
        self.permission_requests.fetch_add(1, Ordering::SeqCst);
        self.wait().await;
        self.permission
    }

    async fn current_position(&self) -> Result<PositionFix, LocationError> {
        self.position_reads.fetch_add(1, Ordering::SeqCst);
        self.wait().await;
        self.position.clone()
    }
}
