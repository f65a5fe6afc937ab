//! The proximity display
//!
//! [`ProximityScreen::run`] is the whole lifecycle of the screen: it starts
//! the truck simulator, runs the one-shot location sequence, recomputes the
//! distance on every position change and renders each new scene, until the
//! shutdown token is cancelled.

#[macro_use]
pub mod macros;
pub mod settings;
pub mod state;

pub use settings::{ScreenSettings, SettingsError, ViewportFocus};
pub use state::ScreenState;

use crate::location::{acquire_location, LocationProvider};
use crate::scene::{MapSurface, Scene};
use crate::truck::TruckSimulator;
use futures::future::{FusedFuture, FutureExt};
use tokio_util::sync::CancellationToken;

/// A proximity display bound to a location provider and a surface.
#[derive(Debug)]
pub struct ProximityScreen<P, S> {
    settings: ScreenSettings,
    provider: P,
    surface: S,
}

impl<P: LocationProvider, S: MapSurface> ProximityScreen<P, S> {
    /// Creates a screen after validating `settings`.
    pub fn new(settings: ScreenSettings, provider: P, surface: S) -> Result<Self, SettingsError> {
        settings.validate()?;

        Ok(Self {
            settings,
            provider,
            surface,
        })
    }

    /// Runs the screen until `shutdown` is cancelled, then returns the
    /// final state.
    ///
    /// Everything happens on the calling task. On shutdown the simulator
    /// is stopped before returning and a location sequence still in
    /// flight is dropped.
    pub async fn run(self, shutdown: CancellationToken) -> ScreenState {
        let ProximityScreen {
            settings,
            provider,
            mut surface,
        } = self;

        screen_info!("(run) activating screen.");
        let simulator = TruckSimulator::start(settings.truck_motion);
        let mut truck_updates = simulator.subscribe();
        let mut truck_feed_open = true;

        let mut state = ScreenState::new(&settings, simulator.current());
        let mut displayed = state.scene(&settings);
        surface.render(&displayed);

        let acquisition = acquire_location(&provider).fuse();
        futures::pin_mut!(acquisition);

        loop {
            tokio::select! {
                biased;
                _ = shutdown.cancelled() => {
                    screen_info!("(run) shutdown requested.");
                    break;
                }
                result = &mut acquisition, if !acquisition.is_terminated() => {
                    if let Err(e) = &result {
                        screen_warn!("(run) location sequence failed: {}", e);
                    }
                    state.apply_location(result);
                }
                changed = truck_updates.changed(), if truck_feed_open => {
                    if changed.is_err() {
                        screen_warn!("(run) truck feed closed.");
                        truck_feed_open = false;
                        continue;
                    }

                    let truck = *truck_updates.borrow_and_update();
                    state.apply_truck(truck);
                }
            }

            if let Some(reading) = &state.distance {
                screen_debug!("(run) distance to truck: {} m.", reading.meters);
            }

            let scene = state.scene(&settings);
            if scene != displayed {
                surface.render(&scene);
                displayed = scene;
            }
        }

        simulator.stop().await;
        if let Scene::Error { message } = &displayed {
            screen_info!("(run) screen closed on error: {}", message);
        }

        screen_info!("(run) screen deactivated.");
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::haversine;
    use crate::location::mock::MockLocationProvider;
    use crate::location::{LocationError, PERMISSION_DENIED_MESSAGE};
    use crate::scene::mock::RecordingSurface;
    use crate::truck::{TruckMotion, DEFAULT_STEP_DEGREES};
    use crate::types::{GeoPoint, PermissionState};
    use crate::screen::settings::DEFAULT_TRUCK_LOCATION;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::task::JoinHandle;

    fn user() -> GeoPoint {
        GeoPoint::new(-26.0331, 28.0386).unwrap()
    }

    fn spawn_screen(
        settings: ScreenSettings,
        provider: Arc<MockLocationProvider>,
        surface: RecordingSurface,
    ) -> (CancellationToken, JoinHandle<ScreenState>) {
        let screen = ProximityScreen::new(settings, provider, surface).unwrap();
        let shutdown = CancellationToken::new();
        let handle = tokio::spawn(screen.run(shutdown.clone()));
        (shutdown, handle)
    }

    #[test]
    fn ut_new_rejects_invalid_settings() {
        let settings = ScreenSettings {
            viewport_delta: -1.0,
            ..Default::default()
        };
        let result = ProximityScreen::new(
            settings,
            MockLocationProvider::denied(),
            RecordingSurface::new(),
        );
        assert!(matches!(
            result,
            Err(SettingsError::InvalidViewportDelta(_))
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn ut_granted_static_truck() {
        crate::get_log_handle().await;
        ut_info!("(ut_granted_static_truck) Start.");

        let settings = ScreenSettings {
            truck_motion: TruckMotion::Static(DEFAULT_TRUCK_LOCATION),
            ..Default::default()
        };
        let provider = Arc::new(MockLocationProvider::granted(-26.0331, 28.0386));
        let surface = RecordingSurface::new();
        let (shutdown, handle) = spawn_screen(settings, provider.clone(), surface.clone());

        tokio::time::sleep(Duration::from_secs(30)).await;
        shutdown.cancel();
        let state = handle.await.unwrap();

        assert_eq!(state.permission, PermissionState::Granted);
        assert_eq!(state.user_position, Some(user()));
        assert_eq!(
            state.distance.unwrap().meters,
            haversine::distance(&user(), &DEFAULT_TRUCK_LOCATION)
        );
        assert_eq!(provider.permission_requests(), 1);
        assert_eq!(provider.position_reads(), 1);

        // initial map, then the map with the banner
        let scenes = surface.scenes();
        assert_eq!(scenes.len(), 2);
        assert_eq!(scenes[0].banner(), None);
        assert_eq!(
            scenes[1].banner(),
            Some("🚛 Garbage truck is 1.76 kilometers away")
        );

        ut_info!("(ut_granted_static_truck) Success.");
    }

    #[tokio::test(start_paused = true)]
    async fn ut_granted_drifting_truck_recomputes() {
        let provider = Arc::new(MockLocationProvider::granted(-26.0331, 28.0386));
        let surface = RecordingSurface::new();
        let (shutdown, handle) =
            spawn_screen(ScreenSettings::default(), provider.clone(), surface.clone());

        // three ticks, at 5, 10 and 15 seconds
        tokio::time::sleep(Duration::from_secs(16)).await;
        shutdown.cancel();
        let state = handle.await.unwrap();

        assert_eq!(state.truck.ticks, 3);
        assert_eq!(
            state.truck.point.longitude(),
            DEFAULT_TRUCK_LOCATION.longitude() - 3.0 * DEFAULT_STEP_DEGREES
        );
        assert_eq!(
            state.distance.unwrap().meters,
            haversine::distance(&user(), &state.truck.point)
        );
        assert_eq!(provider.position_reads(), 1);

        // initial, located, then one frame per tick
        let scenes = surface.scenes();
        assert_eq!(scenes.len(), 5);
        let Some(Scene::Map { region, .. }) = surface.last() else {
            panic!("expected a map");
        };
        assert_eq!(region.center(), state.truck.point);
    }

    #[tokio::test(start_paused = true)]
    async fn ut_permission_denied_shows_error() {
        let provider = Arc::new(MockLocationProvider::denied());
        let surface = RecordingSurface::new();
        let (shutdown, handle) =
            spawn_screen(ScreenSettings::default(), provider.clone(), surface.clone());

        tokio::time::sleep(Duration::from_secs(60)).await;
        shutdown.cancel();
        let state = handle.await.unwrap();

        assert_eq!(
            state.permission,
            PermissionState::Denied(String::from(PERMISSION_DENIED_MESSAGE))
        );
        assert_eq!(state.distance, None);
        assert_eq!(state.user_position, None);
        assert_eq!(provider.position_reads(), 0);

        // truck ticks don't redraw the error
        let scenes = surface.scenes();
        assert_eq!(scenes.len(), 2);
        assert_eq!(
            scenes[1],
            Scene::Error {
                message: String::from(PERMISSION_DENIED_MESSAGE)
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn ut_location_unavailable_shows_error() {
        let provider = Arc::new(MockLocationProvider::failing(
            LocationError::PositionUnavailable(String::from("no fix")),
        ));
        let surface = RecordingSurface::new();
        let (shutdown, handle) =
            spawn_screen(ScreenSettings::default(), provider.clone(), surface.clone());

        tokio::time::sleep(Duration::from_secs(1)).await;
        shutdown.cancel();
        let state = handle.await.unwrap();

        assert_eq!(state.distance, None);
        assert_eq!(
            surface.last(),
            Some(Scene::Error {
                message: String::from(
                    "Could not determine your location: position unavailable: no fix"
                )
            })
        );
        assert_eq!(provider.position_reads(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn ut_truck_moves_while_locating() {
        let provider = Arc::new(
            MockLocationProvider::granted(-26.0331, 28.0386).with_delay(Duration::from_secs(6)),
        );
        let surface = RecordingSurface::new();
        let (shutdown, handle) =
            spawn_screen(ScreenSettings::default(), provider.clone(), surface.clone());

        // permission answered at 6 s, position at 12 s; ticks at 5 and 10 s
        tokio::time::sleep(Duration::from_millis(11_500)).await;
        let scenes = surface.scenes();
        assert_eq!(scenes.len(), 3);
        assert!(scenes.iter().all(|scene| scene.banner().is_none()));

        tokio::time::sleep(Duration::from_secs(1)).await;
        shutdown.cancel();
        let state = handle.await.unwrap();

        assert_eq!(state.truck.ticks, 2);
        assert_eq!(
            state.distance.unwrap().meters,
            haversine::distance(&user(), &state.truck.point)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn ut_shutdown_during_location_sequence() {
        let provider = Arc::new(
            MockLocationProvider::granted(-26.0331, 28.0386).with_delay(Duration::from_secs(30)),
        );
        let surface = RecordingSurface::new();
        let (shutdown, handle) =
            spawn_screen(ScreenSettings::default(), provider.clone(), surface.clone());

        tokio::time::sleep(Duration::from_secs(1)).await;
        shutdown.cancel();
        let state = handle.await.unwrap();
        assert_eq!(state.permission, PermissionState::Unknown);

        // the dropped sequence never reads the position
        tokio::time::sleep(Duration::from_secs(120)).await;
        assert_eq!(provider.position_reads(), 0);
        assert_eq!(surface.scenes().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn ut_no_redraw_after_teardown() {
        let provider = Arc::new(MockLocationProvider::granted(-26.0331, 28.0386));
        let surface = RecordingSurface::new();
        let (shutdown, handle) =
            spawn_screen(ScreenSettings::default(), provider.clone(), surface.clone());

        tokio::time::sleep(Duration::from_secs(6)).await;
        shutdown.cancel();
        let state = handle.await.unwrap();
        let frames = surface.scenes().len();

        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(surface.scenes().len(), frames);
        assert_eq!(state.truck.ticks, 1);
    }
}
