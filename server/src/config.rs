//! # Config
//!
//! Define and implement config options for module

use crate::location::FixedLocationProvider;
use crate::scene::MarkerGlyph;
use crate::screen::settings::{
    ScreenSettings, ViewportFocus, DEFAULT_TRUCK_LOCATION, DEFAULT_USER_REGION,
    DEFAULT_VIEWPORT_DELTA,
};
use crate::truck::{TruckMotion, DEFAULT_STEP_DEGREES, DEFAULT_TICK_INTERVAL};
use crate::types::{GeoPoint, ViewportRegion};
use anyhow::{Context, Result};
use config::{ConfigError, Environment};
use dotenv::dotenv;
use serde::Deserialize;
use std::time::Duration;

/// struct holding configuration options
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// path to log configuration YAML file
    pub log_config: String,

    /// latitude assumed for the user until a position is read
    pub user_latitude: f64,

    /// longitude assumed for the user until a position is read
    pub user_longitude: f64,

    /// latitude span of the region around the user
    pub user_latitude_delta: f64,

    /// longitude span of the region around the user
    pub user_longitude_delta: f64,

    /// starting latitude of the truck
    pub truck_latitude: f64,

    /// starting longitude of the truck
    pub truck_longitude: f64,

    /// whether the truck drifts west or stays parked
    pub truck_drift_enabled: bool,

    /// milliseconds between two truck moves
    pub truck_tick_interval_ms: u64,

    /// degrees of longitude per truck move
    pub truck_step_degrees: f64,

    /// party the viewport follows, `truck` or `user`
    pub viewport_focus: ViewportFocus,

    /// zoom in degrees when following the truck
    pub viewport_delta: f64,

    /// glyph of the user marker, empty for a plain pin
    pub user_marker_glyph: String,

    /// glyph of the truck marker, empty for a plain pin
    pub truck_marker_glyph: String,

    /// latitude reported by the device location provider
    pub device_latitude: f64,

    /// longitude reported by the device location provider
    pub device_longitude: f64,

    /// whether the device location provider grants permission
    pub device_permission_granted: bool,
}

impl Default for Config {
    fn default() -> Self {
        log::warn!("(default) Creating Config object with default values.");
        Self::new()
    }
}

impl Config {
    /// Default values for Config
    pub fn new() -> Self {
        let user = DEFAULT_USER_REGION.center();

        Config {
            log_config: String::from("log4rs.yaml"),
            user_latitude: user.latitude(),
            user_longitude: user.longitude(),
            user_latitude_delta: DEFAULT_USER_REGION.latitude_delta(),
            user_longitude_delta: DEFAULT_USER_REGION.longitude_delta(),
            truck_latitude: DEFAULT_TRUCK_LOCATION.latitude(),
            truck_longitude: DEFAULT_TRUCK_LOCATION.longitude(),
            truck_drift_enabled: true,
            truck_tick_interval_ms: DEFAULT_TICK_INTERVAL.as_millis() as u64,
            truck_step_degrees: DEFAULT_STEP_DEGREES,
            viewport_focus: ViewportFocus::Truck,
            viewport_delta: DEFAULT_VIEWPORT_DELTA,
            user_marker_glyph: String::new(),
            truck_marker_glyph: String::from("🚛"),
            device_latitude: user.latitude(),
            device_longitude: user.longitude(),
            device_permission_granted: true,
        }
    }

    /// Create a new `Config` object using environment variables
    pub fn try_from_env() -> Result<Self, ConfigError> {
        // read .env file if present
        dotenv().ok();
        let default_config = Config::default();

        config::Config::builder()
            .set_default("log_config", default_config.log_config)?
            .set_default("user_latitude", default_config.user_latitude)?
            .set_default("user_longitude", default_config.user_longitude)?
            .set_default("user_latitude_delta", default_config.user_latitude_delta)?
            .set_default("user_longitude_delta", default_config.user_longitude_delta)?
            .set_default("truck_latitude", default_config.truck_latitude)?
            .set_default("truck_longitude", default_config.truck_longitude)?
            .set_default("truck_drift_enabled", default_config.truck_drift_enabled)?
            .set_default(
                "truck_tick_interval_ms",
                default_config.truck_tick_interval_ms,
            )?
            .set_default("truck_step_degrees", default_config.truck_step_degrees)?
            .set_default("viewport_focus", "truck")?
            .set_default("viewport_delta", default_config.viewport_delta)?
            .set_default("user_marker_glyph", default_config.user_marker_glyph)?
            .set_default("truck_marker_glyph", default_config.truck_marker_glyph)?
            .set_default("device_latitude", default_config.device_latitude)?
            .set_default("device_longitude", default_config.device_longitude)?
            .set_default(
                "device_permission_granted",
                default_config.device_permission_granted,
            )?
            .add_source(Environment::default().separator("__"))
            .build()?
            .try_deserialize()
    }

    /// Validated screen settings
    pub fn screen_settings(&self) -> Result<ScreenSettings> {
        let user = GeoPoint::new(self.user_latitude, self.user_longitude)
            .context("Invalid default user location")?;
        let user_region =
            ViewportRegion::new(user, self.user_latitude_delta, self.user_longitude_delta)
                .context("Invalid user region")?;

        let truck = GeoPoint::new(self.truck_latitude, self.truck_longitude)
            .context("Invalid truck location")?;
        let truck_motion = if self.truck_drift_enabled {
            TruckMotion::Drift {
                origin: truck,
                interval: Duration::from_millis(self.truck_tick_interval_ms),
                step_degrees: self.truck_step_degrees,
            }
        } else {
            TruckMotion::Static(truck)
        };

        let settings = ScreenSettings {
            user_region,
            truck_motion,
            focus: self.viewport_focus,
            viewport_delta: self.viewport_delta,
            user_glyph: MarkerGlyph::from_config(&self.user_marker_glyph),
            truck_glyph: MarkerGlyph::from_config(&self.truck_marker_glyph),
        };
        settings.validate().context("Invalid screen settings")?;

        Ok(settings)
    }

    /// The provider standing in for the device geolocation API
    pub fn location_provider(&self) -> Result<FixedLocationProvider> {
        let position = GeoPoint::new(self.device_latitude, self.device_longitude)
            .context("Invalid device location")?;

        Ok(FixedLocationProvider::new(position).with_permission(self.device_permission_granted))
    }
}

#[cfg(test)]
mod tests {
    use crate::Config;
    use crate::scene::MarkerGlyph;
    use crate::screen::ViewportFocus;
    use crate::truck::TruckMotion;
    use serial_test::serial;
    use std::time::Duration;

    const ENV_KEYS: [&str; 9] = [
        "LOG_CONFIG",
        "TRUCK_LATITUDE",
        "TRUCK_LONGITUDE",
        "TRUCK_TICK_INTERVAL_MS",
        "TRUCK_STEP_DEGREES",
        "VIEWPORT_FOCUS",
        "USER_MARKER_GLYPH",
        "DEVICE_PERMISSION_GRANTED",
        "VIEWPORT_DELTA",
    ];

    fn clear_env() {
        for key in ENV_KEYS {
            std::env::remove_var(key);
        }
    }

    #[tokio::test]
    async fn test_config_from_default() {
        crate::get_log_handle().await;
        ut_info!("(test_config_from_default) Start.");

        let config = Config::default();

        assert_eq!(config.log_config, String::from("log4rs.yaml"));
        assert_eq!(config.user_latitude, -26.0331);
        assert_eq!(config.user_longitude, 28.0386);
        assert_eq!(config.user_latitude_delta, 0.0922);
        assert_eq!(config.user_longitude_delta, 0.0421);
        assert_eq!(config.truck_latitude, -26.0347);
        assert_eq!(config.truck_longitude, 28.0561);
        assert!(config.truck_drift_enabled);
        assert_eq!(config.truck_tick_interval_ms, 5000);
        assert_eq!(config.truck_step_degrees, 0.0001);
        assert_eq!(config.viewport_focus, ViewportFocus::Truck);
        assert_eq!(config.viewport_delta, 0.01);
        assert!(config.device_permission_granted);

        let settings = config.screen_settings().unwrap();
        assert_eq!(settings, crate::ScreenSettings::default());

        ut_info!("(test_config_from_default) Success.");
    }

    #[tokio::test]
    #[serial]
    async fn test_config_from_env() {
        crate::get_log_handle().await;
        ut_info!("(test_config_from_env) Start.");

        std::env::set_var("LOG_CONFIG", "config_file.yaml");
        std::env::set_var("TRUCK_LATITUDE", "-26.1");
        std::env::set_var("TRUCK_LONGITUDE", "28.2");
        std::env::set_var("TRUCK_TICK_INTERVAL_MS", "1000");
        std::env::set_var("TRUCK_STEP_DEGREES", "0.001");
        std::env::set_var("VIEWPORT_FOCUS", "user");
        std::env::set_var("USER_MARKER_GLYPH", "🙂");
        std::env::set_var("DEVICE_PERMISSION_GRANTED", "false");

        let config = Config::try_from_env();
        clear_env();
        assert!(config.is_ok());
        let config = config.unwrap();

        assert_eq!(config.log_config, String::from("config_file.yaml"));
        assert_eq!(config.truck_latitude, -26.1);
        assert_eq!(config.truck_longitude, 28.2);
        assert_eq!(config.truck_tick_interval_ms, 1000);
        assert_eq!(config.viewport_focus, ViewportFocus::User);
        assert!(!config.device_permission_granted);

        let settings = config.screen_settings().unwrap();
        assert_eq!(settings.focus, ViewportFocus::User);
        assert_eq!(settings.user_glyph, MarkerGlyph::Emoji(String::from("🙂")));
        assert_eq!(
            settings.truck_motion,
            TruckMotion::Drift {
                origin: crate::GeoPoint::new(-26.1, 28.2).unwrap(),
                interval: Duration::from_millis(1000),
                step_degrees: 0.001,
            }
        );

        ut_info!("(test_config_from_env) Success.");
    }

    #[tokio::test]
    #[serial]
    async fn test_config_invalid_values() {
        std::env::set_var("VIEWPORT_FOCUS", "sideways");
        let config = Config::try_from_env();
        clear_env();
        assert!(config.is_err());

        std::env::set_var("TRUCK_LATITUDE", "95.0");
        let config = Config::try_from_env();
        clear_env();
        assert!(config.unwrap().screen_settings().is_err());

        std::env::set_var("VIEWPORT_DELTA", "0");
        let config = Config::try_from_env();
        clear_env();
        assert!(config.unwrap().screen_settings().is_err());

        std::env::set_var("TRUCK_STEP_DEGREES", "-0.001");
        let config = Config::try_from_env();
        clear_env();
        assert!(config.unwrap().screen_settings().is_err());
    }

    #[test]
    fn test_static_truck_and_provider() {
        let config = Config {
            truck_drift_enabled: false,
            truck_tick_interval_ms: 0,
            ..Config::new()
        };

        let settings = config.screen_settings().unwrap();
        assert!(matches!(settings.truck_motion, TruckMotion::Static(_)));
        assert!(config.location_provider().is_ok());

        let config = Config {
            device_latitude: -91.0,
            ..Config::new()
        };
        assert!(config.location_provider().is_err());
    }
}
