//! Value types shared by the proximity display

pub mod geo_point;
pub mod permission;
pub mod reading;
pub mod region;

pub use geo_point::{CoordinateError, GeoPoint};
pub use permission::PermissionState;
pub use reading::DistanceReading;
pub use region::{RegionError, ViewportRegion};
