//! Truck position source
//!
//! The truck is either parked at a fixed coordinate or drifts west by a
//! fixed step on every timer tick, see [`simulator::TruckSimulator`].

#[macro_use]
pub mod macros;
pub mod simulator;

pub use simulator::TruckSimulator;

use crate::types::GeoPoint;
use std::time::Duration;

/// How often the drifting truck moves
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(5);

/// How far west the drifting truck moves per tick, in degrees
pub const DEFAULT_STEP_DEGREES: f64 = 0.0001;

/// Where the truck is, and how many simulator ticks brought it there.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TruckPosition {
    /// Current coordinate
    pub point: GeoPoint,

    /// Ticks applied since the simulator started
    pub ticks: u64,
}

impl TruckPosition {
    /// The position before any tick.
    pub fn parked(point: GeoPoint) -> Self {
        Self { point, ticks: 0 }
    }
}

/// How the truck position evolves during a session
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TruckMotion {
    /// The truck never moves
    Static(GeoPoint),

    /// Every `interval`, longitude decreases by `step_degrees`
    Drift {
        /// Starting coordinate
        origin: GeoPoint,

        /// Time between two moves, must not be zero
        interval: Duration,

        /// Westward step per move
        step_degrees: f64,
    },
}

impl TruckMotion {
    /// Drift from `origin` with the default interval and step.
    pub fn drift(origin: GeoPoint) -> Self {
        TruckMotion::Drift {
            origin,
            interval: DEFAULT_TICK_INTERVAL,
            step_degrees: DEFAULT_STEP_DEGREES,
        }
    }

    /// Where the truck starts.
    pub fn origin(&self) -> GeoPoint {
        match self {
            TruckMotion::Static(point) => *point,
            TruckMotion::Drift { origin, .. } => *origin,
        }
    }

    /// Position after `ticks` timer ticks.
    ///
    /// Computed from the tick count rather than accumulated, so the
    /// longitude is always `origin - ticks * step` (wrapped at the
    /// antimeridian).
    pub fn position_after(&self, ticks: u64) -> TruckPosition {
        match self {
            TruckMotion::Static(point) => TruckPosition::parked(*point),
            TruckMotion::Drift {
                origin,
                step_degrees,
                ..
            } => TruckPosition {
                point: origin.with_longitude_offset(-(ticks as f64) * *step_degrees),
                ticks,
            },
        }
    }
}
