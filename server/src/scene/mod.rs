//! Declarative description of what the screen shows
//!
//! The screen never draws anything itself: it composes a [`Scene`] and
//! hands it to a [`MapSurface`].

#[macro_use]
pub mod macros;
pub mod surface;
#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use surface::LogSurface;

use crate::types::{GeoPoint, ViewportRegion};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// How a marker is drawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkerGlyph {
    /// The platform's default pin
    Pin,

    /// A custom glyph, drawn instead of the pin
    Emoji(String),
}

impl MarkerGlyph {
    /// An empty string means the default pin.
    pub fn from_config(glyph: &str) -> Self {
        let glyph = glyph.trim();
        if glyph.is_empty() {
            MarkerGlyph::Pin
        } else {
            MarkerGlyph::Emoji(glyph.to_owned())
        }
    }
}

impl Display for MarkerGlyph {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            MarkerGlyph::Pin => write!(f, "pin"),
            MarkerGlyph::Emoji(glyph) => write!(f, "{glyph}"),
        }
    }
}

/// A pinned map annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    /// Where the marker is pinned
    pub coordinate: GeoPoint,

    /// How the marker is drawn
    pub glyph: MarkerGlyph,

    /// Title shown by the platform on tap
    pub title: Option<String>,

    /// Subtitle shown under the title
    pub description: Option<String>,

    /// Label of the callout popup
    pub callout: Option<String>,
}

/// One frame of the proximity display.
#[derive(Debug, Clone, PartialEq)]
pub enum Scene {
    /// Shown in place of the map when no location can be used
    Error {
        /// Human readable reason
        message: String,
    },

    /// The map with its markers
    Map {
        /// Visible part of the map
        region: ViewportRegion,

        /// User then truck
        markers: Vec<Marker>,

        /// Whether the platform's own user location dot is drawn
        shows_user_location: bool,

        /// Floating distance text, once a reading exists
        banner: Option<String>,
    },
}

impl Scene {
    /// The banner text, if this is a map with a banner.
    pub fn banner(&self) -> Option<&str> {
        match self {
            Scene::Map { banner, .. } => banner.as_deref(),
            Scene::Error { .. } => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Scene::Error { .. })
    }
}

/// Where scenes are drawn.
pub trait MapSurface: Send {
    /// Draws `scene`, replacing whatever was drawn before.
    fn render(&mut self, scene: &Scene);
}
