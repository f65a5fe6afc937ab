//! Distance computation and display

pub mod format;
pub mod haversine;

pub use format::{banner_text, format_distance};
pub use haversine::distance;
