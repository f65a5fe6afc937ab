//! A [`MapSurface`] writing scenes to the log

use super::{MapSurface, Scene};

/// Logs every scene on the `app::scene` target.
#[derive(Debug, Default)]
pub struct LogSurface {
    frames: u64,
}

impl LogSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of scenes rendered so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl MapSurface for LogSurface {
    fn render(&mut self, scene: &Scene) {
        self.frames += 1;

        match scene {
            Scene::Error { message } => {
                scene_warn!("(render) frame {}: {}", self.frames, message);
            }
            Scene::Map {
                region,
                markers,
                shows_user_location,
                banner,
            } => {
                scene_info!(
                    "(render) frame {}: region {}, user location dot: {}.",
                    self.frames,
                    region,
                    shows_user_location
                );

                for marker in markers {
                    scene_debug!(
                        "(render) marker [{}] at {}, title: {:?}, callout: {:?}.",
                        marker.glyph,
                        marker.coordinate,
                        marker.title,
                        marker.callout
                    );
                }

                if let Some(banner) = banner {
                    scene_info!("(render) {}", banner);
                }
            }
        }
    }
}
