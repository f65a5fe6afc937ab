//! A surface keeping every rendered scene, for tests

use super::{MapSurface, Scene};
use std::sync::{Arc, Mutex};

/// Records scenes. Clones share the same record.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    scenes: Arc<Mutex<Vec<Scene>>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every scene rendered so far, oldest first.
    pub fn scenes(&self) -> Vec<Scene> {
        match self.scenes.lock() {
            Ok(scenes) => scenes.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// The scene currently displayed.
    pub fn last(&self) -> Option<Scene> {
        self.scenes().pop()
    }
}

impl MapSurface for RecordingSurface {
    fn render(&mut self, scene: &Scene) {
        match self.scenes.lock() {
            Ok(mut scenes) => scenes.push(scene.clone()),
            Err(poisoned) => poisoned.into_inner().push(scene.clone()),
        }
    }
}
