//! Scene progression state
//!
//! `SceneStore` owns the fixed scene sequence of one session and the index
//! of the scene currently on screen. The index only ever moves through
//! [`SceneStore::advance`] and [`SceneStore::reset`], which keeps it inside
//! `0..len` for every reachable state.

use tracing::debug;

use super::error::SceneError;
use super::record::SceneRecord;

/// Where the session currently is in the sequence.
///
/// The last scene is reported as `Terminal` rather than as a scene index so
/// callers branch on one value instead of comparing positions themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// A scene that still has a successor
    Scene { index: usize },
    /// The last scene; it offers restart instead of advance
    Terminal,
}

/// The scene on screen together with its position in the sequence.
#[derive(Debug, Clone, Copy)]
pub struct CurrentScene<'a> {
    pub record: &'a SceneRecord,
    /// Zero-based index of `record`
    pub position: usize,
    /// Number of scenes in the sequence
    pub total: usize,
}

impl CurrentScene<'_> {
    pub fn stage(&self) -> Stage {
        if self.position + 1 == self.total {
            Stage::Terminal
        } else {
            Stage::Scene {
                index: self.position,
            }
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.stage() == Stage::Terminal
    }
}

/// Linear scene sequence with a bounded cursor.
#[derive(Debug, Clone)]
pub struct SceneStore {
    scenes: Vec<SceneRecord>,
    current_index: usize,
}

impl SceneStore {
    /// Create a store positioned at the first scene.
    ///
    /// # Errors
    /// Returns `SceneError::EmptyDeck` when `scenes` is empty, since no valid
    /// index exists in that case.
    pub fn new(scenes: Vec<SceneRecord>) -> Result<Self, SceneError> {
        if scenes.is_empty() {
            return Err(SceneError::EmptyDeck);
        }
        debug!(scenes = scenes.len(), "scene store created");
        Ok(Self {
            scenes,
            current_index: 0,
        })
    }

    /// Move to the next scene.
    ///
    /// Inert on the last scene. Returns whether the index moved.
    pub fn advance(&mut self) -> bool {
        if self.current_index + 1 < self.scenes.len() {
            self.current_index += 1;
            debug!(index = self.current_index, "advanced");
            true
        } else {
            debug!(index = self.current_index, "advance ignored on last scene");
            false
        }
    }

    /// Return to the first scene.
    pub fn reset(&mut self) {
        debug!(from = self.current_index, "reset to first scene");
        self.current_index = 0;
    }

    pub fn current(&self) -> CurrentScene<'_> {
        CurrentScene {
            record: &self.scenes[self.current_index],
            position: self.current_index,
            total: self.scenes.len(),
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_terminal(&self) -> bool {
        self.stage() == Stage::Terminal
    }

    pub fn stage(&self) -> Stage {
        self.current().stage()
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// Always false: a store holds at least one scene.
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    pub fn scenes(&self) -> &[SceneRecord] {
        &self.scenes
    }
}
