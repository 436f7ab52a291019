//! Scene container - active scene plus at most one pending scene

use super::{stage, Scene, SceneEnv, SceneError, SceneSwitch};
use crate::asset::AssetError;
use crate::input::InputState;
use crate::render::Frame;

/// Holds the active scene and the scene waiting to replace it.
///
/// A pending scene is promoted at the start of the next `update`, so a
/// scene requested during tick N is first updated (and drawn) on tick N+1.
#[derive(Default)]
pub struct SceneContainer {
    active: Option<Box<dyn Scene>>,
    pending: Option<Box<dyn Scene>>,
}

impl SceneContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage `scene` and run its `init` immediately.
    ///
    /// On failure nothing is staged and an earlier pending scene stays.
    pub fn request_transition(
        &mut self,
        scene: Box<dyn Scene>,
        env: &mut SceneEnv,
    ) -> Result<(), AssetError> {
        stage(&mut self.pending, scene, env)
    }

    /// Promote the pending scene if there is one, then tick the active scene.
    ///
    /// Errors from the scene are returned unchanged.
    pub fn update(&mut self, env: SceneEnv<'_>, input: InputState) -> Result<(), SceneError> {
        if let Some(next) = self.pending.take() {
            match &self.active {
                Some(previous) => log::info!("Scene {} -> {}", previous.name(), next.name()),
                None => log::info!("Scene -> {}", next.name()),
            }
            self.active = Some(next);
        }

        let Some(active) = self.active.as_mut() else {
            return Err(SceneError::NoActiveScene);
        };

        let mut switch = SceneSwitch {
            pending: &mut self.pending,
            env,
            input,
        };
        active.update(&mut switch)
    }

    /// Draw the active scene. Before the first tick nothing is active and
    /// nothing is drawn.
    pub fn draw(&self, frame: &mut dyn Frame) {
        match &self.active {
            Some(scene) => scene.draw(frame),
            None => log::trace!("No active scene to draw"),
        }
    }

    pub fn active_name(&self) -> Option<&'static str> {
        self.active.as_ref().map(|scene| scene.name())
    }

    pub fn pending_name(&self) -> Option<&'static str> {
        self.pending.as_ref().map(|scene| scene.name())
    }
}
